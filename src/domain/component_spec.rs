//! Component brief collected from the user.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::AppError;

/// File extension of generated components.
pub const COMPONENT_EXTENSION: &str = "tsx";

/// A component name that is safe to use as a file stem.
///
/// Guarantees:
/// - Non-empty after trimming
/// - No path separators (`/`, `\`) or NUL bytes
/// - Not `.` or `..`
///
/// Anything else is accepted verbatim, including spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(value: &str) -> Result<Self, AppError> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(AppError::InvalidComponentName(value.to_string()))
        }
    }

    pub fn is_valid(value: &str) -> bool {
        let trimmed = value.trim();
        !trimmed.is_empty()
            && trimmed != "."
            && trimmed != ".."
            && !value.contains(['/', '\\', '\0'])
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ComponentName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ComponentName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ComponentName::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Everything the model needs to know about the component to build.
///
/// Only `name` is required; the remaining fields are free text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSpec {
    pub name: ComponentName,
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub props: String,
    #[serde(default)]
    pub behavior: String,
    #[serde(default)]
    pub styling: String,
    #[serde(default)]
    pub examples: String,
}

impl ComponentSpec {
    /// Start a spec with the given name and empty descriptive fields.
    pub fn named(name: ComponentName) -> Self {
        Self {
            name,
            purpose: String::new(),
            props: String::new(),
            behavior: String::new(),
            styling: String::new(),
            examples: String::new(),
        }
    }

    /// File name the generated component is written to, e.g. `Button.tsx`.
    pub fn output_file_name(&self) -> String {
        format!("{}.{}", self.name, COMPONENT_EXTENSION)
    }
}
