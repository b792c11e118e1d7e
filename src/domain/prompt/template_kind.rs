use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Which prompt template the composer renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    /// Short instruction followed by the labeled fields.
    #[default]
    Basic,
    /// Detailed requirements plus a worked example component.
    Robust,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Basic, TemplateKind::Robust];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic",
            TemplateKind::Robust => "robust",
        }
    }

    /// Name of the embedded template asset.
    pub fn asset_name(self) -> &'static str {
        match self {
            TemplateKind::Basic => "basic.md.j2",
            TemplateKind::Robust => "robust.md.j2",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(TemplateKind::Basic),
            "robust" => Ok(TemplateKind::Robust),
            other => Err(AppError::InvalidConfig(format!(
                "unknown template '{}': expected one of basic, robust",
                other
            ))),
        }
    }
}
