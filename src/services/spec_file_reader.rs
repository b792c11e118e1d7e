//! Structured component input files.
//!
//! Replaces the interactive questions with a record holding the same fields.
//! The format follows the extension: `.toml`, `.yml`/`.yaml`, or `.json`.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, ComponentSpec};

pub fn read_component_spec(path: &Path) -> Result<ComponentSpec, AppError> {
    let spec_error = |details: String| AppError::SpecFile {
        path: path.display().to_string(),
        details,
    };

    let content = fs::read_to_string(path).map_err(|err| spec_error(err.to_string()))?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "toml" => toml::from_str(&content).map_err(|err| spec_error(err.to_string())),
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|err| spec_error(err.to_string())),
        "json" => serde_json::from_str(&content).map_err(|err| spec_error(err.to_string())),
        other => Err(spec_error(format!(
            "unsupported extension '{}': expected toml, yml, yaml or json",
            other
        ))),
    }
}
