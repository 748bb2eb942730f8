//! Configuration loading from TOML files

mod constants;
mod templates;
mod ticks;

pub use constants::{
    default_constants, load_constants, parse_constants, AccuracyConstants, CombatConstants,
    CritConstants, ModifierSide, StatusAccuracyModifier,
};
pub use templates::{
    default_templates, load_template_configs, parse_template_configs, TemplateLibrary,
    UnitTemplate,
};
pub use ticks::{default_ticks, load_tick_configs, parse_tick_configs};

use std::fs;
use std::path::Path;
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Load a TOML string and deserialize it
pub fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    let config: T = toml::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<CombatConstants, _> =
            load_toml(Path::new("does/not/exist/constants.toml"));
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result: Result<CombatConstants, _> = parse_toml("[accuracy\nbase = ");
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_load_bundled_files_from_disk() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        assert!(load_constants(&dir.join("constants.toml")).is_ok());
        assert!(load_tick_configs(&dir.join("ticks.toml")).is_ok());
        assert!(load_template_configs(&dir.join("templates.toml")).is_ok());
    }
}
