//! Status tick table loading

use super::ConfigError;
use crate::status::{TickConfig, TickRegistry};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for tick table entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicksConfig {
    #[serde(default)]
    pub status_ticks: Vec<TickConfig>,
}

impl TicksConfig {
    fn into_registry(self) -> TickRegistry {
        let mut registry = TickRegistry::new();
        for tick in self.status_ticks {
            registry.register(tick);
        }
        registry
    }
}

/// Load the tick table from a TOML file
pub fn load_tick_configs(path: &Path) -> Result<TickRegistry, ConfigError> {
    let config: TicksConfig = super::load_toml(path)?;
    Ok(config.into_registry())
}

/// Load the tick table from a TOML string
pub fn parse_tick_configs(content: &str) -> Result<TickRegistry, ConfigError> {
    let config: TicksConfig = super::parse_toml(content)?;
    Ok(config.into_registry())
}

/// Get the default tick table
pub fn default_ticks() -> TickRegistry {
    let toml = include_str!("../../config/ticks.toml");
    parse_tick_configs(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled ticks.toml rejected ({}), using built-in table", err);
        TickRegistry::with_defaults()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::TickBehaviour;
    use crate::types::StatusId;

    #[test]
    fn test_parse_ticks() {
        let toml = r#"
[[status_ticks]]
status = "burning"

[status_ticks.behaviour]
type = "armoured_damage"
damage = 3

[[status_ticks]]
status = "electrified"

[status_ticks.behaviour]
type = "direct_damage"
damage = 1
"#;

        let registry = parse_tick_configs(toml).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.behaviour(StatusId::Burning),
            TickBehaviour::ArmouredDamage { damage: 3 }
        );
        assert_eq!(
            registry.behaviour(StatusId::Electrified),
            TickBehaviour::DirectDamage { damage: 1 }
        );
        assert_eq!(registry.behaviour(StatusId::Poisoned), TickBehaviour::None);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let toml = r#"
[[status_ticks]]
status = "melting"
"#;
        assert!(matches!(
            parse_tick_configs(toml),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_tick_configs("").unwrap().is_empty());
    }

    #[test]
    fn test_bundled_table_matches_defaults() {
        assert_eq!(default_ticks(), TickRegistry::with_defaults());
    }
}
