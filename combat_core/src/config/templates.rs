//! Unit template loading

use super::ConfigError;
use crate::defense::ArmourPools;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Starting numbers for a named hero or enemy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitTemplate {
    pub name: String,
    pub max_life_hp: u32,
    pub action_points: u32,
    pub movement_points: u32,
    #[serde(default = "default_attack_range")]
    pub attack_range: u32,
    #[serde(default = "default_attack_factor")]
    pub attack_factor: i32,
    #[serde(default)]
    pub defence_factor: i32,
    #[serde(default)]
    pub armour: ArmourPools,
}

fn default_attack_range() -> u32 {
    1
}

fn default_attack_factor() -> i32 {
    1
}

impl UnitTemplate {
    fn builtin(
        name: &str,
        max_life_hp: u32,
        movement_points: u32,
        attack_range: u32,
        armour: ArmourPools,
    ) -> Self {
        UnitTemplate {
            name: name.to_string(),
            max_life_hp,
            action_points: 1,
            movement_points,
            attack_range,
            attack_factor: 1,
            defence_factor: 0,
            armour,
        }
    }
}

/// Templates indexed by lowercase name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateLibrary {
    templates: HashMap<String, UnitTemplate>,
}

impl TemplateLibrary {
    pub fn new() -> Self {
        TemplateLibrary {
            templates: HashMap::new(),
        }
    }

    /// Register a template, replacing any with the same name
    pub fn register(&mut self, template: UnitTemplate) {
        self.templates
            .insert(template.name.to_lowercase(), template);
    }

    /// Case-insensitive lookup
    pub fn get(&self, name: &str) -> Option<&UnitTemplate> {
        self.templates.get(&name.to_lowercase())
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.templates.values().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// The five heroes and enemies of the prototype
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        library.register(UnitTemplate::builtin("tharl", 3, 5, 4, ArmourPools::new(2, 1, 3)));
        library.register(UnitTemplate::builtin("bishep", 4, 4, 1, ArmourPools::new(2, 2, 2)));
        library.register(UnitTemplate::builtin("mirashala", 3, 4, 4, ArmourPools::new(1, 3, 1)));
        library.register(UnitTemplate::builtin("groctopod", 2, 4, 1, ArmourPools::new(2, 2, 1)));
        library.register(UnitTemplate::builtin("medusa", 2, 4, 1, ArmourPools::new(2, 2, 2)));
        library
    }
}

/// Container for template configurations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub templates: Vec<UnitTemplate>,
}

impl TemplatesConfig {
    fn into_library(self) -> TemplateLibrary {
        let mut library = TemplateLibrary::new();
        for template in self.templates {
            library.register(template);
        }
        library
    }
}

/// Load unit templates from a TOML file
pub fn load_template_configs(path: &Path) -> Result<TemplateLibrary, ConfigError> {
    let config: TemplatesConfig = super::load_toml(path)?;
    Ok(config.into_library())
}

/// Load unit templates from a TOML string
pub fn parse_template_configs(content: &str) -> Result<TemplateLibrary, ConfigError> {
    let config: TemplatesConfig = super::parse_toml(content)?;
    Ok(config.into_library())
}

/// Get the default unit templates
pub fn default_templates() -> TemplateLibrary {
    let toml = include_str!("../../config/templates.toml");
    parse_template_configs(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled templates.toml rejected ({}), using built-in templates", err);
        TemplateLibrary::with_defaults()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_templates_match_builtins() {
        assert_eq!(default_templates(), TemplateLibrary::with_defaults());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let library = TemplateLibrary::with_defaults();
        let tharl = library.get("THARL").unwrap();
        assert_eq!(tharl.max_life_hp, 3);
        assert_eq!(tharl.movement_points, 5);
        assert_eq!(tharl.attack_range, 4);
        assert_eq!(tharl.armour, ArmourPools::new(2, 1, 3));
        assert_eq!(library.get("Bishep").unwrap().max_life_hp, 4);
    }

    #[test]
    fn test_unknown_template() {
        let library = TemplateLibrary::with_defaults();
        assert!(library.get("dragon").is_none());
        assert!(library.get("").is_none());
    }

    #[test]
    fn test_names_sorted() {
        let library = TemplateLibrary::with_defaults();
        assert_eq!(
            library.names(),
            vec!["bishep", "groctopod", "medusa", "mirashala", "tharl"]
        );
    }

    #[test]
    fn test_parse_fills_defaults() {
        let toml = r#"
[[templates]]
name = "Wisp"
max_life_hp = 1
action_points = 2
movement_points = 6
"#;
        let library = parse_template_configs(toml).unwrap();
        let wisp = library.get("wisp").unwrap();
        assert_eq!(wisp.name, "Wisp");
        assert_eq!(wisp.attack_range, 1);
        assert_eq!(wisp.attack_factor, 1);
        assert_eq!(wisp.defence_factor, 0);
        assert!(wisp.armour.is_fully_depleted());
    }

    #[test]
    fn test_missing_required_field() {
        let toml = r#"
[[templates]]
name = "broken"
"#;
        assert!(matches!(
            parse_template_configs(toml),
            Err(ConfigError::ParseError(_))
        ));
    }
}
