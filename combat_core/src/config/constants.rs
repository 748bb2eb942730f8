//! Combat constants configuration

use super::ConfigError;
use crate::defense::constants::*;
use crate::types::StatusId;
use serde::{Deserialize, Serialize};

/// Tunable combat constants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    #[serde(default)]
    pub accuracy: AccuracyConstants,
    #[serde(default)]
    pub crit: CritConstants,
}

impl CombatConstants {
    /// Reject values that would make rolls meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let acc = &self.accuracy;
        if !(0.0..=1.0).contains(&acc.base) {
            return Err(ConfigError::ValidationError(format!(
                "accuracy.base must be within [0, 1], got {}",
                acc.base
            )));
        }
        if !(0.0..=1.0).contains(&acc.critical_threshold) {
            return Err(ConfigError::ValidationError(format!(
                "accuracy.critical_threshold must be within [0, 1], got {}",
                acc.critical_threshold
            )));
        }
        if let Some(bad) = acc
            .tier_base
            .iter()
            .chain(std::iter::once(&acc.fallback_tier_base))
            .find(|v| !(0.0..=1.0).contains(*v))
        {
            return Err(ConfigError::ValidationError(format!(
                "tier base accuracy must be within [0, 1], got {}",
                bad
            )));
        }
        if self.crit.multiplier < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "crit.multiplier must not be negative, got {}",
                self.crit.multiplier
            )));
        }
        Ok(())
    }
}

/// Which side of an exchange a status modifier looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierSide {
    Attacker,
    Defender,
}

/// Additive accuracy change while a status is present on one side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusAccuracyModifier {
    pub status: StatusId,
    pub side: ModifierSide,
    pub delta: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccuracyConstants {
    /// Hit chance before the context modifier
    #[serde(default = "default_base")]
    pub base: f64,
    /// Rolls at or above this (and still hitting) are critical
    #[serde(default = "default_critical_threshold")]
    pub critical_threshold: f64,
    /// Base accuracy for attacker tile tiers 1, 2, 3...
    #[serde(default = "default_tier_base")]
    pub tier_base: Vec<f64>,
    /// Base accuracy for tiers outside `tier_base`
    #[serde(default = "default_fallback_tier_base")]
    pub fallback_tier_base: f64,
    /// Accuracy per tier of advantage
    #[serde(default = "default_per_tier")]
    pub per_tier: f64,
    #[serde(default = "default_status_modifiers")]
    pub status_modifiers: Vec<StatusAccuracyModifier>,
}

impl Default for AccuracyConstants {
    fn default() -> Self {
        AccuracyConstants {
            base: default_base(),
            critical_threshold: default_critical_threshold(),
            tier_base: default_tier_base(),
            fallback_tier_base: default_fallback_tier_base(),
            per_tier: default_per_tier(),
            status_modifiers: default_status_modifiers(),
        }
    }
}

impl AccuracyConstants {
    /// Base accuracy for an attacker standing on `tier`
    pub fn tier_base_for(&self, tier: i32) -> f64 {
        if tier < 1 {
            return self.fallback_tier_base;
        }
        self.tier_base
            .get((tier - 1) as usize)
            .copied()
            .unwrap_or(self.fallback_tier_base)
    }
}

fn default_base() -> f64 {
    BASE_ACCURACY
}
fn default_critical_threshold() -> f64 {
    CRITICAL_THRESHOLD
}
fn default_tier_base() -> Vec<f64> {
    TIER_BASE_ACCURACY.to_vec()
}
fn default_fallback_tier_base() -> f64 {
    FALLBACK_TIER_ACCURACY
}
fn default_per_tier() -> f64 {
    ACCURACY_PER_TIER
}
fn default_status_modifiers() -> Vec<StatusAccuracyModifier> {
    vec![
        StatusAccuracyModifier {
            status: StatusId::Concussed,
            side: ModifierSide::Attacker,
            delta: -CONCUSSED_PENALTY,
        },
        StatusAccuracyModifier {
            status: StatusId::Frozen,
            side: ModifierSide::Defender,
            delta: FROZEN_BONUS,
        },
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CritConstants {
    /// Critical damage multiplier (1.5 = 150%)
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,
}

impl Default for CritConstants {
    fn default() -> Self {
        CritConstants {
            multiplier: default_multiplier(),
        }
    }
}

fn default_multiplier() -> f64 {
    CRITICAL_MULTIPLIER
}

/// Load combat constants from a TOML file
pub fn load_constants(path: &std::path::Path) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = super::load_toml(path)?;
    constants.validate()?;
    Ok(constants)
}

/// Parse combat constants from a TOML string
pub fn parse_constants(content: &str) -> Result<CombatConstants, ConfigError> {
    let constants: CombatConstants = super::parse_toml(content)?;
    constants.validate()?;
    Ok(constants)
}

/// Get the default combat constants
pub fn default_constants() -> CombatConstants {
    let toml = include_str!("../../config/constants.toml");
    parse_constants(toml).unwrap_or_else(|err| {
        tracing::warn!("bundled constants.toml rejected ({}), using built-in values", err);
        CombatConstants::default()
    })
}
