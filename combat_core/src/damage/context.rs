//! DamageContext - Who is hitting whom, and with which modifiers

use crate::unit::UnitStats;
use serde::{Deserialize, Serialize};

/// Inputs to one attack resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DamageContext {
    pub attacker: UnitStats,
    pub defender: UnitStats,
    /// Added to base accuracy
    pub accuracy_modifier: f64,
    /// Multiplies every component
    pub damage_modifier: f64,
    /// Send damage straight to life, ignoring armour
    pub bypass_armour: bool,
    /// Set by the resolver from the accuracy roll
    pub is_critical: bool,
}

impl DamageContext {
    pub fn new(attacker: UnitStats, defender: UnitStats) -> Self {
        DamageContext {
            attacker,
            defender,
            accuracy_modifier: 0.0,
            damage_modifier: 1.0,
            bypass_armour: false,
            is_critical: false,
        }
    }

    pub fn with_accuracy_modifier(mut self, modifier: f64) -> Self {
        self.accuracy_modifier = modifier;
        self
    }

    pub fn with_damage_modifier(mut self, modifier: f64) -> Self {
        self.damage_modifier = modifier;
        self
    }

    pub fn bypassing_armour(mut self) -> Self {
        self.bypass_armour = true;
        self
    }
}
