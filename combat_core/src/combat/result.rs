//! DamageResult - Outcome of damage resolution

use crate::types::DamageType;
use crate::unit::UnitStats;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of resolving damage against a defender
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Defender state after the hit
    pub final_stats: UnitStats,

    // === Damage Breakdown ===
    /// Damage absorbed by armour pools
    pub armour_damage: u32,
    /// Damage applied to life
    pub life_damage: u32,
    /// Scaled damage dealt per type, before armour
    pub damage_by_type: BTreeMap<DamageType, u32>,

    // === Flags ===
    /// Whether the attack landed (always true for unconditional damage)
    pub landed: bool,
    /// Whether the accuracy roll was critical
    pub is_critical: bool,
    /// Whether the defender ended at zero life
    pub was_killed: bool,
}

impl DamageResult {
    /// A result that changed nothing; never reported as a kill
    pub fn unchanged(defender: UnitStats, landed: bool) -> Self {
        DamageResult {
            final_stats: defender,
            armour_damage: 0,
            life_damage: 0,
            damage_by_type: BTreeMap::new(),
            landed,
            is_critical: false,
            was_killed: false,
        }
    }

    /// Armour plus life damage
    pub fn total_damage(&self) -> u32 {
        self.armour_damage.saturating_add(self.life_damage)
    }

    /// Scaled damage of one type
    pub fn damage_of_type(&self, damage_type: DamageType) -> u32 {
        self.damage_by_type.get(&damage_type).copied().unwrap_or(0)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.landed {
            return "Miss".to_string();
        }

        let mut parts = Vec::new();

        if self.armour_damage > 0 {
            parts.push(format!("{} to armour", self.armour_damage));
        }

        if self.life_damage > 0 {
            parts.push(format!("{} to life", self.life_damage));
        }

        if self.is_critical {
            parts.push("CRITICAL".to_string());
        }

        if self.was_killed {
            parts.push("FATAL".to_string());
        }

        if parts.is_empty() {
            "No damage".to_string()
        } else {
            parts.join(", ")
        }
    }
}
