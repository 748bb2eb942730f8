//! Unit state - Immutable battle snapshots and the mutable identity that owns them

mod identity;

pub use identity::{CombatIdentity, GearItem};

use crate::defense::ArmourPools;
use crate::status::StatusEffect;
use crate::types::StatusId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Snapshot of a combatant's full battle state
///
/// Every `with_*` method returns a new snapshot and leaves `self` untouched.
/// Counters are clamped on the way in, so no stored value is ever negative,
/// `max_life_hp` is at least 1 and `level` is at least 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitStats {
    life_hp: u32,
    max_life_hp: u32,
    armour: ArmourPools,
    max_armour: ArmourPools,
    action_points: u32,
    max_action_points: u32,
    movement_points: u32,
    max_movement_points: u32,
    experience: u32,
    level: u32,
    respec_points: u32,
    #[serde(default)]
    statuses: Vec<StatusEffect>,
    #[serde(default)]
    ability_ids: Vec<String>,
    /// Gear id -> remaining charges
    #[serde(default)]
    gear_uses: BTreeMap<String, u32>,
}

fn clamp_non_negative(value: i32) -> u32 {
    value.max(0) as u32
}

impl UnitStats {
    /// Create a snapshot at full action and movement points
    ///
    /// `armour` doubles as the armour maximum; use [`UnitStats::with_max_armour`]
    /// when the two differ.
    pub fn new(
        life_hp: i32,
        max_life_hp: i32,
        armour: ArmourPools,
        action_points: i32,
        movement_points: i32,
    ) -> Self {
        let action_points = clamp_non_negative(action_points);
        let movement_points = clamp_non_negative(movement_points);
        UnitStats {
            life_hp: clamp_non_negative(life_hp),
            max_life_hp: max_life_hp.max(1) as u32,
            armour,
            max_armour: armour,
            action_points,
            max_action_points: action_points,
            movement_points,
            max_movement_points: movement_points,
            experience: 0,
            level: 1,
            respec_points: 0,
            statuses: Vec::new(),
            ability_ids: Vec::new(),
            gear_uses: BTreeMap::new(),
        }
    }

    // === Accessors ===

    pub fn life_hp(&self) -> u32 {
        self.life_hp
    }

    pub fn max_life_hp(&self) -> u32 {
        self.max_life_hp
    }

    pub fn armour(&self) -> ArmourPools {
        self.armour
    }

    pub fn max_armour(&self) -> ArmourPools {
        self.max_armour
    }

    pub fn action_points(&self) -> u32 {
        self.action_points
    }

    pub fn max_action_points(&self) -> u32 {
        self.max_action_points
    }

    pub fn movement_points(&self) -> u32 {
        self.movement_points
    }

    pub fn max_movement_points(&self) -> u32 {
        self.max_movement_points
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn respec_points(&self) -> u32 {
        self.respec_points
    }

    pub fn statuses(&self) -> &[StatusEffect] {
        &self.statuses
    }

    pub fn ability_ids(&self) -> &[String] {
        &self.ability_ids
    }

    pub fn gear_uses(&self) -> &BTreeMap<String, u32> {
        &self.gear_uses
    }

    // === Derived predicates ===

    pub fn is_alive(&self) -> bool {
        self.life_hp > 0
    }

    pub fn can_act(&self) -> bool {
        self.is_alive() && self.action_points > 0
    }

    pub fn can_move(&self) -> bool {
        self.is_alive() && self.movement_points > 0
    }

    /// True if any active status carries this identifier
    pub fn has_status(&self, id: StatusId) -> bool {
        self.statuses.iter().any(|s| s.id() == id)
    }

    // === Copy-on-write mutators ===

    pub fn with_life_hp(&self, life_hp: i32) -> Self {
        UnitStats {
            life_hp: clamp_non_negative(life_hp),
            ..self.clone()
        }
    }

    pub fn with_armour(&self, armour: ArmourPools) -> Self {
        UnitStats {
            armour,
            ..self.clone()
        }
    }

    pub fn with_max_armour(&self, max_armour: ArmourPools) -> Self {
        UnitStats {
            max_armour,
            ..self.clone()
        }
    }

    pub fn with_action_points(&self, action_points: i32) -> Self {
        UnitStats {
            action_points: clamp_non_negative(action_points),
            ..self.clone()
        }
    }

    pub fn with_max_action_points(&self, max_action_points: i32) -> Self {
        UnitStats {
            max_action_points: clamp_non_negative(max_action_points),
            ..self.clone()
        }
    }

    pub fn with_movement_points(&self, movement_points: i32) -> Self {
        UnitStats {
            movement_points: clamp_non_negative(movement_points),
            ..self.clone()
        }
    }

    pub fn with_max_movement_points(&self, max_movement_points: i32) -> Self {
        UnitStats {
            max_movement_points: clamp_non_negative(max_movement_points),
            ..self.clone()
        }
    }

    pub fn with_progression(&self, experience: i32, level: i32, respec_points: i32) -> Self {
        UnitStats {
            experience: clamp_non_negative(experience),
            level: level.max(1) as u32,
            respec_points: clamp_non_negative(respec_points),
            ..self.clone()
        }
    }

    pub fn with_statuses(&self, statuses: Vec<StatusEffect>) -> Self {
        UnitStats {
            statuses,
            ..self.clone()
        }
    }

    pub fn with_ability_ids(&self, ability_ids: Vec<String>) -> Self {
        UnitStats {
            ability_ids,
            ..self.clone()
        }
    }

    pub fn with_gear_uses(&self, gear_uses: BTreeMap<String, u32>) -> Self {
        UnitStats {
            gear_uses,
            ..self.clone()
        }
    }

    /// Restore action and movement points to their maxima
    ///
    /// Life, armour, statuses and gear charges carry over between turns.
    pub fn reset_for_turn_start(&self) -> Self {
        UnitStats {
            action_points: self.max_action_points,
            movement_points: self.max_movement_points,
            ..self.clone()
        }
    }
}

impl fmt::Display for UnitStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UnitStats(Life:{}/{}, {}, AP:{}/{}, MP:{}/{}, Lvl:{}, XP:{})",
            self.life_hp,
            self.max_life_hp,
            self.armour,
            self.action_points,
            self.max_action_points,
            self.movement_points,
            self.max_movement_points,
            self.level,
            self.experience
        )
    }
}
