//! CombatIdentity - The mutable, authoritative record of a combatant

use super::UnitStats;
use crate::config::{TemplateLibrary, UnitTemplate};
use crate::defense::ArmourPools;
use crate::error::CombatError;
use crate::status::StatusEffect;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A piece of gear with limited uses per battle
///
/// `remaining_uses` never exceeds `max_uses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearItem {
    pub name: String,
    pub remaining_uses: u32,
    pub max_uses: u32,
}

impl GearItem {
    /// Fully charged item
    pub fn new(name: impl Into<String>, uses: u32) -> Self {
        GearItem {
            name: name.into(),
            remaining_uses: uses,
            max_uses: uses,
        }
    }
}

fn saturating_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Authoritative combat record for one unit
///
/// Resolution never touches this directly: callers take a [`UnitStats`]
/// snapshot with [`to_snapshot`](Self::to_snapshot), resolve against it, and
/// write the outcome back with [`apply_snapshot`](Self::apply_snapshot).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatIdentity {
    pub name: String,

    // === Life ===
    pub life_hp: u32,
    pub max_life_hp: u32,

    // === Armour ===
    pub armour: ArmourPools,
    pub max_armour: ArmourPools,

    // === Offense ===
    pub primary_damage_type: DamageType,
    pub attack_power: u32,
    pub attack_range: u32,
    pub defence_factor: i32,

    // === Per-turn Resources ===
    pub action_points: u32,
    pub max_action_points: u32,
    pub movement_points: u32,
    pub max_movement_points: u32,
    pub gear_points: u32,
    pub max_gear_points: u32,

    // === Progression ===
    pub experience: u32,
    pub level: u32,
    pub respec_points: u32,
    pub talent_points: u32,
    /// Talent branch -> points invested
    #[serde(default)]
    pub talents: BTreeMap<String, u32>,

    // === Loadout ===
    #[serde(default)]
    pub gear: Vec<GearItem>,
    #[serde(default)]
    pub abilities: Vec<String>,

    #[serde(default)]
    pub statuses: Vec<StatusEffect>,
}

impl CombatIdentity {
    /// Identity with default numbers: 20 life, no armour, 2 AP, 5 MP
    pub fn new(name: impl Into<String>) -> Self {
        CombatIdentity {
            name: name.into(),
            life_hp: 20,
            max_life_hp: 20,
            armour: ArmourPools::none(),
            max_armour: ArmourPools::none(),
            primary_damage_type: DamageType::Piercing,
            attack_power: 1,
            attack_range: 1,
            defence_factor: 0,
            action_points: 2,
            max_action_points: 2,
            movement_points: 5,
            max_movement_points: 5,
            gear_points: 1,
            max_gear_points: 1,
            experience: 0,
            level: 1,
            respec_points: 0,
            talent_points: 0,
            talents: BTreeMap::new(),
            gear: Vec::new(),
            abilities: Vec::new(),
            statuses: Vec::new(),
        }
    }

    /// Identity at full life and armour from a template
    pub fn from_template(name: impl Into<String>, template: &UnitTemplate) -> Self {
        CombatIdentity {
            life_hp: template.max_life_hp,
            max_life_hp: template.max_life_hp,
            armour: template.armour,
            max_armour: template.armour,
            attack_power: template.attack_factor.max(0) as u32,
            attack_range: template.attack_range,
            defence_factor: template.defence_factor,
            action_points: template.action_points,
            max_action_points: template.action_points,
            movement_points: template.movement_points,
            max_movement_points: template.movement_points,
            ..Self::new(name)
        }
    }

    /// Identity from the template of the same name, or defaults on a miss
    pub fn from_library(name: &str, library: &TemplateLibrary) -> Self {
        match library.get(name) {
            Some(template) => Self::from_template(name, template),
            None => {
                warn!(unit = name, "no unit template found, using defaults");
                Self::new(name)
            }
        }
    }

    /// Builder: set the primary damage type
    pub fn with_primary_damage_type(mut self, damage_type: DamageType) -> Self {
        self.primary_damage_type = damage_type;
        self
    }

    /// Builder: add a gear item
    pub fn with_gear(mut self, item: GearItem) -> Self {
        self.gear.push(item);
        self
    }

    /// Builder: grant an ability
    pub fn with_ability(mut self, ability_id: impl Into<String>) -> Self {
        self.abilities.push(ability_id.into());
        self
    }

    pub fn is_alive(&self) -> bool {
        self.life_hp > 0
    }

    /// Immutable snapshot for resolution
    pub fn to_snapshot(&self) -> UnitStats {
        let gear_uses = self
            .gear
            .iter()
            .map(|g| (g.name.clone(), g.remaining_uses))
            .collect();

        UnitStats::new(
            saturating_i32(self.life_hp),
            saturating_i32(self.max_life_hp),
            self.armour,
            saturating_i32(self.action_points),
            saturating_i32(self.movement_points),
        )
        .with_max_armour(self.max_armour)
        .with_max_action_points(saturating_i32(self.max_action_points))
        .with_max_movement_points(saturating_i32(self.max_movement_points))
        .with_progression(
            saturating_i32(self.experience),
            saturating_i32(self.level),
            saturating_i32(self.respec_points),
        )
        .with_statuses(self.statuses.clone())
        .with_ability_ids(self.abilities.clone())
        .with_gear_uses(gear_uses)
    }

    /// Write a resolved snapshot back
    ///
    /// Copies life, armour, action and movement points, statuses and gear
    /// charges. Maxima, progression and loadout stay as they are. Gear charges
    /// are capped at each item's `max_uses`.
    pub fn apply_snapshot(&mut self, stats: &UnitStats) {
        self.life_hp = stats.life_hp();
        self.armour = stats.armour();
        self.action_points = stats.action_points();
        self.movement_points = stats.movement_points();
        self.statuses = stats.statuses().to_vec();

        for item in &mut self.gear {
            if let Some(&uses) = stats.gear_uses().get(&item.name) {
                item.remaining_uses = uses.min(item.max_uses);
            }
        }
    }

    /// Append a status; existing entries with the same id are kept
    pub fn add_status(&mut self, status: StatusEffect) {
        debug!(unit = %self.name, %status, "status added");
        self.statuses.push(status);
    }

    /// Refill action, movement and gear points
    pub fn begin_turn(&mut self) {
        self.action_points = self.max_action_points;
        self.movement_points = self.max_movement_points;
        self.gear_points = self.max_gear_points;
    }

    pub fn spend_action_points(&mut self, cost: u32) -> Result<(), CombatError> {
        if cost > self.action_points {
            return Err(CombatError::InsufficientActionPoints {
                needed: cost,
                available: self.action_points,
            });
        }
        self.action_points -= cost;
        Ok(())
    }

    /// Use one charge of a gear item, spending a gear point
    ///
    /// Returns the charges left on the item.
    pub fn use_gear(&mut self, name: &str) -> Result<u32, CombatError> {
        if self.gear_points == 0 {
            return Err(CombatError::NoGearPoints);
        }

        let item = self
            .gear
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| CombatError::UnknownGear(name.to_string()))?;

        if item.remaining_uses == 0 {
            return Err(CombatError::GearDepleted(name.to_string()));
        }

        item.remaining_uses -= 1;
        self.gear_points -= 1;
        Ok(item.remaining_uses)
    }

    /// Put one talent point into a branch; returns the branch's new total
    pub fn invest_talent(&mut self, branch: &str) -> Result<u32, CombatError> {
        if self.talent_points == 0 {
            return Err(CombatError::NoTalentPoints);
        }

        self.talent_points -= 1;
        let invested = self.talents.entry(branch.to_string()).or_insert(0);
        *invested += 1;
        Ok(*invested)
    }
}
