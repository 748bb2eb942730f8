//! Core types shared across the combat model

use crate::error::CombatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Damage channel of a hit
///
/// The derived ordering is the resolution order within one attack:
/// Piercing resolves before Slashing before Bludgeoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageType {
    Piercing,
    Slashing,
    Bludgeoning,
}

impl DamageType {
    /// Get all damage types in resolution order
    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Piercing,
            DamageType::Slashing,
            DamageType::Bludgeoning,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Piercing => "piercing",
            DamageType::Slashing => "slashing",
            DamageType::Bludgeoning => "bludgeoning",
        }
    }
}

impl fmt::Display for DamageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DamageType {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DamageType::all()
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CombatError::UnknownDamageType(s.to_string()))
    }
}

/// Identifier of a status effect
///
/// The namespace is closed. Anything that needs to react to a status (tick
/// handlers, accuracy modifiers) matches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusId {
    Burning,
    Poisoned,
    Freezing,
    Frozen,
    Concussed,
    Panicked,
    Shocked,
    Electrified,
    LightningRod,
    LightningCursed,
    Addled,
    Pinned,
    Enraged,
    Clouded,
    Grabbed,
    Grabbing,
}

impl StatusId {
    /// Get all status identifiers
    pub fn all() -> &'static [StatusId] {
        &[
            StatusId::Burning,
            StatusId::Poisoned,
            StatusId::Freezing,
            StatusId::Frozen,
            StatusId::Concussed,
            StatusId::Panicked,
            StatusId::Shocked,
            StatusId::Electrified,
            StatusId::LightningRod,
            StatusId::LightningCursed,
            StatusId::Addled,
            StatusId::Pinned,
            StatusId::Enraged,
            StatusId::Clouded,
            StatusId::Grabbed,
            StatusId::Grabbing,
        ]
    }

    /// The stable string key of this status
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusId::Burning => "burning",
            StatusId::Poisoned => "poisoned",
            StatusId::Freezing => "freezing",
            StatusId::Frozen => "frozen",
            StatusId::Concussed => "concussed",
            StatusId::Panicked => "panicked",
            StatusId::Shocked => "shocked",
            StatusId::Electrified => "electrified",
            StatusId::LightningRod => "lightning_rod",
            StatusId::LightningCursed => "lightning_cursed",
            StatusId::Addled => "addled",
            StatusId::Pinned => "pinned",
            StatusId::Enraged => "enraged",
            StatusId::Clouded => "clouded",
            StatusId::Grabbed => "grabbed",
            StatusId::Grabbing => "grabbing",
        }
    }
}

impl fmt::Display for StatusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusId {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusId::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CombatError::UnknownStatus(s.to_string()))
    }
}
