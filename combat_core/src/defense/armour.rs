//! Armour - Three independent absorption pools, one per damage channel

use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Armour capacity per damage channel
///
/// Life cannot be damaged through armour until all three pools are empty.
/// Values are immutable; every operation returns a new instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArmourPools {
    #[serde(default)]
    piercing: u32,
    #[serde(default)]
    slashing: u32,
    #[serde(default)]
    bludgeoning: u32,
}

impl ArmourPools {
    /// Create armour pools, clamping negative values to zero
    pub fn new(piercing: i32, slashing: i32, bludgeoning: i32) -> Self {
        ArmourPools {
            piercing: piercing.max(0) as u32,
            slashing: slashing.max(0) as u32,
            bludgeoning: bludgeoning.max(0) as u32,
        }
    }

    /// No armour in any channel
    pub fn none() -> Self {
        Self::default()
    }

    pub fn piercing(&self) -> u32 {
        self.piercing
    }

    pub fn slashing(&self) -> u32 {
        self.slashing
    }

    pub fn bludgeoning(&self) -> u32 {
        self.bludgeoning
    }

    /// Remaining armour in one channel
    pub fn get(&self, damage_type: DamageType) -> u32 {
        match damage_type {
            DamageType::Piercing => self.piercing,
            DamageType::Slashing => self.slashing,
            DamageType::Bludgeoning => self.bludgeoning,
        }
    }

    /// Sum of all three pools, saturating at `u32::MAX`
    pub fn total_armour(&self) -> u32 {
        self.piercing
            .saturating_add(self.slashing)
            .saturating_add(self.bludgeoning)
    }

    /// True when every pool is empty
    pub fn is_fully_depleted(&self) -> bool {
        self.piercing == 0 && self.slashing == 0 && self.bludgeoning == 0
    }

    /// Channels that still hold armour, in resolution order
    pub fn non_empty_channels(&self) -> Vec<DamageType> {
        DamageType::all()
            .iter()
            .copied()
            .filter(|t| self.get(*t) > 0)
            .collect()
    }

    /// Apply damage to a single channel
    ///
    /// Returns the new pools and the overflow, i.e. the portion of `amount`
    /// that exceeded the channel. Other channels are never touched.
    /// A non-positive `amount` returns `self` unchanged with zero overflow.
    pub fn apply_damage(&self, damage_type: DamageType, amount: i32) -> (ArmourPools, u32) {
        if amount <= 0 {
            return (*self, 0);
        }
        let amount = amount as u32;
        let current = self.get(damage_type);
        let overflow = amount.saturating_sub(current);
        let remaining = current.saturating_sub(amount);

        let mut pools = *self;
        match damage_type {
            DamageType::Piercing => pools.piercing = remaining,
            DamageType::Slashing => pools.slashing = remaining,
            DamageType::Bludgeoning => pools.bludgeoning = remaining,
        }
        (pools, overflow)
    }
}

impl fmt::Display for ArmourPools {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Armour(P:{}, S:{}, B:{})",
            self.piercing, self.slashing, self.bludgeoning
        )
    }
}
