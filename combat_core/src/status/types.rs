//! Tick behaviour definitions

use crate::types::StatusId;
use serde::{Deserialize, Serialize};

/// What a status does to its carrier at turn start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TickBehaviour {
    /// Only the duration ticks
    #[default]
    None,
    /// Damage routed through one armour channel (burning)
    ArmouredDamage { damage: u32 },
    /// Damage straight to life (poison)
    DirectDamage { damage: u32 },
}

impl TickBehaviour {
    /// Damage dealt per tick, zero for `None`
    pub fn damage(&self) -> u32 {
        match self {
            TickBehaviour::None => 0,
            TickBehaviour::ArmouredDamage { damage } | TickBehaviour::DirectDamage { damage } => {
                *damage
            }
        }
    }
}

/// One entry of the tick table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickConfig {
    /// Status this entry applies to
    pub status: StatusId,
    #[serde(default)]
    pub behaviour: TickBehaviour,
}
