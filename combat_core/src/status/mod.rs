//! Status system - Active statuses and their turn-start ticks

mod effect;
pub mod tick;
mod types;

pub use effect::{StatusEffect, PERMANENT};
pub use tick::{process_turn_start, TickEvent, TickReport};
pub use types::{TickBehaviour, TickConfig};

use crate::types::StatusId;
use std::collections::HashMap;

/// Burning damage per tick
pub const BURNING_TICK_DAMAGE: u32 = 2;
/// Poison damage per tick
pub const POISON_TICK_DAMAGE: u32 = 1;

/// Built-in tick behaviour for every status
pub fn default_behaviour(id: StatusId) -> TickBehaviour {
    match id {
        StatusId::Burning => TickBehaviour::ArmouredDamage {
            damage: BURNING_TICK_DAMAGE,
        },
        StatusId::Poisoned => TickBehaviour::DirectDamage {
            damage: POISON_TICK_DAMAGE,
        },
        StatusId::Freezing
        | StatusId::Frozen
        | StatusId::Concussed
        | StatusId::Panicked
        | StatusId::Shocked
        | StatusId::Electrified
        | StatusId::LightningRod
        | StatusId::LightningCursed
        | StatusId::Addled
        | StatusId::Pinned
        | StatusId::Enraged
        | StatusId::Clouded
        | StatusId::Grabbed
        | StatusId::Grabbing => TickBehaviour::None,
    }
}

/// Status tick table
///
/// Statuses without an entry tick their duration only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickRegistry {
    behaviours: HashMap<StatusId, TickBehaviour>,
}

impl TickRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TickRegistry {
            behaviours: HashMap::new(),
        }
    }

    /// Register a tick behaviour, replacing any previous entry for the status
    pub fn register(&mut self, config: TickConfig) {
        self.behaviours.insert(config.status, config.behaviour);
    }

    /// Behaviour for a status
    pub fn behaviour(&self, id: StatusId) -> TickBehaviour {
        self.behaviours.get(&id).copied().unwrap_or_default()
    }

    /// Registry with the built-in behaviours
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for &id in StatusId::all() {
            let behaviour = default_behaviour(id);
            if behaviour != TickBehaviour::None {
                registry.register(TickConfig {
                    status: id,
                    behaviour,
                });
            }
        }
        registry
    }

    pub fn len(&self) -> usize {
        self.behaviours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviours.is_empty()
    }
}
