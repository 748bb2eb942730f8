//! combat_core - Deterministic combat resolution for a turn-based tactics game
//!
//! This library provides:
//! - ArmourPools / UnitStats: Immutable unit snapshots
//! - DamageResolver: Accuracy, critical hits and the armour-then-life damage model
//! - Status ticks: Burning and poison damage at turn start, duration countdown
//! - CombatIdentity / Battle: The mutable roster and the commands that update it

pub mod battle;
pub mod combat;
pub mod config;
pub mod damage;
pub mod defense;
pub mod error;
pub mod prelude;
pub mod random;
pub mod status;
pub mod tiles;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use battle::{AttackOptions, AttackReport, Battle, TurnStartReport};
pub use combat::{DamageResolver, DamageResult};
pub use config::{default_constants, default_templates, default_ticks, CombatConstants, ConfigError};
pub use damage::{DamageComponent, DamageContext};
pub use defense::{calculate_accuracy, ArmourPools};
pub use error::CombatError;
pub use random::{seeded_source, thread_source, RandomSource, RngSource, SequenceRandom};
pub use status::{process_turn_start, StatusEffect, TickBehaviour, TickRegistry, TickReport};
pub use tiles::{TileEffect, TileEffectKind};
pub use types::{DamageType, StatusId};
pub use unit::{CombatIdentity, GearItem, UnitStats};
