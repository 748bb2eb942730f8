//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::defense::ArmourPools;
pub use crate::types::{DamageType, StatusId};
pub use crate::unit::{CombatIdentity, UnitStats};

// Damage system
pub use crate::combat::{DamageResolver, DamageResult};
pub use crate::damage::{DamageComponent, DamageContext};
pub use crate::error::CombatError;

// Status system
pub use crate::status::{StatusEffect, TickRegistry};

// Battle
pub use crate::battle::{AttackOptions, Battle};
pub use crate::tiles::{TileEffect, TileEffectKind};

// Randomness
pub use crate::random::{RandomSource, SequenceRandom};
