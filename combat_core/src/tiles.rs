//! Tile effects - Flame, ice and shadow hazards left on the grid

use crate::status::StatusEffect;
use crate::types::StatusId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Turns a hazard lasts unless stated otherwise
pub const DEFAULT_HAZARD_DURATION: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileEffectKind {
    Flame,
    Ice,
    Shadow,
}

impl TileEffectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileEffectKind::Flame => "flame",
            TileEffectKind::Ice => "ice",
            TileEffectKind::Shadow => "shadow",
        }
    }

    /// Ice puts out flame and flame melts ice
    pub fn cancels(&self, other: TileEffectKind) -> bool {
        matches!(
            (self, other),
            (TileEffectKind::Ice, TileEffectKind::Flame) | (TileEffectKind::Flame, TileEffectKind::Ice)
        )
    }
}

impl fmt::Display for TileEffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An effect occupying one tile for a number of turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileEffect {
    pub kind: TileEffectKind,
    pub duration: i32,
}

impl TileEffect {
    pub fn new(kind: TileEffectKind, duration: i32) -> Self {
        TileEffect { kind, duration }
    }

    /// Flame hazard left where a unit burned to death
    pub fn flame_hazard() -> Self {
        Self::new(TileEffectKind::Flame, DEFAULT_HAZARD_DURATION)
    }

    pub fn decrement_duration(&self) -> Self {
        TileEffect {
            duration: self.duration - 1,
            ..*self
        }
    }

    pub fn is_expired(&self) -> bool {
        self.duration <= 0
    }

    /// Status given to a unit standing on this tile at turn start
    pub fn occupant_status(&self) -> Option<StatusEffect> {
        match self.kind {
            TileEffectKind::Flame => Some(StatusEffect::new(StatusId::Burning, 1, 3)),
            TileEffectKind::Ice => Some(StatusEffect::new(StatusId::Freezing, 1, 3)),
            TileEffectKind::Shadow => None,
        }
    }
}

/// Place `incoming` on a tile holding `existing`
///
/// Returns what the tile holds afterwards: nothing if the two cancel,
/// otherwise the incoming effect.
pub fn combine(existing: Option<TileEffect>, incoming: TileEffect) -> Option<TileEffect> {
    match existing {
        Some(current) if current.kind.cancels(incoming.kind) => {
            tracing::debug!(existing = %current.kind, incoming = %incoming.kind, "tile effects cancelled");
            None
        }
        _ => Some(incoming),
    }
}
