//! StatusEffect - An active status on a combatant

use crate::types::StatusId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Duration value marking a status that never runs out
pub const PERMANENT: i32 = -1;

/// An active status effect (burning, frozen, ...)
///
/// Immutable: the `with_*` and `decrement_duration` methods return new values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEffect {
    id: StatusId,
    stacks: u32,
    /// Turns remaining; `-1` is permanent and `0` is expired
    duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<serde_json::Value>,
}

impl StatusEffect {
    /// Create a status effect
    ///
    /// Negative stacks clamp to zero. Any negative duration is treated as
    /// permanent.
    pub fn new(id: StatusId, stacks: i32, duration: i32) -> Self {
        StatusEffect {
            id,
            stacks: stacks.max(0) as u32,
            duration: duration.max(PERMANENT),
            metadata: None,
        }
    }

    /// One stack, never expires
    pub fn permanent(id: StatusId) -> Self {
        Self::new(id, 1, PERMANENT)
    }

    /// Attach opaque metadata
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Replace the stack count; stacks are overwritten, not merged
    pub fn with_stacks(&self, stacks: i32) -> Self {
        StatusEffect {
            stacks: stacks.max(0) as u32,
            ..self.clone()
        }
    }

    pub fn id(&self) -> StatusId {
        self.id
    }

    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn metadata(&self) -> Option<&serde_json::Value> {
        self.metadata.as_ref()
    }

    pub fn is_permanent(&self) -> bool {
        self.duration < 0
    }

    pub fn is_expired(&self) -> bool {
        self.duration == 0
    }

    /// One turn less; permanent and expired statuses are returned as-is
    pub fn decrement_duration(&self) -> Self {
        if self.duration > 0 {
            StatusEffect {
                duration: self.duration - 1,
                ..self.clone()
            }
        } else {
            self.clone()
        }
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_permanent() {
            write!(f, "Status({}, Stacks:{}, Duration:∞)", self.id, self.stacks)
        } else {
            write!(
                f,
                "Status({}, Stacks:{}, Duration:{})",
                self.id, self.stacks, self.duration
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let status = StatusEffect::new(StatusId::Burning, -3, -7);
        assert_eq!(status.stacks(), 0);
        assert_eq!(status.duration(), PERMANENT);
        assert!(status.is_permanent());
    }

    #[test]
    fn test_decrement_counts_down_to_expiry() {
        let status = StatusEffect::new(StatusId::Poisoned, 1, 2);
        let once = status.decrement_duration();
        assert_eq!(once.duration(), 1);
        assert!(!once.is_expired());
        let twice = once.decrement_duration();
        assert!(twice.is_expired());
        // input untouched
        assert_eq!(status.duration(), 2);
    }

    #[test]
    fn test_decrement_noop_on_permanent_and_expired() {
        let permanent = StatusEffect::permanent(StatusId::Enraged);
        assert_eq!(permanent.decrement_duration(), permanent);

        let expired = StatusEffect::new(StatusId::Pinned, 1, 0);
        assert_eq!(expired.decrement_duration(), expired);
        assert!(expired.decrement_duration().is_expired());
    }

    #[test]
    fn test_with_stacks_overwrites() {
        let status = StatusEffect::new(StatusId::Freezing, 1, 3);
        let restacked = status.with_stacks(5).with_stacks(2);
        assert_eq!(restacked.stacks(), 2);
        assert_eq!(restacked.duration(), 3);
        assert_eq!(status.with_stacks(-1).stacks(), 0);
    }

    #[test]
    fn test_metadata_survives_ticks() {
        let status = StatusEffect::new(StatusId::Burning, 1, 3)
            .with_metadata(serde_json::json!({ "source": "fire_spirit" }));
        let ticked = status.decrement_duration();
        assert_eq!(
            ticked.metadata().and_then(|m| m.get("source")),
            Some(&serde_json::json!("fire_spirit"))
        );
    }

    #[test]
    fn test_serialization() {
        let status = StatusEffect::new(StatusId::LightningCursed, 2, 4);
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("lightning_cursed"));
        assert!(!json.contains("metadata"));
        let back: StatusEffect = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            StatusEffect::permanent(StatusId::Grabbed).to_string(),
            "Status(grabbed, Stacks:1, Duration:∞)"
        );
        assert_eq!(
            StatusEffect::new(StatusId::Burning, 1, 3).to_string(),
            "Status(burning, Stacks:1, Duration:3)"
        );
    }
}
