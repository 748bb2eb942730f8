//! Error types for combat resolution and battle orchestration

use thiserror::Error;

/// Errors raised by the combat core
///
/// Misses, zero-damage hits and unarmoured targets are not errors; they are
/// ordinary [`DamageResult`](crate::combat::DamageResult) outcomes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("attack has no damage components")]
    EmptyAttack,
    #[error("unknown damage type: {0}")]
    UnknownDamageType(String),
    #[error("unknown status effect: {0}")]
    UnknownStatus(String),
    #[error("no combatant registered as '{0}'")]
    MissingCombatant(String),
    #[error("combatant '{0}' is down")]
    CombatantDown(String),
    #[error("not enough action points: need {needed}, have {available}")]
    InsufficientActionPoints { needed: u32, available: u32 },
    #[error("no gear points left this turn")]
    NoGearPoints,
    #[error("unknown gear item: {0}")]
    UnknownGear(String),
    #[error("gear item '{0}' has no uses left")]
    GearDepleted(String),
    #[error("no talent points left to invest")]
    NoTalentPoints,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CombatError::InsufficientActionPoints {
            needed: 2,
            available: 1,
        };
        assert_eq!(err.to_string(), "not enough action points: need 2, have 1");
        assert_eq!(
            CombatError::MissingCombatant("tharl".to_string()).to_string(),
            "no combatant registered as 'tharl'"
        );
    }
}
