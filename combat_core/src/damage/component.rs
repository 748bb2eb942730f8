//! DamageComponent - One typed slice of an attack

use crate::error::CombatError;
use crate::types::DamageType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Typed damage magnitude; an attack carries one or more of these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DamageComponent {
    pub damage_type: DamageType,
    value: u32,
}

impl DamageComponent {
    /// Create a component, clamping negative magnitudes to zero
    pub fn new(damage_type: DamageType, value: i32) -> Self {
        DamageComponent {
            damage_type,
            value: value.max(0) as u32,
        }
    }

    pub fn piercing(value: i32) -> Self {
        Self::new(DamageType::Piercing, value)
    }

    pub fn slashing(value: i32) -> Self {
        Self::new(DamageType::Slashing, value)
    }

    pub fn bludgeoning(value: i32) -> Self {
        Self::new(DamageType::Bludgeoning, value)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Magnitude after a multiplier, rounded half-up
    pub fn scaled(&self, multiplier: f64) -> i32 {
        (self.value as f64 * multiplier).round() as i32
    }
}

impl fmt::Display for DamageComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.damage_type, self.value)
    }
}

/// Parses the `type:value` form produced by `Display`
impl FromStr for DamageComponent {
    type Err = CombatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (tag, value) = s
            .split_once(':')
            .ok_or_else(|| CombatError::UnknownDamageType(s.to_string()))?;
        let damage_type: DamageType = tag.trim().parse()?;
        let value = value
            .trim()
            .parse::<i32>()
            .map_err(|_| CombatError::UnknownDamageType(s.to_string()))?;
        Ok(DamageComponent::new(damage_type, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_value_clamped() {
        assert_eq!(DamageComponent::slashing(-3).value(), 0);
    }

    #[test]
    fn test_scaled_rounds_half_up() {
        assert_eq!(DamageComponent::piercing(10).scaled(1.5), 15);
        assert_eq!(DamageComponent::piercing(3).scaled(1.5), 5); // 4.5
        assert_eq!(DamageComponent::piercing(1).scaled(0.4), 0);
        assert_eq!(DamageComponent::piercing(5).scaled(1.0), 5);
    }

    #[test]
    fn test_parse() {
        let component: DamageComponent = "bludgeoning:4".parse().unwrap();
        assert_eq!(component, DamageComponent::bludgeoning(4));
        assert_eq!(component.to_string(), "bludgeoning:4");
        assert!("fire:4".parse::<DamageComponent>().is_err());
        assert!("piercing".parse::<DamageComponent>().is_err());
    }
}
