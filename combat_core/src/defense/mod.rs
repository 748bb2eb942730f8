//! Defense system - Armour pools and hit chance

mod accuracy;
mod armour;

pub use accuracy::calculate_accuracy;
pub use armour::ArmourPools;

/// Defense calculation constants
pub mod constants {
    /// Hit chance of an attack with no modifiers
    pub const BASE_ACCURACY: f64 = 0.85;

    /// Rolls at or above this value (that still hit) are critical
    pub const CRITICAL_THRESHOLD: f64 = 0.95;

    /// Damage multiplier applied per component on a critical hit
    pub const CRITICAL_MULTIPLIER: f64 = 1.5;

    /// Base accuracy by attacker tile tier, tiers 1..=3
    pub const TIER_BASE_ACCURACY: [f64; 3] = [0.75, 0.85, 0.90];

    /// Base accuracy for tiers outside the table
    pub const FALLBACK_TIER_ACCURACY: f64 = 0.85;

    /// Accuracy gained per tier of height advantage
    pub const ACCURACY_PER_TIER: f64 = 0.05;

    /// Accuracy lost while the attacker is concussed
    pub const CONCUSSED_PENALTY: f64 = 0.15;

    /// Accuracy gained against a frozen defender
    pub const FROZEN_BONUS: f64 = 0.25;
}
