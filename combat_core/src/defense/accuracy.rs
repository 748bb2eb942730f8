//! Accuracy - Hit chance from tile tiers and statuses

use crate::config::{AccuracyConstants, ModifierSide};
use crate::unit::UnitStats;

/// Calculate the hit chance of an attack
///
/// `Accuracy = TierBase(attacker) + (attacker_tier - defender_tier) * per_tier + status modifiers`,
/// clamped to `[0, 1]`. A status modifier applies once per matching status entry
/// on the relevant side, so two concussions count twice.
pub fn calculate_accuracy(
    constants: &AccuracyConstants,
    attacker_tier: i32,
    defender_tier: i32,
    attacker: &UnitStats,
    defender: &UnitStats,
) -> f64 {
    let base = constants.tier_base_for(attacker_tier);
    let tier_modifier = (attacker_tier - defender_tier) as f64 * constants.per_tier;

    let status_modifier: f64 = constants
        .status_modifiers
        .iter()
        .map(|m| {
            let holder = match m.side {
                ModifierSide::Attacker => attacker,
                ModifierSide::Defender => defender,
            };
            let entries = holder.statuses().iter().filter(|s| s.id() == m.status).count();
            m.delta * entries as f64
        })
        .sum();

    (base + tier_modifier + status_modifier).clamp(0.0, 1.0)
}
