//! Damage resolution - Apply typed damage to a defender snapshot

use super::result::DamageResult;
use crate::config::CombatConstants;
use crate::damage::{DamageComponent, DamageContext};
use crate::defense::calculate_accuracy;
use crate::error::CombatError;
use crate::random::{thread_source, RandomSource, RngSource};
use crate::types::DamageType;
use crate::unit::UnitStats;
use rand::rngs::ThreadRng;
use std::collections::BTreeMap;
use tracing::debug;

/// Resolves attacks, direct damage and periodic damage
///
/// The resolver holds no combat state. Its only mutable part is the injected
/// random source, drawn from once per attack and once per burning tick.
#[derive(Debug, Clone)]
pub struct DamageResolver<R = RngSource<ThreadRng>> {
    random: R,
    constants: CombatConstants,
}

impl DamageResolver<RngSource<ThreadRng>> {
    /// Resolver backed by the thread-local RNG and default constants
    pub fn with_thread_rng() -> Self {
        DamageResolver::new(thread_source())
    }
}

impl<R: RandomSource> DamageResolver<R> {
    pub fn new(random: R) -> Self {
        Self::with_constants(random, CombatConstants::default())
    }

    pub fn with_constants(random: R, constants: CombatConstants) -> Self {
        DamageResolver { random, constants }
    }

    pub fn constants(&self) -> &CombatConstants {
        &self.constants
    }

    /// Resolve a multi-component attack against `context.defender`
    ///
    /// One accuracy roll covers the whole attack. On a hit, components resolve
    /// Piercing, then Slashing, then Bludgeoning, each against the defender as
    /// left by the previous one. Overflow out of an armour pool only reaches
    /// life once every pool is empty; otherwise it is lost.
    ///
    /// `context.is_critical` is overwritten with the outcome of the roll.
    pub fn resolve_attack(
        &mut self,
        components: &[DamageComponent],
        context: &mut DamageContext,
    ) -> Result<DamageResult, CombatError> {
        if components.is_empty() {
            return Err(CombatError::EmptyAttack);
        }

        // Step 1: Single accuracy roll for the entire attack
        let roll = self.random.next_roll();
        let final_accuracy = self.constants.accuracy.base + context.accuracy_modifier;
        let hit = roll < final_accuracy;
        context.is_critical = hit && roll >= self.constants.accuracy.critical_threshold;

        debug!(
            roll,
            final_accuracy,
            hit,
            critical = context.is_critical,
            "accuracy roll"
        );

        if !hit {
            return Ok(DamageResult::unchanged(context.defender.clone(), false));
        }

        // Step 2: Fixed type order; the sort is stable so equal types keep input order
        let mut ordered = components.to_vec();
        ordered.sort_by_key(|c| c.damage_type);

        // Step 3: Damage multiplier
        let mut multiplier = context.damage_modifier;
        if context.is_critical {
            multiplier *= self.constants.crit.multiplier;
        }

        // Step 4: Resolve each component against the accumulating defender
        let mut current = context.defender.clone();
        let mut armour_damage = 0u32;
        let mut life_damage = 0u32;
        let mut damage_by_type = BTreeMap::new();

        for component in &ordered {
            let damage = component.scaled(multiplier);
            if damage <= 0 {
                continue;
            }
            let dealt = damage_by_type.entry(component.damage_type).or_insert(0u32);
            *dealt = dealt.saturating_add(damage as u32);

            let (next, to_armour, to_life) = if context.bypass_armour {
                let (next, to_life) = damage_life(&current, damage as u32);
                (next, 0, to_life)
            } else {
                damage_through_armour(&current, component.damage_type, damage)
            };

            debug!(
                damage_type = %component.damage_type,
                damage,
                to_armour,
                to_life,
                "component resolved"
            );

            current = next;
            armour_damage = armour_damage.saturating_add(to_armour);
            life_damage = life_damage.saturating_add(to_life);
        }

        let was_killed = current.life_hp() == 0;

        Ok(DamageResult {
            final_stats: current,
            armour_damage,
            life_damage,
            damage_by_type,
            landed: true,
            is_critical: context.is_critical,
            was_killed,
        })
    }

    /// Resolve a single typed hit through the full attack pipeline
    pub fn resolve_single_damage(
        &mut self,
        damage_type: DamageType,
        value: i32,
        context: &mut DamageContext,
    ) -> Result<DamageResult, CombatError> {
        self.resolve_attack(&[DamageComponent::new(damage_type, value)], context)
    }

    /// Damage life directly, ignoring accuracy and armour (poison, falls)
    pub fn apply_direct_life_damage(&self, target: &UnitStats, damage: i32) -> DamageResult {
        if damage <= 0 {
            return DamageResult::unchanged(target.clone(), true);
        }

        let (final_stats, life_damage) = damage_life(target, damage as u32);
        let was_killed = final_stats.life_hp() == 0;

        DamageResult {
            final_stats,
            armour_damage: 0,
            life_damage,
            damage_by_type: BTreeMap::new(),
            landed: true,
            is_critical: false,
            was_killed,
        }
    }

    /// Burning damage: an accuracy-free hit that still has to go through armour
    ///
    /// While any armour remains, one roll picks a channel among the non-empty
    /// pools and the damage is applied there with the normal spill rule. Once
    /// all pools are empty the damage goes to life.
    pub fn resolve_burning_tick(&mut self, target: &UnitStats, damage: i32) -> DamageResult {
        if damage <= 0 {
            return DamageResult::unchanged(target.clone(), true);
        }

        let armour = target.armour();
        if armour.is_fully_depleted() {
            return self.apply_direct_life_damage(target, damage);
        }

        let channels = armour.non_empty_channels();
        let roll = self.random.next_roll();
        let index = ((roll * channels.len() as f64) as usize).min(channels.len() - 1);
        let channel = channels[index];

        let (final_stats, armour_damage, life_damage) =
            damage_through_armour(target, channel, damage);
        let was_killed = final_stats.life_hp() == 0;

        debug!(
            %channel,
            damage,
            armour_damage,
            life_damage,
            "burning tick"
        );

        let mut damage_by_type = BTreeMap::new();
        damage_by_type.insert(channel, damage as u32);

        DamageResult {
            final_stats,
            armour_damage,
            life_damage,
            damage_by_type,
            landed: true,
            is_critical: false,
            was_killed,
        }
    }

    /// Hit chance from tile tiers and statuses, see [`calculate_accuracy`]
    pub fn calculate_accuracy(
        &self,
        attacker_tier: i32,
        defender_tier: i32,
        attacker: &UnitStats,
        defender: &UnitStats,
    ) -> f64 {
        calculate_accuracy(
            &self.constants.accuracy,
            attacker_tier,
            defender_tier,
            attacker,
            defender,
        )
    }

    /// Context accuracy modifier equivalent to a tier-based hit chance
    pub fn accuracy_modifier_for(&self, accuracy: f64) -> f64 {
        accuracy - self.constants.accuracy.base
    }
}

/// Take up to `damage` off life; returns the new snapshot and the damage applied
fn damage_life(stats: &UnitStats, damage: u32) -> (UnitStats, u32) {
    let applied = damage.min(stats.life_hp());
    let next = stats.with_life_hp((stats.life_hp() - applied) as i32);
    (next, applied)
}

/// Apply `damage` to one armour channel, spilling into life only when every
/// pool is empty afterwards; returns (snapshot, armour damage, life damage)
fn damage_through_armour(
    stats: &UnitStats,
    damage_type: DamageType,
    damage: i32,
) -> (UnitStats, u32, u32) {
    let (armour, overflow) = stats.armour().apply_damage(damage_type, damage);
    let absorbed = damage as u32 - overflow;
    let next = stats.with_armour(armour);

    if overflow > 0 && armour.is_fully_depleted() {
        let (next, to_life) = damage_life(&next, overflow);
        (next, absorbed, to_life)
    } else {
        (next, absorbed, 0)
    }
}
