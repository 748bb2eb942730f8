//! Status tick processing

use super::{StatusEffect, TickBehaviour, TickRegistry};
use crate::combat::DamageResolver;
use crate::random::RandomSource;
use crate::types::StatusId;
use crate::unit::UnitStats;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Damage dealt by one status during a turn-start tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    pub status: StatusId,
    pub armour_damage: u32,
    pub life_damage: u32,
}

/// Result of processing every active status on a unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Unit after damage, with decremented and pruned statuses
    pub final_stats: UnitStats,
    /// Damage-dealing ticks, in processing order
    pub events: Vec<TickEvent>,
    /// Statuses removed this turn
    pub expired: Vec<StatusId>,
    /// Status whose tick brought life to zero
    pub killed_by: Option<StatusId>,
}

impl TickReport {
    pub fn was_killed(&self) -> bool {
        self.killed_by.is_some()
    }

    /// Armour plus life damage across all ticks
    pub fn total_damage(&self) -> u32 {
        self.events.iter().fold(0u32, |total, e| {
            total
                .saturating_add(e.armour_damage)
                .saturating_add(e.life_damage)
        })
    }
}

/// Process turn-start ticks for a unit
///
/// Statuses are handled in list order: the tick behaviour fires, the duration
/// goes down by one, and the status is dropped once it reaches zero. Every
/// status is processed even after the unit dies.
pub fn process_turn_start<R: RandomSource>(
    resolver: &mut DamageResolver<R>,
    stats: &UnitStats,
    registry: &TickRegistry,
) -> TickReport {
    let mut current = stats.clone();
    let mut remaining: Vec<StatusEffect> = Vec::with_capacity(stats.statuses().len());
    let mut events = Vec::new();
    let mut expired = Vec::new();
    let mut killed_by = None;

    for status in stats.statuses() {
        let was_alive = current.is_alive();

        let behaviour = registry.behaviour(status.id());
        let tick_damage = i32::try_from(behaviour.damage()).unwrap_or(i32::MAX);
        let result = match behaviour {
            TickBehaviour::None => None,
            TickBehaviour::ArmouredDamage { .. } => {
                Some(resolver.resolve_burning_tick(&current, tick_damage))
            }
            TickBehaviour::DirectDamage { .. } => {
                Some(resolver.apply_direct_life_damage(&current, tick_damage))
            }
        };

        if let Some(result) = result {
            if result.total_damage() > 0 {
                debug!(
                    status = %status.id(),
                    tick_damage,
                    armour_damage = result.armour_damage,
                    life_damage = result.life_damage,
                    "status tick"
                );
                events.push(TickEvent {
                    status: status.id(),
                    armour_damage: result.armour_damage,
                    life_damage: result.life_damage,
                });
            }
            current = result.final_stats;
        }

        if was_alive && !current.is_alive() && killed_by.is_none() {
            info!(status = %status.id(), "unit died from status tick");
            killed_by = Some(status.id());
        }

        let next = status.decrement_duration();
        if next.is_expired() {
            debug!(status = %status.id(), "status expired");
            expired.push(status.id());
        } else {
            remaining.push(next);
        }
    }

    TickReport {
        final_stats: current.with_statuses(remaining),
        events,
        expired,
        killed_by,
    }
}
