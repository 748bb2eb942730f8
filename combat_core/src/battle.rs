//! Battle - Roster of combat identities and the commands that change them
//!
//! Every command follows the same transaction: read the identities, take
//! snapshots, resolve, write the result back, then charge the actor.

use crate::combat::{DamageResolver, DamageResult};
use crate::damage::{DamageComponent, DamageContext};
use crate::error::CombatError;
use crate::random::{RandomSource, RngSource};
use crate::status::{process_turn_start, StatusEffect, TickRegistry, TickReport};
use crate::tiles::{TileEffect, TileEffectKind, DEFAULT_HAZARD_DURATION};
use crate::types::StatusId;
use crate::unit::CombatIdentity;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Action point cost of a basic attack or spirit ability
pub const DEFAULT_ACTION_COST: u32 = 1;

/// Per-attack options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackOptions {
    /// (attacker tier, defender tier) of the tiles the two units stand on
    pub tiers: Option<(i32, i32)>,
    pub damage_modifier: f64,
    pub action_cost: u32,
}

impl Default for AttackOptions {
    fn default() -> Self {
        AttackOptions {
            tiers: None,
            damage_modifier: 1.0,
            action_cost: DEFAULT_ACTION_COST,
        }
    }
}

impl AttackOptions {
    pub fn from_tiers(attacker_tier: i32, defender_tier: i32) -> Self {
        AttackOptions {
            tiers: Some((attacker_tier, defender_tier)),
            ..Self::default()
        }
    }

    pub fn with_action_cost(mut self, cost: u32) -> Self {
        self.action_cost = cost;
        self
    }

    pub fn with_damage_modifier(mut self, modifier: f64) -> Self {
        self.damage_modifier = modifier;
        self
    }
}

/// Outcome of an attack command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackReport {
    pub attacker: String,
    pub target: String,
    pub result: DamageResult,
}

/// Outcome of a combatant's turn start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnStartReport {
    pub combatant: String,
    pub ticks: TickReport,
    /// Flame left on the combatant's tile when burning killed it
    pub hazard: Option<TileEffect>,
}

/// A running battle
pub struct Battle<R = RngSource<ThreadRng>> {
    resolver: DamageResolver<R>,
    ticks: TickRegistry,
    combatants: BTreeMap<String, CombatIdentity>,
}

impl<R: RandomSource> Battle<R> {
    pub fn new(resolver: DamageResolver<R>, ticks: TickRegistry) -> Self {
        Battle {
            resolver,
            ticks,
            combatants: BTreeMap::new(),
        }
    }

    /// Register a combatant; returns the identity it replaced, if any
    pub fn add_combatant(
        &mut self,
        id: impl Into<String>,
        identity: CombatIdentity,
    ) -> Option<CombatIdentity> {
        self.combatants.insert(id.into(), identity)
    }

    pub fn combatant(&self, id: &str) -> Option<&CombatIdentity> {
        self.combatants.get(id)
    }

    pub fn combatant_mut(&mut self, id: &str) -> Option<&mut CombatIdentity> {
        self.combatants.get_mut(id)
    }

    /// Ids of combatants with life left
    pub fn survivors(&self) -> Vec<&str> {
        self.combatants
            .iter()
            .filter(|(_, identity)| identity.is_alive())
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn resolver(&self) -> &DamageResolver<R> {
        &self.resolver
    }

    pub fn ticks(&self) -> &TickRegistry {
        &self.ticks
    }

    fn get(&self, id: &str) -> Result<&CombatIdentity, CombatError> {
        self.combatants
            .get(id)
            .ok_or_else(|| CombatError::MissingCombatant(id.to_string()))
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut CombatIdentity, CombatError> {
        self.combatants
            .get_mut(id)
            .ok_or_else(|| CombatError::MissingCombatant(id.to_string()))
    }

    /// Check that `id` is alive and can pay `cost`
    fn ready_to_act(&self, id: &str, cost: u32) -> Result<&CombatIdentity, CombatError> {
        let actor = self.get(id)?;
        if !actor.is_alive() {
            return Err(CombatError::CombatantDown(id.to_string()));
        }
        if actor.action_points < cost {
            return Err(CombatError::InsufficientActionPoints {
                needed: cost,
                available: actor.action_points,
            });
        }
        Ok(actor)
    }

    /// Basic attack with the attacker's primary damage type and attack power
    pub fn attack(
        &mut self,
        attacker: &str,
        target: &str,
        options: AttackOptions,
    ) -> Result<AttackReport, CombatError> {
        let actor = self.ready_to_act(attacker, options.action_cost)?;
        let component = DamageComponent::new(actor.primary_damage_type, actor.attack_power as i32);
        let attacker_stats = actor.to_snapshot();

        let defender = self.get(target)?;
        if !defender.is_alive() {
            return Err(CombatError::CombatantDown(target.to_string()));
        }
        let defender_stats = defender.to_snapshot();

        let accuracy_modifier = match options.tiers {
            Some((attacker_tier, defender_tier)) => {
                let accuracy = self.resolver.calculate_accuracy(
                    attacker_tier,
                    defender_tier,
                    &attacker_stats,
                    &defender_stats,
                );
                self.resolver.accuracy_modifier_for(accuracy)
            }
            None => 0.0,
        };

        let mut context = DamageContext::new(attacker_stats, defender_stats)
            .with_accuracy_modifier(accuracy_modifier)
            .with_damage_modifier(options.damage_modifier);
        let result = self.resolver.resolve_attack(&[component], &mut context)?;

        info!(
            attacker,
            target,
            landed = result.landed,
            critical = result.is_critical,
            armour_damage = result.armour_damage,
            life_damage = result.life_damage,
            "attack resolved"
        );
        if result.was_killed {
            info!(attacker, target, "combatant killed");
        }

        self.get_mut(target)?.apply_snapshot(&result.final_stats);
        self.get_mut(attacker)?.spend_action_points(options.action_cost)?;

        Ok(AttackReport {
            attacker: attacker.to_string(),
            target: target.to_string(),
            result,
        })
    }

    /// Put a status on `target`, charging the caster `cost` action points
    pub fn apply_status(
        &mut self,
        caster: &str,
        target: &str,
        status: StatusEffect,
        cost: u32,
    ) -> Result<(), CombatError> {
        self.ready_to_act(caster, cost)?;
        info!(caster, target, %status, "status applied");
        self.get_mut(target)?.add_status(status);
        self.get_mut(caster)?.spend_action_points(cost)
    }

    /// Fire Spirit: one stack of burning for three turns
    pub fn fire_spirit(&mut self, caster: &str, target: &str) -> Result<(), CombatError> {
        self.apply_status(
            caster,
            target,
            StatusEffect::new(StatusId::Burning, 1, 3),
            DEFAULT_ACTION_COST,
        )
    }

    /// Ice Spirit: one stack of freezing for three turns on every target
    ///
    /// Costs the caster one action for the whole cast. Returns the ice hazard
    /// for the caller to lay on the affected tiles.
    pub fn ice_spirit(&mut self, caster: &str, targets: &[&str]) -> Result<TileEffect, CombatError> {
        self.ready_to_act(caster, DEFAULT_ACTION_COST)?;
        for target in targets {
            self.get(target)?;
        }

        for target in targets {
            self.get_mut(target)?
                .add_status(StatusEffect::new(StatusId::Freezing, 1, 3));
        }
        info!(caster, targets = ?targets, "ice spirit cast");
        self.get_mut(caster)?.spend_action_points(DEFAULT_ACTION_COST)?;

        Ok(TileEffect::new(TileEffectKind::Ice, DEFAULT_HAZARD_DURATION))
    }

    /// Start `id`'s turn: tick statuses, then refill per-turn resources
    pub fn begin_turn(&mut self, id: &str) -> Result<TurnStartReport, CombatError> {
        let identity = self
            .combatants
            .get_mut(id)
            .ok_or_else(|| CombatError::MissingCombatant(id.to_string()))?;

        let ticks = process_turn_start(&mut self.resolver, &identity.to_snapshot(), &self.ticks);
        identity.apply_snapshot(&ticks.final_stats);
        identity.begin_turn();

        let hazard = match ticks.killed_by {
            Some(StatusId::Burning) => {
                info!(combatant = id, "burned to death, flame hazard left behind");
                Some(TileEffect::flame_hazard())
            }
            Some(status) => {
                info!(combatant = id, %status, "died from status");
                None
            }
            None => None,
        };

        Ok(TurnStartReport {
            combatant: id.to_string(),
            ticks,
            hazard,
        })
    }

    /// Start the turn of several combatants; unknown ids are logged and skipped
    pub fn begin_turn_for<S: AsRef<str>>(&mut self, ids: &[S]) -> Vec<TurnStartReport> {
        let mut reports = Vec::with_capacity(ids.len());
        for id in ids {
            match self.begin_turn(id.as_ref()) {
                Ok(report) => reports.push(report),
                Err(err) => warn!(combatant = id.as_ref(), %err, "skipping turn start"),
            }
        }
        reports
    }
}
