use combat_core::{
    calculate_accuracy, process_turn_start, ArmourPools, CombatConstants, DamageComponent,
    DamageContext, DamageResolver, DamageType, SequenceRandom, StatusEffect, StatusId,
    TickRegistry, UnitStats,
};
use proptest::prelude::*;

fn damage_type() -> impl Strategy<Value = DamageType> {
    prop_oneof![
        Just(DamageType::Piercing),
        Just(DamageType::Slashing),
        Just(DamageType::Bludgeoning),
    ]
}

fn component() -> impl Strategy<Value = DamageComponent> {
    (damage_type(), 0i32..30).prop_map(|(t, v)| DamageComponent::new(t, v))
}

fn unit() -> impl Strategy<Value = UnitStats> {
    (0i32..40, 0i32..10, 0i32..10, 0i32..10).prop_map(|(life, p, s, b)| {
        UnitStats::new(life, 40, ArmourPools::new(p, s, b), 2, 5)
    })
}

fn status_id() -> impl Strategy<Value = StatusId> {
    proptest::sample::select(StatusId::all().to_vec())
}

/// Most damage an attack can deal: every component scaled by the final multiplier
fn damage_bound(components: &[DamageComponent], multiplier: f64) -> u32 {
    components
        .iter()
        .map(|c| c.scaled(multiplier).max(0) as u32)
        .sum()
}

proptest! {
    #[test]
    fn prop_resolution_never_heals(
        defender in unit(),
        components in proptest::collection::vec(component(), 1..5),
        roll in 0.0f64..1.0,
        modifier in -0.5f64..0.5,
        damage_modifier in 0.0f64..3.0,
    ) {
        let mut resolver = DamageResolver::new(SequenceRandom::constant(roll));
        let mut ctx = DamageContext::new(defender.clone(), defender.clone())
            .with_accuracy_modifier(modifier)
            .with_damage_modifier(damage_modifier);
        let result = resolver.resolve_attack(&components, &mut ctx).unwrap();
        let after = &result.final_stats;

        let crit = if result.is_critical { 1.5 } else { 1.0 };
        prop_assert!(result.total_damage() <= damage_bound(&components, damage_modifier * crit));
        if !result.landed {
            prop_assert!(!result.is_critical);
            prop_assert_eq!(result.total_damage(), 0);
        }

        prop_assert!(after.life_hp() <= defender.life_hp());
        for &t in DamageType::all() {
            prop_assert!(after.armour().get(t) <= defender.armour().get(t));
        }
        prop_assert_eq!(
            result.life_damage,
            defender.life_hp() - after.life_hp()
        );
        prop_assert_eq!(
            result.armour_damage,
            defender.armour().total_armour() - after.armour().total_armour()
        );
        prop_assert_eq!(result.was_killed, result.landed && after.life_hp() == 0);
    }

    #[test]
    fn prop_critical_hit_stays_within_scaled_damage(
        defender in unit(),
        components in proptest::collection::vec(component(), 1..5),
        roll in 0.95f64..1.0,
        damage_modifier in 0.0f64..3.0,
    ) {
        let mut resolver = DamageResolver::new(SequenceRandom::constant(roll));
        let mut ctx = DamageContext::new(defender.clone(), defender.clone())
            .with_accuracy_modifier(0.15)
            .with_damage_modifier(damage_modifier);
        let result = resolver.resolve_attack(&components, &mut ctx).unwrap();

        prop_assert!(result.landed);
        prop_assert!(result.is_critical);
        prop_assert!(ctx.is_critical);
        prop_assert!(result.total_damage() <= damage_bound(&components, damage_modifier * 1.5));
        for &t in DamageType::all() {
            let dealt: u32 = components
                .iter()
                .filter(|c| c.damage_type == t)
                .map(|c| c.scaled(damage_modifier * 1.5).max(0) as u32)
                .sum();
            prop_assert_eq!(result.damage_of_type(t), dealt);
        }
        prop_assert!(result.final_stats.life_hp() <= defender.life_hp());
    }

    #[test]
    fn prop_life_only_hit_once_armour_is_gone(
        defender in unit(),
        components in proptest::collection::vec(component(), 1..5),
    ) {
        let mut resolver = DamageResolver::new(SequenceRandom::constant(0.0));
        let mut ctx = DamageContext::new(defender.clone(), defender);
        let result = resolver.resolve_attack(&components, &mut ctx).unwrap();
        if result.life_damage > 0 {
            prop_assert!(result.final_stats.armour().is_fully_depleted());
        }
    }

    #[test]
    fn prop_miss_changes_nothing(
        defender in unit(),
        components in proptest::collection::vec(component(), 1..5),
        roll in 0.85f64..1.0,
    ) {
        let mut resolver = DamageResolver::new(SequenceRandom::constant(roll));
        let mut ctx = DamageContext::new(defender.clone(), defender.clone());
        let result = resolver.resolve_attack(&components, &mut ctx).unwrap();
        prop_assert!(!result.landed);
        prop_assert_eq!(&result.final_stats, &defender);
        prop_assert_eq!(result.total_damage(), 0);
    }

    #[test]
    fn prop_component_order_irrelevant(
        defender in unit(),
        components in proptest::collection::vec(component(), 1..6),
    ) {
        let mut reversed = components.clone();
        reversed.reverse();

        let mut resolver = DamageResolver::new(SequenceRandom::constant(0.3));
        let a = resolver
            .resolve_attack(&components, &mut DamageContext::new(defender.clone(), defender.clone()))
            .unwrap();
        let b = resolver
            .resolve_attack(&reversed, &mut DamageContext::new(defender.clone(), defender))
            .unwrap();
        prop_assert_eq!(a.final_stats, b.final_stats);
        prop_assert_eq!(a.armour_damage, b.armour_damage);
        prop_assert_eq!(a.life_damage, b.life_damage);
    }

    #[test]
    fn prop_accuracy_in_unit_interval(
        attacker_tier in -5i32..8,
        defender_tier in -5i32..8,
        attacker_statuses in proptest::collection::vec(status_id(), 0..4),
        defender_statuses in proptest::collection::vec(status_id(), 0..4),
    ) {
        let with = |ids: Vec<StatusId>| {
            UnitStats::new(10, 10, ArmourPools::none(), 2, 5)
                .with_statuses(ids.into_iter().map(|id| StatusEffect::new(id, 1, 2)).collect())
        };
        let acc = calculate_accuracy(
            &CombatConstants::default().accuracy,
            attacker_tier,
            defender_tier,
            &with(attacker_statuses),
            &with(defender_statuses),
        );
        prop_assert!((0.0..=1.0).contains(&acc));
    }

    #[test]
    fn prop_burning_tick_respects_armour(
        target in unit(),
        damage in 0i32..10,
        roll in 0.0f64..1.0,
    ) {
        let mut resolver = DamageResolver::new(SequenceRandom::constant(roll));
        let result = resolver.resolve_burning_tick(&target, damage);
        prop_assert!(result.total_damage() <= damage.max(0) as u32);
        if result.life_damage > 0 {
            prop_assert!(result.final_stats.armour().is_fully_depleted());
        }
        prop_assert!(result.final_stats.life_hp() <= target.life_hp());
    }

    #[test]
    fn prop_turn_start_counts_down(
        stats in unit(),
        entries in proptest::collection::vec((status_id(), -1i32..5), 0..6),
        roll in 0.0f64..1.0,
    ) {
        let statuses: Vec<StatusEffect> = entries
            .iter()
            .map(|&(id, duration)| StatusEffect::new(id, 1, duration))
            .collect();
        let stats = stats.with_statuses(statuses.clone());
        let mut resolver = DamageResolver::new(SequenceRandom::constant(roll));
        let report = process_turn_start(&mut resolver, &stats, &TickRegistry::with_defaults());

        prop_assert!(report.final_stats.life_hp() <= stats.life_hp());
        prop_assert_eq!(
            report.final_stats.statuses().len() + report.expired.len(),
            statuses.len()
        );
        prop_assert!(report.final_stats.statuses().iter().all(|s| !s.is_expired()));
        let permanent = statuses.iter().filter(|s| s.is_permanent()).count();
        let kept_permanent = report.final_stats.statuses().iter().filter(|s| s.is_permanent()).count();
        prop_assert_eq!(permanent, kept_permanent);
    }
}
