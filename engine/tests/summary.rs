use effect_engine::summary::{payload_amount, simulate};
use effect_engine::{
    CombatStats, DamageType, Dice, Effect, EffectCondition, Entity, Magnitude, ScriptedDice,
};

fn dummy(hp: i32) -> Entity {
    let mut stats = CombatStats::new(100);
    stats.hp = hp;
    Entity::new("dummy", "Dummy", Some(stats))
}

#[test]
fn flat_heal_summary_is_constant() {
    let effect = Effect::heal(Magnitude::flat(10));
    let s = simulate(&effect, &dummy(50), &dummy(50), &mut ScriptedDice::default(), 50);
    assert_eq!(s.samples, 50);
    assert_eq!(s.valued, 50);
    assert_eq!((s.min, s.max), (10, 10));
    assert_eq!(s.mean, 10.0);
    assert_eq!(s.gated, 0);
}

#[test]
fn gated_samples_are_counted_not_valued() {
    let effect = Effect::damage(Magnitude::flat(12), None).with_condition(EffectCondition::HpBelow50);
    let s = simulate(&effect, &dummy(100), &dummy(100), &mut Dice::from_seed(1), 20);
    assert_eq!(s.gated, 20);
    assert_eq!(s.valued, 0);
    assert_eq!(s.mean, 0.0);
}

#[test]
fn seeded_dice_stay_within_crit_bounds() {
    let effect = Effect::damage(Magnitude::dice(2, 6), Some(DamageType::Fire));
    let s = simulate(&effect, &dummy(100), &dummy(100), &mut Dice::from_seed(2025), 500);
    assert_eq!(s.valued, 500);
    assert!(s.min >= 2);
    // a crit rerolls 2d6 once
    assert!(s.max <= 24);
    assert!(s.mean > 2.0 && s.mean < 24.0);
    assert!(s.crits <= 500);
}

#[test]
fn every_crit_is_counted() {
    let effect = Effect::damage(Magnitude::dice(1, 6), None);
    let mut dice = ScriptedDice::always_crit(vec![2]);
    let s = simulate(&effect, &dummy(100), &dummy(100), &mut dice, 10);
    assert_eq!(s.crits, 10);
    assert_eq!((s.min, s.max), (4, 4));
}

#[test]
fn payload_amount_ignores_non_numeric_payloads() {
    let effect = Effect::apply_status("STUN", None);
    let res = effect_engine::resolve_effect(
        &effect,
        &dummy(1),
        &dummy(1),
        &mut ScriptedDice::default(),
    );
    assert_eq!(payload_amount(&res), None);
}
