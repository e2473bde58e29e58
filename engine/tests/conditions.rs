use effect_engine::conditions::{condition_met, gate};
use effect_engine::{
    resolve_effect, CombatStats, CreatureType, DamageType, Effect, EffectCondition, Entity,
    Magnitude, ScriptedDice,
};

fn at_hp(hp: i32, max_hp: i32) -> Entity {
    let mut stats = CombatStats::new(max_hp);
    stats.hp = hp;
    Entity::new("target", "Target", Some(stats))
}

fn of_type(creature_type: CreatureType) -> Entity {
    let mut stats = CombatStats::new(10);
    stats.creature_type = creature_type;
    Entity::new("target", "Target", Some(stats))
}

#[test]
fn hp_below_half_is_strict() {
    assert!(!condition_met(EffectCondition::HpBelow50, &at_hp(50, 100)));
    assert!(condition_met(EffectCondition::HpBelow50, &at_hp(49, 100)));
    // 49.5 is the half of 99
    assert!(condition_met(EffectCondition::HpBelow50, &at_hp(49, 99)));
    assert!(!condition_met(EffectCondition::HpBelow50, &at_hp(50, 99)));
    assert!(condition_met(EffectCondition::HpBelow50, &at_hp(0, 1)));
}

#[test]
fn undead_check_reads_creature_type() {
    assert!(condition_met(EffectCondition::IsUndead, &of_type(CreatureType::Undead)));
    assert!(!condition_met(EffectCondition::IsUndead, &of_type(CreatureType::Humanoid)));
}

#[test]
fn unrecognized_and_absent_conditions_pass() {
    let target = at_hp(100, 100);
    assert!(condition_met(EffectCondition::Unrecognized, &target));
    assert_eq!(gate(None, &target), Ok(()));
}

#[test]
fn statless_targets_fail_stat_conditions() {
    let dummy = Entity::new("dummy", "Dummy", None);
    assert_eq!(
        gate(Some(EffectCondition::HpBelow50), &dummy),
        Err(EffectCondition::HpBelow50)
    );
    assert!(!condition_met(EffectCondition::IsUndead, &dummy));
}

#[test]
fn gated_effect_carries_only_a_message() {
    let execute = Effect::damage(Magnitude::flat(12), Some(DamageType::Slashing))
        .with_condition(EffectCondition::HpBelow50)
        .with_animation("slash_heavy");
    let source = Entity::new("hero", "Hero", None);
    let mut dice = ScriptedDice::default();

    let res = resolve_effect(&execute, &source, &at_hp(50, 100), &mut dice);
    assert!(res.gated);
    assert_eq!(res.payload, None);
    assert_eq!(res.animation_key, None);
    insta::assert_snapshot!(res.to_string(), @"[GATED] Target is unaffected: condition HP_BELOW_50 not met");

    let res = resolve_effect(&execute, &source, &at_hp(49, 100), &mut dice);
    assert!(!res.gated);
    assert_eq!(res.damage(), Some((12, DamageType::Slashing, false)));
    assert_eq!(res.animation_key.as_deref(), Some("slash_heavy"));
}

#[test]
fn unknown_condition_tags_deserialize_and_pass() {
    let effect: Effect = serde_json::from_str(
        r#"{ "type": "HEAL", "base_amount": 3, "condition": "IS_BLOODIED" }"#,
    )
    .unwrap();
    assert_eq!(effect.condition, Some(EffectCondition::Unrecognized));
    let target = at_hp(100, 100);
    let res = resolve_effect(&effect, &target, &target, &mut ScriptedDice::default());
    assert_eq!(res.healing(), Some(3));
}
