use effect_engine::{roll_dice, DiceSpec, Dice, RandomSource, ScriptedDice};
use proptest::prelude::*;

#[test]
fn zero_dice_roll_zero() {
    let mut dice = Dice::from_seed(7);
    assert_eq!(roll_dice(&mut dice, 0, 6), 0);
    assert_eq!(roll_dice(&mut dice, 0, 1), 0);
}

#[test]
fn zero_sided_die_is_zero_not_a_panic() {
    let mut dice = Dice::from_seed(7);
    assert_eq!(roll_dice(&mut dice, 3, 0), 0);
}

#[test]
fn scripted_faces_are_summed_in_order() {
    let mut dice = ScriptedDice::from_faces(vec![3, 5, 1]);
    assert_eq!(roll_dice(&mut dice, 2, 6), 8);
    assert_eq!(roll_dice(&mut dice, 1, 6), 1);
    // cycles back to the start
    assert_eq!(roll_dice(&mut dice, 1, 6), 3);
}

#[test]
fn scripted_faces_clamp_to_the_die() {
    let mut dice = ScriptedDice::from_faces(vec![9, 0]);
    assert_eq!(dice.roll_die(6), 6);
    assert_eq!(dice.roll_die(6), 1);
}

#[test]
fn scripted_without_chances_never_crits() {
    let mut dice = ScriptedDice::default();
    assert_eq!(dice.chance(), 1.0);
    assert_eq!(dice.roll_die(20), 1);
}

#[test]
fn same_seed_same_rolls() {
    let mut a = Dice::from_seed(2025);
    let mut b = Dice::from_seed(2025);
    let ra: Vec<u32> = (0..20).map(|_| a.roll_die(20)).collect();
    let rb: Vec<u32> = (0..20).map(|_| b.roll_die(20)).collect();
    assert_eq!(ra, rb);
}

#[test]
fn dice_spec_parses_and_prints() {
    assert_eq!("2d6".parse::<DiceSpec>().unwrap(), DiceSpec::new(2, 6));
    assert_eq!("D8".parse::<DiceSpec>().unwrap(), DiceSpec::new(1, 8));
    assert_eq!(DiceSpec::new(3, 4).to_string(), "3d4");
    assert!("2x6".parse::<DiceSpec>().is_err());
    assert!("ad6".parse::<DiceSpec>().is_err());
}

#[test]
fn huge_totals_saturate() {
    let mut dice = ScriptedDice::from_faces(vec![u32::MAX]);
    assert_eq!(roll_dice(&mut dice, 3, u32::MAX), u32::MAX);
}

proptest! {
    #[test]
    fn roll_is_within_bounds(seed in any::<u64>(), count in 0u32..30, sides in 1u32..100) {
        let mut dice = Dice::from_seed(seed);
        let total = roll_dice(&mut dice, count, sides);
        prop_assert!(total >= count);
        prop_assert!(total <= count * sides);
    }

    #[test]
    fn chance_is_a_unit_draw(seed in any::<u64>()) {
        let mut dice = Dice::from_seed(seed);
        let c = dice.chance();
        prop_assert!((0.0..1.0).contains(&c));
    }
}
