use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("effect-cli").unwrap()
}

fn scratch(name: &str, text: &str) -> PathBuf {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn modifier_prints_signed_value() {
    cli().args(["modifier", "16"]).assert().success().stdout("+3\n");
    cli().args(["modifier", "8"]).assert().success().stdout("-1\n");
}

#[test]
fn zero_dice_roll_zero() {
    cli()
        .args(["roll", "0d6", "--seed", "1", "--times", "2"])
        .assert()
        .success()
        .stdout("0\n0\n");
}

#[test]
fn bad_dice_expression_is_rejected() {
    cli()
        .args(["roll", "two-d-six"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dice spec"));
}

#[test]
fn resolve_flat_heal() {
    cli()
        .args(["resolve", "--effect", "mend", "--source", "cleric", "--target", "goblin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[HEAL] Goblin recovers 10 HP"));
}

#[test]
fn resolve_reports_gating() {
    cli()
        .args(["resolve", "--effect", "execute", "--source", "fighter", "--target", "goblin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[GATED] Goblin is unaffected: condition HP_BELOW_50 not met",
        ));
}

#[test]
fn resolve_and_apply_resisted_damage() {
    cli()
        .args([
            "resolve", "--effect", "frost_touch", "--source", "mage", "--target", "fire_imp",
            "--apply",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DMG] Fire Imp takes 5 cold damage (resisted)"))
        .stdout(predicate::str::contains("[HP][Fire Imp] 10 → 5"));
}

#[test]
fn resolve_as_json() {
    cli()
        .args([
            "resolve", "--effect", "stun", "--source", "fighter", "--target", "goblin", "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind": "status_applied""#))
        .stdout(predicate::str::contains(r#""animation_key": "stars""#));
}

#[test]
fn unknown_ids_fail() {
    cli()
        .args(["resolve", "--effect", "nope", "--source", "fighter", "--target", "goblin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown effect 'nope'"));
}

#[test]
fn list_shows_builtins() {
    cli()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("fireball"))
        .stdout(predicate::str::contains("ice_troll"));
}

#[test]
fn stats_binary_summarizes() {
    Command::cargo_bin("effect-stats")
        .unwrap()
        .args([
            "--effect", "mend", "--source", "cleric", "--target", "goblin", "--samples", "20",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""samples": 20"#))
        .stdout(predicate::str::contains(r#""min": 10"#));
}

#[test]
fn resolve_accepts_definition_files() {
    let effect = scratch(
        "cli_scorch.json",
        r#"{ "type": "DAMAGE", "base_amount": 6, "damage_type": "FIRE" }"#,
    );
    let target = scratch(
        "cli_ember.yaml",
        "id: ember\nname: Ember\nstats:\n  hp: 6\n  max_hp: 6\n  immunities: [FIRE]\n",
    );
    cli()
        .args(["resolve", "--source", "mage", "--seed", "1", "--apply"])
        .arg("--effect")
        .arg(&effect)
        .arg("--target")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("[DMG] Ember takes 0 fire damage (immune)"))
        .stdout(predicate::str::contains("[HP][Ember] 6 → 6"));
}

#[test]
fn missing_overlay_file_names_the_path() {
    cli()
        .args(["list", "--effects", "does/not/exist_effects.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"))
        .stderr(predicate::str::contains("exist_effects.json"));
}
