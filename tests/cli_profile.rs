//! History and preset persistence through the compiled binary.

mod harness;

use harness::TestContext;
use predicates::prelude::*;

#[test]
fn empty_history_lists_a_notice() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No history yet."));
}

#[test]
fn seeded_history_lists_newest_first() {
    let ctx = TestContext::new();
    ctx.seed_blob(
        "history.json",
        r#"[{"text":"newest prompt","time":"02/01/26 10:30"},{"text":"older prompt","time":"02/01/26 10:00"}]"#,
    );

    let assert = ctx.cli().args(["history", "list"]).assert().success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let newest = stdout.find("newest prompt").expect("newest entry shown");
    let older = stdout.find("older prompt").expect("older entry shown");
    assert!(newest < older, "newest entry should print first");
}

#[test]
fn corrupt_history_reads_as_empty() {
    let ctx = TestContext::new();
    ctx.seed_blob("history.json", "{definitely not json");
    ctx.cli()
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No history yet."));
}

#[test]
fn history_clear_removes_the_blob() {
    let ctx = TestContext::new();
    ctx.seed_blob("history.json", r#"[{"text":"x","time":"t"}]"#);
    ctx.cli()
        .args(["history", "clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains("History cleared"));
    assert!(ctx.read_blob("history.json").is_none());
}

#[test]
fn presets_save_list_show_delete_across_invocations() {
    let ctx = TestContext::new();

    ctx.cli()
        .args([
            "preset",
            "save",
            "astro",
            "--subject",
            "a lone astronaut",
            "--camera-category",
            "Photography",
            "--camera-model",
            "Leica M6",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preset \"astro\" saved"));

    let list = ctx.cli().args(["preset", "list"]).assert().success();
    let stdout = String::from_utf8_lossy(&list.get_output().stdout).to_string();
    let id = stdout.split_whitespace().next().expect("preset id printed").to_string();

    ctx.cli()
        .args(["preset", "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("a lone astronaut"))
        .stdout(predicate::str::contains("Leica M6"));

    ctx.cli()
        .args(["preset", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preset deleted"));

    ctx.cli()
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No presets saved."));
}

#[test]
fn unknown_preset_ids_fail() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["preset", "show", "123"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Preset '123' not found"));
    ctx.cli().args(["preset", "delete", "123"]).assert().failure();
}

#[test]
fn corrupt_presets_read_as_empty() {
    let ctx = TestContext::new();
    ctx.seed_blob("presets.json", "42");
    ctx.cli()
        .args(["preset", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No presets saved."));
}
