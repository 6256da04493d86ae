//! Enrich and polish through the compiled binary against a stub Gemini server.

mod harness;

use harness::TestContext;
use predicates::prelude::*;
use serial_test::serial;

const MODEL_PATH: &str = "/models/gemini-2.5-flash:generateContent";

fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    })
    .to_string()
}

fn gemini_config(server_url: &str) -> String {
    format!(
        r#"[gemini]
api_url = "{server_url}"
max_retries = 1
retry_delay_ms = 1
"#
    )
}

#[test]
#[serial]
fn enrich_prints_the_expanded_idea() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", MODEL_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(candidate_body("a cat prowling rain-soaked neon streets"))
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&gemini_config(&server.url()));
    ctx.cli()
        .env("GEMINI_API_KEY", "fake-key")
        .args(["enrich", "a cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a cat prowling rain-soaked neon streets"));
}

#[test]
#[serial]
fn polish_prints_both_variants_with_directives_reattached() {
    let mut server = mockito::Server::new();
    let inner = serde_json::json!({
        "primary": "an elevated astronaut",
        "secondary": "astronot yang diangkat",
    })
    .to_string();
    let _m = server
        .mock("POST", MODEL_PATH)
        .with_status(200)
        .with_body(candidate_body(&inner))
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&gemini_config(&server.url()));
    ctx.cli()
        .env("GEMINI_API_KEY", "fake-key")
        .args([
            "polish",
            "--subject",
            "a lone astronaut",
            "--mode",
            "midjourney",
            "--ar",
            "16:9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "primary:   /imagine prompt: an elevated astronaut --ar 16:9 --v 6.0",
        ))
        .stdout(predicate::str::contains(
            "secondary: /imagine prompt: astronot yang diangkat --ar 16:9 --v 6.0",
        ));
}

#[test]
#[serial]
fn polish_refuses_json_mode_without_calling_the_server() {
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", MODEL_PATH).expect(0).create();

    let ctx = TestContext::new();
    ctx.write_config(&gemini_config(&server.url()));
    ctx.cli()
        .env("GEMINI_API_KEY", "fake-key")
        .args(["polish", "--subject", "a lone astronaut", "--mode", "json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Polish does not support the json output mode"));
    mock.assert();
}

#[test]
#[serial]
fn remote_failure_surfaces_as_a_cli_error() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", MODEL_PATH)
        .with_status(401)
        .with_body(r#"{"error": {"message": "API key not valid"}}"#)
        .create();

    let ctx = TestContext::new();
    ctx.write_config(&gemini_config(&server.url()));
    ctx.cli()
        .env("GEMINI_API_KEY", "bad-key")
        .args(["enrich", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gemini API error"));
}

#[test]
fn missing_api_key_is_reported_without_network() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["enrich", "a cat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GEMINI_API_KEY"));
}
