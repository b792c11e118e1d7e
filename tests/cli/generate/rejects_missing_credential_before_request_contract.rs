use crate::harness::{BUTTON_SPEC, CompletionServer, TestContext};
use predicates::prelude::*;

#[test]
fn generate_fails_without_credential_and_sends_nothing() {
    let ctx = TestContext::new();
    let mut server = CompletionServer::start();
    let mock = server.replies_with("export const Button = ...", 0);
    ctx.write_config(&server.api_url(), "");
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli_without_key()
        .args(["generate", "--spec", &spec])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY environment variable not set"));

    mock.assert();
    ctx.assert_output_missing("Button.tsx");
}

#[test]
fn generate_treats_blank_credential_as_missing() {
    let ctx = TestContext::new();
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli_without_key()
        .env("OPENAI_API_KEY", "   ")
        .args(["generate", "--spec", &spec])
        .assert()
        .failure()
        .stderr(predicate::str::contains("OPENAI_API_KEY"));
}
