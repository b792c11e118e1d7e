use crate::harness::{BUTTON_SPEC, CompletionServer, TestContext};
use predicates::prelude::*;

#[test]
fn generate_reports_server_error_after_single_attempt() {
    let ctx = TestContext::new();
    let mut server = CompletionServer::start();
    let mock = server.fails_with(500, "upstream unavailable", 1);
    ctx.write_config(&server.api_url(), "");
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli()
        .args(["generate", "--spec", &spec])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Service error (500)"));

    mock.assert();
    ctx.assert_output_missing("Button.tsx");
}

#[test]
fn generate_rejects_empty_completion() {
    let ctx = TestContext::new();
    let mut server = CompletionServer::start();
    let _mock = server.replies_with("", 1);
    ctx.write_config(&server.api_url(), "");
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli()
        .args(["generate", "--spec", &spec])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty completion"));

    ctx.assert_output_missing("Button.tsx");
}
