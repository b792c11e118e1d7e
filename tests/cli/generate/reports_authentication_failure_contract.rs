use crate::harness::{BUTTON_SPEC, CompletionServer, TestContext};
use predicates::prelude::*;

#[test]
fn generate_reports_rejected_credential() {
    let ctx = TestContext::new();
    let mut server = CompletionServer::start();
    let mock = server.fails_with(401, "Incorrect API key provided", 1);
    ctx.write_config(&server.api_url(), "");
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli()
        .args(["generate", "--spec", &spec])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed (401)"))
        .stderr(predicate::str::contains("Incorrect API key provided"));

    mock.assert();
}
