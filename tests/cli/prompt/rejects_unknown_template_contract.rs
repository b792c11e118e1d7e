use crate::harness::{BUTTON_SPEC, TestContext};
use predicates::prelude::*;

#[test]
fn prompt_rejects_unknown_template_name() {
    let ctx = TestContext::new();
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli_without_key()
        .args(["prompt", "--spec", &spec, "--template", "fancy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown template 'fancy'"));
}
