use crate::harness::{BUTTON_SPEC, CompletionServer, TestContext};
use predicates::prelude::*;

#[test]
fn generate_writes_completion_verbatim_to_named_file() {
    let ctx = TestContext::new();
    let mut server = CompletionServer::start();
    let completion = "export const Button = ...\n\n// trailing whitespace kept  \n";
    let mock = server.replies_with(completion, 1);
    ctx.write_config(&server.api_url(), "");
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli()
        .args(["generate", "--spec", &spec])
        .assert()
        .success()
        .stdout(predicate::str::contains("Component saved to"))
        .stdout(predicate::str::contains(format!("Button.tsx ({} bytes)", completion.len())))
        .stdout(predicate::str::contains("/./").not());

    assert_eq!(ctx.read_output("Button.tsx"), completion);
    mock.assert();
}

#[test]
fn generate_writes_whitespace_only_completion() {
    let ctx = TestContext::new();
    let mut server = CompletionServer::start();
    let _mock = server.replies_with(" \n", 1);
    ctx.write_config(&server.api_url(), "");
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli().args(["generate", "--spec", &spec]).assert().success();

    assert_eq!(ctx.read_output("Button.tsx"), " \n");
}

#[test]
fn generate_honors_output_dir_flag() {
    let ctx = TestContext::new();
    let mut server = CompletionServer::start();
    let _mock = server.replies_with("export const Card = () => null;", 1);
    ctx.write_config(&server.api_url(), "");
    let spec = ctx.write_spec("card.yml", "name: Card\npurpose: show content\n");

    ctx.cli()
        .args(["g", "-s", &spec, "--output-dir", "src/components"])
        .assert()
        .success();

    assert_eq!(ctx.read_output("src/components/Card.tsx"), "export const Card = () => null;");
    ctx.assert_output_missing("Card.tsx");
}
