use crate::harness::{BUTTON_SPEC, TestContext};
use predicates::prelude::*;

#[test]
fn prompt_preview_labels_every_field_without_credential() {
    let ctx = TestContext::new();
    let spec = ctx.write_spec("button.toml", BUTTON_SPEC);

    ctx.cli_without_key()
        .args(["prompt", "--spec", &spec])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Component Name**: Button"))
        .stdout(predicate::str::contains("- **Purpose**: clickable action trigger"))
        .stdout(predicate::str::contains(
            "- **Props**: label:string, variant:'primary'|'secondary', onClick:function",
        ))
        .stdout(predicate::str::contains("- **Behavior**: fires onClick on press"))
        .stdout(predicate::str::contains(
            "- **Styling**: utility-class styling, primary/secondary color variants",
        ))
        .stdout(predicate::str::contains("- **Examples**: one usage snippet"));

    ctx.assert_output_missing("Button.tsx");
}
