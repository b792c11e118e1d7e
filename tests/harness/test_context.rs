//! Shared testing harness for `tsxgen` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Brief used by the end-to-end scenarios.
pub(crate) const BUTTON_SPEC: &str = r#"name = "Button"
purpose = "clickable action trigger"
props = "label:string, variant:'primary'|'secondary', onClick:function"
behavior = "fires onClick on press"
styling = "utility-class styling, primary/secondary color variants"
examples = "one usage snippet"
"#;

/// Testing harness providing an isolated environment for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub(crate) fn home(&self) -> &Path {
        self.root.path()
    }

    /// Directory CLI invocations run in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled `tsxgen` binary with a test API key.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = self.cli_without_key();
        cmd.env("OPENAI_API_KEY", "test-key");
        cmd
    }

    /// Build a command for the compiled `tsxgen` binary with no API key in the environment.
    pub(crate) fn cli_without_key(&self) -> Command {
        let mut cmd = Command::cargo_bin("tsxgen").expect("Failed to locate tsxgen binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env_remove("OPENAI_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `tsxgen.toml` pointing generation at `api_url`.
    pub(crate) fn write_config(&self, api_url: &str, extra: &str) {
        let content = format!("[generation]\napi_url = \"{}\"\ntimeout_secs = 5\n{}", api_url, extra);
        fs::write(self.work_dir.join("tsxgen.toml"), content).expect("write tsxgen.toml");
    }

    /// Write a component brief into the work directory and return its file name.
    pub(crate) fn write_spec(&self, file_name: &str, content: &str) -> String {
        fs::write(self.work_dir.join(file_name), content).expect("write spec file");
        file_name.to_string()
    }

    /// Read a generated file relative to the work directory.
    pub(crate) fn read_output(&self, relative: &str) -> String {
        let path = self.work_dir.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("read {}: {}", path.display(), err))
    }

    /// Assert that no file exists at `relative`.
    pub(crate) fn assert_output_missing(&self, relative: &str) {
        let path = self.work_dir.join(relative);
        assert!(!path.exists(), "{} should not exist", path.display());
    }
}
