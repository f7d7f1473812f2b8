//! Shared testing utilities for mkcomponent CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Stdio};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Default source root (`<work>/src`).
    pub fn src_path(&self) -> PathBuf {
        self.work_dir.join("src")
    }

    /// Build a command for invoking the compiled `mkcomponent` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mkcomponent").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Start the binary in the background with every stdio stream piped.
    pub fn spawn_cli(&self) -> Child {
        std::process::Command::new(assert_cmd::cargo::cargo_bin("mkcomponent"))
            .current_dir(self.work_dir())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn binary")
    }

    /// Run the binary with the given answers piped to stdin, one per line.
    pub fn run_with_answers(&self, answers: &[&str]) -> assert_cmd::assert::Assert {
        let mut input = answers.join("\n");
        input.push('\n');
        self.cli().write_stdin(input).assert()
    }

    /// Read a file relative to the source root.
    pub fn read_src(&self, relative: &str) -> String {
        let path = self.src_path().join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Write a file relative to the source root, creating parents.
    pub fn write_src(&self, relative: &str, content: &str) {
        let path = self.src_path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Assert that a file exists relative to the source root.
    pub fn assert_src_file(&self, relative: &str) {
        let path = self.src_path().join(relative);
        assert!(path.is_file(), "{} should exist", path.display());
    }

    /// Assert that nothing was created under the work directory.
    pub fn assert_work_dir_empty(&self) {
        let count = fs::read_dir(&self.work_dir).unwrap().count();
        assert_eq!(count, 0, "work directory should be untouched");
    }
}
