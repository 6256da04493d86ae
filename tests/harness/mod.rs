//! Shared testing harness for framecraft integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment for CLI exercises: every invocation gets its own
/// `$HOME`, so config, history, and presets never leak between tests.
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Profile directory the binary reads and writes.
    pub fn profile_dir(&self) -> PathBuf {
        self.home().join(".config").join("framecraft")
    }

    /// Build a command for invoking the compiled `framecraft` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("framecraft").expect("Failed to locate framecraft binary");
        cmd.env("HOME", self.home()).env_remove("GEMINI_API_KEY");
        cmd
    }

    /// Write the config file inside the emulated profile.
    pub fn write_config(&self, content: &str) {
        let dir = self.profile_dir();
        fs::create_dir_all(&dir).expect("Failed to create profile directory");
        fs::write(dir.join("config.toml"), content).expect("Failed to write config.toml");
    }

    /// Seed a raw persisted blob (history.json / presets.json).
    pub fn seed_blob(&self, name: &str, content: &str) {
        let dir = self.profile_dir();
        fs::create_dir_all(&dir).expect("Failed to create profile directory");
        fs::write(dir.join(name), content).expect("Failed to seed blob");
    }

    /// Read a persisted blob back, if present.
    pub fn read_blob(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.profile_dir().join(name)).ok()
    }
}
