//! Common test utilities for smartbanner integration tests.
//!
//! Provides `TestEnv`, a scratch directory for banner config files, and
//! user agents for the devices the banner cares about.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

pub const IPHONE: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1";
pub const ANDROID: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";
pub const IPAD: &str = "Mozilla/5.0 (iPad; CPU OS 17_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.2 Mobile/15E148 Safari/604.1";
pub const DESKTOP: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Banner config used by most tests.
pub const CONFIG_TOML: &str = r#"
title = "Example"
author = "Example Inc."
daysHidden = 15
daysReminder = 90

[appId]
ios = "123456"
android = "com.example.app"
"#;

/// A test environment with an isolated config directory.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Write a file into the environment and return its path.
    pub fn write(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Write the default banner config and return its path.
    pub fn config(&self) -> std::path::PathBuf {
        self.write("banner.toml", CONFIG_TOML)
    }

    /// Get a Command for the smartbanner binary.
    ///
    /// Clears the env vars the CLI reads so the host environment can't leak in.
    pub fn sb(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_smartbanner"));
        cmd.current_dir(self.dir.path());
        cmd.env_remove("SMARTBANNER_USER_AGENT");
        cmd.env_remove("SMARTBANNER_CONFIG");
        cmd.env_remove("SMARTBANNER_LOG");
        cmd
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
