//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_repo("github.com/acme/foo");
//!     fixture.command().args(["where", "foo"]).assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::git_available;
    pub use super::TestFixture;
}

/// Check whether a `git` binary is on the PATH.
///
/// Tests that shell out to git return early when it is missing.
#[allow(dead_code)]
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary home for one gito workspace plus its config file.
///
/// The workspace is named `default` and its path is the temp dir itself, so
/// repositories live under `<temp>/src`. The config is written to
/// `<temp>/gito.yaml` and handed to the binary through `GITO_CONFIG`.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a fixture with a single `default` workspace.
    pub fn new() -> Self {
        let fixture = Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        };
        let yaml = format!(
            "workspaces:\n  - name: default\n    path: '{}'\n",
            fixture.path().display()
        );
        fixture.with_config(&yaml)
    }

    /// Replace the config file with the given content.
    pub fn with_config(self, content: &str) -> Self {
        self.temp_dir
            .child("gito.yaml")
            .write_str(content)
            .expect("Failed to write config file");
        self
    }

    /// Create a checkout at `<temp>/src/<rel>`, marked by a `.git` directory.
    pub fn with_repo(self, rel: &str) -> Self {
        self.temp_dir
            .child("src")
            .child(rel)
            .child(".git")
            .create_dir_all()
            .expect("Failed to create repo");
        self
    }

    /// Create a plain directory at `<temp>/<rel>`.
    #[allow(dead_code)]
    pub fn with_dir(self, rel: &str) -> Self {
        self.temp_dir
            .child(rel)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the workspace root, `<temp>/src`.
    #[allow(dead_code)]
    pub fn root(&self) -> PathBuf {
        self.path().join("src")
    }

    /// Get the path to the config file.
    pub fn config_path(&self) -> PathBuf {
        self.path().join("gito.yaml")
    }

    /// Read the config file back, e.g. after a command rewrote it.
    #[allow(dead_code)]
    pub fn config_contents(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("Failed to read config file")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    /// Create a `gito` command pointed at this fixture's config.
    ///
    /// Inherited `GITO_*` variables are cleared so the host environment
    /// cannot leak into the test.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gito");
        cmd.current_dir(self.path())
            .env("GITO_CONFIG", self.config_path())
            .env_remove("GITO_WORKSPACE")
            .env_remove("GITO_LOG");
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_writes_config() {
        let fixture = TestFixture::new();
        assert!(fixture.config_path().exists());
        assert!(fixture.config_contents().contains("name: default"));
    }

    #[test]
    fn test_fixture_with_repo() {
        let fixture = TestFixture::new().with_repo("github.com/acme/foo");
        assert!(fixture.root().join("github.com/acme/foo/.git").is_dir());
    }
}
