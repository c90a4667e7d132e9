//! Default values for gito configuration.
//!
//! This module provides centralized constants and default locations used
//! across the library and the commands.

use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// How many directory levels below a root the locator will descend.
///
/// Four levels covers `host/owner/repo` plus one level of nested groups.
pub const MAX_SEARCH_DEPTH: usize = 4;

/// Segment appended to every configured workspace path to form a root.
pub const ROOT_SEGMENT: &str = "src";

/// Entry whose presence marks a directory as a repository checkout.
pub const GIT_MARKER: &str = ".git";

/// Repository argument meaning "the current directory".
pub const CURRENT_DIR_SENTINEL: &str = ".";

/// Name given to the workspace created on first run.
pub const DEFAULT_WORKSPACE_NAME: &str = "default";

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "GITO_CONFIG";

/// Environment variable selecting the active workspace.
pub const WORKSPACE_ENV: &str = "GITO_WORKSPACE";

/// Environment variable overriding the log filter, in `env_logger` syntax.
pub const LOG_ENV: &str = "GITO_LOG";

/// Returns the default config file location, `~/.config/gito/gito.yaml`.
///
/// Falls back to a relative `.config/gito/gito.yaml` if the home directory
/// cannot be determined.
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join(".config")
        .join("gito")
        .join("gito.yaml")
}

/// Returns the path list used for a freshly created workspace.
///
/// This is `$GOPATH` when set and non-empty, otherwise the user's home
/// directory.
pub fn default_workspace_path() -> Result<String> {
    if let Ok(gopath) = env::var("GOPATH") {
        if !gopath.is_empty() {
            return Ok(gopath);
        }
    }

    dirs::home_dir()
        .map(|home| home.to_string_lossy().into_owned())
        .ok_or_else(|| Error::Path {
            message: "cannot determine home directory for the default workspace".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_path_ends_with_gito_yaml() {
        let path = default_config_path();
        assert!(path.ends_with(".config/gito/gito.yaml"));
    }

    #[test]
    #[serial]
    fn test_default_workspace_path_prefers_gopath() {
        let original = env::var_os("GOPATH");
        env::set_var("GOPATH", "/opt/go");

        let path = default_workspace_path().unwrap();

        match original {
            Some(value) => env::set_var("GOPATH", value),
            None => env::remove_var("GOPATH"),
        }
        assert_eq!(path, "/opt/go");
    }

    #[test]
    #[serial]
    fn test_default_workspace_path_ignores_empty_gopath() {
        let original = env::var_os("GOPATH");
        env::set_var("GOPATH", "");

        let path = default_workspace_path();

        match original {
            Some(value) => env::set_var("GOPATH", value),
            None => env::remove_var("GOPATH"),
        }
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path.unwrap(), home.to_string_lossy());
        }
    }
}
