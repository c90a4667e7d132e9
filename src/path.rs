//! Path manipulation utilities for gito

use std::env;
use std::path::{Path, PathBuf};

use crate::defaults::ROOT_SEGMENT;
use crate::error::{Error, Result};

/// Derive the search roots from a workspace's configured path list.
///
/// The list is split with the platform separator (`:` on unix, `;` on
/// Windows), a leading `~` is expanded, empty entries are dropped and
/// [`ROOT_SEGMENT`] is appended to every entry.
pub fn root_paths(path_list: &str) -> Vec<PathBuf> {
    env::split_paths(path_list)
        .filter(|entry| !entry.as_os_str().is_empty())
        .map(|entry| expand_home(&entry).join(ROOT_SEGMENT))
        .collect()
}

/// Expand a leading `~` to the home directory.
///
/// Paths without a leading `~`, and every path when the home directory is
/// unknown, are returned unchanged.
pub fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };

    match dirs::home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

/// Make a user-supplied location absolute without touching the filesystem.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_home(path);
    std::path::absolute(&expanded).map_err(|e| Error::Path {
        message: format!("cannot make {} absolute: {}", expanded.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_root_paths_single_entry() {
        assert_eq!(
            root_paths("/Users/ricky"),
            vec![PathBuf::from("/Users/ricky/src")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_root_paths_multiple_entries_keep_order() {
        assert_eq!(
            root_paths("/home/me/go:/opt/shared"),
            vec![
                PathBuf::from("/home/me/go/src"),
                PathBuf::from("/opt/shared/src"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_root_paths_skips_empty_entries() {
        assert_eq!(
            root_paths("/a::/b:"),
            vec![PathBuf::from("/a/src"), PathBuf::from("/b/src")]
        );
    }

    #[test]
    fn test_root_paths_empty_list() {
        assert!(root_paths("").is_empty());
    }

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home(Path::new("~")), home);
            assert_eq!(expand_home(Path::new("~/code")), home.join("code"));
        }
        assert_eq!(
            expand_home(Path::new("/abs/~/x")),
            PathBuf::from("/abs/~/x")
        );
        assert_eq!(expand_home(Path::new("~other")), PathBuf::from("~other"));
    }

    #[test]
    fn test_absolutize_relative_path() {
        let cwd = env::current_dir().unwrap();
        let absolute = absolutize(Path::new("some/dir")).unwrap();
        assert!(absolute.is_absolute());
        assert_eq!(absolute, cwd.join("some/dir"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_keeps_absolute_path() {
        assert_eq!(
            absolutize(Path::new("/already/absolute")).unwrap(),
            PathBuf::from("/already/absolute")
        );
    }
}
