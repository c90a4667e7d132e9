//! Filesystem access used by the repository locator.
//!
//! The locator only needs three questions answered: is this a directory, does
//! this entry exist, and which subdirectories live directly under a path.
//! [`FileSystem`] captures exactly that so searches can run against the real
//! disk ([`OsFileSystem`]) or against an in-memory tree ([`MemoryFS`]) in
//! tests and benchmarks.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::defaults::GIT_MARKER;
use crate::error::Result;

/// Read-only view of a directory tree.
///
/// Implementations are shared across the locator's worker threads.
pub trait FileSystem: Send + Sync {
    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Whether anything exists at `path`.
    ///
    /// An entry whose existence cannot be determined counts as absent.
    fn exists(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `path`, in no particular order.
    fn list_dirs(&self, path: &Path) -> Result<Vec<String>>;

    /// Whether `dir` carries a `.git` entry directly below it.
    fn is_repo(&self, dir: &Path) -> bool {
        self.exists(&dir.join(GIT_MARKER))
    }
}

/// [`FileSystem`] backed by the host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn exists(&self, path: &Path) -> bool {
        match path.try_exists() {
            Ok(exists) => exists,
            Err(e) => {
                // TODO: surface this through its own error instead of
                // treating it as "not a repository".
                debug!("cannot check {}: {}", path.display(), e);
                false
            }
        }
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<String>> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => dirs.push(name),
                Err(name) => debug!("skipping non UTF-8 directory {:?}", name),
            }
        }
        Ok(dirs)
    }
}

/// In-memory directory tree for exercising the locator without touching disk.
///
/// Adding a path implicitly adds all of its ancestors. Every listing is
/// recorded so tests can assert how far a search descended.
#[derive(Debug, Default)]
pub struct MemoryFS {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
    listed: Mutex<Vec<PathBuf>>,
}

impl MemoryFS {
    /// Create a new empty filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory and all of its ancestors
    pub fn add_dir<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        for ancestor in path.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
        self
    }

    /// Add a repository checkout: the directory plus its `.git` marker
    pub fn add_repo<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        let path = path.as_ref();
        self.add_dir(path.join(GIT_MARKER))
    }

    /// Add a regular file, creating its parent directories
    pub fn add_file<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path.to_path_buf());
        self
    }

    /// Make listing `path` fail with a permission error
    pub fn deny<P: AsRef<Path>>(&mut self, path: P) -> &mut Self {
        self.unreadable.insert(path.as_ref().to_path_buf());
        self
    }

    /// Every directory listed so far, in call order
    pub fn listed_dirs(&self) -> Vec<PathBuf> {
        self.listed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl FileSystem for MemoryFS {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains(path) || self.files.contains(path)
    }

    fn list_dirs(&self, path: &Path) -> Result<Vec<String>> {
        self.listed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_path_buf());

        if self.unreadable.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            )
            .into());
        }
        if !self.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", path.display()),
            )
            .into());
        }

        Ok(self
            .dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }
}
