//! # CLI Command Implementations
//!
//! One module per `gito` subcommand. Each holds an `Args` struct derived with
//! `clap` and an `execute` function that calls into the `gito` library.
//!
//! Commands that need the configuration open it through [`Context::open`],
//! which also performs first-run setup when no config file exists yet.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use gito::config::Config;
use gito::defaults::default_config_path;
use gito::orchestrator::Gito;
use gito::store::{FileStore, MemoryStore};
use gito::suggestions;

pub mod alias;
pub mod completions;
pub mod get;
pub mod self_location;
pub mod set;
pub mod set_self;
pub mod url;
pub mod where_is;

/// Global options shared by every command.
#[derive(Debug, Default)]
pub struct Context {
    /// Explicit config file, from `--config` or `GITO_CONFIG`
    pub config: Option<PathBuf>,
    /// Workspace to activate, from `-w` or `GITO_WORKSPACE`
    pub workspace: Option<String>,
}

impl Context {
    /// Where the config file lives for this invocation.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(default_config_path)
    }

    /// Load the configuration and build a [`Gito`] around it.
    pub fn open(&self) -> Result<Gito> {
        let path = self.config_path();
        log::debug!("loading config from {}", path.display());

        let mut store = FileStore::new(&path);
        let config = Config::load(&mut store, self.workspace.as_deref())
            .map_err(suggestions::explain)
            .with_context(|| format!("loading config @ {}", path.display()))?;

        Ok(Gito::new(config, Box::new(store)))
    }

    /// Like [`Context::open`], but never creates or rewrites the config file.
    ///
    /// Changes made through the returned [`Gito`] are discarded.
    pub fn preview(&self) -> Result<Gito> {
        let path = self.config_path();
        let mut store = FileStore::new(&path);
        let config = Config::load_or_default(&mut store, self.workspace.as_deref())
            .map_err(suggestions::explain)
            .with_context(|| format!("loading config @ {}", path.display()))?;

        Ok(Gito::new(config, Box::new(MemoryStore::new())))
    }
}
