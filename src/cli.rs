//! CLI argument parsing and command dispatch

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;

use gito::defaults::{CONFIG_ENV, LOG_ENV, WORKSPACE_ENV};

use crate::commands::{self, Context};

/// Gito - find your code by name, wherever it lives
#[derive(Parser, Debug)]
#[command(name = "gito")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Workspace to use (defaults to the first one in the config)
    #[arg(short, long, global = true, value_name = "WORKSPACE", env = WORKSPACE_ENV)]
    workspace: Option<String>,

    /// Path to the gito.yaml configuration file [default: ~/.config/gito/gito.yaml]
    #[arg(long, global = true, value_name = "FILE", env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Download a repository into the active workspace
    Get(commands::get::GetArgs),

    /// Find out where a repository lives
    Where(commands::where_is::WhereArgs),

    /// Print the browsable URL of a repository
    Url(commands::url::UrlArgs),

    /// Alias a short name to a repository, e.g. "k8s" -> "kubernetes/kubernetes"
    Alias(commands::alias::AliasArgs),

    /// Tell gito where to find code living outside your workspace
    Set(commands::set::SetArgs),

    /// Configure the default folder for your own code
    SetSelf(commands::set_self::SetSelfArgs),

    /// Print the location of your own code folder
    #[command(name = "self")]
    ShowSelf(commands::self_location::SelfArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level)?;

        let ctx = Context {
            config: self.config,
            workspace: self.workspace,
        };

        match self.command {
            Commands::Get(args) => commands::get::execute(args, &ctx),
            Commands::Where(args) => commands::where_is::execute(args, &ctx),
            Commands::Url(args) => commands::url::execute(args, &ctx),
            Commands::Alias(args) => commands::alias::execute(args, &ctx),
            Commands::Set(args) => commands::set::execute(args, &ctx),
            Commands::SetSelf(args) => commands::set_self::execute(args, &ctx),
            Commands::ShowSelf(args) => commands::self_location::execute(args, &ctx),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// Route `log` output to stderr at `level`, letting `GITO_LOG` override it.
fn init_logging(level: &str) -> Result<()> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| anyhow::anyhow!("Invalid log level: {level}"))?;

    env_logger::Builder::new()
        .filter_level(filter)
        .parse_env(LOG_ENV)
        .format_target(false)
        .format_timestamp(None)
        .try_init()
        .context("initializing logger")
}
