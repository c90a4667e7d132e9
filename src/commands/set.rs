//! # Set Command Implementation
//!
//! Registers a checkout living outside the workspace roots under a name.
//! Lookups of that name skip the directory search entirely.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;

use gito::suggestions;

use super::Context;

/// Tell gito where to find code living outside your workspace
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Name to register
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Directory of the checkout; must contain a .git entry
    #[arg(value_name = "LOCATION")]
    pub location: PathBuf,
}

/// Execute the `set` command.
pub fn execute(args: SetArgs, ctx: &Context) -> Result<()> {
    let mut gito = ctx.open()?;
    let stored = gito
        .set(&args.name, &args.location)
        .map_err(suggestions::explain)
        .with_context(|| format!("setting {}", args.name))?;

    println!("{} -> {}", args.name, stored.display());
    Ok(())
}
