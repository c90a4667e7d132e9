//! # Alias Command Implementation

use anyhow::{Context as _, Result};
use clap::Args;

use gito::suggestions;

use super::Context;

/// Alias a short name to a repository
#[derive(Args, Debug)]
pub struct AliasArgs {
    /// The short name to add
    #[arg(value_name = "ALIAS")]
    pub alias: String,

    /// Repository the alias stands for; it must be found right now
    #[arg(value_name = "REPO")]
    pub to: String,
}

/// Execute the `alias` command.
pub fn execute(args: AliasArgs, ctx: &Context) -> Result<()> {
    let mut gito = ctx.open()?;
    gito.alias(&args.alias, &args.to)
        .map_err(suggestions::explain)
        .with_context(|| format!("aliasing {} to {}", args.alias, args.to))?;

    println!("{} -> {}", args.alias, args.to);
    Ok(())
}
