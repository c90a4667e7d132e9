//! # Set-Self Command Implementation

use anyhow::{Context as _, Result};
use clap::Args;

use gito::suggestions;

use super::Context;

/// Configure the default folder for your own code
#[derive(Args, Debug)]
pub struct SetSelfArgs {
    /// Directory name to use, e.g. your GitHub user name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Execute the `set-self` command.
pub fn execute(args: SetSelfArgs, ctx: &Context) -> Result<()> {
    let mut gito = ctx.open()?;
    gito.set_self(&args.name)
        .map_err(suggestions::explain)
        .with_context(|| format!("setting self to {}", args.name))?;
    Ok(())
}
