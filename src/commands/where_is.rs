//! # Where Command Implementation
//!
//! Prints every checkout matching a name, one per line, sorted. Several lines
//! mean the name is ambiguous; shell wrappers typically `cd` into the first.

use anyhow::Result;
use clap::Args;

use gito::suggestions;

use super::Context;

/// Find out where a repository lives
#[derive(Args, Debug)]
pub struct WhereArgs {
    /// Full or partial repository name, an alias or a custom location name
    #[arg(value_name = "REPO")]
    pub repo: String,
}

/// Execute the `where` command.
pub fn execute(args: WhereArgs, ctx: &Context) -> Result<()> {
    let gito = ctx.open()?;
    let paths = gito.where_is(&args.repo).map_err(suggestions::explain)?;

    for path in paths {
        println!("{}", path.display());
    }
    Ok(())
}
