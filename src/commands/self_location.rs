//! # Self Command Implementation
//!
//! Prints the directory the configured self location resolves to. Prints
//! nothing when no self location has been set.

use anyhow::Result;
use clap::Args;

use gito::suggestions;

use super::Context;

/// Print the location of your own code folder
#[derive(Args, Debug)]
pub struct SelfArgs {}

/// Execute the `self` command.
pub fn execute(_args: SelfArgs, ctx: &Context) -> Result<()> {
    let gito = ctx.open()?;
    if let Some(path) = gito.self_location().map_err(suggestions::explain)? {
        println!("{}", path.display());
    }
    Ok(())
}
