//! # Url Command Implementation
//!
//! Prints the browsable `https://` URL of each matching checkout's `origin`
//! remote. With no argument (or `.`) the current directory is used.

use anyhow::Result;
use clap::Args;

use gito::defaults::CURRENT_DIR_SENTINEL;
use gito::suggestions;

use super::Context;

/// Print the browsable URL of a repository
#[derive(Args, Debug)]
pub struct UrlArgs {
    /// Repository name, or `.` for the current directory
    #[arg(value_name = "REPO", default_value = CURRENT_DIR_SENTINEL)]
    pub repo: String,
}

/// Execute the `url` command.
pub fn execute(args: UrlArgs, ctx: &Context) -> Result<()> {
    let gito = ctx.open()?;
    let urls = gito.url(&args.repo).map_err(suggestions::explain)?;

    for url in urls {
        println!("{url}");
    }
    Ok(())
}
