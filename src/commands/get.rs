//! # Get Command Implementation
//!
//! Clones a repository into the active workspace at
//! `<first root>/<host>/<path>`, mirroring the remote's layout.
//!
//! Accepts any remote spelling gito understands: `github.com/acme/foo`,
//! `git@github.com:acme/foo.git` or a full `https://` URL.

use anyhow::{Context as _, Result};
use clap::Args;

use gito::repository::FetchOptions;
use gito::suggestions;

use super::Context;

/// Download a repository into the active workspace
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Repository to download, e.g. github.com/acme/foo
    #[arg(value_name = "REPO")]
    pub repo: String,

    /// Skip `git submodule update --init --recursive` after cloning.
    #[arg(long)]
    pub no_submodules: bool,

    /// Print where the repository would be cloned without cloning it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Execute the `get` command.
pub fn execute(args: GetArgs, ctx: &Context) -> Result<()> {
    if args.dry_run {
        let target = ctx
            .preview()?
            .clone_target(&args.repo)
            .map_err(suggestions::explain)?;
        println!("Would clone {} into {}", target.url, target.destination.display());
        return Ok(());
    }

    let gito = ctx.open()?;

    let options = FetchOptions {
        submodules: !args.no_submodules,
    };
    let destination = gito
        .get(&args.repo, options)
        .map_err(suggestions::explain)
        .with_context(|| format!("getting {}", args.repo))?;

    println!("{}", destination.display());
    Ok(())
}
