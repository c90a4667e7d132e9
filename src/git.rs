//! Thin wrappers around the system `git` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};

use log::info;

use crate::error::Error;

/// Clone `url` into `target_dir`, creating missing parent directories.
///
/// This uses the system git command, which automatically handles:
/// - SSH keys from ~/.ssh/
/// - Git credential helpers
/// - Personal access tokens
/// - Any authentication configured in ~/.gitconfig
pub fn clone(url: &str, target_dir: &Path) -> Result<(), Error> {
    if let Some(parent) = target_dir.parent() {
        fs::create_dir_all(parent)?;
    }

    info!("cloning {} into {}", url, target_dir.display());
    let output = Command::new("git")
        .args(["clone", "--", url])
        .arg(target_dir)
        .stdout(Stdio::inherit())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| Error::GitClone {
            url: url.to_string(),
            message: e.to_string(),
            hint: Some("Make sure git is installed and on your PATH".to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);

        let hint = if stderr.contains("Authentication failed")
            || stderr.contains("Permission denied")
            || stderr.contains("Could not read from remote repository")
        {
            Some(
                "Make sure you have access to the repository (SSH key, credential helper \
                 or personal access token)"
                    .to_string(),
            )
        } else if stderr.contains("not found") {
            Some("Check the repository name and host".to_string())
        } else {
            None
        };

        return Err(Error::GitClone {
            url: url.to_string(),
            message: stderr.trim().to_string(),
            hint,
        });
    }

    Ok(())
}

/// Run `git submodule update --init --recursive` inside `repo_dir`.
pub fn update_submodules(repo_dir: &Path) -> Result<(), Error> {
    info!("updating submodules in {}", repo_dir.display());
    run(repo_dir, &["submodule", "update", "--init", "--recursive"]).map(|_| ())
}

/// The raw URL configured for the `origin` remote of `repo_dir`.
pub fn remote_url(repo_dir: &Path) -> Result<String, Error> {
    run(repo_dir, &["remote", "get-url", "origin"])
}

fn run(dir: &Path, args: &[&str]) -> Result<String, Error> {
    let command = args.join(" ");
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Error::GitCommand {
            command: command.clone(),
            dir: dir.display().to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command,
            dir: dir.display().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
