//! # Error Suggestions
//!
//! This module turns library errors into user-facing messages with hints.
//! Following CLI recommendations, errors should tell users what went wrong
//! AND how to fix it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gito::suggestions;
//!
//! let paths = gito.where_is(&args.repo).map_err(suggestions::explain)?;
//! ```

use std::path::Path;

use crate::error::Error;

/// Attach hints to a library error where gito knows a likely fix.
///
/// Errors without a known remedy are passed through unchanged.
pub fn explain(error: Error) -> anyhow::Error {
    match error {
        Error::NotFound { query } => repo_not_found(&query),
        Error::NotARepository { path } => not_a_repository(Path::new(&path)),
        Error::AlreadyExists { path } => already_exists(Path::new(&path)),
        Error::NoRemoteUrls { query } => no_remote_urls(&query),
        Error::WorkspaceNotFound { name, available } => {
            let available: Vec<&str> = available.iter().map(String::as_str).collect();
            workspace_not_found(&name, &available)
        }
        other => anyhow::Error::new(other),
    }
}

/// Generate an error for a repository that could not be located.
pub fn repo_not_found(query: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "{query:?} not found\n\n\
         hint: Run 'gito get <host>/<owner>/<repo>' to clone it into your workspace\n\
         hint: Use 'gito set {query} <location>' for code living outside your workspace\n\
         hint: Use -w/--workspace to search a different workspace"
    )
}

/// Generate an error for a location that is not a git checkout.
pub fn not_a_repository(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "no repo @ {path:?}\n\n\
         hint: The location must contain a .git entry\n\
         hint: Run 'git init' there first, or point at the checkout's top-level directory",
        path = path.display().to_string()
    )
}

/// Generate an error for a clone destination that is already occupied.
pub fn already_exists(path: &Path) -> anyhow::Error {
    anyhow::anyhow!(
        "something already exists at {path:?}\n\n\
         hint: Use 'gito where' to find the existing checkout\n\
         hint: Remove the directory if you want a fresh clone",
        path = path.display().to_string()
    )
}

/// Generate an error for a lookup where no match has a readable remote.
pub fn no_remote_urls(query: &str) -> anyhow::Error {
    anyhow::anyhow!(
        "no URLs found for {query:?}\n\n\
         hint: gito reads the 'origin' remote; add one with 'git remote add origin <url>'"
    )
}

/// Generate an error for an unknown workspace name.
///
/// Suggests the closest configured workspace when there is one.
pub fn workspace_not_found(name: &str, available: &[&str]) -> anyhow::Error {
    let did_you_mean = find_similar(name, available)
        .map(|s| format!("\nhint: Did you mean '{s}'?"))
        .unwrap_or_default();

    anyhow::anyhow!(
        "workspace {name:?} not found{did_you_mean}\n\n\
         Configured workspaces are: {workspaces}\n\
         hint: Add it under 'workspaces:' in your gito.yaml",
        workspaces = available.join(", ")
    )
}

/// Find a similar string from a list of candidates using edit distance.
///
/// Returns Some(candidate) if a close match is found (edit distance <= 2).
fn find_similar<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .filter_map(|&candidate| {
            let distance = edit_distance(input, candidate);
            if distance <= 2 && distance < input.len() {
                Some((candidate, distance))
            } else {
                None
            }
        })
        .min_by_key(|(_, distance)| *distance)
        .map(|(candidate, _)| candidate)
}

/// Calculate the Levenshtein edit distance between two strings.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0usize; b_len + 1];

    for i in 1..=a_len {
        curr[0] = i;
        for j in 1..=b_len {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}
