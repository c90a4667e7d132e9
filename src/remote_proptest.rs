//! Property-based tests for remote address normalization.
//!
//! Inputs are built from realistic hosts and path segments so the properties
//! cover every remote spelling gito accepts.

#[cfg(test)]
mod proptest_tests {
    use crate::remote::{clone_url, extract_url, repo_identifier};
    use proptest::prelude::*;

    fn host() -> impl Strategy<Value = String> {
        "[a-z]{1,10}\\.[a-z]{2,5}"
    }

    fn repo_path() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-zA-Z0-9_-]{1,12}", 1..4).prop_map(|segments| segments.join("/"))
    }

    fn remote() -> impl Strategy<Value = String> {
        (host(), repo_path(), 0..5usize, any::<bool>()).prop_map(|(host, path, form, suffix)| {
            let suffix = if suffix { ".git" } else { "" };
            match form {
                0 => format!("git@{host}:{path}{suffix}"),
                1 => format!("ssh://git@{host}:2222/{path}{suffix}"),
                2 => format!("https://{host}/{path}{suffix}"),
                3 => format!("http://user:token@{host}/{path}{suffix}"),
                _ => format!("{host}/{path}"),
            }
        })
    }

    proptest! {
        /// Property: normalizing a normalized URL changes nothing
        #[test]
        fn extract_url_is_idempotent(raw in remote()) {
            let once = extract_url(&raw);
            let twice = extract_url(&once);
            prop_assert_eq!(once, twice);
        }

        /// Property: output is always an https URL without a .git suffix
        #[test]
        fn extract_url_is_canonical(raw in remote()) {
            let url = extract_url(&raw);
            prop_assert!(url.starts_with("https://"), "got {}", url);
            prop_assert!(!url.ends_with(".git"), "got {}", url);
            prop_assert!(!url.contains('@'), "credentials leaked into {}", url);
        }

        /// Property: SSH shorthand and HTTPS spellings of a remote agree
        #[test]
        fn ssh_and_https_forms_agree(host in host(), path in repo_path()) {
            let ssh = extract_url(&format!("git@{host}:{path}.git"));
            let https = extract_url(&format!("https://{host}/{path}"));
            prop_assert_eq!(ssh, https);
        }

        /// Property: a bare host/path identifier maps to itself
        #[test]
        fn repo_identifier_preserves_identifiers(host in host(), path in repo_path()) {
            let identifier = format!("{host}/{path}");
            prop_assert_eq!(repo_identifier(&identifier).unwrap(), identifier);
        }

        /// Property: the clone URL of an identifier normalizes back to it
        #[test]
        fn clone_url_round_trips_through_identifier(host in host(), path in repo_path()) {
            let identifier = format!("{host}/{path}");
            let url = clone_url(&identifier);
            prop_assert_eq!(repo_identifier(&url).unwrap(), identifier);
        }
    }
}
