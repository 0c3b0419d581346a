//! Locations of the wraith rc files.
//!
//! Two INI files are consulted during resolution: a global one in the user's
//! home directory and a local one in the current working directory, both
//! named [`CONFIG_FILE_NAME`]. Paths are carried as plain strings with
//! forward-slash separators, matching how they are reported to the user.

use std::env;
use std::path::MAIN_SEPARATOR;

/// Name of the rc file looked up in both the home directory and the cwd.
pub const CONFIG_FILE_NAME: &str = ".wraithrc";

/// Path of the global rc file: `<home>/.wraithrc`.
///
/// Falls back to the bare file name when no home directory can be
/// determined.
pub fn global_config_file() -> String {
    let home = home::home_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    join_paths(&home, CONFIG_FILE_NAME)
}

/// Path of the local rc file: `<cwd>/.wraithrc`.
pub fn local_config_file() -> String {
    let cwd = env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    join_paths(&cwd, CONFIG_FILE_NAME)
}

/// Joins two path segments with exactly one separator.
///
/// If either side is empty the other is returned unmodified, so a blank
/// base never produces a leading or trailing separator. The result is
/// normalized to forward slashes.
pub fn join_paths(path1: &str, path2: &str) -> String {
    let joined = if path1.is_empty() {
        path2.to_string()
    } else if path2.is_empty() {
        path1.to_string()
    } else {
        format!("{}{}{}", path1, MAIN_SEPARATOR, path2)
    };
    normalize_path(&joined)
}

/// Converts native separators to forward slashes.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_inserts_single_separator() {
        assert_eq!(join_paths("/home/user", ".wraithrc"), "/home/user/.wraithrc");
    }

    #[test]
    fn join_with_empty_base_returns_filename() {
        assert_eq!(join_paths("", ".wraithrc"), ".wraithrc");
    }

    #[test]
    fn join_with_empty_filename_returns_base() {
        assert_eq!(join_paths("/home/user", ""), "/home/user");
    }

    #[test]
    fn join_with_both_empty_is_empty() {
        assert_eq!(join_paths("", ""), "");
    }

    #[test]
    fn normalize_converts_backslashes() {
        assert_eq!(normalize_path(r"C:\Users\user"), "C:/Users/user");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn global_config_file_ends_with_rc_name() {
        assert!(global_config_file().ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn local_config_file_ends_with_rc_name() {
        assert!(local_config_file().ends_with(CONFIG_FILE_NAME));
    }
}
