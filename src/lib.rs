//! # Wraith
//!
//! Headless browser scripting tool. This crate holds the process-wide
//! configuration subsystem: a fixed set of typed settings resolved from
//! defaults, two optional rc files, and the CLI argument list.
//!
//! ## Resolution order
//!
//! 1. Documented defaults
//! 2. Global rc file (`~/.wraithrc`, INI format, `[wraith]` section)
//! 3. Local rc file (`./.wraithrc`)
//! 4. CLI arguments
//!
//! Later sources override earlier ones field-by-field. See
//! [`config::Settings`] for the full field list and the flag grammar.
//!
//! ```rust
//! use wraith::config::Settings;
//!
//! let mut settings = Settings::new();
//! settings.apply_args(["--disk-cache=yes", "job.js", "--for-the-script"]);
//!
//! assert!(settings.disk_cache_enabled());
//! assert_eq!(settings.script_file(), "job.js");
//! ```

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Full version string with name
pub const FULL_VERSION: &str = concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Configuration resolution from defaults, rc files, and CLI arguments.
pub mod config;

pub use config::{ArgOutcome, ConfigError, Settings};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert!(!VERSION.is_empty());
        assert!(!NAME.is_empty());
        assert!(FULL_VERSION.contains(VERSION));
        assert!(FULL_VERSION.contains(NAME));
    }
}
