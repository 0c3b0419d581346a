//! Layered configuration resolution for wraith.
//!
//! Settings start from documented defaults and are overridden by three
//! sources in fixed order:
//! 1. the global rc file (`~/.wraithrc`)
//! 2. the local rc file (`./.wraithrc`)
//! 3. CLI arguments
//!
//! Later sources win field-by-field. Resolution never fails: malformed
//! booleans coerce to false, malformed proxy ports leave the port alone,
//! and missing rc files contribute nothing. The two conditions the host
//! must react to, a `--version` request and an unrecognized flag, are
//! surfaced as fields of [`Settings`] rather than errors.
//!
//! # Example
//!
//! ```rust
//! use wraith::config::Settings;
//!
//! let mut settings = Settings::new();
//! settings.init(std::env::args().skip(1));
//!
//! if settings.version_flag() {
//!     // print version and exit
//! }
//! ```

mod ini;
mod paths;
mod settings;

pub use ini::{ConfigError, CONFIG_SECTION};
pub use paths::{global_config_file, join_paths, local_config_file, CONFIG_FILE_NAME};
pub use settings::{ArgOutcome, Settings};
