//! Wrapper around the INI file collaborator.
//!
//! Enumerates the key/value pairs of the `[wraith]` section and applies the
//! coercion rules the resolver expects: surrounding whitespace is trimmed
//! and booleans are parsed permissively.

use ini::Ini;
use thiserror::Error;

/// Section of the rc file holding the recognized keys.
pub const CONFIG_SECTION: &str = "wraith";

/// Errors raised while reading an rc file.
///
/// The resolution layer treats every variant as "zero overrides"; the type
/// exists so the loader can say why a file contributed nothing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file was read but is not valid INI.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] ini::ParseError),
}

impl From<ini::Error> for ConfigError {
    fn from(err: ini::Error) -> Self {
        match err {
            ini::Error::Io(e) => ConfigError::Io(e),
            ini::Error::Parse(e) => ConfigError::Parse(e),
        }
    }
}

/// Reads the `[wraith]` section of the file at `path` and returns its
/// key/value pairs in file order, with keys and values trimmed.
///
/// Keys outside the section are not returned; an rc file without the
/// section yields an empty set.
pub fn read_settings_keys(path: &str) -> Result<Vec<(String, String)>, ConfigError> {
    let ini = Ini::load_from_file(path)?;

    let mut pairs = Vec::new();
    if let Some(section) = ini.section(Some(CONFIG_SECTION)) {
        for (key, value) in section.iter() {
            pairs.push((key.trim().to_string(), value.trim().to_string()));
        }
    }
    Ok(pairs)
}

/// Permissive boolean coercion: true iff the trimmed, lowercased value is
/// `"true"`, `"1"` or `"yes"`. Everything else, garbled input included,
/// is false.
pub fn as_bool(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "true" | "1" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn truthy_values_coerce_to_true() {
        assert!(as_bool("true"));
        assert!(as_bool("True"));
        assert!(as_bool("YES"));
        assert!(as_bool("1"));
        assert!(as_bool("  yes  "));
    }

    #[test]
    fn everything_else_coerces_to_false() {
        assert!(!as_bool("no"));
        assert!(!as_bool("false"));
        assert!(!as_bool(""));
        assert!(!as_bool("2"));
        assert!(!as_bool("garbled"));
    }

    #[test]
    fn reads_section_keys_in_order() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[wraith]").unwrap();
        writeln!(file, "loadImages = no").unwrap();
        writeln!(file, "proxy = proxy.local:3128").unwrap();

        let pairs = read_settings_keys(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("loadImages".to_string(), "no".to_string()),
                ("proxy".to_string(), "proxy.local:3128".to_string()),
            ]
        );
    }

    #[test]
    fn keys_outside_the_section_are_not_returned() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[other]").unwrap();
        writeln!(file, "loadImages = no").unwrap();

        let pairs = read_settings_keys(file.path().to_str().unwrap()).unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_settings_keys("/nonexistent/.wraithrc").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
