//! The settings record and the layered resolution engine.
//!
//! A [`Settings`] value starts from documented defaults and is mutated in
//! place by three override passes in fixed order: the global rc file, the
//! local rc file, then the CLI arguments. Later passes win field-by-field.
//! After [`Settings::init`] returns the record is treated as read-only by
//! the rest of the process.

use std::io::ErrorKind;

use tracing::{debug, warn};

use super::ini::{self, ConfigError};
use super::paths;

const DEFAULT_PROXY_PORT: u16 = 1080;
const DEFAULT_ENCODING: &str = "UTF-8";

/// Disposition of one CLI token during the argument scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgOutcome {
    /// Recognized flag; keep scanning.
    Continue,
    /// First bare token; it becomes the script file and ends flag parsing.
    Script,
    /// `--version`; no further tokens are consumed.
    Version,
    /// Unrecognized `--` token; no further tokens are consumed.
    Unknown,
}

/// Boolean-valued long flags and the setters they drive.
const BOOL_FLAGS: &[(&str, fn(&mut Settings, bool))] = &[
    ("--load-images", Settings::set_auto_load_images),
    ("--load-plugins", Settings::set_plugins_enabled),
    ("--disk-cache", Settings::set_disk_cache_enabled),
    ("--ignore-ssl-errors", Settings::set_ignore_ssl_errors),
    ("--local-access-remote", Settings::set_local_access_remote),
];

/// Process-wide configuration for the wraith tool.
///
/// # Example
///
/// ```rust
/// use wraith::config::Settings;
///
/// let mut settings = Settings::new();
/// settings.apply_args(["--load-images=no", "run.js", "--flag-for-script"]);
///
/// assert!(!settings.auto_load_images());
/// assert_eq!(settings.script_file(), "run.js");
/// assert_eq!(settings.script_args(), ["--flag-for-script"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    auto_load_images: bool,
    cookie_file: String,
    disk_cache_enabled: bool,
    ignore_ssl_errors: bool,
    local_access_remote: bool,
    output_encoding: String,
    plugins_enabled: bool,
    proxy_host: String,
    proxy_port: u16,
    script_args: Vec<String>,
    script_encoding: String,
    script_file: String,
    unknown_option: String,
    version_flag: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_load_images: true,
            cookie_file: String::new(),
            disk_cache_enabled: false,
            ignore_ssl_errors: false,
            local_access_remote: false,
            output_encoding: DEFAULT_ENCODING.to_string(),
            plugins_enabled: false,
            proxy_host: String::new(),
            proxy_port: DEFAULT_PROXY_PORT,
            script_args: Vec::new(),
            script_encoding: DEFAULT_ENCODING.to_string(),
            script_file: String::new(),
            unknown_option: String::new(),
            version_flag: false,
        }
    }
}

impl Settings {
    /// Creates a record holding the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores every field to its default. Idempotent; callable at any
    /// time to discard prior state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Full resolution: defaults, then the global rc file, then the local
    /// rc file, then the CLI arguments.
    pub fn init<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reset();

        // Local rc file overrides the global one; CLI overrides both.
        self.apply_ini_file(&paths::global_config_file());
        self.apply_ini_file(&paths::local_config_file());

        self.apply_args(args);
    }

    /// Applies overrides from one rc file.
    ///
    /// A missing file contributes zero overrides; so does an unreadable or
    /// unparseable one, after a logged warning. Unknown keys are skipped
    /// for forward compatibility.
    pub fn apply_ini_file(&mut self, path: &str) {
        let pairs = match ini::read_settings_keys(path) {
            Ok(pairs) => pairs,
            Err(ConfigError::Io(err)) if err.kind() == ErrorKind::NotFound => return,
            Err(err) => {
                warn!(path, error = %err, "rc file skipped");
                return;
            }
        };

        debug!(path, keys = pairs.len(), "applying rc file overrides");
        for (key, value) in pairs {
            match key.as_str() {
                "loadImages" => self.auto_load_images = ini::as_bool(&value),
                "loadPlugins" => self.plugins_enabled = ini::as_bool(&value),
                "proxy" => self.set_proxy(&value),
                "diskCache" => self.disk_cache_enabled = ini::as_bool(&value),
                "ignoreSslErrors" => self.ignore_ssl_errors = ini::as_bool(&value),
                "localAccessRemote" => self.local_access_remote = ini::as_bool(&value),
                "cookies" => self.set_cookie_file(&value),
                "outputEncoding" => self.set_output_encoding(&value),
                "scriptEncoding" => self.set_script_encoding(&value),
                _ => {}
            }
        }
    }

    /// Scans CLI tokens left to right.
    ///
    /// Flags are only recognized until the first bare token; that token
    /// becomes the script file and everything after it, flag-shaped or
    /// not, is passed through verbatim as script arguments. `--version`
    /// and unknown options stop the scan immediately.
    pub fn apply_args<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match self.apply_arg(arg) {
                ArgOutcome::Continue => {}
                ArgOutcome::Version | ArgOutcome::Unknown => return,
                ArgOutcome::Script => {
                    self.script_file = arg.to_string();
                    self.script_args
                        .extend(args.map(|a| a.as_ref().to_string()));
                    return;
                }
            }
        }
    }

    /// Classifies and applies a single token, reporting how the scan
    /// should proceed.
    pub fn apply_arg(&mut self, arg: &str) -> ArgOutcome {
        if !arg.starts_with("--") {
            return ArgOutcome::Script;
        }
        if arg == "--version" {
            self.version_flag = true;
            return ArgOutcome::Version;
        }

        let Some((name, value)) = arg.split_once('=') else {
            return self.reject(arg);
        };

        if let Some((_, set)) = BOOL_FLAGS.iter().find(|(flag, _)| *flag == name) {
            return match value {
                "yes" => {
                    set(self, true);
                    ArgOutcome::Continue
                }
                "no" => {
                    set(self, false);
                    ArgOutcome::Continue
                }
                _ => self.reject(arg),
            };
        }

        match name {
            "--proxy" => self.set_proxy(value.trim()),
            "--cookies" => self.set_cookie_file(value.trim()),
            "--output-encoding" => self.set_output_encoding(value.trim()),
            "--script-encoding" => self.set_script_encoding(value.trim()),
            _ => return self.reject(arg),
        }
        ArgOutcome::Continue
    }

    fn reject(&mut self, arg: &str) -> ArgOutcome {
        self.unknown_option = format!("Unknown option '{arg}'");
        ArgOutcome::Unknown
    }

    /// Sets the proxy host and port from a single `host[:port]` value.
    ///
    /// The value is split at the last colon only when that colon is past
    /// the first character and the suffix parses as a port number. Without
    /// such a suffix the whole trimmed value becomes the host and the
    /// previously resolved port is kept.
    pub fn set_proxy(&mut self, value: &str) {
        let value = value.trim();

        if let Some(pos) = value.rfind(':') {
            if pos > 0 {
                if let Ok(port) = value[pos + 1..].parse::<u16>() {
                    self.proxy_host = value[..pos].trim().to_string();
                    self.proxy_port = port;
                    return;
                }
            }
        }
        self.proxy_host = value.to_string();
    }

    pub fn auto_load_images(&self) -> bool {
        self.auto_load_images
    }

    pub fn set_auto_load_images(&mut self, value: bool) {
        self.auto_load_images = value;
    }

    pub fn cookie_file(&self) -> &str {
        &self.cookie_file
    }

    pub fn set_cookie_file(&mut self, value: &str) {
        self.cookie_file = value.to_string();
    }

    pub fn disk_cache_enabled(&self) -> bool {
        self.disk_cache_enabled
    }

    pub fn set_disk_cache_enabled(&mut self, value: bool) {
        self.disk_cache_enabled = value;
    }

    pub fn ignore_ssl_errors(&self) -> bool {
        self.ignore_ssl_errors
    }

    pub fn set_ignore_ssl_errors(&mut self, value: bool) {
        self.ignore_ssl_errors = value;
    }

    pub fn local_access_remote(&self) -> bool {
        self.local_access_remote
    }

    pub fn set_local_access_remote(&mut self, value: bool) {
        self.local_access_remote = value;
    }

    pub fn output_encoding(&self) -> &str {
        &self.output_encoding
    }

    /// Sets the terminal output encoding. An empty value keeps the
    /// current one.
    pub fn set_output_encoding(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        self.output_encoding = value.to_string();
    }

    pub fn plugins_enabled(&self) -> bool {
        self.plugins_enabled
    }

    pub fn set_plugins_enabled(&mut self, value: bool) {
        self.plugins_enabled = value;
    }

    pub fn proxy_host(&self) -> &str {
        &self.proxy_host
    }

    pub fn proxy_port(&self) -> u16 {
        self.proxy_port
    }

    pub fn script_args(&self) -> &[String] {
        &self.script_args
    }

    pub fn set_script_args(&mut self, value: Vec<String>) {
        self.script_args = value;
    }

    pub fn script_encoding(&self) -> &str {
        &self.script_encoding
    }

    /// Sets the script file encoding. An empty value keeps the current
    /// one.
    pub fn set_script_encoding(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        self.script_encoding = value.to_string();
    }

    pub fn script_file(&self) -> &str {
        &self.script_file
    }

    pub fn set_script_file(&mut self, value: &str) {
        self.script_file = value.to_string();
    }

    /// Message describing the first unrecognized `--` flag, or an empty
    /// string when every token was understood.
    pub fn unknown_option(&self) -> &str {
        &self.unknown_option
    }

    pub fn set_unknown_option(&mut self, value: &str) {
        self.unknown_option = value.to_string();
    }

    pub fn version_flag(&self) -> bool {
        self.version_flag
    }

    pub fn set_version_flag(&mut self, value: bool) {
        self.version_flag = value;
    }
}
