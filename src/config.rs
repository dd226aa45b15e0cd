//! # Configuration
//!
//! Settings live in a TOML file:
//!
//! ```toml
//! [printer]
//! ip_address = "192.168.1.100"
//! chars_per_line = 32
//! enable_special_letters = false
//!
//! [server]
//! listen = "0.0.0.0:5555"
//! ```
//!
//! Every key is optional. [`FileSettings`] re-reads the file on each access,
//! so edits made by `tp set-ip`, `tp settings` or the web form apply to the
//! next job without a restart.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, TpError};
use crate::template::{DEFAULT_CHARS_PER_LINE, DEFAULT_SPECIAL_LETTERS, RenderSettings, SettingsSource};

/// File used when neither `--config` nor `TP_CONFIG` is given.
pub const DEFAULT_CONFIG_FILE: &str = "tp_config.toml";

/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "TP_CONFIG";

pub const DEFAULT_LISTEN: &str = "0.0.0.0:5555";

/// Everything stored in the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub printer: PrinterSettings,
    pub server: ServerSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterSettings {
    /// Printer address, `host` or `host:port`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,

    /// Characters per printed line
    pub chars_per_line: usize,

    /// Print Polish letters as-is instead of stripping their accents
    pub enable_special_letters: bool,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        Self {
            ip_address: None,
            chars_per_line: DEFAULT_CHARS_PER_LINE,
            enable_special_letters: DEFAULT_SPECIAL_LETTERS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address the web adapter binds to
    pub listen: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: DEFAULT_LISTEN.to_string(),
        }
    }
}

impl Settings {
    /// The configured printer address.
    pub fn printer_address(&self) -> Result<&str> {
        match self.printer.ip_address.as_deref().map(str::trim) {
            Some(addr) if !addr.is_empty() => Ok(addr),
            _ => Err(TpError::Config("Printer IP address not set".to_string())),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.printer.chars_per_line == 0 {
            return Err(TpError::Config(
                "chars_per_line must be a positive integer".to_string(),
            ));
        }
        Ok(())
    }

    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            chars_per_line: self.printer.chars_per_line,
            special_letters_enabled: self.printer.enable_special_letters,
        }
    }
}

/// Config path from `TP_CONFIG`, or [`DEFAULT_CONFIG_FILE`].
pub fn default_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load settings from a TOML file.
pub fn load(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path).map_err(|e| {
        TpError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

/// Load settings, treating a missing file as all defaults.
pub fn load_or_default(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    load(path)
}

/// Save settings to a TOML file.
pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(settings)?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, toml)?;
    Ok(())
}

/// Parse a boolean setting: `true`/`yes`/`1` or `false`/`no`/`0`, any case.
pub fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(TpError::Config(format!(
            "Invalid boolean value '{}', expected true/false, yes/no or 1/0",
            other
        ))),
    }
}

// ============================================================================
// FILE-BACKED SETTINGS SOURCE
// ============================================================================

/// [`SettingsSource`] that reads the config file on every call.
#[derive(Debug, Clone)]
pub struct FileSettings {
    path: PathBuf,
}

impl FileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current settings; a broken file is logged and read as defaults.
    pub fn current(&self) -> Settings {
        match load_or_default(&self.path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Using default settings");
                Settings::default()
            }
        }
    }
}

impl SettingsSource for FileSettings {
    fn chars_per_line(&self) -> usize {
        self.current().printer.chars_per_line
    }

    fn special_letters_enabled(&self) -> bool {
        self.current().printer.enable_special_letters
    }

    fn snapshot(&self) -> RenderSettings {
        self.current().render_settings()
    }
}
