//! Configuration types for eximtw.
//!
//! [`Config::load`] layers `$XDG_CONFIG_HOME/eximtw/config.toml` (or
//! `~/.config/eximtw/config.toml`; skipped when neither variable is set) and
//! an optional explicit file on top of the hardcoded defaults. [`Config::defaults`]
//! returns the same defaults without touching the filesystem (useful in tests).

use anyhow::Context;
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::render::{Format, Mode};
use crate::timestamp::Zone;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[output]
mode          = "relay"
format        = "tsv"
line_buffered = false

[input]
timezone     = "local"
on_malformed = "warn"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub input: InputConfig,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub format: Format,
    /// Flush after every record instead of when the buffer fills.
    #[serde(default)]
    pub line_buffered: bool,
}

/// `[input]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub timezone: Zone,
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

/// What to do with a line that carries a marker but too few fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop it, logging at debug level only.
    Skip,
    /// Drop it and log a warning.
    #[default]
    Warn,
    /// Stop the conversion with an error.
    Abort,
}

impl Config {
    /// Load the user config file (if present) and then `extra` (which must
    /// exist when given), layered on top of the built-in defaults.
    pub fn load(extra: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(config_path().as_deref(), extra)
    }

    /// Like [`Config::load`], with the user file at `user` instead of the
    /// XDG location. `None` skips the user layer.
    pub fn load_from(user: Option<&Path>, extra: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));
        if let Some(path) = user {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .with_context(|| match extra {
                Some(path) => format!("loading config from {}", path.display()),
                None => "loading config".to_string(),
            })
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .and_then(config::Config::try_deserialize)
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> Option<PathBuf> {
    config_path_from(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME"))
}

/// `$XDG_CONFIG_HOME/eximtw/config.toml`, falling back to `$HOME/.config`.
/// Empty variables count as unset.
fn config_path_from(xdg: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = match (xdg.filter(|v| !v.is_empty()), home.filter(|v| !v.is_empty())) {
        (Some(xdg), _) => PathBuf::from(xdg),
        (None, Some(home)) => PathBuf::from(home).join(".config"),
        (None, None) => return None,
    };
    Some(base.join("eximtw").join("config.toml"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
