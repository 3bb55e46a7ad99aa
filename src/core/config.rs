//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tally/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TallyConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub decimal_places: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DECIMAL_PLACES: usize = 4;
pub const MAX_DECIMAL_PLACES: usize = 17;
pub const DEFAULT_LOG_FILE: &str = "tally.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub decimal_places: usize,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Problems found while resolving. Logged by `emit_notes` once the
    /// logger exists, since the log file is itself a config value.
    pub notes: Vec<Note>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            decimal_places: DEFAULT_DECIMAL_PLACES,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            log_level: DEFAULT_LOG_LEVEL,
            notes: Vec::new(),
        }
    }
}

/// A startup message held back until logging is initialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Note {
    Info(String),
    Warn(String),
}

pub fn emit_notes(notes: &[Note]) {
    for note in notes {
        match note {
            Note::Info(message) => info!("{}", message),
            Note::Warn(message) => warn!("{}", message),
        }
    }
}

/// Values given on the command line. `None` = flag not specified.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub decimal_places: Option<usize>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tally/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tally").join("config.toml"))
}

/// Load config from `~/.tally/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TallyConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`. Messages go to `notes`.
pub fn load_config(notes: &mut Vec<Note>) -> Result<TallyConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            notes.push(Note::Warn(
                "Could not determine home directory, using default config".to_string(),
            ));
            return Ok(TallyConfig::default());
        }
    };

    if !path.exists() {
        notes.push(Note::Info(format!(
            "No config file found, generating default at {}",
            path.display()
        )));
        generate_default_config(&path, notes);
        return Ok(TallyConfig::default());
    }

    let config = load_config_from(&path)?;
    notes.push(Note::Info(format!("Loaded config from {}", path.display())));
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<TallyConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Tally Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [display]
# decimal_places = 4                 # Or set TALLY_DECIMAL_PLACES; max 17

# [logging]
# file = "tally.log"                 # Or set TALLY_LOG_FILE
# level = "debug"                    # "off", "error", "warn", "info", "debug", "trace"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notes: &mut Vec<Note>) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notes.push(Note::Warn(format!("Failed to create config directory: {e}")));
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        notes.push(Note::Warn(format!("Failed to write default config: {e}")));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TallyConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, with the environment lookup injected.
pub fn resolve_with_env(
    config: &TallyConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut notes = Vec::new();

    // Decimal places: CLI → env → config → default
    let decimal_places = cli
        .decimal_places
        .or_else(|| {
            env("TALLY_DECIMAL_PLACES").and_then(|v| match v.trim().parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    notes.push(Note::Warn(format!(
                        "Ignoring TALLY_DECIMAL_PLACES={v:?}: not a number"
                    )));
                    None
                }
            })
        })
        .or(config.display.decimal_places)
        .unwrap_or(DEFAULT_DECIMAL_PLACES);

    let decimal_places = if decimal_places > MAX_DECIMAL_PLACES {
        notes.push(Note::Warn(format!(
            "decimal_places {decimal_places} exceeds {MAX_DECIMAL_PLACES}, clamping"
        )));
        MAX_DECIMAL_PLACES
    } else {
        decimal_places
    };

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("TALLY_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default
    let log_level = env("TALLY_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .map(|level| parse_level(&level, &mut notes))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        decimal_places,
        log_file,
        log_level,
        notes,
    }
}

fn parse_level(level: &str, notes: &mut Vec<Note>) -> LevelFilter {
    level.trim().parse().unwrap_or_else(|_| {
        notes.push(Note::Warn(format!(
            "Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"
        )));
        DEFAULT_LOG_LEVEL
    })
}
