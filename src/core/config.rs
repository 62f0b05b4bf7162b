//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.pancake/config.toml` (or `$PANCAKE_CONFIG`). If missing
//! on first run, a commented-out default is generated so users can discover
//! all options.
//!
//! Only settings live here. Checklist contents are never written to disk.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PancakeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

/// Palette overrides as hex strings (`"#7C3AED"`) or color names.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub text: Option<String>,
    pub muted: Option<String>,
    pub error: Option<String>,
    pub background: Option<String>,
    pub selection: Option<String>,
    pub title_background: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE_NAME: &str = "pancake.log";

pub const DEFAULT_PRIMARY: &str = "#7C3AED"; // purple
pub const DEFAULT_SECONDARY: &str = "#10B981"; // green
pub const DEFAULT_ACCENT: &str = "#F59E0B"; // orange
pub const DEFAULT_TEXT: &str = "#E5E7EB"; // light gray
pub const DEFAULT_MUTED: &str = "#9CA3AF";
pub const DEFAULT_ERROR: &str = "#EF4444"; // red
pub const DEFAULT_BACKGROUND: &str = "#1F2937";
pub const DEFAULT_SELECTION: &str = "#374151";
pub const DEFAULT_TITLE_BACKGROUND: &str = "#1E1B4B";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

/// Color strings after applying config overrides. Parsed into terminal
/// colors by the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text: String,
    pub muted: String,
    pub error: String,
    pub background: String,
    pub selection: String,
    pub title_background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
            text: DEFAULT_TEXT.to_string(),
            muted: DEFAULT_MUTED.to_string(),
            error: DEFAULT_ERROR.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            selection: DEFAULT_SELECTION.to_string(),
            title_background: DEFAULT_TITLE_BACKGROUND.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub palette: Palette,
    /// Config file the settings came from, `None` when only defaults apply
    pub source: Option<PathBuf>,
    /// Problems found while loading. Config is read before the logger
    /// exists, so these are reported by the caller once it does.
    pub warnings: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&PancakeConfig::default(), |_| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// A parsed config file plus anything worth reporting about it.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    pub config: PancakeConfig,
    pub source: Option<PathBuf>,
    pub warnings: Vec<String>,
}

/// `~/.pancake`, if a home directory exists.
pub fn pancake_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".pancake"))
}

/// Returns `$PANCAKE_CONFIG`, or `~/.pancake/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    std::env::var_os("PANCAKE_CONFIG")
        .map(PathBuf::from)
        .or_else(|| pancake_dir().map(|dir| dir.join("config.toml")))
}

/// Load the config file.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns default settings. If it exists but is malformed, returns
/// `ConfigError::Parse`.
///
/// Runs before logging is set up, so nothing here logs. Problems are
/// returned in `LoadedConfig::warnings` instead.
pub fn load_config() -> Result<LoadedConfig, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(LoadedConfig {
            warnings: vec!["Could not determine home directory, using default config".to_string()],
            ..LoadedConfig::default()
        });
    };

    if !path.exists() {
        let mut loaded = LoadedConfig::default();
        if let Err(e) = generate_default_config(&path) {
            loaded
                .warnings
                .push(format!("Failed to write default config at {}: {e}", path.display()));
        }
        return Ok(loaded);
    }

    Ok(LoadedConfig {
        config: load_config_from(&path)?,
        source: Some(path),
        warnings: Vec::new(),
    })
}

/// Parse the config file at `path`.
pub fn load_config_from(path: &Path) -> Result<PancakeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r##"# pancake configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [general]
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"
# log_file = "/tmp/pancake.log"      # Or set PANCAKE_LOG_FILE env var

# [theme]
# primary = "#7C3AED"
# secondary = "#10B981"
# accent = "#F59E0B"
# text = "#E5E7EB"
# muted = "#9CA3AF"
# error = "#EF4444"
# background = "#1F2937"
# selection = "#374151"
# title_background = "#1E1B4B"
"##;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Load the config file and resolve it against the environment.
///
/// Never fails: a missing or broken file falls back to defaults and the
/// reason lands in `warnings`.
pub fn load_and_resolve() -> ResolvedConfig {
    resolve_loaded(load_config(), |key| std::env::var(key).ok())
}

/// Resolve a load result, folding a load error into a warning.
pub fn resolve_loaded(
    loaded: Result<LoadedConfig, ConfigError>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let loaded = loaded.unwrap_or_else(|e| LoadedConfig {
        warnings: vec![format!("{e}. Using default settings.")],
        ..LoadedConfig::default()
    });
    let mut resolved = resolve_with(&loaded.config, env);
    resolved.source = loaded.source;
    resolved.warnings.splice(0..0, loaded.warnings);
    resolved
}

/// Collapse defaults → config file → env vars, reading env through `env`.
pub fn resolve_with(config: &PancakeConfig, env: impl Fn(&str) -> Option<String>) -> ResolvedConfig {
    let mut warnings = Vec::new();

    // Log level: env → config → default
    let log_level = match env("PANCAKE_LOG_LEVEL").or_else(|| config.general.log_level.clone()) {
        Some(level) => parse_level(&level).unwrap_or_else(|| {
            warnings.push(format!(
                "Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: env → config → ~/.pancake/pancake.log → ./pancake.log
    let log_file = env("PANCAKE_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from)
        .or_else(|| pancake_dir().map(|dir| dir.join(DEFAULT_LOG_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME));

    ResolvedConfig {
        log_level,
        log_file,
        palette: resolve_palette(&config.theme),
        source: None,
        warnings,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(level.trim()).ok()
}

fn resolve_palette(theme: &ThemeConfig) -> Palette {
    let defaults = Palette::default();
    let pick = |value: &Option<String>, default: String| value.clone().unwrap_or(default);
    Palette {
        primary: pick(&theme.primary, defaults.primary),
        secondary: pick(&theme.secondary, defaults.secondary),
        accent: pick(&theme.accent, defaults.accent),
        text: pick(&theme.text, defaults.text),
        muted: pick(&theme.muted, defaults.muted),
        error: pick(&theme.error, defaults.error),
        background: pick(&theme.background, defaults.background),
        selection: pick(&theme.selection, defaults.selection),
        title_background: pick(&theme.title_background, defaults.title_background),
    }
}
