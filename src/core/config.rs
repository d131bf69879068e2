//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.river-escape/config.toml`. If missing on first run, a
//! commented-out default is generated so players can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::rules::Difficulty;
use crate::core::state::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    #[serde(default)]
    pub game: GameSection,
    #[serde(default)]
    pub timing: TimingSection,
    #[serde(default)]
    pub display: DisplaySection,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameSection {
    pub difficulty: Option<Difficulty>,
    pub show_hints: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TimingSection {
    pub solver_step_ms: Option<u64>,
    pub judge_delay_ms: Option<u64>,
    pub toast_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplaySection {
    pub theme: Option<Theme>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_SOLVER_STEP_MS: u64 = 1200;
/// Matches the boat's crossing time before the landing is judged.
pub const DEFAULT_JUDGE_DELAY_MS: u64 = 1000;
pub const DEFAULT_TOAST_MS: u64 = 3000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub difficulty: Difficulty,
    pub show_hints: bool,
    pub theme: Theme,
    pub solver_step_ms: u64,
    pub judge_delay_ms: u64,
    pub toast_ms: u64,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub difficulty: Option<Difficulty>,
    pub theme: Option<Theme>,
    pub show_hints: bool,
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

/// Returns the path to `~/.river-escape/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".river-escape").join("config.toml"))
}

/// Load config from `~/.river-escape/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GameConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GameConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GameConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<GameConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GameConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GameConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# River Escape Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [game]
# difficulty = "easy"        # "easy" (15 moves) or "hard" (11 moves)
# show_hints = false

# [timing]
# solver_step_ms = 1200      # Delay between auto-solve steps
# judge_delay_ms = 1000      # Boat crossing time before a landing is judged (0 = instant)
# toast_ms = 3000            # How long notifications stay on screen

# [display]
# theme = "light"            # "light" or "dark"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GameConfig, cli: CliOverrides) -> ResolvedConfig {
    // Difficulty: CLI → env → config → default
    let difficulty = cli
        .difficulty
        .or_else(|| env_enum("RIVER_ESCAPE_DIFFICULTY"))
        .or(config.game.difficulty)
        .unwrap_or_default();

    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| env_enum("RIVER_ESCAPE_THEME"))
        .or(config.display.theme)
        .unwrap_or_default();

    // Hints: the CLI flag can only switch them on
    let show_hints = cli.show_hints || config.game.show_hints.unwrap_or(false);

    ResolvedConfig {
        difficulty,
        show_hints,
        theme,
        solver_step_ms: config
            .timing
            .solver_step_ms
            .unwrap_or(DEFAULT_SOLVER_STEP_MS),
        judge_delay_ms: config
            .timing
            .judge_delay_ms
            .unwrap_or(DEFAULT_JUDGE_DELAY_MS),
        toast_ms: config.timing.toast_ms.unwrap_or(DEFAULT_TOAST_MS),
    }
}

/// Reads an env var holding an enum name, ignoring bad values.
fn env_enum<T: ValueEnum>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    let value = parse_enum(&raw);
    if value.is_none() {
        warn!("Ignoring {}={:?}: not a recognized value", key, raw);
    }
    value
}

/// Case-insensitive match against the enum's CLI names.
fn parse_enum<T: ValueEnum>(raw: &str) -> Option<T> {
    T::from_str(raw.trim(), true).ok()
}
