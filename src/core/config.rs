//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tripboard/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::sort::SortType;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TripboardConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_sort: Option<SortType>,
    pub trip_file: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub currency: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "tripboard.log";
pub const DEFAULT_DATE_FORMAT: &str = "%b %d";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";
pub const DEFAULT_CURRENCY: &str = "€";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_sort: SortType,
    /// `None` means "use the built-in sample trip".
    pub trip_file: Option<PathBuf>,
    pub log_file: PathBuf,
    pub display: DisplaySettings,
}

/// Formatting knobs handed to the view components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySettings {
    pub date_format: String,
    pub time_format: String,
    pub currency: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tripboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tripboard").join("config.toml"))
}

/// Load config from `~/.tripboard/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TripboardConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TripboardConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TripboardConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TripboardConfig::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config: TripboardConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Tripboard Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_sort = "day"           # "day", "time" or "price"
# trip_file = "trip.json"        # Relative to ~/.tripboard/ unless absolute
# log_file = "tripboard.log"

# [display]
# date_format = "%b %d"
# time_format = "%H:%M"
# currency = "€"
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

/// Command-line overrides. `None` means the flag was not given.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub trip_file: Option<PathBuf>,
    pub sort: Option<SortType>,
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TripboardConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Sort: CLI → env → config → default
    let requested_sort = cli
        .sort
        .or_else(|| std::env::var("TRIPBOARD_SORT").ok().and_then(|s| parse_sort(&s)))
        .or(config.general.default_sort)
        .unwrap_or_default();
    let default_sort = if requested_sort.is_sortable() {
        requested_sort
    } else {
        warn!(
            "Sort '{}' cannot be a default, falling back to Day",
            requested_sort.label()
        );
        SortType::Day
    };

    // Trip file: CLI → env → config (relative to ~/.tripboard/) → sample trip
    let trip_file = cli
        .trip_file
        .clone()
        .or_else(|| std::env::var("TRIPBOARD_TRIP_FILE").ok().map(PathBuf::from))
        .or_else(|| {
            config
                .general
                .trip_file
                .as_deref()
                .map(|f| relative_to_config_dir(Path::new(f)))
        });

    // Log file: env → config → default
    let log_file = std::env::var("TRIPBOARD_LOG_FILE")
        .ok()
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string())
        .into();

    let defaults = DisplaySettings::default();
    let display = DisplaySettings {
        date_format: config
            .display
            .date_format
            .clone()
            .unwrap_or(defaults.date_format),
        time_format: config
            .display
            .time_format
            .clone()
            .unwrap_or(defaults.time_format),
        currency: config.display.currency.clone().unwrap_or(defaults.currency),
    };

    ResolvedConfig {
        default_sort,
        trip_file,
        log_file,
        display,
    }
}

fn parse_sort(value: &str) -> Option<SortType> {
    let quoted = format!("\"{}\"", value.trim().to_lowercase());
    match serde_json::from_str(&quoted) {
        Ok(sort) => Some(sort),
        Err(_) => {
            warn!("Ignoring unknown sort '{}'", value);
            None
        }
    }
}

fn relative_to_config_dir(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match dirs::home_dir() {
        Some(home) => home.join(".tripboard").join(path),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = TripboardConfig::default();
        assert!(config.general.default_sort.is_none());
        assert!(config.general.trip_file.is_none());
    }

    #[test]
    fn test_resolve_cli_sort_wins() {
        let config = TripboardConfig {
            general: GeneralConfig {
                default_sort: Some(SortType::Time),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            sort: Some(SortType::Price),
            ..Default::default()
        };
        assert_eq!(resolve(&config, &cli).default_sort, SortType::Price);
    }

    #[test]
    fn test_resolve_non_sortable_default_falls_back_to_day() {
        let cli = CliOverrides {
            sort: Some(SortType::Offers),
            ..Default::default()
        };
        let resolved = resolve(&TripboardConfig::default(), &cli);
        assert_eq!(resolved.default_sort, SortType::Day);
    }

    #[test]
    fn test_resolve_display_overrides() {
        let config = TripboardConfig {
            display: DisplayConfig {
                currency: Some("$".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.display.currency, "$");
        assert_eq!(resolved.display.date_format, DEFAULT_DATE_FORMAT);
        assert_eq!(resolved.display.time_format, DEFAULT_TIME_FORMAT);
    }

    #[test]
    fn test_resolve_cli_trip_file_wins() {
        let config = TripboardConfig {
            general: GeneralConfig {
                trip_file: Some("from-config.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            trip_file: Some(PathBuf::from("/tmp/from-cli.json")),
            ..Default::default()
        };
        assert_eq!(
            resolve(&config, &cli).trip_file,
            Some(PathBuf::from("/tmp/from-cli.json"))
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_sort = "price"
trip_file = "alps.json"

[display]
date_format = "%d/%m"
"#;
        let config: TripboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_sort, Some(SortType::Price));
        assert_eq!(config.general.trip_file.as_deref(), Some("alps.json"));
        assert_eq!(config.display.date_format.as_deref(), Some("%d/%m"));
        assert!(config.display.currency.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[display]
currency = "CHF"
"#;
        let config: TripboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.currency.as_deref(), Some("CHF"));
        assert!(config.general.default_sort.is_none());
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let toml_str = r#"
[general]
default_sort = "alphabetical"
"#;
        assert!(toml::from_str::<TripboardConfig>(toml_str).is_err());
    }

    #[test]
    fn test_parse_sort() {
        assert_eq!(parse_sort("Time"), Some(SortType::Time));
        assert_eq!(parse_sort(" price "), Some(SortType::Price));
        assert_eq!(parse_sort("nope"), None);
    }
}
