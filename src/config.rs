//! Search configuration and its loading logic
//!
//! Priority: environment variables (`OTHELLO_<KEY>`) > TOML file > built-in
//! defaults. The built-in defaults are the full engine: iterative deepening
//! with a transposition table keyed by symmetry-canonical positions.
//!
//! ```toml
//! mode = "iterative"
//! max_depth = 60
//! time_limit_ms = 1000
//! use_tt = true
//! use_symmetry = true
//! tt_capacity = 200000
//! tt_eviction = "clear"
//! zobrist_seed = 103952449
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::search::{
    ClearOnOverflow, EvictionPolicy, ShallowestFirst, DEFAULT_TT_CAPACITY, DEFAULT_ZOBRIST_SEED,
    MAX_SEARCH_DEPTH,
};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "OTHELLO_CONFIG";

/// Standard locations to search for a config file
pub const CONFIG_SEARCH_PATHS: &[&str] = &["othello.toml"];

/// How the search depth is controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Iterative deepening up to `max_depth`, stopped by the time limit
    #[default]
    Iterative,
    /// One pass at exactly `max_depth`, no time limit
    Fixed,
}

impl FromStr for SearchMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iterative" => Ok(SearchMode::Iterative),
            "fixed" => Ok(SearchMode::Fixed),
            _ => Err(ConfigError::InvalidValue {
                key: "mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Which [`EvictionPolicy`] the transposition table uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvictionKind {
    /// Clear the whole table on overflow
    #[default]
    Clear,
    /// Drop the shallowest entries first
    Shallowest,
}

impl EvictionKind {
    /// Build the policy object.
    #[must_use]
    pub fn policy(self) -> Box<dyn EvictionPolicy> {
        match self {
            EvictionKind::Clear => Box::new(ClearOnOverflow),
            EvictionKind::Shallowest => Box::new(ShallowestFirst),
        }
    }
}

impl FromStr for EvictionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(EvictionKind::Clear),
            "shallowest" => Ok(EvictionKind::Shallowest),
            _ => Err(ConfigError::InvalidValue {
                key: "tt_eviction",
                value: s.to_string(),
            }),
        }
    }
}

/// Named agent configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Iterative deepening, TT, symmetry canonicalization
    #[default]
    Tt,
    /// Fixed depth 10, TT, no canonicalization
    My,
    /// Fixed depth 5, plain alpha-beta
    Ab,
}

impl Preset {
    #[must_use]
    pub fn config(self) -> SearchConfig {
        match self {
            Preset::Tt => SearchConfig::default(),
            Preset::My => SearchConfig {
                mode: SearchMode::Fixed,
                max_depth: 10,
                use_symmetry: false,
                ..SearchConfig::default()
            },
            Preset::Ab => SearchConfig {
                mode: SearchMode::Fixed,
                max_depth: 5,
                use_tt: false,
                use_symmetry: false,
                ..SearchConfig::default()
            },
        }
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tt" => Ok(Preset::Tt),
            "my" => Ok(Preset::My),
            "ab" => Ok(Preset::Ab),
            _ => Err(ConfigError::InvalidValue {
                key: "agent",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Tt => "tt",
            Preset::My => "my",
            Preset::Ab => "ab",
        };
        f.write_str(name)
    }
}

/// Engine search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub mode: SearchMode,
    /// Deepest iteration (iterative) or the exact depth (fixed)
    pub max_depth: i32,
    /// Per-move budget, iterative mode only
    pub time_limit_ms: u64,
    pub use_tt: bool,
    /// Key the table by the canonical symmetric reading; needs `use_tt`
    pub use_symmetry: bool,
    /// Entry count above which the table evicts
    pub tt_capacity: usize,
    pub tt_eviction: EvictionKind,
    /// Seed for the Zobrist feature table
    pub zobrist_seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mode: SearchMode::Iterative,
            max_depth: MAX_SEARCH_DEPTH,
            time_limit_ms: 1000,
            use_tt: true,
            use_symmetry: true,
            tt_capacity: DEFAULT_TT_CAPACITY,
            tt_eviction: EvictionKind::Clear,
            zobrist_seed: DEFAULT_ZOBRIST_SEED,
        }
    }
}

impl SearchConfig {
    /// Clamp values into their working ranges.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.max_depth = self.max_depth.clamp(1, MAX_SEARCH_DEPTH);
        self.time_limit_ms = self.time_limit_ms.max(1);
        self.tt_capacity = self.tt_capacity.max(1);
        self.use_symmetry &= self.use_tt;
        self
    }

    /// Short agent name for logs and match reports.
    #[must_use]
    pub fn nickname(&self) -> &'static str {
        match (self.use_tt, self.mode) {
            (false, _) => "AB",
            (true, SearchMode::Fixed) => "ABTT-FIXED",
            (true, SearchMode::Iterative) => "ABTT",
        }
    }
}

/// Load the configuration.
///
/// Searches for a config file in the following order:
/// 1. Path specified by the `OTHELLO_CONFIG` environment variable
/// 2. `othello.toml` in the current directory
///
/// Environment variable overrides are applied last.
pub fn load_config() -> SearchConfig {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        let path = PathBuf::from(&path);
        if path.exists() {
            info!("Loading config from {}: {}", CONFIG_ENV_VAR, path.display());
            return load_from_path(&path);
        }
        warn!("{}={} not found, searching defaults", CONFIG_ENV_VAR, path.display());
    }

    for path_str in CONFIG_SEARCH_PATHS {
        let path = Path::new(path_str);
        if path.exists() {
            info!("Loading config from {}", path.display());
            return load_from_path(path);
        }
    }

    debug!("No config file found, using built-in defaults");
    apply_env_overrides(SearchConfig::default())
}

/// Load configuration from a specific path, falling back to defaults on error.
pub fn load_from_path(path: &Path) -> SearchConfig {
    match try_load_from_path(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}, using defaults", e);
            apply_env_overrides(SearchConfig::default())
        }
    }
}

/// Load configuration from a specific path.
pub fn try_load_from_path(path: &Path) -> Result<SearchConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(apply_env_overrides(config))
}

/// Parse TOML text without applying environment overrides.
pub fn parse_config(content: &str) -> Result<SearchConfig, toml::de::Error> {
    toml::from_str(content)
}

/// Apply `OTHELLO_<KEY>` environment variable overrides.
pub fn apply_env_overrides(config: SearchConfig) -> SearchConfig {
    apply_overrides_with(config, |key| std::env::var(key).ok())
}

macro_rules! override_field {
    ($config:ident, $lookup:ident, $field:ident, $key:expr) => {
        if let Some(raw) = $lookup($key) {
            match raw.trim().parse() {
                Ok(v) => $config.$field = v,
                Err(_) => warn!("ignoring {}={:?}: not a valid value", $key, raw),
            }
        }
    };
}

/// Apply overrides read through `lookup`; unparseable values are logged and skipped.
pub fn apply_overrides_with<F>(mut config: SearchConfig, lookup: F) -> SearchConfig
where
    F: Fn(&str) -> Option<String>,
{
    override_field!(config, lookup, mode, "OTHELLO_MODE");
    override_field!(config, lookup, max_depth, "OTHELLO_MAX_DEPTH");
    override_field!(config, lookup, time_limit_ms, "OTHELLO_TIME_LIMIT_MS");
    override_field!(config, lookup, use_tt, "OTHELLO_USE_TT");
    override_field!(config, lookup, use_symmetry, "OTHELLO_USE_SYMMETRY");
    override_field!(config, lookup, tt_capacity, "OTHELLO_TT_CAPACITY");
    override_field!(config, lookup, tt_eviction, "OTHELLO_TT_EVICTION");
    override_field!(config, lookup, zobrist_seed, "OTHELLO_ZOBRIST_SEED");
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_the_full_engine() {
        let config = SearchConfig::default();
        assert_eq!(config.mode, SearchMode::Iterative);
        assert_eq!(config.max_depth, 60);
        assert_eq!(config.tt_capacity, 200_000);
        assert_eq!(config.zobrist_seed, 0x0632_3041);
        assert!(config.use_tt && config.use_symmetry);
        assert_eq!(config.nickname(), "ABTT");
    }

    #[test]
    fn test_presets() {
        let my = Preset::My.config();
        assert_eq!((my.mode, my.max_depth), (SearchMode::Fixed, 10));
        assert!(my.use_tt && !my.use_symmetry);
        assert_eq!(my.nickname(), "ABTT-FIXED");

        let ab = Preset::Ab.config();
        assert_eq!((ab.mode, ab.max_depth), (SearchMode::Fixed, 5));
        assert!(!ab.use_tt);
        assert_eq!(ab.nickname(), "AB");

        assert_eq!(Preset::Tt.config(), SearchConfig::default());
        assert_eq!("AB".parse::<Preset>().ok(), Some(Preset::Ab));
        assert!("xyz".parse::<Preset>().is_err());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = parse_config("mode = \"fixed\"\nmax_depth = 7\ntt_eviction = \"shallowest\"\n").unwrap();
        assert_eq!(config.mode, SearchMode::Fixed);
        assert_eq!(config.max_depth, 7);
        assert_eq!(config.tt_eviction, EvictionKind::Shallowest);
        // Unspecified fields keep their defaults.
        assert_eq!(config.time_limit_ms, 1000);
        assert!(config.use_tt);
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(parse_config("mode = \"sideways\"").is_err());
        assert!(parse_config("max_depth = ").is_err());
    }

    #[test]
    fn test_env_overrides_win() {
        let lookup = lookup_from(&[
            ("OTHELLO_MODE", "fixed"),
            ("OTHELLO_TIME_LIMIT_MS", "250"),
            ("OTHELLO_USE_SYMMETRY", "false"),
            ("OTHELLO_ZOBRIST_SEED", "42"),
        ]);
        let config = apply_overrides_with(SearchConfig::default(), lookup);
        assert_eq!(config.mode, SearchMode::Fixed);
        assert_eq!(config.time_limit_ms, 250);
        assert!(!config.use_symmetry);
        assert_eq!(config.zobrist_seed, 42);
        assert_eq!(config.max_depth, 60);
    }

    #[test]
    fn test_invalid_env_value_is_ignored() {
        let lookup = lookup_from(&[("OTHELLO_MAX_DEPTH", "deep"), ("OTHELLO_TT_EVICTION", "lru")]);
        let config = apply_overrides_with(SearchConfig::default(), lookup);
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_normalized_clamps() {
        let config = SearchConfig {
            max_depth: 0,
            time_limit_ms: 0,
            use_tt: false,
            use_symmetry: true,
            ..SearchConfig::default()
        }
        .normalized();
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.time_limit_ms, 1);
        assert!(!config.use_symmetry);

        let deep = SearchConfig {
            max_depth: 99,
            ..SearchConfig::default()
        };
        assert_eq!(deep.normalized().max_depth, 60);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = try_load_from_path(Path::new("/nonexistent/othello.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("othello-config-test-{}.toml", std::process::id()));
        std::fs::write(&path, "max_depth = 12\nuse_tt = false\n").unwrap();
        let config = try_load_from_path(&path);
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.max_depth, 12);
        assert!(!config.use_tt);
    }
}
