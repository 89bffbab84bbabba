//! Runtime configuration for the model viewer.
//!
//! Every setting has a default equal to the service's fixed constants, so an
//! empty environment reproduces the stock behavior. Overrides come from the
//! process environment (optionally seeded from a `.env` file).

use std::env;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_MODEL_PATH: &str = "model_aug_best.safetensors";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

pub const ENV_MODEL_PATH: &str = "MODEL_VIEWER_MODEL_PATH";
pub const ENV_BIND_ADDR: &str = "MODEL_VIEWER_BIND_ADDR";
pub const ENV_STATUS_MODE: &str = "MODEL_VIEWER_STATUS_MODE";

// ─────────────────────────────────────────────────────────────────────────────
// Error
// ─────────────────────────────────────────────────────────────────────────────

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("Unknown status mode {0:?} (expected \"parity\" or \"strict\")")]
    StatusMode(String),

    #[error("Model path must not be empty")]
    EmptyModelPath,
}

// ─────────────────────────────────────────────────────────────────────────────
// Status Mode
// ─────────────────────────────────────────────────────────────────────────────

/// How the status endpoint relates to the model handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMode {
    /// Always answer with the confirmation, loaded or not.
    #[default]
    Parity,
    /// Answer 503 when the model failed to load.
    Strict,
}

impl FromStr for StatusMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "parity" => Ok(StatusMode::Parity),
            "strict" => Ok(StatusMode::Strict),
            _ => Err(ConfigError::StatusMode(s.to_string())),
        }
    }
}

impl fmt::Display for StatusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMode::Parity => f.write_str("parity"),
            StatusMode::Strict => f.write_str("strict"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Viewer Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub model_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub status_mode: StatusMode,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            status_mode: StatusMode::Parity,
        }
    }
}

impl ViewerConfig {
    /// Loads `.env` if present, then reads overrides from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys fall back to
    /// the defaults, as do blank bind address and status mode values; a blank
    /// model path is rejected with [`ConfigError::EmptyModelPath`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_MODEL_PATH) {
            if path.trim().is_empty() {
                return Err(ConfigError::EmptyModelPath);
            }
            config.model_path = PathBuf::from(path);
        }

        if let Some(addr) = get(ENV_BIND_ADDR) {
            config.bind_addr = addr
                .trim()
                .parse()
                .map_err(|source| ConfigError::BindAddr { value: addr.clone(), source })?;
        }

        if let Some(mode) = get(ENV_STATUS_MODE) {
            config.status_mode = mode.parse()?;
        }

        Ok(config)
    }

    /// File name of the artifact as shown to clients.
    pub fn model_name(&self) -> String {
        self.model_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.model_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_fixed_constants() {
        let config = ViewerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ViewerConfig::default());
        assert_eq!(config.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.status_mode, StatusMode::Parity);
        assert_eq!(config.model_name(), "model_aug_best.safetensors");
    }

    #[test]
    fn test_overrides() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            (ENV_MODEL_PATH, "/models/resnet.safetensors"),
            (ENV_BIND_ADDR, "127.0.0.1:8080"),
            (ENV_STATUS_MODE, "Strict"),
        ]))
        .unwrap();

        assert_eq!(config.model_path, PathBuf::from("/models/resnet.safetensors"));
        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.status_mode, StatusMode::Strict);
        assert_eq!(config.model_name(), "resnet.safetensors");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = ViewerConfig::from_lookup(lookup_from(&[
            (ENV_BIND_ADDR, "  "),
            (ENV_STATUS_MODE, ""),
        ]))
        .unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn test_invalid_values() {
        let err = ViewerConfig::from_lookup(lookup_from(&[(ENV_BIND_ADDR, "not-an-addr")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::BindAddr { .. }));
        assert!(err.to_string().contains("not-an-addr"));

        let err = ViewerConfig::from_lookup(lookup_from(&[(ENV_STATUS_MODE, "lenient")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::StatusMode(ref m) if m == "lenient"));

        let err = ViewerConfig::from_lookup(lookup_from(&[(ENV_MODEL_PATH, " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyModelPath));
    }

    #[test]
    fn test_status_mode_display_round_trips() {
        for mode in [StatusMode::Parity, StatusMode::Strict] {
            assert_eq!(mode.to_string().parse::<StatusMode>().unwrap(), mode);
        }
    }
}
