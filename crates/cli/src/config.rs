//! Configuration for `mockup`.
//!
//! Settings are layered: built-in defaults, then an optional TOML file,
//! then `MOCKUP_*` environment variables, then command-line flags.
//!
//! # Example
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//! onboarding_gate = true
//! max_body_bytes = 1048576
//!
//! [storage]
//! dir = "/home/me/.mockup"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// File looked up in the working directory when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILE: &str = "mockup.toml";

pub(crate) const ENV_PORT: &str = "MOCKUP_PORT";
pub(crate) const ENV_STATE_DIR: &str = "MOCKUP_STATE_DIR";

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("could not read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value '{value}' for {name}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) server: ServerSettings,
    pub(crate) storage: StorageSettings,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ServerSettings {
    pub(crate) host: String,
    pub(crate) port: u16,
    /// Redirect first-time visitors to `/onboarding`.
    pub(crate) onboarding_gate: bool,
    pub(crate) max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: "0.0.0.0".to_string(),
            port: 3000,
            onboarding_gate: true,
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// `[storage]` section.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct StorageSettings {
    /// Where the workspace is kept. Defaults to the platform data dir.
    pub(crate) dir: Option<PathBuf>,
}

impl Config {
    /// Load the config file.
    ///
    /// An explicit `path` must exist. Without one, `mockup.toml` in the
    /// working directory is used when present, and defaults otherwise.
    pub(crate) fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::read(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::read(fallback)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    /// Apply environment overrides from the process environment.
    pub(crate) fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|name| std::env::var(name).ok())
    }

    /// Apply environment overrides read through `lookup`. Empty values are
    /// ignored.
    pub(crate) fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
            self.server.port = value.parse().map_err(|_| ConfigError::InvalidEnv {
                name: ENV_PORT,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_STATE_DIR).filter(|v| !v.is_empty()) {
            self.storage.dir = Some(PathBuf::from(value));
        }
        Ok(())
    }

    /// Resolved storage directory.
    pub(crate) fn state_dir(&self) -> PathBuf {
        match &self.storage.dir {
            Some(dir) => dir.clone(),
            None => dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("mockup"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.onboarding_gate);
        assert_eq!(config.server.max_body_bytes, 1024 * 1024);
        assert!(config.state_dir().ends_with("mockup"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mockup.toml");
        std::fs::write(&path, "[server]\nport = 8088\nonboarding_gate = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 8088);
        assert!(!config.server.onboarding_gate);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.dir, None);
    }

    #[test]
    fn storage_dir_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mockup.toml");
        std::fs::write(&path, "[storage]\ndir = \"/tmp/mockup-state\"\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.state_dir(), PathBuf::from("/tmp/mockup-state"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mockup.toml");
        std::fs::write(&path, "[server]\nprot = 1\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("mockup.toml"));
    }

    #[test]
    fn env_overrides_file_values() {
        let mut config = Config::default();
        config.server.port = 8088;
        config
            .apply_env_from(env(&[(ENV_PORT, "9090"), (ENV_STATE_DIR, "/var/mockup")]))
            .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.state_dir(), PathBuf::from("/var/mockup"));
    }

    #[test]
    fn empty_env_values_are_ignored() {
        let mut config = Config::default();
        config
            .apply_env_from(env(&[(ENV_PORT, ""), (ENV_STATE_DIR, "")]))
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn bad_port_in_env() {
        let mut config = Config::default();
        let err = config
            .apply_env_from(env(&[(ENV_PORT, "not-a-port")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'not-a-port' for MOCKUP_PORT");
    }
}
