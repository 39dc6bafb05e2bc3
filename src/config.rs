//! Application-level configuration loaded from the environment.

use std::{env, ffi::OsString, net::SocketAddr, path::PathBuf};

use tracing::{info, warn};

/// Default location of the high score document, relative to the working directory.
const DEFAULT_STORAGE_PATH: &str = "storage.json";
/// Environment variable that overrides [`DEFAULT_STORAGE_PATH`].
const STORAGE_PATH_ENV: &str = "DROPGAME_STORAGE_PATH";
/// Port used when neither `PORT` nor `SERVER_PORT` holds a valid value.
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// Port the HTTP server listens on (all interfaces).
    pub port: u16,
    /// File holding the persisted high score record.
    pub storage_path: PathBuf,
}

impl AppConfig {
    /// Load the configuration from the process environment, falling back to defaults.
    pub fn load() -> Self {
        let config = Self::from_vars(
            env::var("PORT").or_else(|_| env::var("SERVER_PORT")).ok(),
            env::var_os(STORAGE_PATH_ENV),
        );
        info!(
            port = config.port,
            storage = %config.storage_path.display(),
            "loaded configuration"
        );
        config
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }

    fn from_vars(port: Option<String>, storage_path: Option<OsString>) -> Self {
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|err| {
                warn!(value = %raw, error = %err, "invalid port; falling back to default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let storage_path = storage_path
            .map(PathBuf::from)
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH));

        Self { port, storage_path }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_vars(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = AppConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.storage_path, PathBuf::from("storage.json"));
    }

    #[test]
    fn explicit_values_are_used() {
        let config = AppConfig::from_vars(
            Some("9000".into()),
            Some(OsString::from("/var/lib/dropgame/best.json")),
        );
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.storage_path,
            PathBuf::from("/var/lib/dropgame/best.json")
        );
        assert_eq!(config.bind_addr().port(), 9000);
    }

    #[test]
    fn invalid_port_and_empty_path_fall_back() {
        let config = AppConfig::from_vars(Some("http".into()), Some(OsString::new()));
        assert_eq!(config, AppConfig::default());
    }
}
