//! Server configuration read from the environment.

use std::path::PathBuf;

use chrono::Duration;

const DEFAULT_SESSION_TTL_SECS: u32 = 24 * 60 * 60;

/// Runtime configuration for the backend.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory repositories are cloned into.
    pub workspace_dir: PathBuf,
    /// JSON file holding user settings.
    pub settings_path: PathBuf,
    /// Idle time after which a client session is dropped.
    pub session_ttl: Duration,
}

impl ServerConfig {
    /// Build the configuration from environment variables.
    ///
    /// - HOST: bind address (default `0.0.0.0`)
    /// - PORT: bind port (default `3000`)
    /// - MEMO_WORKSPACE_DIR: clone target directory (default current dir)
    /// - MEMO_SETTINGS_PATH: settings file (default `settings.json` in the workspace)
    /// - MEMO_SESSION_TTL_SECS: idle session lifetime (default one day)
    pub fn from_env() -> anyhow::Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PORT") {
            Ok(port) => port.parse()?,
            Err(_) => 3000,
        };

        let workspace_dir = match std::env::var("MEMO_WORKSPACE_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => std::env::current_dir()?,
        };
        let settings_path = std::env::var("MEMO_SETTINGS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| workspace_dir.join("settings.json"));
        let ttl_secs: u32 = match std::env::var("MEMO_SESSION_TTL_SECS") {
            Ok(secs) => secs.parse()?,
            Err(_) => DEFAULT_SESSION_TTL_SECS,
        };

        Ok(Self {
            host,
            port,
            workspace_dir,
            settings_path,
            session_ttl: Duration::seconds(i64::from(ttl_secs)),
        })
    }

    /// Configuration rooted at `workspace_dir`, used by tests and embedders.
    pub fn with_workspace(workspace_dir: impl Into<PathBuf>) -> Self {
        let workspace_dir = workspace_dir.into();
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            settings_path: workspace_dir.join("settings.json"),
            workspace_dir,
            session_ttl: Duration::seconds(i64::from(DEFAULT_SESSION_TTL_SECS)),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
