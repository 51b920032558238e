//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "CLUSTER_ADMIN";

/// Configuration from environment variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Cluster directory from CLUSTER_ADMIN_DIR
    pub cluster_dir: Option<String>,
    /// Output format from CLUSTER_ADMIN_FORMAT
    pub format: Option<String>,
    /// Log level from CLUSTER_ADMIN_LOG
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(format!("{ENV_PREFIX}_{name}").as_str()).filter(|v| !v.trim().is_empty())
        };

        Self {
            cluster_dir: get("DIR"),
            format: get("FORMAT"),
            log_level: get("LOG"),
        }
    }
}
