//! Configuration module
//!
//! Resolves the cluster directory convention and loads tool settings.

pub mod env;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use env::EnvConfig;

/// Administrator kubeconfig file name inside a cluster directory
pub const ADMIN_KUBECONFIG_FILE: &str = "admin.conf";

/// Optional settings file name inside a cluster directory
pub const SETTINGS_FILE: &str = "cluster-admin.yaml";

/// Well-known locations inside a cluster directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterPaths {
    root: PathBuf,
}

impl ClusterPaths {
    /// Use `root` as the cluster directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The current working directory is the cluster directory
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Resolve the cluster directory: explicit value, then
    /// `CLUSTER_ADMIN_DIR`, then the current directory.
    pub fn resolve(explicit: Option<&str>, env: &EnvConfig) -> Self {
        match explicit.or(env.cluster_dir.as_deref()) {
            Some(dir) => Self::new(expand_path(dir)),
            None => Self::current_dir(),
        }
    }

    /// Resolve from the process environment only
    pub fn from_env() -> Self {
        Self::resolve(None, &EnvConfig::load())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the administrator kubeconfig
    pub fn admin_kubeconfig(&self) -> PathBuf {
        self.root.join(ADMIN_KUBECONFIG_FILE)
    }

    pub fn settings_file(&self) -> PathBuf {
        self.root.join(SETTINGS_FILE)
    }
}

impl Default for ClusterPaths {
    fn default() -> Self {
        Self::current_dir()
    }
}

/// Tool settings read from the cluster directory
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default output format (table, json, yaml)
    pub format: Option<String>,

    /// Default log level
    pub log_level: Option<String>,
}

impl Settings {
    /// Load settings from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML settings: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON settings: {}", path.display()))?
        };

        Ok(settings)
    }

    /// Load the cluster directory's settings file, or defaults when absent
    pub fn load_or_default(paths: &ClusterPaths) -> Result<Self> {
        let path = paths.settings_file();
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_admin_kubeconfig_in_current_dir() {
        let paths = ClusterPaths::default();
        assert_eq!(paths.admin_kubeconfig(), PathBuf::from("./admin.conf"));
    }

    #[test]
    fn test_resolve_precedence() {
        let env = EnvConfig {
            cluster_dir: Some("/srv/from-env".to_string()),
            ..Default::default()
        };

        let explicit = ClusterPaths::resolve(Some("/srv/explicit"), &env);
        assert_eq!(explicit.root(), Path::new("/srv/explicit"));

        let from_env = ClusterPaths::resolve(None, &env);
        assert_eq!(
            from_env.admin_kubeconfig(),
            PathBuf::from("/srv/from-env/admin.conf")
        );

        let fallback = ClusterPaths::resolve(None, &EnvConfig::default());
        assert_eq!(fallback, ClusterPaths::current_dir());
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(expand_path("./my-cluster"), PathBuf::from("./my-cluster"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_path("~/my-cluster"), home.join("my-cluster"));
        }
    }

    #[test]
    fn test_settings_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let settings = Settings::load_or_default(&ClusterPaths::new(dir.path())).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_yaml() {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            "format: json\nlog_level: debug\n",
        )
        .unwrap();

        let settings = Settings::load_or_default(&ClusterPaths::new(dir.path())).unwrap();
        assert_eq!(settings.format.as_deref(), Some("json"));
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_settings_json_partial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"format": "yaml"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.format.as_deref(), Some("yaml"));
        assert!(settings.log_level.is_none());
    }

    #[test]
    fn test_settings_invalid() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "format: [unclosed").unwrap();

        assert!(Settings::load_or_default(&ClusterPaths::new(dir.path())).is_err());
    }
}
