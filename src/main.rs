//! cluster-admin - administrator access to a Kubernetes cluster directory
//!
//! Loads `admin.conf` from a cluster directory and uses it for read-only
//! cluster inspection.
//!
//! ## Usage
//!
//! ```bash
//! # Node status, using ./admin.conf
//! cluster-admin status
//!
//! # Another cluster directory, JSON output
//! cluster-admin --cluster-dir ~/clusters/prod status -o json
//!
//! # API server version
//! cluster-admin version
//!
//! # Inspect the admin kubeconfig without contacting the cluster
//! cluster-admin kubeconfig
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info, warn};

use cluster_admin::config::{env::EnvConfig, ClusterPaths, Settings};
use cluster_admin::k8s::{describe_admin_kubeconfig, ClusterClient};
use cluster_admin::output::{OutputFormat, StatusFormatter};
use cluster_admin::utils::logger::{init_logger, LogLevel};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvConfig::load();
    let paths = ClusterPaths::resolve(args.cluster_dir.as_deref(), &env);
    let (settings, settings_error) = settings_or_default(&paths);

    init_logger(LogLevel::select(
        args.verbose,
        [env.log_level.as_deref(), settings.log_level.as_deref()],
    ));
    debug!("Using cluster directory {}", paths.root().display());
    if let Some(e) = settings_error {
        warn!("Ignoring settings file, using defaults: {e:#}");
    }

    let format = output_format(&args, &env, &settings)?;
    let formatter = StatusFormatter::new(format);

    match args.command {
        cli::Command::Status => {
            let client = ClusterClient::admin(&paths).await?;
            let status = client.status().await?;
            println!("{}", formatter.format_status(&status)?);
        }
        cli::Command::Version => {
            let client = ClusterClient::admin(&paths).await?;
            let version = client.server_version().await?;
            info!("Connected to API server {}", version);
            println!("{}", formatter.format_version(&version)?);
        }
        cli::Command::Kubeconfig => {
            let summary = describe_admin_kubeconfig(&paths)?;
            println!("{}", formatter.format_kubeconfig(&summary)?);
        }
    }

    Ok(())
}

/// Settings from the cluster directory; an unreadable file yields defaults
/// plus the error, reported once logging is up.
fn settings_or_default(paths: &ClusterPaths) -> (Settings, Option<anyhow::Error>) {
    match Settings::load_or_default(paths) {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    }
}

/// Output format: flag, then CLUSTER_ADMIN_FORMAT, then settings file
fn output_format(args: &Args, env: &EnvConfig, settings: &Settings) -> Result<OutputFormat> {
    let requested = args
        .output
        .as_deref()
        .or(env.format.as_deref())
        .or(settings.format.as_deref());

    match requested {
        Some(name) => OutputFormat::from_str(name)
            .with_context(|| format!("Unknown output format: {name} (use table, json, yaml)")),
        None => Ok(OutputFormat::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_precedence() {
        let args = Args::parse_from(["cluster-admin", "status", "-o", "yaml"]);
        let env = EnvConfig {
            format: Some("json".to_string()),
            ..Default::default()
        };
        let settings = Settings {
            format: Some("table".to_string()),
            ..Default::default()
        };

        assert_eq!(
            output_format(&args, &env, &settings).unwrap(),
            OutputFormat::Yaml
        );

        let args = Args::parse_from(["cluster-admin", "status"]);
        assert_eq!(
            output_format(&args, &env, &settings).unwrap(),
            OutputFormat::Json
        );
        assert_eq!(
            output_format(&args, &EnvConfig::default(), &Settings::default()).unwrap(),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(cluster_admin::config::SETTINGS_FILE),
            "format: [unclosed",
        )
        .unwrap();

        let (settings, error) = settings_or_default(&ClusterPaths::new(dir.path()));
        assert_eq!(settings, Settings::default());
        assert!(error.is_some());

        let (settings, error) = settings_or_default(&ClusterPaths::new(dir.path().join("none")));
        assert_eq!(settings, Settings::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_unknown_output_format() {
        let args = Args::parse_from(["cluster-admin", "status", "-o", "csv"]);
        let err = output_format(&args, &EnvConfig::default(), &Settings::default()).unwrap_err();
        assert!(err.to_string().contains("Unknown output format: csv"));
    }
}
