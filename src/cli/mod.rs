//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Administrator access to a Kubernetes cluster directory
#[derive(Parser, Debug)]
#[command(name = "cluster-admin")]
#[command(version)]
#[command(about = "Inspect a cluster through its admin kubeconfig")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Cluster directory containing admin.conf (defaults to CLUSTER_ADMIN_DIR or ".")
    #[arg(long, global = true)]
    pub cluster_dir: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show node status through the admin kubeconfig
    Status,

    /// Show the API server version
    Version,

    /// Describe the admin kubeconfig without contacting the cluster
    Kubeconfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_status_with_globals() {
        let args = Args::parse_from([
            "cluster-admin",
            "status",
            "--cluster-dir",
            "/srv/my-cluster",
            "-o",
            "json",
        ]);

        assert!(matches!(args.command, Command::Status));
        assert_eq!(args.cluster_dir.as_deref(), Some("/srv/my-cluster"));
        assert_eq!(args.output.as_deref(), Some("json"));
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_kubeconfig_verbose() {
        let args = Args::parse_from(["cluster-admin", "-v", "kubeconfig"]);
        assert!(matches!(args.command, Command::Kubeconfig));
        assert!(args.verbose);
        assert!(args.cluster_dir.is_none());
    }

    #[test]
    fn test_command_required() {
        assert!(Args::try_parse_from(["cluster-admin"]).is_err());
    }
}
