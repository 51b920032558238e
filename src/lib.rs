//! Administrator Kubernetes client accessor
//!
//! Loads the cluster's `admin.conf` and constructs a `kube::Client` from it.
//! Any failure is reported as an [`AdminClientError`] annotated with
//! `could not load admin kubeconfig file`.
//!
//! ```no_run
//! # async fn run() -> Result<(), cluster_admin::AdminClientError> {
//! let client = cluster_admin::admin_client().await?;
//! println!("default namespace: {}", client.default_namespace());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod k8s;
pub mod output;
pub mod utils;

pub use config::ClusterPaths;
pub use k8s::{
    admin_client, admin_client_for, admin_client_from, cluster_status, AdminClientError,
};
