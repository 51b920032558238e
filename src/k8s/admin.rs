//! Administrator client accessor
//!
//! Turns the cluster's admin kubeconfig into a ready-to-use `kube::Client`.
//! Every failure on the way is reported as a single [`AdminClientError`].

use kube::config::{KubeConfigOptions, Kubeconfig, KubeconfigError};
use kube::{Client, Config};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::config::ClusterPaths;

/// The admin kubeconfig could not be turned into a client
#[derive(Debug, Error)]
#[error("could not load admin kubeconfig file")]
pub struct AdminClientError {
    path: PathBuf,
    #[source]
    source: LoadError,
}

/// Underlying cause of an [`AdminClientError`]
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading, parsing, or resolving the kubeconfig failed
    #[error(transparent)]
    Kubeconfig(#[from] KubeconfigError),

    /// The client library rejected the resulting configuration
    #[error(transparent)]
    Client(#[from] kube::Error),
}

impl AdminClientError {
    fn new(path: &Path, source: impl Into<LoadError>) -> Self {
        Self {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    /// Kubeconfig path that was attempted
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cause(&self) -> &LoadError {
        &self.source
    }
}

/// Build a client from the conventional admin kubeconfig location.
///
/// The location comes from [`ClusterPaths::from_env`]. Nothing is cached, so
/// each call re-reads the file and constructs a fresh client.
pub async fn admin_client() -> Result<Client, AdminClientError> {
    admin_client_for(&ClusterPaths::from_env()).await
}

/// Build a client from the admin kubeconfig of a resolved cluster directory
pub async fn admin_client_for(paths: &ClusterPaths) -> Result<Client, AdminClientError> {
    admin_client_from(paths.admin_kubeconfig()).await
}

/// Build a client from an admin kubeconfig at `path`
pub async fn admin_client_from(path: impl AsRef<Path>) -> Result<Client, AdminClientError> {
    let path = path.as_ref();
    debug!("Loading admin kubeconfig from {}", path.display());

    let kubeconfig = read_kubeconfig(path)?;
    let config = Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| AdminClientError::new(path, e))?;

    Client::try_from(config).map_err(|e| AdminClientError::new(path, e))
}

/// Read-only view of an admin kubeconfig
#[derive(Clone, Debug, Serialize)]
pub struct KubeconfigSummary {
    pub path: PathBuf,
    pub current_context: Option<String>,
    pub contexts: Vec<String>,
    pub clusters: Vec<ClusterEndpoint>,
}

/// A named cluster and its API server address
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClusterEndpoint {
    pub name: String,
    pub server: Option<String>,
}

/// Describe the admin kubeconfig without building a client
pub fn describe_admin_kubeconfig(
    paths: &ClusterPaths,
) -> Result<KubeconfigSummary, AdminClientError> {
    let path = paths.admin_kubeconfig();
    let kubeconfig = read_kubeconfig(&path)?;

    Ok(KubeconfigSummary {
        current_context: kubeconfig.current_context,
        contexts: kubeconfig.contexts.into_iter().map(|c| c.name).collect(),
        clusters: kubeconfig
            .clusters
            .into_iter()
            .map(|c| ClusterEndpoint {
                name: c.name,
                server: c.cluster.and_then(|cluster| cluster.server),
            })
            .collect(),
        path,
    })
}

fn read_kubeconfig(path: &Path) -> Result<Kubeconfig, AdminClientError> {
    Kubeconfig::read_from(path).map_err(|e| AdminClientError::new(path, e))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::path::{Path, PathBuf};

    pub const VALID_ADMIN_CONF: &str = r#"apiVersion: v1
kind: Config
clusters:
- name: test-cluster
  cluster:
    server: https://127.0.0.1:6443
    insecure-skip-tls-verify: true
contexts:
- name: kubernetes-admin@test-cluster
  context:
    cluster: test-cluster
    user: kubernetes-admin
    namespace: kube-system
current-context: kubernetes-admin@test-cluster
users:
- name: kubernetes-admin
  user:
    token: not-a-real-token
"#;

    pub fn write_admin_conf(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join(crate::config::ADMIN_KUBECONFIG_FILE);
        std::fs::write(&path, content).unwrap();
        path
    }
}
