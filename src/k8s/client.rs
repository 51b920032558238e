//! Kubernetes client wrapper
//!
//! Provides the read-only cluster queries used by the CLI.

use anyhow::{Context, Result};
use chrono::Utc;
use k8s_openapi::api::core::v1::Node;
use kube::{
    api::{Api, ListParams},
    Client,
};
use tracing::{debug, info};

use super::admin::admin_client_for;
use super::nodes::ClusterStatus;
use crate::config::ClusterPaths;

/// Kubernetes client wrapper
#[derive(Clone)]
pub struct ClusterClient {
    client: Client,
}

impl ClusterClient {
    /// Connect with the cluster directory's admin kubeconfig
    pub async fn admin(paths: &ClusterPaths) -> Result<Self> {
        let client = admin_client_for(paths).await?;
        Ok(Self { client })
    }

    /// Get the underlying kube client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// API server version string, e.g. `v1.28.3`
    pub async fn server_version(&self) -> Result<String> {
        server_version(&self.client).await
    }

    /// Collect server version and per-node status
    pub async fn status(&self) -> Result<ClusterStatus> {
        cluster_status(&self.client).await
    }
}

/// Server version plus a status row per node, sorted by name
pub async fn cluster_status(client: &Client) -> Result<ClusterStatus> {
    let server_version = server_version(client).await?;
    let nodes = list_nodes(client).await?;

    let status = ClusterStatus::from_nodes(server_version, &nodes, Utc::now());
    info!("Found {} node(s)", status.nodes.len());

    Ok(status)
}

async fn server_version(client: &Client) -> Result<String> {
    let info = client
        .apiserver_version()
        .await
        .context("Failed to query API server version")?;

    debug!("API server reports {}", info.git_version);
    Ok(info.git_version)
}

async fn list_nodes(client: &Client) -> Result<Vec<Node>> {
    let nodes: Api<Node> = Api::all(client.clone());
    let node_list = nodes
        .list(&ListParams::default())
        .await
        .context("Failed to list nodes")?;

    Ok(node_list.items)
}
