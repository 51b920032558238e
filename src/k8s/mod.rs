//! Kubernetes API client module
//!
//! Builds the administrator client and runs read-only cluster queries.

mod admin;
mod client;
mod nodes;

pub use admin::{
    admin_client, admin_client_for, admin_client_from, describe_admin_kubeconfig,
    AdminClientError, ClusterEndpoint, KubeconfigSummary, LoadError,
};
pub use client::{cluster_status, ClusterClient};
pub use nodes::{ClusterStatus, NodeStatus};
