//! Node status summaries

use chrono::{DateTime, Duration, Utc};
use k8s_openapi::api::core::v1::Node;
use serde::Serialize;

const ROLE_LABEL_PREFIX: &str = "node-role.kubernetes.io/";

/// One row of cluster status
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NodeStatus {
    pub name: String,
    pub status: String,
    pub roles: String,
    pub os_image: String,
    pub kernel_version: String,
    pub kubelet_version: String,
    pub container_runtime: String,
    pub age: String,
}

/// Server version plus node rows
#[derive(Clone, Debug, Serialize)]
pub struct ClusterStatus {
    pub server_version: String,
    pub nodes: Vec<NodeStatus>,
}

impl ClusterStatus {
    /// Summarize `nodes` as seen at `now`, sorted by node name
    pub fn from_nodes(server_version: String, nodes: &[Node], now: DateTime<Utc>) -> Self {
        let mut nodes: Vec<NodeStatus> = nodes
            .iter()
            .map(|node| NodeStatus::from_node(node, now))
            .collect();
        nodes.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            server_version,
            nodes,
        }
    }
}

impl NodeStatus {
    /// Summarize a node as seen at `now`
    pub fn from_node(node: &Node, now: DateTime<Utc>) -> Self {
        let info = node
            .status
            .as_ref()
            .and_then(|s| s.node_info.clone())
            .unwrap_or_default();

        Self {
            name: node.metadata.name.clone().unwrap_or_default(),
            status: readiness(node),
            roles: roles(node),
            os_image: info.os_image,
            kernel_version: info.kernel_version,
            kubelet_version: info.kubelet_version,
            container_runtime: info.container_runtime_version,
            age: node
                .metadata
                .creation_timestamp
                .as_ref()
                .map(|created| format_age(now - created.0))
                .unwrap_or_else(|| "<unknown>".to_string()),
        }
    }
}

/// `Ready`, `NotReady`, or `Unknown`, with `,SchedulingDisabled` when cordoned
fn readiness(node: &Node) -> String {
    let ready = node
        .status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .and_then(|conds| conds.iter().find(|c| c.type_ == "Ready"))
        .map(|c| c.status.as_str());

    let mut status = match ready {
        Some("True") => "Ready",
        Some("False") => "NotReady",
        _ => "Unknown",
    }
    .to_string();

    let cordoned = node
        .spec
        .as_ref()
        .and_then(|s| s.unschedulable)
        .unwrap_or(false);
    if cordoned {
        status.push_str(",SchedulingDisabled");
    }

    status
}

fn roles(node: &Node) -> String {
    let roles: Vec<&str> = node
        .metadata
        .labels
        .iter()
        .flatten()
        .filter_map(|(key, _)| key.strip_prefix(ROLE_LABEL_PREFIX))
        .filter(|role| !role.is_empty())
        .collect();

    if roles.is_empty() {
        "<none>".to_string()
    } else {
        roles.join(",")
    }
}

/// Coarse age in the largest whole unit: `3d`, `5h`, `12m`, `40s`
fn format_age(age: Duration) -> String {
    let secs = age.num_seconds().max(0);
    match secs {
        s if s >= 86_400 => format!("{}d", s / 86_400),
        s if s >= 3_600 => format!("{}h", s / 3_600),
        s if s >= 60 => format!("{}m", s / 60),
        s => format!("{s}s"),
    }
}
