//! Output formatters for cluster information
//!
//! Provides Table, JSON, and YAML output formats.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::k8s::{ClusterStatus, KubeconfigSummary};

/// Output format options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

/// Formatter for status and kubeconfig views
pub struct StatusFormatter {
    format: OutputFormat,
    colorize: bool,
}

impl StatusFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            colorize: true,
        }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Format cluster status
    pub fn format_status(&self, status: &ClusterStatus) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_status_table(status)),
            _ => self.serialize(status),
        }
    }

    /// Format the admin kubeconfig summary
    pub fn format_kubeconfig(&self, summary: &KubeconfigSummary) -> Result<String> {
        match self.format {
            OutputFormat::Table => Ok(self.format_kubeconfig_table(summary)),
            _ => self.serialize(summary),
        }
    }

    /// Format the API server version
    pub fn format_version(&self, version: &str) -> Result<String> {
        #[derive(Serialize)]
        struct Version<'a> {
            server_version: &'a str,
        }

        match self.format {
            OutputFormat::Table => Ok(format!("Server Version: {version}")),
            _ => self.serialize(&Version {
                server_version: version,
            }),
        }
    }

    fn serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML"),
            _ => serde_json::to_string_pretty(value).context("Failed to serialize JSON"),
        }
    }

    fn format_status_table(&self, status: &ClusterStatus) -> String {
        let headers = [
            "NAME",
            "STATUS",
            "ROLES",
            "AGE",
            "OS-IMAGE",
            "KERNEL-VERSION",
            "KUBELET-VERSION",
            "CONTAINER-RUNTIME",
        ];

        let rows: Vec<[&str; 8]> = status
            .nodes
            .iter()
            .map(|n| {
                [
                    n.name.as_str(),
                    n.status.as_str(),
                    n.roles.as_str(),
                    n.age.as_str(),
                    n.os_image.as_str(),
                    n.kernel_version.as_str(),
                    n.kubelet_version.as_str(),
                    n.container_runtime.as_str(),
                ]
            })
            .collect();

        let mut widths = headers.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        let mut output = format!("Server Version: {}\n\n", status.server_version);
        output.push_str(&render_row(&headers, &widths, |_, cell| cell.to_string()));

        for row in &rows {
            output.push_str(&render_row(row, &widths, |col, cell| {
                if col == 1 {
                    self.colorize_status(cell)
                } else {
                    cell.to_string()
                }
            }));
        }

        if rows.is_empty() {
            output.push_str("No nodes found\n");
        }

        output
    }

    fn format_kubeconfig_table(&self, summary: &KubeconfigSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!("Admin kubeconfig: {}\n", summary.path.display()));
        output.push_str(&format!(
            "Current context:  {}\n",
            summary.current_context.as_deref().unwrap_or("<none>")
        ));

        if !summary.contexts.is_empty() {
            output.push_str("Contexts:\n");
            for context in &summary.contexts {
                output.push_str(&format!("  - {context}\n"));
            }
        }

        if !summary.clusters.is_empty() {
            output.push_str("Clusters:\n");
            for cluster in &summary.clusters {
                output.push_str(&format!(
                    "  - {} ({})\n",
                    cluster.name,
                    cluster.server.as_deref().unwrap_or("no server")
                ));
            }
        }

        output
    }

    /// Color an already padded status cell
    fn colorize_status(&self, padded: &str) -> String {
        if !self.colorize {
            return padded.to_string();
        }

        let color = match padded.trim_end() {
            "Ready" => "32",
            s if s.starts_with("Ready,") => "33",
            _ => "31",
        };
        format!("\x1b[{color}m{padded}\x1b[0m")
    }
}

/// Pad each cell to its column width; `style` sees the padded cell
fn render_row<F>(cells: &[&str], widths: &[usize], style: F) -> String
where
    F: Fn(usize, &str) -> String,
{
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(col, (cell, &width))| style(col, &format!("{cell:<width$}")))
        .collect::<Vec<_>>()
        .join("   ");

    format!("{}\n", line.trim_end())
}
