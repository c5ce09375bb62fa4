//! Graph documents: bulk loading from JSON, TOML or YAML
//!
//! A document lists vertices and name-addressed edges. Building a graph from it
//! goes through `add_vertex`/`add_edge` in a loop and tolerates bad rows: a
//! duplicate vertex or an edge naming an unknown vertex is skipped and counted
//! in the `LoadReport` rather than aborting the load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::config::GraphDefaults;
use crate::error::{Result, StarpathError};
use crate::graph::store::Graph;
use crate::graph::vertex::Vertex;

fn default_weight() -> f64 {
    1.0
}

/// An edge between two vertices named in the same document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

/// Serializable description of a graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weighted: Option<bool>,
    #[serde(default)]
    pub vertices: Vec<Vertex>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Counts of rows applied and skipped while building a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub vertices_added: usize,
    pub vertices_skipped: usize,
    pub edges_added: usize,
    pub edges_skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => bail_unsupported!("graph document extension", ext, "json, toml, yaml, yml"),
        }
    }
}

impl GraphDocument {
    /// Read and parse a document, choosing the parser by extension
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .map_err(|e| StarpathError::io_operation("read graph document", path.display(), e))?;
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let document = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(document)
    }

    /// Build a graph; flags missing from the document come from `defaults`
    pub fn build(&self, defaults: &GraphDefaults) -> (Graph, LoadReport) {
        let mut graph = Graph::new(
            self.directed.unwrap_or(defaults.directed),
            self.weighted.unwrap_or(defaults.weighted),
        );
        let mut report = LoadReport::default();

        for vertex in &self.vertices {
            match graph.add_vertex(vertex.clone()) {
                Ok(_) => report.vertices_added += 1,
                Err(e) => {
                    tracing::warn!(name = %vertex.name, error = %e, "skipping vertex");
                    report.vertices_skipped += 1;
                }
            }
        }

        for edge in &self.edges {
            match (graph.find_vertex(&edge.from), graph.find_vertex(&edge.to)) {
                (Some(from), Some(to)) if edge.weight.is_finite() => {
                    graph.add_edge(from, to, edge.weight);
                    report.edges_added += 1;
                }
                _ => {
                    tracing::warn!(from = %edge.from, to = %edge.to, weight = edge.weight, "skipping edge");
                    report.edges_skipped += 1;
                }
            }
        }

        tracing::debug!(?report, "graph document loaded");
        (graph, report)
    }
}
