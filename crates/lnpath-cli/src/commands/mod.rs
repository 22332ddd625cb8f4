pub mod init;
pub mod route;
pub mod summary;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use lnpath_core::Channel;

/// A describe-graph style snapshot: `{"channels": [...]}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub channels: Vec<Channel>,
}

/// Read a JSON graph snapshot from disk.
pub fn load_graph(path: &Path) -> anyhow::Result<Vec<Channel>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading graph snapshot {}", path.display()))?;
    let snapshot: GraphSnapshot = serde_json::from_str(&contents)
        .with_context(|| format!("parsing graph snapshot {}", path.display()))?;
    tracing::debug!(path = %path.display(), channels = snapshot.channels.len(), "loaded graph");
    Ok(snapshot.channels)
}
