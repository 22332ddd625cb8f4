use std::collections::HashSet;

use lnpath_core::{IgnoreEntry, NodeId};

use crate::policy::DirectedEdge;

/// Exclusions applied to edges before they enter the search graph.
///
/// Channel-scoped entries remove only the edge arriving at their node over
/// their channel. Node-scoped entries remove every edge arriving at the node.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    edges: HashSet<(String, NodeId)>,
    nodes: HashSet<NodeId>,
}

impl IgnoreFilter {
    pub fn new(entries: &[IgnoreEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut filter, entry| {
                match &entry.channel {
                    Some(channel) => {
                        filter
                            .edges
                            .insert((channel.clone(), entry.public_key.clone()));
                    }
                    None => {
                        filter.nodes.insert(entry.public_key.clone());
                    }
                }
                filter
            })
    }

    /// Returns true if `edge` must not be considered by the search.
    pub fn excludes(&self, edge: &DirectedEdge) -> bool {
        self.nodes.contains(&edge.to)
            || self
                .edges
                .contains(&(edge.channel.clone(), edge.to.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.nodes.is_empty()
    }

    /// Number of distinct exclusions.
    pub fn len(&self) -> usize {
        self.edges.len() + self.nodes.len()
    }
}
