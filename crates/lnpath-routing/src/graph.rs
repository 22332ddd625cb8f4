use std::collections::BTreeMap;

use lnpath_core::{Channel, NodeId};

use crate::ignore::IgnoreFilter;
use crate::policy::{normalize_channel, DirectedEdge};

/// A directed multigraph of channel edges, indexed by the node each edge arrives at.
///
/// Parallel edges between the same pair of nodes are kept apart: two channels
/// between ALICE and BOB, or the two directions of one channel, are distinct
/// entries with their own economics.
#[derive(Debug, Clone, Default)]
pub struct ChannelGraph {
    /// to -> edges arriving at `to`, sorted by `(channel, from)`.
    inbound: BTreeMap<NodeId, Vec<DirectedEdge>>,
    edge_count: usize,
    /// Largest `min_htlc_mtokens` over all edges.
    max_min_htlc_mtokens: u64,
}

impl ChannelGraph {
    /// Normalize `channels`, drop edges excluded by `ignore`, and index the rest.
    pub fn build(channels: &[Channel], ignore: &IgnoreFilter) -> Self {
        let (mut inbound, edge_count, max_min_htlc_mtokens) = channels
            .iter()
            .flat_map(|channel| normalize_channel(channel).into_edges())
            .filter(|edge| {
                let excluded = ignore.excludes(edge);
                if excluded {
                    tracing::debug!(channel = %edge.channel, to = %edge.to, "ignoring edge");
                }
                !excluded
            })
            .fold(
                (BTreeMap::<NodeId, Vec<DirectedEdge>>::new(), 0usize, 0u64),
                |(mut index, count, max_min), edge| {
                    let max_min = max_min.max(edge.min_htlc_mtokens);
                    index.entry(edge.to.clone()).or_default().push(edge);
                    (index, count + 1, max_min)
                },
            );

        for edges in inbound.values_mut() {
            edges.sort_by(|a, b| {
                a.channel
                    .cmp(&b.channel)
                    .then_with(|| a.from.cmp(&b.from))
            });
        }

        tracing::debug!(
            channels = channels.len(),
            edges = edge_count,
            "built channel graph"
        );

        Self {
            inbound,
            edge_count,
            max_min_htlc_mtokens,
        }
    }

    /// Edges arriving at `node`.
    pub fn inbound(&self, node: &NodeId) -> &[DirectedEdge] {
        self.inbound.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge> {
        self.inbound.values().flatten()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Amount above which no edge's minimum HTLC can reject a payment.
    pub fn max_min_htlc_mtokens(&self) -> u64 {
        self.max_min_htlc_mtokens
    }

    pub fn is_empty(&self) -> bool {
        self.edge_count == 0
    }
}
