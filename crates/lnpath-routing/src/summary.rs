use std::collections::{BTreeMap, BTreeSet};

use lnpath_core::{Channel, NodeId};
use serde::{Deserialize, Serialize};

/// Per-node and network-wide aggregates over a channel list.
///
/// Endpoints come from the channel's policy keys. A channel is counted for
/// each distinct endpoint it names, whether or not its policies are complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub channel_counts: BTreeMap<NodeId, usize>,
    /// Sum of channel capacities per node, in tokens.
    pub capacities: BTreeMap<NodeId, u64>,
    pub channel_count: usize,
    pub total_capacity: u64,
}

impl NetworkSummary {
    pub fn from_channels(channels: &[Channel]) -> Self {
        channels.iter().fold(Self::default(), |summary, channel| {
            let endpoints: BTreeSet<&NodeId> = channel
                .policies
                .iter()
                .filter_map(|policy| policy.public_key.as_ref())
                .collect();

            let Self {
                mut channel_counts,
                mut capacities,
                channel_count,
                total_capacity,
            } = summary;

            for node in endpoints {
                *channel_counts.entry(node.clone()).or_default() += 1;
                let capacity = capacities.entry(node.clone()).or_default();
                *capacity = capacity.saturating_add(channel.capacity);
            }

            Self {
                channel_counts,
                capacities,
                channel_count: channel_count + 1,
                total_capacity: total_capacity.saturating_add(channel.capacity),
            }
        })
    }

    /// Number of channels `node` participates in; zero when unknown.
    pub fn channel_count(&self, node: &NodeId) -> usize {
        self.channel_counts.get(node).copied().unwrap_or(0)
    }

    /// Total capacity of `node`'s channels, in tokens.
    pub fn capacity(&self, node: &NodeId) -> u64 {
        self.capacities.get(node).copied().unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.channel_counts.len()
    }
}
