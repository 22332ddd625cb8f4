use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use lnpath_core::{Channel, Hop, NodeId};
use tokio::sync::RwLock;

use crate::error::ProbeError;
use crate::traits::{GraphSource, PaymentProber};
use crate::types::ProbeOutcome;

/// A graph source serving a fixed, replaceable channel snapshot.
pub struct InMemoryGraph {
    channels: RwLock<Vec<Channel>>,
}

impl InMemoryGraph {
    pub fn new(channels: Vec<Channel>) -> Self {
        Self {
            channels: RwLock::new(channels),
        }
    }

    /// Swap in a new snapshot, returning the previous one.
    pub async fn replace(&self, channels: Vec<Channel>) -> Vec<Channel> {
        let mut guard = self.channels.write().await;
        std::mem::replace(&mut *guard, channels)
    }
}

#[async_trait]
impl GraphSource for InMemoryGraph {
    async fn channels(&self) -> Result<Vec<Channel>, ProbeError> {
        Ok(self.channels.read().await.clone())
    }
}

/// Simulates probing against known per-direction liquidity.
///
/// Each `(channel, public_key)` direction may be given the most millitokens
/// it can currently carry toward `public_key`. Directions without an entry
/// are assumed to carry anything. Useful for testing and for dry runs
/// against balances learned from earlier payments.
pub struct SimulatedProber {
    /// (channel, arrival node) -> spendable millitokens.
    liquidity: DashMap<(String, NodeId), u64>,
    probes: AtomicUsize,
}

impl SimulatedProber {
    pub fn new() -> Self {
        Self {
            liquidity: DashMap::new(),
            probes: AtomicUsize::new(0),
        }
    }

    /// Record how much can move over `channel` toward `public_key`.
    pub fn set_liquidity(&self, channel: impl Into<String>, public_key: impl Into<NodeId>, mtokens: u64) {
        self.liquidity
            .insert((channel.into(), public_key.into()), mtokens);
    }

    /// Forget a liquidity limit. Returns true if one was set.
    pub fn clear_liquidity(&self, channel: &str, public_key: &NodeId) -> bool {
        self.liquidity
            .remove(&(channel.to_string(), public_key.clone()))
            .is_some()
    }

    /// Number of probes sent so far.
    pub fn probe_count(&self) -> usize {
        self.probes.load(Ordering::Relaxed)
    }
}

impl Default for SimulatedProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentProber for SimulatedProber {
    async fn probe(&self, hops: &[Hop], _mtokens: u64) -> Result<ProbeOutcome, ProbeError> {
        self.probes.fetch_add(1, Ordering::Relaxed);

        for hop in hops {
            let key = (hop.channel.clone(), hop.public_key.clone());
            if let Some(available) = self.liquidity.get(&key) {
                if hop.forward_mtokens > *available {
                    tracing::debug!(
                        channel = %hop.channel,
                        public_key = %hop.public_key,
                        required = hop.forward_mtokens,
                        available = *available,
                        "simulated probe failure"
                    );
                    return Ok(ProbeOutcome::FailedAt {
                        channel: hop.channel.clone(),
                        public_key: hop.public_key.clone(),
                    });
                }
            }
        }

        Ok(ProbeOutcome::Reached)
    }
}
