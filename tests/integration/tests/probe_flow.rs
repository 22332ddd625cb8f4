//! Integration test: probe, fail, ignore, retry.
//!
//! Drives the probe loop over a JSON graph snapshot with simulated channel
//! liquidity, checking that each failed probe narrows the next search.

use std::sync::Arc;

use async_trait::async_trait;
use lnpath_core::{Hop, IgnoreEntry, NodeId};
use lnpath_integration_tests::{channel, channels, policy};
use lnpath_probe::{InMemoryGraph, PaymentProber, ProbeError, ProbeLoop, ProbeOutcome, SimulatedProber};

/// Delegates to a shared simulator so the test can inspect it afterwards.
struct Probe(Arc<SimulatedProber>);

#[async_trait]
impl PaymentProber for Probe {
    async fn probe(&self, hops: &[Hop], mtokens: u64) -> Result<ProbeOutcome, ProbeError> {
        self.0.probe(hops, mtokens).await
    }
}

/// A diamond: ALICE reaches DAVID through BOB (cheap) or CAROL (dearer).
fn diamond() -> InMemoryGraph {
    InMemoryGraph::new(channels(vec![
        channel("AxB", 1_000_000, [policy("ALICE", "0", 0, "1"), policy("BOB", "100", 0, "1")]),
        channel("BxD", 1_000_000, [policy("BOB", "0", 0, "1"), policy("DAVID", "100", 0, "1")]),
        channel("AxC", 1_000_000, [policy("ALICE", "0", 0, "1"), policy("CAROL", "500", 0, "1")]),
        channel("CxD", 1_000_000, [policy("CAROL", "0", 0, "1"), policy("DAVID", "500", 0, "1")]),
    ]))
}

#[tokio::test]
async fn test_probe_falls_back_to_dearer_path() {
    let prober = Arc::new(SimulatedProber::new());
    prober.set_liquidity("BxD", "DAVID", 10_000);

    let found = ProbeLoop::new(Box::new(diamond()), Box::new(Probe(prober.clone())))
        .find_working_route(&NodeId::from("ALICE"), &NodeId::from("DAVID"), 50_000, Vec::new())
        .await
        .expect("probe loop runs")
        .expect("a working route exists");

    let path: Vec<_> = found.hops.iter().map(|h| h.public_key.as_str()).collect();
    assert_eq!(path, vec!["CAROL", "DAVID"]);
    assert_eq!(found.attempts, 2);
    assert_eq!(found.ignored, vec![IgnoreEntry::edge("BxD", "DAVID")]);
    assert_eq!(prober.probe_count(), 2);
}

#[tokio::test]
async fn test_small_payment_uses_cheap_path() {
    let prober = Arc::new(SimulatedProber::new());
    prober.set_liquidity("BxD", "DAVID", 10_000);

    let found = ProbeLoop::new(Box::new(diamond()), Box::new(Probe(prober)))
        .find_working_route(&NodeId::from("ALICE"), &NodeId::from("DAVID"), 5_000, Vec::new())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(found.attempts, 1);
    assert_eq!(found.hops[0].public_key.as_str(), "BOB");
    // 5_000 delivered + 100 at DAVID + 100 at BOB.
    assert_eq!(found.hops[0].forward_mtokens, 5_200);
}

#[tokio::test]
async fn test_graph_update_is_picked_up() {
    let graph = diamond();
    graph.replace(Vec::new()).await;

    let found = ProbeLoop::new(Box::new(graph), Box::new(SimulatedProber::new()))
        .find_working_route(&NodeId::from("ALICE"), &NodeId::from("DAVID"), 5_000, Vec::new())
        .await
        .unwrap();
    assert!(found.is_none());
}
