use lnpath_core::{Hop, IgnoreEntry, NodeId};
use serde::{Deserialize, Serialize};

/// Result of sending a probe along a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeOutcome {
    /// The probe reached the destination.
    Reached,
    /// The HTLC was rejected on the edge arriving at `public_key` over `channel`.
    FailedAt { channel: String, public_key: NodeId },
}

impl ProbeOutcome {
    pub fn is_reached(&self) -> bool {
        matches!(self, Self::Reached)
    }
}

/// A route that a probe successfully traversed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbedRoute {
    pub hops: Vec<Hop>,
    /// Number of routes probed, including the successful one.
    pub attempts: usize,
    /// Ignore list in effect when the route was found.
    pub ignored: Vec<IgnoreEntry>,
}
