use async_trait::async_trait;
use lnpath_core::{Channel, Hop};

use crate::error::ProbeError;
use crate::types::ProbeOutcome;

/// Read-only source of channel graph snapshots.
///
/// The daemon's describe-graph call is the production implementation.
#[async_trait]
pub trait GraphSource: Send + Sync {
    /// Return every known channel with its policy pair.
    async fn channels(&self) -> Result<Vec<Channel>, ProbeError>;
}

/// Sends a payment probe (an HTLC with an unknown payment hash) along a route.
#[async_trait]
pub trait PaymentProber: Send + Sync {
    /// Probe `hops` for a delivery of `mtokens`.
    ///
    /// A rejected probe is an `Ok` outcome; `Err` is reserved for failures
    /// to talk to the daemon at all.
    async fn probe(&self, hops: &[Hop], mtokens: u64) -> Result<ProbeOutcome, ProbeError>;
}
