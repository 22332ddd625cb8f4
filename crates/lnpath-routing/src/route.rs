use lnpath_core::{Hop, MTOKENS_PER_TOKEN};
use serde::{Deserialize, Serialize};

use crate::cost;
use crate::error::RoutingError;
use crate::policy::DirectedEdge;

/// Turn a start-to-end chain of edges into hops annotated with forwarded amounts.
///
/// Amounts are worked out from the destination back: the last hop must carry
/// `mtokens` plus its fee, and every earlier hop carries what the next one
/// needs plus its own fee. The output keeps payment order.
pub fn assemble_hops(path: &[DirectedEdge], mtokens: u64) -> Result<Vec<Hop>, RoutingError> {
    let mut forward = mtokens;
    let mut hops = path
        .iter()
        .rev()
        .map(|edge| -> Result<Hop, RoutingError> {
            forward = cost::amount_required_at_from(edge, forward).ok_or_else(|| {
                RoutingError::AmountOverflow {
                    channel: edge.channel.clone(),
                }
            })?;
            Ok(Hop {
                channel: edge.channel.clone(),
                channel_capacity: edge.capacity,
                base_fee_mtokens: edge.base_fee_mtokens,
                cltv_delta: edge.cltv_delta,
                fee_rate: edge.fee_rate,
                public_key: edge.to.clone(),
                forward_mtokens: forward,
            })
        })
        .collect::<Result<Vec<_>, RoutingError>>()?;
    hops.reverse();
    Ok(hops)
}

/// Payment-level totals for an assembled hop list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Ordered hops from the start toward the destination.
    pub hops: Vec<Hop>,
    /// Amount delivered at the destination.
    #[serde(with = "lnpath_core::types::mtokens_string")]
    pub mtokens: u64,
    /// Amount sent by the start node, fees included.
    #[serde(with = "lnpath_core::types::mtokens_string")]
    pub total_mtokens: u64,
    #[serde(with = "lnpath_core::types::mtokens_string")]
    pub fee_mtokens: u64,
    /// Timelock delta of every hop plus the final delta.
    pub cltv_delta: u32,
    /// Absolute block height at which the first HTLC times out.
    pub timeout: u32,
}

impl Route {
    /// Summarize `hops` for a payment of `mtokens` made at block `height`.
    pub fn from_hops(
        hops: Vec<Hop>,
        mtokens: u64,
        height: u32,
        final_cltv_delta: u32,
    ) -> Result<Self, RoutingError> {
        let total_mtokens = hops
            .first()
            .map(|hop| hop.forward_mtokens)
            .ok_or(RoutingError::EmptyRoute)?;

        let cltv_delta = hops
            .iter()
            .fold(final_cltv_delta, |total, hop| total.saturating_add(hop.cltv_delta));

        Ok(Self {
            hops,
            mtokens,
            total_mtokens,
            fee_mtokens: total_mtokens.saturating_sub(mtokens),
            cltv_delta,
            timeout: height.saturating_add(cltv_delta),
        })
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    /// Whole tokens sent, rounded down.
    pub fn tokens(&self) -> u64 {
        self.total_mtokens / MTOKENS_PER_TOKEN
    }

    /// Whole-token fee, rounded down.
    pub fn fee(&self) -> u64 {
        self.fee_mtokens / MTOKENS_PER_TOKEN
    }
}
