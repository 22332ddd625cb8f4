//! Cost of traversing a directed edge.
//!
//! Costs are evaluated backward: the caller knows how much the `to` node must
//! forward toward the destination and asks what `from` has to send in.

use lnpath_core::MTOKENS_PER_TOKEN;

use crate::policy::DirectedEdge;

const FEE_RATE_DENOMINATOR: u128 = 1_000_000;

/// Why an edge cannot carry a given amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Infeasible {
    #[error("edge is disabled")]
    Disabled,

    #[error("amount {required} is below the minimum HTLC {minimum}")]
    BelowMinimum { required: u64, minimum: u64 },

    #[error("amount {required} exceeds the maximum HTLC {maximum}")]
    AboveMaximum { required: u64, maximum: u64 },

    #[error("{tokens} tokens exceed channel capacity {capacity}")]
    ExceedsCapacity { tokens: u64, capacity: u64 },

    #[error("amount overflows")]
    Overflow,
}

/// The price of one feasible traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeCost {
    /// Fee charged for the edge, in millitokens.
    pub fee_mtokens: u64,
    /// What `from` must send so that `to` can forward the requested amount.
    pub amount_in_mtokens: u64,
    pub cltv_delta: u32,
}

/// `base_fee + floor(forward * fee_rate / 1_000_000)`, or `None` on overflow.
pub fn fee(edge: &DirectedEdge, forward_mtokens: u64) -> Option<u64> {
    let proportional = forward_mtokens as u128 * edge.fee_rate as u128 / FEE_RATE_DENOMINATOR;
    u64::try_from(proportional)
        .ok()?
        .checked_add(edge.base_fee_mtokens)
}

/// The amount the upstream node sends into `edge` so `forward_mtokens` leaves the far side.
pub fn amount_required_at_from(edge: &DirectedEdge, forward_mtokens: u64) -> Option<u64> {
    forward_mtokens.checked_add(fee(edge, forward_mtokens)?)
}

pub fn cltv_contribution(edge: &DirectedEdge) -> u32 {
    edge.cltv_delta
}

/// Price `edge` for `forward_mtokens`, rejecting it when it cannot carry the amount.
pub fn evaluate(edge: &DirectedEdge, forward_mtokens: u64) -> Result<EdgeCost, Infeasible> {
    if edge.is_disabled {
        return Err(Infeasible::Disabled);
    }

    let fee_mtokens = fee(edge, forward_mtokens).ok_or(Infeasible::Overflow)?;
    let required = forward_mtokens
        .checked_add(fee_mtokens)
        .ok_or(Infeasible::Overflow)?;

    if required < edge.min_htlc_mtokens {
        return Err(Infeasible::BelowMinimum {
            required,
            minimum: edge.min_htlc_mtokens,
        });
    }

    let tokens = required / MTOKENS_PER_TOKEN;
    if tokens > edge.capacity {
        return Err(Infeasible::ExceedsCapacity {
            tokens,
            capacity: edge.capacity,
        });
    }

    if let Some(maximum) = edge.max_htlc_mtokens {
        if required > maximum {
            return Err(Infeasible::AboveMaximum { required, maximum });
        }
    }

    Ok(EdgeCost {
        fee_mtokens,
        amount_in_mtokens: required,
        cltv_delta: cltv_contribution(edge),
    })
}
