use lnpath_core::{Channel, NodeId, Policy};

/// One usable direction of a channel: forwarding from `from` to `to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedEdge {
    pub channel: String,
    /// Channel capacity in tokens.
    pub capacity: u64,
    pub from: NodeId,
    pub to: NodeId,
    pub base_fee_mtokens: u64,
    /// Parts per million of the forwarded amount.
    pub fee_rate: u64,
    pub cltv_delta: u32,
    pub is_disabled: bool,
    pub min_htlc_mtokens: u64,
    pub max_htlc_mtokens: Option<u64>,
}

/// Both directions of a channel. A slot is `None` when its policy is incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelEdges {
    pub edges: [Option<DirectedEdge>; 2],
}

impl ChannelEdges {
    pub fn iter(&self) -> impl Iterator<Item = &DirectedEdge> {
        self.edges.iter().flatten()
    }

    pub fn into_edges(self) -> impl Iterator<Item = DirectedEdge> {
        self.edges.into_iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.iter().all(Option::is_none)
    }
}

/// Convert a channel's raw policy pair into directed edges.
///
/// The policy keyed by `public_key` describes forwarding toward that node, so
/// its edge runs from the opposite endpoint to `public_key`. A channel that
/// does not carry exactly two policies with known endpoints yields nothing.
pub fn normalize_channel(channel: &Channel) -> ChannelEdges {
    let [first, second] = channel.policies.as_slice() else {
        tracing::debug!(
            channel = %channel.id,
            policies = channel.policies.len(),
            "skipping channel without a policy pair"
        );
        return ChannelEdges::default();
    };

    let (Some(first_key), Some(second_key)) = (&first.public_key, &second.public_key) else {
        tracing::debug!(channel = %channel.id, "skipping channel with unknown endpoint");
        return ChannelEdges::default();
    };

    ChannelEdges {
        edges: [
            edge_from_policy(channel, first, second_key),
            edge_from_policy(channel, second, first_key),
        ],
    }
}

/// Build the edge `peer -> policy.public_key`, or `None` if the policy is incomplete.
fn edge_from_policy(channel: &Channel, policy: &Policy, peer: &NodeId) -> Option<DirectedEdge> {
    let to = policy.public_key.clone()?;

    let parsed = (|| {
        let base_fee_mtokens = parse_mtokens(policy.base_fee_mtokens.as_deref()?)?;
        let min_htlc_mtokens = parse_mtokens(policy.min_htlc_mtokens.as_deref()?)?;
        let max_htlc_mtokens = match policy.max_htlc_mtokens.as_deref() {
            Some(raw) => Some(parse_mtokens(raw)?),
            None => None,
        };
        Some((
            base_fee_mtokens,
            policy.fee_rate?,
            policy.cltv_delta?,
            min_htlc_mtokens,
            max_htlc_mtokens,
        ))
    })();

    let Some((base_fee_mtokens, fee_rate, cltv_delta, min_htlc_mtokens, max_htlc_mtokens)) = parsed
    else {
        tracing::debug!(channel = %channel.id, to = %to, "dropping incomplete policy");
        return None;
    };

    Some(DirectedEdge {
        channel: channel.id.clone(),
        capacity: channel.capacity,
        from: peer.clone(),
        to,
        base_fee_mtokens,
        fee_rate,
        cltv_delta,
        is_disabled: policy.is_disabled,
        min_htlc_mtokens,
        max_htlc_mtokens,
    })
}

fn parse_mtokens(raw: &str) -> Option<u64> {
    raw.trim().parse().ok()
}
