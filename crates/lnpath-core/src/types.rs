use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// Millitokens per whole token.
pub const MTOKENS_PER_TOKEN: u64 = 1_000;

/// Serde helper to serialize/deserialize a millitoken amount as a decimal string.
pub mod mtokens_string {
    use serde::{self, de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(mtokens: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&mtokens.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u64>()
            .map_err(|e| D::Error::custom(format!("invalid mtokens {raw:?}: {e}")))
    }
}

/// A Lightning node identity (hex-encoded public key).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(public_key: impl Into<String>) -> Self {
        Self(public_key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Forwarding policy for one direction of a channel, as reported by the daemon.
///
/// Every field is optional on the wire. Graph data gossiped across the network
/// is frequently partial, so completeness is checked when the policy is turned
/// into a directed edge rather than at deserialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// The node this policy leads to when forwarding over the channel.
    #[serde(default)]
    pub public_key: Option<NodeId>,
    /// Flat fee in millitokens, as a decimal string.
    #[serde(default)]
    pub base_fee_mtokens: Option<String>,
    /// Timelock delta in blocks.
    #[serde(default)]
    pub cltv_delta: Option<u32>,
    /// Proportional fee in parts per million.
    #[serde(default)]
    pub fee_rate: Option<u64>,
    #[serde(default)]
    pub is_disabled: bool,
    /// Smallest forwardable HTLC in millitokens, as a decimal string.
    #[serde(default)]
    pub min_htlc_mtokens: Option<String>,
    /// Largest forwardable HTLC in millitokens, as a decimal string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_htlc_mtokens: Option<String>,
}

/// A payment channel with its pair of directional policies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    /// Channel identifier (short channel id, e.g. "700000x1x0").
    pub id: String,
    /// Total capacity in tokens.
    pub capacity: u64,
    /// One policy per endpoint.
    #[serde(default)]
    pub policies: Vec<Policy>,
}

/// An exclusion applied to the graph before searching.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IgnoreEntry {
    /// When present, only the edge arriving at `public_key` over this channel is excluded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub public_key: NodeId,
}

impl IgnoreEntry {
    /// Ignore the directed edge that arrives at `public_key` over `channel`.
    pub fn edge(channel: impl Into<String>, public_key: impl Into<NodeId>) -> Self {
        Self {
            channel: Some(channel.into()),
            public_key: public_key.into(),
        }
    }

    /// Ignore every edge that arrives at `public_key`.
    pub fn node(public_key: impl Into<NodeId>) -> Self {
        Self {
            channel: None,
            public_key: public_key.into(),
        }
    }
}

/// One hop of a computed route: the edge taken to arrive at `public_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hop {
    pub channel: String,
    /// Capacity of `channel` in tokens.
    pub channel_capacity: u64,
    #[serde(with = "mtokens_string")]
    pub base_fee_mtokens: u64,
    pub cltv_delta: u32,
    pub fee_rate: u64,
    pub public_key: NodeId,
    /// Millitokens that must be sent into this hop to clear it and every hop after it.
    #[serde(with = "mtokens_string")]
    pub forward_mtokens: u64,
}

/// A request for a route across a caller-supplied channel graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub channels: Vec<Channel>,
    #[serde(default)]
    pub ignore: Vec<IgnoreEntry>,
    pub start: NodeId,
    pub end: NodeId,
    /// Amount to deliver at `end`, in millitokens.
    pub mtokens: u64,
}

impl RouteRequest {
    /// Check the top-level arguments. Graph sparseness is never an error here.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.start.is_empty() {
            return Err(CoreError::MissingField("start".into()));
        }
        if self.end.is_empty() {
            return Err(CoreError::MissingField("end".into()));
        }
        if self.mtokens == 0 {
            return Err(CoreError::InvalidAmount(
                "mtokens must be greater than zero".into(),
            ));
        }
        if self.start == self.end {
            return Err(CoreError::SelfRoute(self.start.to_string()));
        }
        Ok(())
    }
}

/// Outcome of a route search. `hops` is absent when no path exists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hops: Option<Vec<Hop>>,
}

impl RouteResult {
    pub fn found(hops: Vec<Hop>) -> Self {
        Self { hops: Some(hops) }
    }

    pub fn none() -> Self {
        Self { hops: None }
    }

    pub fn is_found(&self) -> bool {
        self.hops.is_some()
    }
}
