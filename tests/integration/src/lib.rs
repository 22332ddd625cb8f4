//! Shared fixtures for the integration tests.

use lnpath_core::Channel;
use serde_json::{json, Value};

/// A policy record as the daemon reports it.
pub fn policy(public_key: &str, base_fee_mtokens: &str, fee_rate: u64, min_htlc_mtokens: &str) -> Value {
    json!({
        "public_key": public_key,
        "base_fee_mtokens": base_fee_mtokens,
        "cltv_delta": 40,
        "fee_rate": fee_rate,
        "is_disabled": false,
        "min_htlc_mtokens": min_htlc_mtokens
    })
}

/// A channel record with its policy pair.
pub fn channel(id: &str, capacity: u64, policies: [Value; 2]) -> Value {
    json!({
        "id": id,
        "capacity": capacity,
        "policies": policies
    })
}

/// Parse channel records into typed channels.
pub fn channels(records: Vec<Value>) -> Vec<Channel> {
    serde_json::from_value(Value::Array(records)).expect("channel fixtures parse")
}
