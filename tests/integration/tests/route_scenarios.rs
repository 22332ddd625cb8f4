//! Integration test: route requests in their JSON wire shape.
//!
//! Exercises request parsing, the route engine and result serialization
//! together, the way the route-construction wrappers call them.

use lnpath_core::{RouteRequest, RouteResult};
use lnpath_integration_tests::{channel, policy};
use lnpath_routing::{find_route, NetworkSummary, Route};
use serde_json::{json, Value};

fn route(request: Value) -> RouteResult {
    let request: RouteRequest = serde_json::from_value(request).expect("request parses");
    find_route(&request).expect("request is valid")
}

fn keys(result: &RouteResult) -> Vec<String> {
    result
        .hops
        .as_ref()
        .expect("route found")
        .iter()
        .map(|hop| hop.public_key.to_string())
        .collect()
}

/// ALICE -> BOB -> ELLEN is short but BOB charges 1% to reach ELLEN.
/// ALICE -> CAROL -> DAVID -> ELLEN costs a flat 1 token per hop.
fn five_node_channels() -> Vec<Value> {
    vec![
        channel(
            "ALICExBOB",
            1_000_000,
            [policy("ALICE", "1000", 1, "1000"), policy("BOB", "1000", 1, "1000")],
        ),
        channel(
            "BOBxELLEN",
            1_000_000,
            [policy("BOB", "1000", 1, "1000"), policy("ELLEN", "1000", 10_000, "1000")],
        ),
        channel(
            "ALICExCAROL",
            1_000_000,
            [policy("ALICE", "1000", 1, "1000"), policy("CAROL", "1000", 1, "1000")],
        ),
        channel(
            "CAROLxDAVID",
            1_000_000,
            [policy("CAROL", "1000", 1, "1000"), policy("DAVID", "1000", 1, "1000")],
        ),
        channel(
            "DAVIDxELLEN",
            1_000_000,
            [policy("DAVID", "1000", 1, "1000"), policy("ELLEN", "1000", 1, "1000")],
        ),
    ]
}

// =========================================================================
// Concrete scenarios
// =========================================================================

#[test]
fn test_direct_path() {
    let result = route(json!({
        "channels": [channel(
            "ALICExBOB",
            1_000_000,
            [policy("ALICE", "1000", 1, "1"), policy("BOB", "1000", 1, "1")],
        )],
        "start": "ALICE",
        "end": "BOB",
        "mtokens": 100
    }));

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({
            "hops": [{
                "channel": "ALICExBOB",
                "channel_capacity": 1_000_000,
                "base_fee_mtokens": "1000",
                "cltv_delta": 40,
                "fee_rate": 1,
                "public_key": "BOB",
                "forward_mtokens": "1100"
            }]
        })
    );
}

#[test]
fn test_cost_beats_hop_count() {
    let result = route(json!({
        "channels": five_node_channels(),
        "start": "ALICE",
        "end": "ELLEN",
        "mtokens": 500_000
    }));
    assert_eq!(keys(&result), vec!["CAROL", "DAVID", "ELLEN"]);
}

#[test]
fn test_forced_detour() {
    let result = route(json!({
        "channels": five_node_channels(),
        "ignore": [{"channel": "CAROLxDAVID", "public_key": "DAVID"}],
        "start": "ALICE",
        "end": "ELLEN",
        "mtokens": 500_000
    }));
    assert_eq!(keys(&result), vec!["BOB", "ELLEN"]);
}

#[test]
fn test_no_connectivity() {
    let result = route(json!({
        "channels": [channel(
            "ALICExBOB",
            1_000_000,
            [policy("ALICE", "1000", 1, "1"), policy("BOB", "1000", 1, "1")],
        )],
        "start": "ALICE",
        "end": "CAROL",
        "mtokens": 100
    }));
    assert!(result.hops.is_none());
    assert_eq!(serde_json::to_value(&result).unwrap(), json!({}));
}

// =========================================================================
// Feasibility properties
// =========================================================================

#[test]
fn test_below_min_htlc() {
    let result = route(json!({
        "channels": [channel(
            "ALICExBOB",
            1_000_000,
            [policy("ALICE", "0", 0, "1000"), policy("BOB", "0", 0, "1000")],
        )],
        "start": "ALICE",
        "end": "BOB",
        "mtokens": 999
    }));
    assert!(!result.is_found());
}

#[test]
fn test_disabled_channel() {
    let mut alice = policy("ALICE", "1000", 1, "1");
    let mut bob = policy("BOB", "1000", 1, "1");
    alice["is_disabled"] = json!(true);
    bob["is_disabled"] = json!(true);

    let result = route(json!({
        "channels": [channel("ALICExBOB", 1_000_000, [alice, bob])],
        "start": "ALICE",
        "end": "BOB",
        "mtokens": 100
    }));
    assert!(!result.is_found());
}

#[test]
fn test_over_capacity() {
    let result = route(json!({
        "channels": [channel(
            "ALICExBOB",
            100,
            [policy("ALICE", "1000", 1, "1"), policy("BOB", "1000", 1, "1")],
        )],
        "start": "ALICE",
        "end": "BOB",
        "mtokens": 200_000
    }));
    assert!(!result.is_found());
}

#[test]
fn test_malformed_policy_record() {
    let broken = json!({"public_key": "BOB", "is_disabled": false});
    let result = route(json!({
        "channels": [channel("ALICExBOB", 1_000_000, [policy("ALICE", "1000", 1, "1"), broken])],
        "start": "ALICE",
        "end": "BOB",
        "mtokens": 100
    }));
    assert!(!result.is_found());
}

#[test]
fn test_identical_inputs_identical_routes() {
    let request = json!({
        "channels": five_node_channels(),
        "start": "ALICE",
        "end": "ELLEN",
        "mtokens": 123_456
    });
    assert_eq!(route(request.clone()), route(request));
}

// =========================================================================
// Argument validation
// =========================================================================

#[test]
fn test_missing_arguments_are_errors() {
    let missing_channels: Result<RouteRequest, _> = serde_json::from_value(json!({
        "start": "ALICE",
        "end": "BOB",
        "mtokens": 100
    }));
    assert!(missing_channels.is_err());

    let empty_start: RouteRequest = serde_json::from_value(json!({
        "channels": [],
        "start": "",
        "end": "BOB",
        "mtokens": 100
    }))
    .unwrap();
    assert!(find_route(&empty_start).is_err());
}

// =========================================================================
// Route totals and network summary
// =========================================================================

#[test]
fn test_route_totals_from_search() {
    let result = route(json!({
        "channels": five_node_channels(),
        "start": "ALICE",
        "end": "ELLEN",
        "mtokens": 500_000
    }));
    let route = Route::from_hops(result.hops.unwrap(), 500_000, 700_000, 40).unwrap();

    assert_eq!(route.hop_count(), 3);
    assert_eq!(route.total_mtokens, route.hops[0].forward_mtokens);
    assert_eq!(route.fee_mtokens, route.total_mtokens - 500_000);
    assert_eq!(route.timeout, 700_000 + 3 * 40 + 40);
}

#[test]
fn test_summary_of_five_node_network() {
    let channels = lnpath_integration_tests::channels(five_node_channels());
    let summary = NetworkSummary::from_channels(&channels);

    assert_eq!(summary.channel_count, 5);
    assert_eq!(summary.node_count(), 5);
    assert_eq!(summary.channel_count(&"ELLEN".into()), 2);
    assert_eq!(summary.capacity(&"ALICE".into()), 2_000_000);
}
