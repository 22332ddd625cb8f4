//! lnpath routing: local route computation over a Lightning channel graph.
//!
//! This crate provides:
//! - [`normalize_channel`]: turns a channel's raw policy pair into directed edges.
//! - [`ChannelGraph`]: a directed multigraph indexed by arrival node.
//! - [`IgnoreFilter`]: channel- and node-scoped exclusions applied before search.
//! - [`cost`]: fee, amount and timelock cost of crossing an edge.
//! - [`PathFinder`]: a destination-anchored Dijkstra search for the cheapest route.
//! - [`Route`] and [`assemble_hops`]: hop lists with forwarded amounts and totals.
//! - [`NetworkSummary`]: per-node channel counts and capacity.

pub mod cost;
pub mod error;
pub mod graph;
pub mod ignore;
pub mod pathfinder;
pub mod policy;
pub mod route;
pub mod summary;

// Re-exports for convenience.
pub use error::RoutingError;
pub use graph::ChannelGraph;
pub use ignore::IgnoreFilter;
pub use pathfinder::{find_route, PathFinder, PathFinderConfig};
pub use policy::{normalize_channel, ChannelEdges, DirectedEdge};
pub use route::{assemble_hops, Route};
pub use summary::NetworkSummary;
