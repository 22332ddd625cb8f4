//! lnpath core: the wire types shared by the route engine, the probe loop and the CLI.

pub mod config;
pub mod error;
pub mod types;

pub use config::LnpathConfig;
pub use error::CoreError;
pub use types::{
    Channel, Hop, IgnoreEntry, NodeId, Policy, RouteRequest, RouteResult, MTOKENS_PER_TOKEN,
};
