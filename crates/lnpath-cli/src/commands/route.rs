//! `lnpath route`: Compute the cheapest route across a graph snapshot.

use clap::Args;
use std::path::PathBuf;

use lnpath_core::{IgnoreEntry, LnpathConfig, NodeId, RouteRequest};
use lnpath_routing::{PathFinder, PathFinderConfig, Route};

#[derive(Args, Debug)]
pub struct RouteArgs {
    /// JSON graph snapshot (`{"channels": [...]}`).
    #[arg(short, long)]
    pub graph: PathBuf,

    /// Public key of the paying node.
    #[arg(short, long)]
    pub start: String,

    /// Public key of the destination.
    #[arg(short, long)]
    pub end: String,

    /// Amount to deliver, in millitokens.
    #[arg(short, long)]
    pub mtokens: u64,

    /// Exclusion: `CHANNEL:PUBLIC_KEY` for one direction, or `PUBLIC_KEY` for a node.
    #[arg(short, long, value_parser = parse_ignore)]
    pub ignore: Vec<IgnoreEntry>,

    /// Current block height; adds fee and timeout totals to the output.
    #[arg(long)]
    pub height: Option<u32>,
}

fn parse_ignore(raw: &str) -> Result<IgnoreEntry, String> {
    match raw.split_once(':') {
        Some((channel, public_key)) if !channel.is_empty() && !public_key.is_empty() => {
            Ok(IgnoreEntry::edge(channel, public_key))
        }
        Some(_) => Err(format!("expected CHANNEL:PUBLIC_KEY, got {raw:?}")),
        None if raw.is_empty() => Err("empty ignore entry".into()),
        None => Ok(IgnoreEntry::node(raw)),
    }
}

pub fn run(args: &RouteArgs, config: &LnpathConfig) -> anyhow::Result<()> {
    let request = RouteRequest {
        channels: super::load_graph(&args.graph)?,
        ignore: args.ignore.clone(),
        start: NodeId::new(args.start.clone()),
        end: NodeId::new(args.end.clone()),
        mtokens: args.mtokens,
    };

    let pathfinder = PathFinder::new(PathFinderConfig {
        cltv_limit: config.routing.cltv_limit,
    });
    let result = pathfinder.find_route(&request)?;

    let output = match (result.hops, args.height) {
        (Some(hops), Some(height)) => serde_json::to_value(Route::from_hops(
            hops,
            args.mtokens,
            height,
            config.routing.final_cltv_delta,
        )?)?,
        (hops, _) => serde_json::to_value(lnpath_core::RouteResult { hops })?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
