//! `lnpath summary`: Per-node channel counts and capacity.

use clap::Args;
use std::path::PathBuf;

use lnpath_routing::NetworkSummary;

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// JSON graph snapshot (`{"channels": [...]}`).
    #[arg(short, long)]
    pub graph: PathBuf,
}

pub fn run(args: &SummaryArgs) -> anyhow::Result<()> {
    let channels = super::load_graph(&args.graph)?;
    let summary = NetworkSummary::from_channels(&channels);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
