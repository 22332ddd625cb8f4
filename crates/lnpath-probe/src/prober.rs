use lnpath_core::config::ProbeConfig;
use lnpath_core::{IgnoreEntry, NodeId, RouteRequest};
use lnpath_routing::PathFinder;

use crate::error::ProbeError;
use crate::traits::{GraphSource, PaymentProber};
use crate::types::{ProbeOutcome, ProbedRoute};

/// Finds a route that actually carries a payment.
///
/// Each attempt computes the cheapest route under the current ignore list and
/// probes it. A probe rejected at some edge adds that edge to the ignore list
/// and the search runs again over the same graph snapshot.
pub struct ProbeLoop {
    graph: Box<dyn GraphSource>,
    prober: Box<dyn PaymentProber>,
    pathfinder: PathFinder,
    max_attempts: usize,
}

impl ProbeLoop {
    /// Create a probe loop with the default configuration.
    pub fn new(graph: Box<dyn GraphSource>, prober: Box<dyn PaymentProber>) -> Self {
        Self {
            graph,
            prober,
            pathfinder: PathFinder::with_defaults(),
            max_attempts: ProbeConfig::default().max_attempts,
        }
    }

    pub fn with_config(mut self, config: &ProbeConfig) -> Self {
        self.max_attempts = config.max_attempts;
        self
    }

    pub fn with_pathfinder(mut self, pathfinder: PathFinder) -> Self {
        self.pathfinder = pathfinder;
        self
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Probe routes from `start` to `end` until one reaches the destination.
    ///
    /// Returns `Ok(None)` once the ignore list has cut every path.
    pub async fn find_working_route(
        &self,
        start: &NodeId,
        end: &NodeId,
        mtokens: u64,
        ignore: Vec<IgnoreEntry>,
    ) -> Result<Option<ProbedRoute>, ProbeError> {
        let channels = self.graph.channels().await?;
        tracing::info!(
            %start,
            %end,
            mtokens,
            channels = channels.len(),
            "probing for a working route"
        );

        let mut request = RouteRequest {
            channels,
            ignore,
            start: start.clone(),
            end: end.clone(),
            mtokens,
        };

        for attempt in 1..=self.max_attempts {
            let Some(hops) = self.pathfinder.find_route(&request)?.hops else {
                tracing::info!(attempt, ignored = request.ignore.len(), "no route left to probe");
                return Ok(None);
            };

            match self.prober.probe(&hops, mtokens).await? {
                ProbeOutcome::Reached => {
                    tracing::info!(attempt, hops = hops.len(), "probe reached destination");
                    return Ok(Some(ProbedRoute {
                        hops,
                        attempts: attempt,
                        ignored: request.ignore,
                    }));
                }
                ProbeOutcome::FailedAt {
                    channel,
                    public_key,
                } => {
                    let entry = IgnoreEntry::edge(channel.clone(), public_key.clone());
                    if request.ignore.contains(&entry) {
                        return Err(ProbeError::RepeatedFailure {
                            channel,
                            public_key,
                        });
                    }
                    tracing::warn!(
                        attempt,
                        %channel,
                        %public_key,
                        "probe failed, ignoring edge"
                    );
                    request.ignore.push(entry);
                }
            }
        }

        Err(ProbeError::AttemptsExhausted {
            attempts: self.max_attempts,
        })
    }
}
