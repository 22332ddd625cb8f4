use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use lnpath_core::{NodeId, RouteRequest, RouteResult};

use crate::cost;
use crate::error::RoutingError;
use crate::graph::ChannelGraph;
use crate::ignore::IgnoreFilter;
use crate::policy::DirectedEdge;
use crate::route::assemble_hops;

/// Configuration for the PathFinder algorithm.
#[derive(Debug, Clone, Default)]
pub struct PathFinderConfig {
    /// Largest total timelock delta a route may accumulate, if any.
    pub cltv_limit: Option<u32>,
}

/// Computes cost-minimal payment routes over a caller-supplied channel graph.
///
/// The search runs backward, from the destination toward the start. Fees are
/// charged on the amount a node forwards, and that amount depends on every
/// hop downstream of it, so only the destination knows its amount up front.
/// Edges are relaxed against payment flow, from a settled node `v` to every
/// `u` with an edge `u -> v`.
///
/// A node may hold several [`Label`]s. A cheaper label forwards a smaller
/// amount, which an upstream minimum HTLC can reject, and with a CLTV limit a
/// cheaper label may also be the longer one. A label is only discarded when a
/// settled label at the same node is no more expensive, no longer (when a
/// limit applies) and clears every minimum HTLC in the graph that it could.
///
/// A `PathFinder` holds no graph state and can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct PathFinder {
    config: PathFinderConfig,
}

/// One way of routing from `node` to the destination.
#[derive(Debug, Clone)]
struct Label {
    node: NodeId,
    /// Fees accumulated between `node` and the destination.
    cost: u64,
    /// What `node` must send toward the destination.
    forward_mtokens: u64,
    /// Timelock delta accumulated between `node` and the destination.
    cltv: u32,
    /// First edge on the way to the destination and the label at its far end.
    /// `None` at the destination.
    next: Option<(DirectedEdge, usize)>,
}

impl Label {
    /// Whether every upstream extension of `other` is matched by one of `self`
    /// at no greater cost.
    ///
    /// Extensions of the cheaper label carry smaller amounts, so it only wins
    /// outright once its amount is at least `amount_floor`, the largest minimum
    /// HTLC in the graph.
    fn dominates(&self, other: &Label, compare_cltv: bool, amount_floor: u64) -> bool {
        self.cost <= other.cost
            && (!compare_cltv || self.cltv <= other.cltv)
            && (self.forward_mtokens >= other.forward_mtokens
                || self.forward_mtokens >= amount_floor)
    }
}

/// Frontier entry. Ordered so the max-heap pops the lowest cost first, then
/// the smallest node id, then the oldest label.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frontier {
    cost: u64,
    node: NodeId,
    label: usize,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.label.cmp(&self.label))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Whether the path from label `index` to the destination passes through `node`.
fn passes_through(labels: &[Label], index: usize, node: &NodeId) -> bool {
    let mut cursor = Some(index);
    while let Some(i) = cursor {
        if &labels[i].node == node {
            return true;
        }
        cursor = labels[i].next.as_ref().map(|(_, next)| *next);
    }
    false
}

impl PathFinder {
    /// Create a new PathFinder with the given configuration.
    pub fn new(config: PathFinderConfig) -> Self {
        Self { config }
    }

    /// Create a PathFinder with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Find the cheapest route described by `request`.
    ///
    /// Returns an empty [`RouteResult`] when the destination is unreachable;
    /// only malformed top-level arguments are errors.
    pub fn find_route(&self, request: &RouteRequest) -> Result<RouteResult, RoutingError> {
        request.validate()?;

        let ignore = IgnoreFilter::new(&request.ignore);
        let graph = ChannelGraph::build(&request.channels, &ignore);

        tracing::debug!(
            start = %request.start,
            end = %request.end,
            mtokens = request.mtokens,
            edges = graph.edge_count(),
            ignored = ignore.len(),
            "searching for route"
        );

        let Some(path) = self.search(&graph, &request.start, &request.end, request.mtokens) else {
            tracing::info!(start = %request.start, end = %request.end, "no route found");
            return Ok(RouteResult::none());
        };

        let hops = assemble_hops(&path, request.mtokens)?;
        tracing::info!(
            hops = hops.len(),
            total_mtokens = hops.first().map(|h| h.forward_mtokens).unwrap_or(0),
            "found route"
        );
        Ok(RouteResult::found(hops))
    }

    /// Run the backward search over a built graph.
    ///
    /// Returns the edges from `start` to `end` in payment order, or `None`
    /// when no feasible path exists.
    pub fn search(
        &self,
        graph: &ChannelGraph,
        start: &NodeId,
        end: &NodeId,
        mtokens: u64,
    ) -> Option<Vec<DirectedEdge>> {
        let compare_cltv = self.config.cltv_limit.is_some();
        let amount_floor = graph.max_min_htlc_mtokens();

        let mut labels = vec![Label {
            node: end.clone(),
            cost: 0,
            forward_mtokens: mtokens,
            cltv: 0,
            next: None,
        }];
        let mut settled: HashMap<NodeId, Vec<usize>> = HashMap::new();
        let mut heap = BinaryHeap::from([Frontier {
            cost: 0,
            node: end.clone(),
            label: 0,
        }]);

        let is_dominated = |settled: &HashMap<NodeId, Vec<usize>>, labels: &[Label], label: &Label| {
            settled.get(&label.node).is_some_and(|kept| {
                kept.iter()
                    .any(|&k| labels[k].dominates(label, compare_cltv, amount_floor))
            })
        };

        while let Some(Frontier { node, label: index, .. }) = heap.pop() {
            if is_dominated(&settled, labels.as_slice(), &labels[index]) {
                continue;
            }
            if &node == start {
                return Self::walk(&labels, index);
            }
            settled.entry(node.clone()).or_default().push(index);

            let (cost_here, forward_here, cltv_here) = {
                let label = &labels[index];
                (label.cost, label.forward_mtokens, label.cltv)
            };

            for edge in graph.inbound(&node) {
                // Self-loops and cycles back onto this label's own path.
                if passes_through(&labels, index, &edge.from) {
                    continue;
                }

                let step = match cost::evaluate(edge, forward_here) {
                    Ok(step) => step,
                    Err(reason) => {
                        tracing::trace!(
                            channel = %edge.channel,
                            from = %edge.from,
                            to = %edge.to,
                            %reason,
                            "edge infeasible"
                        );
                        continue;
                    }
                };

                let (Some(new_cost), Some(new_cltv)) = (
                    cost_here.checked_add(step.fee_mtokens),
                    cltv_here.checked_add(step.cltv_delta),
                ) else {
                    continue;
                };
                if self.config.cltv_limit.is_some_and(|limit| new_cltv > limit) {
                    continue;
                }

                let candidate = Label {
                    node: edge.from.clone(),
                    cost: new_cost,
                    forward_mtokens: step.amount_in_mtokens,
                    cltv: new_cltv,
                    next: Some((edge.clone(), index)),
                };
                if is_dominated(&settled, labels.as_slice(), &candidate) {
                    continue;
                }

                heap.push(Frontier {
                    cost: new_cost,
                    node: edge.from.clone(),
                    label: labels.len(),
                });
                labels.push(candidate);
            }
        }

        tracing::debug!(labels = labels.len(), "search exhausted");
        None
    }

    /// Edges from label `index` to the destination, in payment order.
    fn walk(labels: &[Label], index: usize) -> Option<Vec<DirectedEdge>> {
        let mut path = Vec::new();
        let mut cursor = labels[index].next.as_ref();
        while let Some((edge, next)) = cursor {
            path.push(edge.clone());
            cursor = labels[*next].next.as_ref();
        }
        (!path.is_empty()).then_some(path)
    }
}

/// Convenience wrapper: search with the default configuration.
pub fn find_route(request: &RouteRequest) -> Result<RouteResult, RoutingError> {
    PathFinder::with_defaults().find_route(request)
}
