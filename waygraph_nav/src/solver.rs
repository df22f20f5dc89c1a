// Single-source shortest paths over the path network.
//
// Implements Dijkstra using a `BinaryHeap` (min-heap via reversed ordering)
// with lazy deletion: a popped entry whose cost no longer matches the
// node's current best is stale and skipped. The frontier key is
// (cost, node index) — the index is there purely to make the ordering total
// so equal-cost ties always pop in the same order.
//
// **Weight quirk, kept on purpose:** edge weights are squared geometric
// distances, so a multi-hop cost is a sum of squared segment lengths and
// does not correspond to any physical path length. Consumers only rely on
// connectivity and relative ordering, which this metric preserves. Do not
// "fix" it to true distance — route choices would change.
//
// See also: `graph.rs` for the accessors consumed here, `cache.rs` which
// memoizes one result per source node.

use crate::graph::PathNetwork;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Predecessor sentinel: the node was never reached from the source.
pub const UNREACHED: i32 = -1;

/// Best known cost and predecessor for one node, relative to one source.
///
/// The source's own record is `(0.0, source)` — the self-referential
/// predecessor marks the root of every predecessor chain. An unreached
/// node keeps `(f32::MAX, UNREACHED)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub cost: f32,
    pub previous: i32,
}

impl PathRecord {
    const fn unreached() -> Self {
        Self {
            cost: f32::MAX,
            previous: UNREACHED,
        }
    }
}

/// One full Dijkstra result: a record per node, in node-index order.
/// Length equals the network's node count when valid.
pub type SolveResult = Vec<PathRecord>;

/// Entry in the solver frontier (min-heap via reversed ordering).
struct FrontierEntry {
    cost: f32,
    node: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal && self.node == other.node
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap: smallest (cost, node) is "greatest".
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Compute shortest paths from `source` to every node it can reach.
///
/// Always terminates and always returns a table sized to the node count;
/// unreachable nodes keep the `(f32::MAX, UNREACHED)` sentinels. Edge
/// weights are non-negative by construction (squared distances), which is
/// what makes Dijkstra correct here.
pub fn solve(graph: &PathNetwork, source: usize) -> SolveResult {
    let count = graph.node_count();
    let mut records = vec![PathRecord::unreached(); count];
    records[source] = PathRecord {
        cost: 0.0,
        previous: source as i32,
    };

    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        cost: 0.0,
        node: source,
    });

    while let Some(entry) = frontier.pop() {
        let current = entry.node;

        // Lazy deletion: the record was improved after this entry was
        // pushed, so a fresher entry for this node is still in the heap.
        if entry.cost != records[current].cost {
            continue;
        }

        for slot in 0..graph.connection_count(current) {
            let other = graph.connection(current, slot);
            let weight = graph.connection_weight(current, slot);
            let candidate = entry.cost + weight;

            if candidate < records[other].cost {
                records[other] = PathRecord {
                    cost: candidate,
                    previous: current as i32,
                };
                frontier.push(FrontierEntry {
                    cost: candidate,
                    node: other,
                });
            }
        }
    }

    records
}
