// Per-source memoization of solve tables.
//
// One slot per source node. A slot holds an empty table until that source
// is first queried; a full-size table means "computed and valid". There is
// no partial invalidation: any topology change can shift edge weights for
// unrelated nodes, so `invalidate()` throws everything away.
//
// The cache cannot detect graph mutation on its own — the owner must call
// `invalidate()` after every edit, before the next `get()`. Single-threaded
// by design; wrap externally if you need to share it.

use crate::graph::PathNetwork;
use crate::solver::{self, SolveResult};

#[derive(Clone, Debug, Default)]
pub struct PathCache {
    /// Indexed by source node. Empty table = not yet computed.
    tables: Vec<SolveResult>,
    /// Number of actual Dijkstra runs performed, for tests and tuning.
    solves: u64,
}

impl PathCache {
    /// A cache sized for a network of `node_count` nodes, all slots empty.
    pub fn new(node_count: usize) -> Self {
        Self {
            tables: vec![SolveResult::new(); node_count],
            solves: 0,
        }
    }

    /// The solve table rooted at `source`, computing and storing it on
    /// first request.
    pub fn get(&mut self, graph: &PathNetwork, source: usize) -> &SolveResult {
        if self.tables[source].len() != graph.node_count() {
            self.tables[source] = solver::solve(graph, source);
            self.solves += 1;
        }
        &self.tables[source]
    }

    /// Drop every cached table and resize for the network's new node count.
    /// Must be called after any topology change, before the next `get()`.
    pub fn invalidate(&mut self, node_count: usize) {
        self.tables.clear();
        self.tables.resize(node_count, SolveResult::new());
    }

    /// How many Dijkstra runs this cache has performed since creation.
    pub fn solve_count(&self) -> u64 {
        self.solves
    }
}
