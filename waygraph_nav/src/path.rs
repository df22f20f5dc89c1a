// Path reconstruction: turn a solve table plus a destination into an
// ordered node-index sequence.
//
// The walk runs backward from the destination along predecessor links until
// it hits the node whose predecessor is itself — the source, by the
// solver's initialization invariant — then reverses. Every reachable node's
// predecessor chain is finite and ends at that self-loop, so the walk
// always terminates.
//
// Failure is communicated with an explicit validity flag, never a panic:
// empty network, stale table size, and unreachable destination all yield
// `Path { valid: false, nodes: [] }`.

use crate::graph::PathNetwork;
use crate::solver::{SolveResult, UNREACHED};
use serde::{Deserialize, Serialize};

/// An ordered sequence of node indices from a source to a destination,
/// inclusive. Check `valid` before use — an invalid path is always empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub valid: bool,
    pub nodes: Vec<usize>,
}

/// Reconstruct the path from `table`'s source to `to`.
///
/// `table` must come from `PathCache::get` (or `solver::solve`) against the
/// same network in its current topology.
pub fn reconstruct(graph: &PathNetwork, table: &SolveResult, to: usize) -> Path {
    let mut path = Path::default();

    if table.is_empty() {
        tracing::warn!("cannot reconstruct a path on a network of size 0");
        return path;
    }

    if table.len() != graph.node_count() {
        tracing::error!(
            "solve table has {} entries but the network has {} nodes; \
             this should not happen — was the cache invalidated after an edit?",
            table.len(),
            graph.node_count()
        );
        return path;
    }

    if table[to].previous == UNREACHED {
        // No route exists.
        return path;
    }

    // All checks passed — the predecessor chain below is sound.
    path.valid = true;
    let mut current = to;
    while table[current].previous != current as i32 {
        path.nodes.push(current);
        current = table[current].previous as usize;
    }
    path.nodes.push(current); // the source itself
    path.nodes.reverse();

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::PathCache;
    use crate::solver::solve;
    use crate::types::WorldPos;

    fn line_network() -> PathNetwork {
        let mut network = PathNetwork::new();
        network.add_node(WorldPos::new(0.0, 0.0, 0.0), vec![1]);
        network.add_node(WorldPos::new(10.0, 0.0, 0.0), vec![2]);
        network.add_node(WorldPos::new(20.0, 0.0, 0.0), vec![3]);
        network.add_node(WorldPos::new(30.0, 0.0, 0.0), vec![]);
        network.initialize();
        network
    }

    #[test]
    fn reconstructs_source_to_destination() {
        let network = line_network();
        let table = solve(&network, 0);

        let path = reconstruct(&network, &table, 3);
        assert!(path.valid);
        assert_eq!(path.nodes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn destination_equal_to_source_is_a_single_node_path() {
        let network = line_network();
        let table = solve(&network, 0);

        let path = reconstruct(&network, &table, 0);
        assert!(path.valid);
        assert_eq!(path.nodes, vec![0]);
    }

    #[test]
    fn every_hop_is_a_real_outgoing_edge() {
        let network = line_network();
        let table = solve(&network, 0);
        let path = reconstruct(&network, &table, 3);

        for pair in path.nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            assert!(
                network.nodes[from].connections.contains(&to),
                "{from} -> {to} is not an authored connection"
            );
        }
    }

    #[test]
    fn unreachable_destination_is_invalid() {
        let mut network = line_network();
        network.add_node(WorldPos::new(500.0, 0.0, 0.0), vec![]);
        network.initialize();

        let table = solve(&network, 0);
        let path = reconstruct(&network, &table, 4);
        assert!(!path.valid);
        assert!(path.nodes.is_empty());
    }

    #[test]
    fn empty_network_is_invalid() {
        let network = PathNetwork::new();
        let table = SolveResult::new();
        let path = reconstruct(&network, &table, 0);
        assert!(!path.valid);
        assert!(path.nodes.is_empty());
    }

    #[test]
    fn stale_table_size_is_invalid() {
        let mut network = line_network();
        let table = solve(&network, 0);

        // Grow the network without refreshing the table.
        network.add_node(WorldPos::new(40.0, 0.0, 0.0), vec![]);
        network.initialize();

        let path = reconstruct(&network, &table, 2);
        assert!(!path.valid);
        assert!(path.nodes.is_empty());
    }

    #[test]
    fn full_pipeline_locate_solve_reconstruct() {
        // The consumer-facing flow: world position in, node path out.
        let network = line_network();
        let mut cache = PathCache::new(network.node_count());

        let start = network.nearest_node(WorldPos::new(2.0, 1.0, 0.0));
        assert_eq!(start, 0);
        let goal = network.nearest_node(WorldPos::new(28.0, 0.0, 0.0));
        assert_eq!(goal, 3);

        let table = cache.get(&network, start).clone();
        let path = reconstruct(&network, &table, goal);
        assert!(path.valid);
        assert_eq!(path.nodes.first(), Some(&start));
        assert_eq!(path.nodes.last(), Some(&goal));
    }
}
