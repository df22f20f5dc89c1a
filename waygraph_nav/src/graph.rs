// The waypoint network: node storage, edge-weight precomputation, and the
// nearest-node spatial query.
//
// Nodes are identified by their index into `PathNetwork::nodes` — the index
// IS the identity, there is no separate id field. Connections are directed:
// node A listing B does not imply B lists A. Edge weights are not authored;
// they are derived (squared distance to each connected node) and cached per
// node by `initialize()`, which must be re-run after every authoring edit.
//
// All cross-node computation happens here, with direct slice access to the
// whole node array. Nodes themselves hold no reference to their container.
//
// See also: `solver.rs` which consumes the accessors, `cache.rs` which must
// be invalidated whenever this graph is re-initialized.

use crate::types::WorldPos;
use serde::{Deserialize, Serialize};

/// A single waypoint: an authored position plus the indices of every node
/// reachable from it in one hop.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PathNode {
    /// Position relative to the network origin.
    pub position: WorldPos,
    /// Outgoing connections, as indices into the owning network's node list.
    pub connections: Vec<usize>,
    /// Cached squared distance to each connected node, same order as
    /// `connections`. Derived data — rebuilt by `PathNetwork::initialize()`,
    /// never serialized.
    #[serde(skip)]
    weights: Vec<f32>,
}

impl PathNode {
    pub fn new(position: WorldPos, connections: Vec<usize>) -> Self {
        Self {
            position,
            connections,
            weights: Vec::new(),
        }
    }
}

/// The fixed, ordered collection of waypoints.
///
/// Topology is authored externally and assumed fixed while any solve is in
/// flight. After any edit (node added/removed/moved, connections changed)
/// the owner must call `initialize()` here and `PathCache::invalidate()`
/// before issuing further queries.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PathNetwork {
    /// World-space placement of the whole network. Node positions are
    /// relative to this; nearest-node queries measure against
    /// `origin + position`.
    pub origin: WorldPos,
    pub nodes: Vec<PathNode>,
}

impl PathNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node. Returns its index.
    pub fn add_node(&mut self, position: WorldPos, connections: Vec<usize>) -> usize {
        self.nodes.push(PathNode::new(position, connections));
        self.nodes.len() - 1
    }

    /// Recompute every node's cached connection weights.
    ///
    /// An out-of-range connection index is an authoring defect: it is
    /// logged, clamped to index 0, and initialization continues. Designer
    /// data never aborts the game.
    pub fn initialize(&mut self) {
        let count = self.nodes.len();

        // Clamp bad indices first so the stored topology matches the
        // weights computed below.
        for (index, node) in self.nodes.iter_mut().enumerate() {
            for target in &mut node.connections {
                if *target >= count {
                    tracing::error!(
                        "node {index}: connection index {target} is out of range \
                         (network has {count} nodes), substituting 0"
                    );
                    *target = 0;
                }
            }
        }

        for index in 0..count {
            let node = &self.nodes[index];
            let weights: Vec<f32> = node
                .connections
                .iter()
                .map(|&target| node.position.dist_squared(self.nodes[target].position))
                .collect();
            self.nodes[index].weights = weights;
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn position(&self, node: usize) -> WorldPos {
        self.nodes[node].position
    }

    /// Number of outgoing connections from `node`.
    pub fn connection_count(&self, node: usize) -> usize {
        self.nodes[node].connections.len()
    }

    /// Index of the connected node in the given slot.
    pub fn connection(&self, node: usize, slot: usize) -> usize {
        self.nodes[node].connections[slot]
    }

    /// Cached squared-distance weight of the connection in the given slot.
    ///
    /// An out-of-range slot yields `f32::MAX` so callers can treat it as
    /// "unreachable via this edge" instead of failing.
    pub fn connection_weight(&self, node: usize, slot: usize) -> f32 {
        match self.nodes[node].weights.get(slot) {
            Some(&weight) => weight,
            None => {
                tracing::warn!(
                    "node {node}: no cached weight for connection slot {slot}, \
                     treating as unreachable"
                );
                f32::MAX
            }
        }
    }

    /// Index of the node nearest to `point` (in world space, so the network
    /// origin is applied). Ties resolve to the lowest index.
    ///
    /// Panics if the network is empty — there is no meaningful answer, and
    /// callers are contractually required to check first.
    pub fn nearest_node(&self, point: WorldPos) -> usize {
        assert!(
            !self.nodes.is_empty(),
            "nearest_node called on an empty path network"
        );

        let mut best_index = 0;
        let mut best_dist = f32::MAX;
        for (index, node) in self.nodes.iter().enumerate() {
            let dist = self.origin.offset_by(node.position).dist_squared(point);
            if dist < best_dist {
                best_index = index;
                best_dist = dist;
            }
        }
        best_index
    }

    /// Every directed edge as a `(from, to)` index pair, in node order.
    /// Read-only view for external debug visualization.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(from, node)| node.connections.iter().map(move |&to| (from, to)))
    }
}
