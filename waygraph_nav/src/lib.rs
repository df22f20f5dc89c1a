// waygraph_nav — waypoint path network for game AI navigation.
//
// This crate is a pure, headless library: a fixed graph of hand-authored
// spatial waypoints with directed, weighted connections, a cached
// single-source shortest-path solver, path reconstruction, and a
// nearest-node spatial query. It has no rendering, editor, or engine
// dependencies — the embedding game loop owns it and drives it.
//
// Module overview:
// - `types.rs`:  WorldPos — f32 3-vector with squared-distance helper.
// - `graph.rs`:  PathNode + PathNetwork — node storage, edge-weight
//                precomputation, neighbor/weight accessors, nearest-node query.
// - `solver.rs`: Single-source Dijkstra producing a full per-node
//                (cost, predecessor) table.
// - `cache.rs`:  PathCache — one memoized solve table per source node,
//                invalidated wholesale on topology change.
// - `path.rs`:   Path reconstruction — walk a solve table backward from a
//                destination into an ordered node-index sequence.
//
// Ownership boundary: node authoring (positions + connection indices) and
// any debug visualization live in the embedding application. The app tells
// the network to `initialize()` and the cache to `invalidate()` after every
// edit; the library never detects mutation on its own.
//
// **Critical constraint: determinism.** All storage is `Vec` indexed by node
// index; no `HashMap`. The solver's frontier is totally ordered by
// (cost, node index) so equal-cost ties always resolve the same way.

pub mod cache;
pub mod graph;
pub mod path;
pub mod solver;
pub mod types;

pub use cache::PathCache;
pub use graph::{PathNetwork, PathNode};
pub use path::{Path, reconstruct};
pub use solver::{PathRecord, SolveResult, UNREACHED, solve};
pub use types::WorldPos;
