// Core spatial types shared across the crate.
//
// `WorldPos` is the only foundational type: a plain f32 3-vector in world
// units. Node positions, the network origin, and query points all use it.
// Derives `Serialize`/`Deserialize` so authored networks can round-trip
// through JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in world space, in world units.
///
/// Right-handed conventions: X east, Y up, Z south.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl WorldPos {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared Euclidean distance between two positions.
    ///
    /// This is the crate's one and only distance metric: edge weights and
    /// nearest-node queries both use squared distance, never the true
    /// length. See `solver.rs` for why that quirk is load-bearing.
    pub fn dist_squared(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Component-wise sum. Used to place network-relative node positions
    /// into world space.
    pub fn offset_by(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl fmt::Display for WorldPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
