//! Generation counter and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;

/// Number of completed generations since the grid was last seeded or reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GenerationId(pub u64);

impl GenerationId {
    /// The generation following this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for GenerationId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// A coordinate in grid space: `[x, y]` for planar grids, `[x, y, z]` for
/// volumetric ones.
///
/// Uses `SmallVec<[i32; 4]>` so that neither topology spills to the heap.
/// Components are signed because neighbour offsets step one cell outside
/// the valid range before wraparound.
pub type Coord = SmallVec<[i32; 4]>;
