//! The core `Topology` trait and `dyn Topology` downcast support.

use crate::error::SpaceError;
use crate::torus2d::Torus2D;
use crate::torus3d::Torus3D;
use smallvec::SmallVec;
use std::any::Any;
use tessera_core::{Coord, Dimensions};

/// Wrapped neighbour coordinates. Inline capacity covers the 3D Moore
/// neighbourhood.
pub type Neighbours = SmallVec<[Coord; 26]>;

/// Wrapped neighbour flat indices, in the same order as [`Neighbours`].
pub type NeighbourRanks = SmallVec<[usize; 26]>;

/// Spatial abstraction shared by the grid and the neighbour counter.
///
/// A topology owns the extents of a grid and knows how to wrap, flatten and
/// enumerate coordinates. Every backend in this crate is a torus: each axis
/// wraps independently, so every cell has exactly
/// [`neighbourhood_size`](Self::neighbourhood_size) neighbours (counted
/// with multiplicity on grids narrower than three cells).
///
/// # Object Safety
///
/// Designed for use as `dyn Topology`; use `downcast_ref` for opt-in
/// specialisation on a concrete backend.
pub trait Topology: Any + Send + Sync + 'static {
    /// Number of axes.
    fn ndim(&self) -> usize;

    /// Extents this topology was built from.
    fn dimensions(&self) -> Dimensions;

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Number of neighbours of every cell.
    fn neighbourhood_size(&self) -> usize;

    /// Wrap each axis of `coord` into range. Components may lie any number
    /// of extents outside it.
    ///
    /// `coord` must have [`ndim`](Self::ndim) components.
    fn wrap_coord(&self, coord: &Coord) -> Coord;

    /// Wrapped neighbour coordinates of `coord`, in offset order.
    ///
    /// `coord` is wrapped first, with the same contract as
    /// [`wrap_coord`](Self::wrap_coord).
    fn neighbours(&self, coord: &Coord) -> Neighbours;

    /// Wrapped neighbour flat indices of the cell at `rank`, in offset
    /// order. This is the hot path of a generation step.
    fn neighbour_ranks(&self, rank: usize) -> NeighbourRanks;

    /// All cells in flattening order.
    fn canonical_ordering(&self) -> Vec<Coord>;

    /// Flat index of an in-range coordinate, `None` if out of range or of
    /// the wrong arity.
    fn canonical_rank(&self, coord: &Coord) -> Option<usize>;

    /// Inverse of [`canonical_rank`](Self::canonical_rank).
    fn coord_of(&self, rank: usize) -> Option<Coord>;

    /// Same concrete backend with identical extents.
    fn topology_eq(&self, other: &dyn Topology) -> bool;
}

impl dyn Topology {
    /// Attempt to downcast a trait object to a concrete backend.
    pub fn downcast_ref<T: Topology>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}

/// Build the torus backend matching `dims`.
pub fn topology_for(dims: Dimensions) -> Result<Box<dyn Topology>, SpaceError> {
    match dims {
        Dimensions::Planar { width, height } => Ok(Box::new(Torus2D::new(width, height)?)),
        Dimensions::Volumetric { x, y, z } => Ok(Box::new(Torus3D::new(x, y, z)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topology_for_picks_backend() {
        let t = topology_for(Dimensions::planar(4, 3)).unwrap();
        assert!(t.downcast_ref::<Torus2D>().is_some());
        assert_eq!(t.neighbourhood_size(), 8);

        let t = topology_for(Dimensions::volumetric(3, 3, 3)).unwrap();
        assert!(t.downcast_ref::<Torus3D>().is_some());
        assert_eq!(t.neighbourhood_size(), 26);
    }

    #[test]
    fn topology_for_rejects_empty_axis() {
        assert!(matches!(
            topology_for(Dimensions::volumetric(3, 0, 3)),
            Err(SpaceError::EmptySpace { axis: "y" })
        ));
    }
}
