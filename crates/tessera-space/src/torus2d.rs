//! Flattened 2D torus with the 8-cell Moore neighbourhood.

use crate::error::SpaceError;
use crate::offsets::MOORE_2D;
use crate::topology::{NeighbourRanks, Neighbours, Topology};
use crate::wrap::{check_extent, wrap_axis, wrap_euclid};
use smallvec::smallvec;
use tessera_core::{Coord, Dimensions};

/// A two-dimensional grid whose opposite edges are joined.
///
/// Each cell has coordinate `[x, y]` and flat index `x + width * y`.
/// Neighbours are the 8 cells of the surrounding 3×3 block, wrapped per
/// axis, so a cell on the last column sees the first column of the same
/// row.
///
/// # Examples
///
/// ```
/// use tessera_space::{Topology, Torus2D};
///
/// let t = Torus2D::new(4, 3).unwrap();
/// assert_eq!(t.cell_count(), 12);
///
/// // (3, 1) is the last cell of row 1; its east neighbour is (0, 1).
/// let east: tessera_core::Coord = vec![0i32, 1].into();
/// assert!(t.neighbours(&vec![3i32, 1].into()).contains(&east));
/// ```
#[derive(Debug, Clone)]
pub struct Torus2D {
    width: u32,
    height: u32,
}

impl Torus2D {
    /// Coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `width × height` torus.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either extent is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// or `Err(SpaceError::CellCountOverflow)` if the product overflows.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        check_extent("width", width, Self::MAX_DIM)?;
        check_extent("height", height, Self::MAX_DIM)?;
        let dims = Dimensions::planar(width, height);
        if dims.checked_cell_count().is_none() {
            return Err(SpaceError::CellCountOverflow {
                dimensions: dims.to_string(),
            });
        }
        Ok(Self { width, height })
    }

    /// Cells per row.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn flatten(&self, x: i32, y: i32) -> usize {
        x as usize + self.width as usize * y as usize
    }
}

impl Topology for Torus2D {
    fn ndim(&self) -> usize {
        2
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::planar(self.width, self.height)
    }

    fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    fn neighbourhood_size(&self) -> usize {
        MOORE_2D.len()
    }

    fn wrap_coord(&self, coord: &Coord) -> Coord {
        smallvec![
            wrap_euclid(coord[0], self.width),
            wrap_euclid(coord[1], self.height)
        ]
    }

    fn neighbours(&self, coord: &Coord) -> Neighbours {
        let (x, y) = (wrap_euclid(coord[0], self.width), wrap_euclid(coord[1], self.height));
        MOORE_2D
            .iter()
            .map(|&(dx, dy)| {
                smallvec![
                    wrap_axis(x + dx, self.width),
                    wrap_axis(y + dy, self.height)
                ]
            })
            .collect()
    }

    fn neighbour_ranks(&self, rank: usize) -> NeighbourRanks {
        let w = self.width as usize;
        let x = (rank % w) as i32;
        let y = (rank / w) as i32;
        MOORE_2D
            .iter()
            .map(|&(dx, dy)| {
                self.flatten(
                    wrap_axis(x + dx, self.width),
                    wrap_axis(y + dy, self.height),
                )
            })
            .collect()
    }

    fn canonical_ordering(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.cell_count());
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                out.push(smallvec![x, y]);
            }
        }
        out
    }

    fn canonical_rank(&self, coord: &Coord) -> Option<usize> {
        if coord.len() != 2 {
            return None;
        }
        let (x, y) = (coord[0], coord[1]);
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(self.flatten(x, y))
    }

    fn coord_of(&self, rank: usize) -> Option<Coord> {
        if rank >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(smallvec![(rank % w) as i32, (rank / w) as i32])
    }

    fn topology_eq(&self, other: &dyn Topology) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|o| self.width == o.width && self.height == o.height)
    }
}
