//! Volumetric 3D torus with the 26-cell Moore neighbourhood.

use crate::error::SpaceError;
use crate::offsets::MOORE_3D;
use crate::topology::{NeighbourRanks, Neighbours, Topology};
use crate::wrap::{check_extent, wrap_axis, wrap_euclid};
use smallvec::smallvec;
use tessera_core::{Coord, Dimensions};

/// A three-dimensional grid wrapped on all three axes.
///
/// Each cell has coordinate `[x, y, z]` and flat index
/// `x + sx * (y + sy * z)`. Neighbours are the 26 cells of the surrounding
/// 3×3×3 block.
#[derive(Debug, Clone)]
pub struct Torus3D {
    sx: u32,
    sy: u32,
    sz: u32,
}

impl Torus3D {
    /// Coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an `sx × sy × sz` torus.
    ///
    /// Fails like [`Torus2D::new`](crate::Torus2D::new) on empty, oversized
    /// or overflowing extents.
    pub fn new(sx: u32, sy: u32, sz: u32) -> Result<Self, SpaceError> {
        check_extent("x", sx, Self::MAX_DIM)?;
        check_extent("y", sy, Self::MAX_DIM)?;
        check_extent("z", sz, Self::MAX_DIM)?;
        let dims = Dimensions::volumetric(sx, sy, sz);
        if dims.checked_cell_count().is_none() {
            return Err(SpaceError::CellCountOverflow {
                dimensions: dims.to_string(),
            });
        }
        Ok(Self { sx, sy, sz })
    }

    /// Extents as `(x, y, z)`.
    pub fn extents(&self) -> (u32, u32, u32) {
        (self.sx, self.sy, self.sz)
    }

    #[inline]
    fn flatten(&self, x: i32, y: i32, z: i32) -> usize {
        let (sx, sy) = (self.sx as usize, self.sy as usize);
        x as usize + sx * (y as usize + sy * z as usize)
    }

    #[inline]
    fn unflatten(&self, rank: usize) -> (i32, i32, i32) {
        let (sx, sy) = (self.sx as usize, self.sy as usize);
        let x = rank % sx;
        let rest = rank / sx;
        (x as i32, (rest % sy) as i32, (rest / sy) as i32)
    }
}

impl Topology for Torus3D {
    fn ndim(&self) -> usize {
        3
    }

    fn dimensions(&self) -> Dimensions {
        Dimensions::volumetric(self.sx, self.sy, self.sz)
    }

    fn cell_count(&self) -> usize {
        self.sx as usize * self.sy as usize * self.sz as usize
    }

    fn neighbourhood_size(&self) -> usize {
        MOORE_3D.len()
    }

    fn wrap_coord(&self, coord: &Coord) -> Coord {
        smallvec![
            wrap_euclid(coord[0], self.sx),
            wrap_euclid(coord[1], self.sy),
            wrap_euclid(coord[2], self.sz)
        ]
    }

    fn neighbours(&self, coord: &Coord) -> Neighbours {
        let (x, y, z) = (
            wrap_euclid(coord[0], self.sx),
            wrap_euclid(coord[1], self.sy),
            wrap_euclid(coord[2], self.sz),
        );
        MOORE_3D
            .iter()
            .map(|&(dx, dy, dz)| {
                smallvec![
                    wrap_axis(x + dx, self.sx),
                    wrap_axis(y + dy, self.sy),
                    wrap_axis(z + dz, self.sz)
                ]
            })
            .collect()
    }

    fn neighbour_ranks(&self, rank: usize) -> NeighbourRanks {
        let (x, y, z) = self.unflatten(rank);
        MOORE_3D
            .iter()
            .map(|&(dx, dy, dz)| {
                self.flatten(
                    wrap_axis(x + dx, self.sx),
                    wrap_axis(y + dy, self.sy),
                    wrap_axis(z + dz, self.sz),
                )
            })
            .collect()
    }

    fn canonical_ordering(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.cell_count());
        for z in 0..self.sz as i32 {
            for y in 0..self.sy as i32 {
                for x in 0..self.sx as i32 {
                    out.push(smallvec![x, y, z]);
                }
            }
        }
        out
    }

    fn canonical_rank(&self, coord: &Coord) -> Option<usize> {
        if coord.len() != 3 {
            return None;
        }
        let in_range = |v: i32, n: u32| v >= 0 && v < n as i32;
        if !(in_range(coord[0], self.sx) && in_range(coord[1], self.sy) && in_range(coord[2], self.sz))
        {
            return None;
        }
        Some(self.flatten(coord[0], coord[1], coord[2]))
    }

    fn coord_of(&self, rank: usize) -> Option<Coord> {
        if rank >= self.cell_count() {
            return None;
        }
        let (x, y, z) = self.unflatten(rank);
        Some(smallvec![x, y, z])
    }

    fn topology_eq(&self, other: &dyn Topology) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|o| self.extents() == o.extents())
    }
}
