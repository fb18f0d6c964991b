//! Grid extents.

use std::fmt;

/// Immutable extents of a grid, fixed for the grid's lifetime.
///
/// Cells are flattened row-major (x fastest), then depth-major for
/// volumetric grids: `index = x + width * (y + height * z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimensions {
    /// Flattened two-dimensional grid.
    Planar {
        /// Extent along x (cells per row).
        width: u32,
        /// Extent along y (number of rows).
        height: u32,
    },
    /// True three-dimensional grid.
    Volumetric {
        /// Extent along x.
        x: u32,
        /// Extent along y.
        y: u32,
        /// Extent along z.
        z: u32,
    },
}

impl Dimensions {
    /// Planar `width × height` grid.
    pub fn planar(width: u32, height: u32) -> Self {
        Self::Planar { width, height }
    }

    /// Cubic-or-not `x × y × z` grid.
    pub fn volumetric(x: u32, y: u32, z: u32) -> Self {
        Self::Volumetric { x, y, z }
    }

    /// Number of axes (2 or 3).
    pub fn ndim(&self) -> usize {
        match self {
            Self::Planar { .. } => 2,
            Self::Volumetric { .. } => 3,
        }
    }

    /// Per-axis extents in coordinate order.
    pub fn extents(&self) -> Vec<u32> {
        match *self {
            Self::Planar { width, height } => vec![width, height],
            Self::Volumetric { x, y, z } => vec![x, y, z],
        }
    }

    /// Total number of cells, or `None` if the product overflows `usize`.
    pub fn checked_cell_count(&self) -> Option<usize> {
        self.extents()
            .into_iter()
            .try_fold(1usize, |acc, e| acc.checked_mul(e as usize))
    }

    /// Number of cells in the neighbourhood of every cell (Moore, radius 1).
    pub fn neighbourhood_size(&self) -> u8 {
        match self {
            Self::Planar { .. } => 8,
            Self::Volumetric { .. } => 26,
        }
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planar { width, height } => write!(f, "{width}x{height}"),
            Self::Volumetric { x, y, z } => write!(f, "{x}x{y}x{z}"),
        }
    }
}
