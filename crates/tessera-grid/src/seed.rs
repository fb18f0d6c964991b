//! Initial-state seeding: random density and external luminance samples.

use rand::Rng;
use tessera_core::CellState;

use crate::error::GridError;
use crate::grid::Grid;

/// Grey level of an RGB pixel: the integer mean of its three channels.
///
/// Bitmap-like seed sources are reduced to one sample per cell with this
/// before being handed to [`Grid::seed_from_samples`].
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// [`luminance`] of every pixel, in input order.
pub fn luminance_samples(pixels: &[[u8; 3]]) -> Vec<u8> {
    pixels.iter().map(|&[r, g, b]| luminance(r, g, b)).collect()
}

impl Grid {
    /// Make each cell `Alive` with probability `density`, else `Dead`.
    ///
    /// Both buffers receive the same state so the first rendered frame is
    /// the first computable generation. Cells are visited in flattening
    /// order and draw exactly one `f64` each, so a seeded RNG yields the
    /// same grid every time.
    pub fn seed_random<R: Rng>(&mut self, density: f64, rng: &mut R) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity { value: density });
        }
        let n = self.cell_count();
        let cells = (0..n).map(|_| {
            if rng.random::<f64>() < density {
                CellState::Alive
            } else {
                CellState::Dead
            }
        });
        self.load(cells);
        Ok(())
    }

    /// Make each cell `Alive` when its sample is below `threshold`, else
    /// `Dead`. Dark pixels become living cells.
    ///
    /// `samples` must have exactly one entry per cell, in flattening order;
    /// otherwise the grid is left untouched.
    pub fn seed_from_samples(&mut self, samples: &[u8], threshold: u8) -> Result<(), GridError> {
        if samples.len() != self.cell_count() {
            return Err(GridError::DimensionMismatch {
                expected: self.cell_count(),
                actual: samples.len(),
            });
        }
        self.load(samples.iter().map(|&s| {
            if s < threshold {
                CellState::Alive
            } else {
                CellState::Dead
            }
        }));
        Ok(())
    }

    /// Load explicit cell states into both buffers.
    pub fn seed_cells(&mut self, cells: &[CellState]) -> Result<(), GridError> {
        if cells.len() != self.cell_count() {
            return Err(GridError::DimensionMismatch {
                expected: self.cell_count(),
                actual: cells.len(),
            });
        }
        self.load(cells.iter().copied());
        Ok(())
    }
}
