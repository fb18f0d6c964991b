//! Moore-neighbourhood live counts.
//!
//! Counts always read the *current* buffer. On grids narrower than three
//! cells along an axis several offsets wrap onto the same cell; each offset
//! is still counted once, so the result is bounded by the neighbourhood
//! size, never by the number of distinct neighbours.

use tessera_core::{CellState, Coord};
use tessera_grid::{Grid, GridError};
use tessera_space::Topology;

/// Number of neighbours of `coord` whose state satisfies `predicate`.
///
/// `coord` is wrapped first, so out-of-range coordinates are accepted.
/// The result is in `0..=8` for a 2D grid and `0..=26` for a 3D grid.
pub fn count_neighbours(
    grid: &Grid,
    coord: &Coord,
    predicate: impl Fn(CellState) -> bool,
) -> Result<u8, GridError> {
    let rank = grid.rank_of(coord)?;
    Ok(count_neighbours_at(grid.topology(), grid.current(), rank, predicate))
}

/// Rank-based form of [`count_neighbours`] over an explicit cell buffer.
///
/// Used by the stepping loop, which holds the current buffer through a
/// [`GenerationGuard`](tessera_grid::GenerationGuard) rather than the grid.
#[inline]
pub fn count_neighbours_at(
    topology: &dyn Topology,
    cells: &[CellState],
    rank: usize,
    predicate: impl Fn(CellState) -> bool,
) -> u8 {
    topology
        .neighbour_ranks(rank)
        .into_iter()
        .filter(|&r| predicate(cells[r]))
        .count() as u8
}
