//! Well-known 2D patterns as `(x, y)` offsets from their top-left corner.
//!
//! `y` grows downwards, matching the row order of the flattened buffer.

use smallvec::smallvec;
use tessera_core::{CellState, Coord};
use tessera_grid::{Grid, GridError};

/// South-east glider. Period 4, moves by `(+1, +1)` per period.
///
/// ```text
/// .#.
/// ..#
/// ###
/// ```
pub const GLIDER: &[(i32, i32)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// Horizontal blinker. Period 2.
pub const BLINKER: &[(i32, i32)] = &[(0, 0), (1, 0), (2, 0)];

/// 2×2 still life.
pub const BLOCK: &[(i32, i32)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

/// Coordinates of `pattern` shifted to `origin`. Not wrapped.
pub fn place(pattern: &[(i32, i32)], origin: (i32, i32)) -> Vec<Coord> {
    pattern
        .iter()
        .map(|&(dx, dy)| smallvec![origin.0 + dx, origin.1 + dy])
        .collect()
}

/// Set every cell of `pattern` at `origin` to `Alive` in both buffers.
///
/// Fails only on a grid that is not planar.
pub fn stamp(
    grid: &mut Grid,
    pattern: &[(i32, i32)],
    origin: (i32, i32),
) -> Result<(), GridError> {
    for coord in place(pattern, origin) {
        grid.set(&coord, CellState::Alive)?;
    }
    Ok(())
}

/// Sorted `(x, y)` of every occupied cell in a row-major buffer of the
/// given width.
pub fn live_cells_2d(cells: &[CellState], width: u32) -> Vec<(i32, i32)> {
    let w = width as usize;
    let mut out: Vec<(i32, i32)> = cells
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_occupied())
        .map(|(i, _)| ((i % w) as i32, (i / w) as i32))
        .collect();
    out.sort_unstable();
    out
}
