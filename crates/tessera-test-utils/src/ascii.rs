//! Text pictures of 2D grids: `.` dead, `#` alive, `+` stable.

use tessera_core::{CellState, Dimensions};

/// Parse equal-length rows into dimensions and a row-major buffer.
///
/// # Panics
///
/// Panics on ragged rows or unknown characters; these are test inputs.
pub fn parse_rows(rows: &[&str]) -> (Dimensions, Vec<CellState>) {
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut cells = Vec::with_capacity(width * rows.len());
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "row {y} is ragged");
        for ch in row.chars() {
            cells.push(match ch {
                '.' => CellState::Dead,
                '#' => CellState::Alive,
                '+' => CellState::Stable,
                other => panic!("unknown cell glyph {other:?} in row {y}"),
            });
        }
    }
    (Dimensions::planar(width as u32, rows.len() as u32), cells)
}

/// Inverse of [`parse_rows`].
pub fn render_rows(cells: &[CellState], width: u32) -> Vec<String> {
    cells
        .chunks(width as usize)
        .map(|row| row.iter().map(|s| s.glyph()).collect())
        .collect()
}
