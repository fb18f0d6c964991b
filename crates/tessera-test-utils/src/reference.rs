//! Naive reference stepper.
//!
//! Walks cells in canonical order using coordinates, [`Grid::get`] and
//! [`Grid::set_next`]. It shares no code with the engine's rank-based loop
//! beyond the grid itself, so agreement between the two is meaningful.

use tessera_core::{CellState, Coord, RuleThresholds, Variant};
use tessera_grid::{Grid, GridError};
use tessera_space::{MOORE_2D, MOORE_3D};

/// Next state of one cell, written out case by case.
pub fn reference_next(
    variant: Variant,
    thresholds: RuleThresholds,
    state: CellState,
    live: u8,
) -> CellState {
    let born = live >= thresholds.dead_min && live <= thresholds.dead_max;
    let survives = live >= thresholds.alive_min && live <= thresholds.alive_max;
    match variant {
        Variant::Binary => match state {
            CellState::Dead if born => CellState::Alive,
            CellState::Dead => CellState::Dead,
            _ if survives => CellState::Alive,
            _ => CellState::Dead,
        },
        Variant::ThreeState => match state {
            CellState::Dead if born => CellState::Alive,
            CellState::Dead => CellState::Dead,
            CellState::Alive | CellState::Stable => CellState::Stable,
        },
    }
}

fn is_live(variant: Variant, state: CellState) -> bool {
    match variant {
        Variant::Binary => state == CellState::Alive,
        Variant::ThreeState => state != CellState::Dead,
    }
}

fn offsets(ndim: usize) -> Vec<Coord> {
    if ndim == 2 {
        MOORE_2D.iter().map(|&(dx, dy)| Coord::from_slice(&[dx, dy])).collect()
    } else {
        MOORE_3D
            .iter()
            .map(|&(dx, dy, dz)| Coord::from_slice(&[dx, dy, dz]))
            .collect()
    }
}

/// Advance `grid` by one generation.
pub fn reference_step(
    grid: &mut Grid,
    variant: Variant,
    thresholds: RuleThresholds,
) -> Result<(), GridError> {
    let offsets = offsets(grid.topology().ndim());
    let order = grid.topology().canonical_ordering();
    for coord in order {
        let mut live = 0u8;
        for off in &offsets {
            let neighbour: Coord = coord.iter().zip(off.iter()).map(|(c, d)| c + d).collect();
            if is_live(variant, grid.get(&neighbour)?) {
                live += 1;
            }
        }
        let next = reference_next(variant, thresholds, grid.get(&coord)?, live);
        grid.set_next(&coord, next)?;
    }
    grid.publish();
    Ok(())
}
