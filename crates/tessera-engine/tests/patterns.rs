//! Integration test: classic Life patterns on the torus.
//!
//! Gliders, blinkers and blocks have known trajectories under B3/S23, so
//! they pin down counting, rule evaluation and per-axis wraparound at once.

use smallvec::smallvec;
use tessera_core::{CellState, Dimensions, RuleThresholds, Variant};
use tessera_engine::{Engine, EngineConfig, ExecutionMode, SeedSpec};
use tessera_test_utils::{live_cells_2d, parse_rows, place, BLINKER, BLOCK, GLIDER};

fn conway(w: u32, h: u32) -> Engine {
    Engine::new(EngineConfig::new(
        Dimensions::planar(w, h),
        Variant::Binary,
        RuleThresholds::conway(),
        SeedSpec::Empty,
    ))
    .unwrap()
}

fn put(engine: &mut Engine, pattern: &[(i32, i32)], origin: (i32, i32)) {
    for coord in place(pattern, origin) {
        engine.set_cell(&coord, CellState::Alive).unwrap();
    }
}

fn shifted(pattern: &[(i32, i32)], origin: (i32, i32), w: i32, h: i32) -> Vec<(i32, i32)> {
    let mut out: Vec<_> = pattern
        .iter()
        .map(|&(dx, dy)| ((origin.0 + dx).rem_euclid(w), (origin.1 + dy).rem_euclid(h)))
        .collect();
    out.sort_unstable();
    out
}

#[test]
fn glider_translates_one_cell_per_period() {
    let mut e = conway(16, 16);
    put(&mut e, GLIDER, (2, 2));
    e.step_many(4);
    assert_eq!(
        live_cells_2d(e.current_state(), 16),
        shifted(GLIDER, (3, 3), 16, 16)
    );
    assert_eq!(e.live_count(), 5);
}

#[test]
fn glider_crosses_both_seams_and_returns() {
    let mut e = conway(16, 16);
    put(&mut e, GLIDER, (12, 12));
    let start = e.current_state().to_vec();
    // 16 periods move the glider by a full lap on each axis.
    e.step_many(64);
    assert_eq!(e.current_state(), start.as_slice());
}

#[test]
fn glider_straddling_the_seam() {
    let mut e = conway(10, 8);
    put(&mut e, GLIDER, (8, 6));
    e.step_many(4);
    assert_eq!(
        live_cells_2d(e.current_state(), 10),
        shifted(GLIDER, (9, 7), 10, 8)
    );
}

#[test]
fn glider_in_parallel_mode() {
    let mut e = conway(128, 96);
    e.set_execution_mode(ExecutionMode::Parallel);
    put(&mut e, GLIDER, (60, 40));
    e.step_many(8);
    assert_eq!(
        live_cells_2d(e.current_state(), 128),
        shifted(GLIDER, (62, 42), 128, 96)
    );
}

#[test]
fn blinker_on_the_row_seam() {
    let mut e = conway(7, 7);
    // Horizontal blinker wrapping the right edge: x = 6, 0, 1 on row 3.
    put(&mut e, BLINKER, (6, 3));
    e.step();
    assert_eq!(
        live_cells_2d(e.current_state(), 7),
        vec![(0, 2), (0, 3), (0, 4)]
    );
    e.step();
    assert_eq!(
        live_cells_2d(e.current_state(), 7),
        vec![(0, 3), (1, 3), (6, 3)]
    );
}

#[test]
fn block_is_a_still_life() {
    let mut e = conway(6, 6);
    put(&mut e, BLOCK, (5, 5));
    let start = e.current_state().to_vec();
    e.step_many(10);
    assert_eq!(e.current_state(), start.as_slice());
    assert_eq!(e.last_metrics().changed_cells, 0);
}

#[test]
fn three_state_front_from_ascii() {
    let (dims, cells) = parse_rows(&[
        ".....",
        ".....",
        ".###.",
        ".....",
        ".....",
    ]);
    let samples: Vec<u8> = cells.iter().map(|s| if s.is_alive() { 0 } else { 255 }).collect();
    let mut e = Engine::new(EngineConfig::new(
        dims,
        Variant::ThreeState,
        RuleThresholds::conway(),
        SeedSpec::FromSamples {
            samples,
            threshold: 128,
        },
    ))
    .unwrap();

    e.step();
    let after = tessera_test_utils::render_rows(e.current_state(), 5);
    // The row stabilises; cells with exactly three live neighbours are born.
    assert_eq!(after, [".....", "..#..", ".+++.", "..#..", "....."]);

    e.step();
    for y in 1..=3 {
        assert_eq!(e.get(&smallvec![2, y]).unwrap(), CellState::Stable);
    }
}
