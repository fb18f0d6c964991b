//! Integration test: seeding, reset and error handling at the engine
//! boundary.

use tessera_core::{CellState, Dimensions, RuleThresholds, Variant};
use tessera_engine::{ConfigError, Engine, EngineConfig, EngineError, SeedSpec};
use tessera_grid::luminance_samples;

fn config(dims: Dimensions, seed: SeedSpec) -> EngineConfig {
    EngineConfig::new(dims, Variant::Binary, RuleThresholds::conway(), seed)
}

#[test]
fn dark_samples_are_all_alive() {
    let e = Engine::new(config(
        Dimensions::planar(8, 4),
        SeedSpec::FromSamples {
            samples: vec![0; 32],
            threshold: 128,
        },
    ))
    .unwrap();
    assert!(e.current_state().iter().all(|&s| s == CellState::Alive));
    assert_eq!(e.live_count(), 32);
}

#[test]
fn bright_samples_are_all_dead() {
    let e = Engine::new(config(
        Dimensions::volumetric(3, 3, 3),
        SeedSpec::FromSamples {
            samples: vec![255; 27],
            threshold: 128,
        },
    ))
    .unwrap();
    assert_eq!(e.live_count(), 0);
}

#[test]
fn rgb_pixels_seed_through_luminance() {
    // Black, white, mid-grey, dark red.
    let pixels = [[0, 0, 0], [255, 255, 255], [128, 128, 128], [120, 0, 0]];
    let e = Engine::new(config(
        Dimensions::planar(2, 2),
        SeedSpec::FromSamples {
            samples: luminance_samples(&pixels),
            threshold: 128,
        },
    ))
    .unwrap();
    assert_eq!(
        e.current_state(),
        &[
            CellState::Alive,
            CellState::Dead,
            CellState::Dead,
            CellState::Alive
        ]
    );
}

#[test]
fn density_extremes() {
    let full = Engine::new(config(
        Dimensions::planar(10, 10),
        SeedSpec::RandomDensity { density: 1.0 },
    ))
    .unwrap();
    assert_eq!(full.live_count(), 100);

    let none = Engine::new(config(
        Dimensions::planar(10, 10),
        SeedSpec::RandomDensity { density: 0.0 },
    ))
    .unwrap();
    assert_eq!(none.live_count(), 0);
}

#[test]
fn rng_seed_drives_the_initial_grid() {
    let dims = Dimensions::planar(32, 32);
    let seed = SeedSpec::RandomDensity { density: 0.3 };
    let a = Engine::new(config(dims, seed.clone()).with_rng_seed(7)).unwrap();
    let b = Engine::new(config(dims, seed.clone()).with_rng_seed(7)).unwrap();
    let c = Engine::new(config(dims, seed).with_rng_seed(8)).unwrap();
    assert_eq!(a.current_state(), b.current_state());
    assert_ne!(a.current_state(), c.current_state());
}

#[test]
fn reseeding_continues_the_stream() {
    let mut e = Engine::new(config(
        Dimensions::planar(32, 32),
        SeedSpec::RandomDensity { density: 0.5 },
    ))
    .unwrap();
    let first = e.current_state().to_vec();
    e.seed(SeedSpec::RandomDensity { density: 0.5 }).unwrap();
    assert_ne!(e.current_state(), first.as_slice());
    assert_eq!(e.generation().0, 0);
}

#[test]
fn reset_twice_is_reset_once() {
    let mut e = Engine::new(config(
        Dimensions::volumetric(6, 6, 6),
        SeedSpec::RandomDensity { density: 0.4 },
    ))
    .unwrap();
    e.step_many(3);
    e.reset();
    assert_eq!(e.live_count(), 0);
    let once = e.snapshot();
    e.reset();
    assert_eq!(e.snapshot(), once);
    // A dead board stays dead.
    e.step();
    assert_eq!(e.live_count(), 0);
}

#[test]
fn invalid_configurations() {
    let bad = [
        config(Dimensions::planar(0, 4), SeedSpec::Empty),
        config(Dimensions::volumetric(4, 0, 4), SeedSpec::Empty),
        config(
            Dimensions::planar(4, 4),
            SeedSpec::RandomDensity { density: f64::NAN },
        ),
        EngineConfig {
            thresholds: RuleThresholds::new(2, 3, 4, 3),
            ..config(Dimensions::planar(4, 4), SeedSpec::Empty)
        },
        EngineConfig {
            thresholds: RuleThresholds::new(2, 3, 3, 27),
            ..config(Dimensions::volumetric(4, 4, 4), SeedSpec::Empty)
        },
    ];
    for cfg in bad {
        let err = Engine::new(cfg.clone()).unwrap_err();
        assert!(
            matches!(err, EngineError::InvalidConfiguration(_)),
            "{cfg:?} gave {err}"
        );
    }
}

#[test]
fn mismatched_samples_leave_engine_untouched() {
    let mut e = Engine::new(config(
        Dimensions::planar(4, 4),
        SeedSpec::RandomDensity { density: 0.5 },
    ))
    .unwrap();
    e.step();
    let before = e.snapshot();
    for len in [0, 15, 17] {
        let err = e
            .seed(SeedSpec::FromSamples {
                samples: vec![0; len],
                threshold: 128,
            })
            .unwrap_err();
        assert!(matches!(err, EngineError::DimensionMismatch(_)));
    }
    assert_eq!(e.snapshot(), before);
}

#[test]
fn invalid_reseed_density_is_a_configuration_error() {
    let mut e = Engine::new(config(Dimensions::planar(4, 4), SeedSpec::Empty)).unwrap();
    assert_eq!(
        e.seed(SeedSpec::RandomDensity { density: 2.0 }),
        Err(EngineError::InvalidConfiguration(
            ConfigError::InvalidDensity { value: 2.0 }
        ))
    );
}
