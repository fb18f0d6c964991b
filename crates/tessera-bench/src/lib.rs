//! Benchmark profiles for the Tessera cellular-automaton engine.
//!
//! Provides pre-built [`EngineConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 256x256 Conway board (65K cells)
//! - [`stress_profile`]: 1024x1024 Conway board (~1M cells)
//! - [`volumetric_profile`]: 48x48x48 three-state board (~110K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessera_core::{Dimensions, RuleThresholds, Variant};
use tessera_engine::{EngineConfig, ExecutionMode, SeedSpec};

/// 256x256 B3/S23 board at density 0.3.
pub fn reference_profile(seed: u64, execution: ExecutionMode) -> EngineConfig {
    EngineConfig::new(
        Dimensions::planar(256, 256),
        Variant::Binary,
        RuleThresholds::conway(),
        SeedSpec::RandomDensity { density: 0.3 },
    )
    .with_rng_seed(seed)
    .with_execution(execution)
}

/// Same rules as [`reference_profile`] at 16x the cell count.
pub fn stress_profile(seed: u64, execution: ExecutionMode) -> EngineConfig {
    EngineConfig {
        dimensions: Dimensions::planar(1024, 1024),
        ..reference_profile(seed, execution)
    }
}

/// 48x48x48 three-state board with a 3D birth range of 5..=5.
pub fn volumetric_profile(seed: u64, execution: ExecutionMode) -> EngineConfig {
    EngineConfig::new(
        Dimensions::volumetric(48, 48, 48),
        Variant::ThreeState,
        RuleThresholds::new(4, 5, 5, 5),
        SeedSpec::RandomDensity { density: 0.1 },
    )
    .with_rng_seed(seed)
    .with_execution(execution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        for execution in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
            assert_eq!(reference_profile(1, execution).validate(), Ok(()));
            assert_eq!(stress_profile(1, execution).validate(), Ok(()));
            assert_eq!(volumetric_profile(1, execution).validate(), Ok(()));
        }
    }
}
