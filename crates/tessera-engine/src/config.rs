//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the input to [`Engine::new`](crate::Engine::new).
//! [`validate()`](EngineConfig::validate) checks every structural invariant
//! up front so that construction either fully succeeds or leaves nothing
//! behind.

use std::error::Error;
use std::fmt;

use tessera_core::{Dimensions, RuleThresholds, ThresholdError, Variant};
use tessera_grid::GridError;
use tessera_space::{topology_for, SpaceError};

// ── SeedSpec ───────────────────────────────────────────────────────

/// How the grid is populated at construction or on [`Engine::seed`](crate::Engine::seed).
#[derive(Clone, Debug, PartialEq)]
pub enum SeedSpec {
    /// Every cell `Dead`.
    Empty,
    /// Each cell `Alive` with probability `density` in `[0, 1]`, drawn from
    /// the engine's seeded RNG.
    RandomDensity {
        /// Probability of a cell starting alive.
        density: f64,
    },
    /// One luminance-like sample per cell in flattening order; a cell is
    /// `Alive` iff its sample is below `threshold`.
    FromSamples {
        /// Per-cell samples. Length must equal the cell count.
        samples: Vec<u8>,
        /// Strict upper bound for a living cell's sample.
        threshold: u8,
    },
}

impl SeedSpec {
    /// Check the parts of the seed that do not depend on the grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self {
            Self::RandomDensity { density } if !(0.0..=1.0).contains(density) => {
                Err(ConfigError::InvalidDensity { value: *density })
            }
            _ => Ok(()),
        }
    }
}

impl Default for SeedSpec {
    fn default() -> Self {
        Self::RandomDensity { density: 0.3 }
    }
}

// ── ExecutionMode ──────────────────────────────────────────────────

/// How the per-cell loop of a generation is executed.
///
/// Both modes produce byte-identical generations: every cell reads only
/// the pre-step buffer and writes only its own slot of the next buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    /// One pass over all cells on the calling thread.
    #[default]
    Sequential,
    /// Disjoint chunks of the next buffer evaluated on the rayon pool.
    Parallel,
}

// ── ConfigError ────────────────────────────────────────────────────

/// Structural configuration errors.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Dimensions are zero, too large, or overflow the cell count.
    Space(SpaceError),
    /// Rule thresholds are out of order or exceed the neighbourhood.
    Thresholds(ThresholdError),
    /// Random-seed density outside `[0, 1]` (or NaN).
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "dimensions: {e}"),
            Self::Thresholds(e) => write!(f, "thresholds: {e}"),
            Self::InvalidDensity { value } => {
                write!(f, "seed density must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::Thresholds(e) => Some(e),
            Self::InvalidDensity { .. } => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

impl From<ThresholdError> for ConfigError {
    fn from(e: ThresholdError) -> Self {
        Self::Thresholds(e)
    }
}

// ── EngineError ────────────────────────────────────────────────────

/// Errors returned by the engine's public operations.
///
/// None of these are transient; the engine never retries.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// The configuration is structurally invalid. Fatal to construction.
    InvalidConfiguration(ConfigError),
    /// Seed samples, a snapshot or a coordinate do not match the grid. The
    /// engine keeps its prior state.
    DimensionMismatch(GridError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            Self::DimensionMismatch(e) => write!(f, "dimension mismatch: {e}"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidConfiguration(e) => Some(e),
            Self::DimensionMismatch(e) => Some(e),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}

impl From<SpaceError> for EngineError {
    fn from(e: SpaceError) -> Self {
        Self::InvalidConfiguration(ConfigError::Space(e))
    }
}

impl From<GridError> for EngineError {
    fn from(e: GridError) -> Self {
        match e {
            GridError::InvalidDensity { value } => {
                Self::InvalidConfiguration(ConfigError::InvalidDensity { value })
            }
            other => Self::DimensionMismatch(other),
        }
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing an [`Engine`](crate::Engine).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Grid extents; selects the 2D or 3D torus.
    pub dimensions: Dimensions,
    /// Which automaton to run.
    pub variant: Variant,
    /// Birth and survival bounds.
    pub thresholds: RuleThresholds,
    /// Initial population.
    pub seed: SeedSpec,
    /// Seed of the ChaCha8 RNG used for random seeding.
    pub rng_seed: u64,
    /// Sequential or rayon-parallel generation stepping.
    pub execution: ExecutionMode,
}

impl EngineConfig {
    /// Configuration with the given shape and rules, RNG seed 0 and
    /// sequential execution.
    pub fn new(
        dimensions: Dimensions,
        variant: Variant,
        thresholds: RuleThresholds,
        seed: SeedSpec,
    ) -> Self {
        Self {
            dimensions,
            variant,
            thresholds,
            seed,
            rng_seed: 0,
            execution: ExecutionMode::Sequential,
        }
    }

    /// Set the RNG seed.
    pub fn with_rng_seed(mut self, rng_seed: u64) -> Self {
        self.rng_seed = rng_seed;
        self
    }

    /// Set the execution mode.
    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }

    /// Validate all structural invariants.
    ///
    /// Sample-seed length is checked against the grid at construction
    /// time and reported as [`EngineError::DimensionMismatch`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must build a torus.
        let topology = topology_for(self.dimensions)?;
        // 2. Thresholds must fit the neighbourhood of that torus.
        self.thresholds
            .validate(topology.neighbourhood_size() as u8)?;
        // 3. Seed density, if any, must be a probability.
        self.seed.validate()
    }
}

impl Default for EngineConfig {
    /// A 64×64 Conway board, 30% alive.
    fn default() -> Self {
        Self::new(
            Dimensions::planar(64, 64),
            Variant::Binary,
            RuleThresholds::conway(),
            SeedSpec::default(),
        )
    }
}
