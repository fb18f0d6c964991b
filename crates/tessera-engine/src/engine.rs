//! The simulation [`Engine`].
//!
//! # Lifecycle
//!
//! An `Engine` only exists once [`new()`](Engine::new) has validated the
//! configuration, allocated both buffers and seeded them; there is no
//! half-initialised value to guard against. Every mutating operation takes
//! `&mut self`, so a generation in progress can never be observed: readers
//! see the state before a [`step()`](Engine::step) or the state after it.

use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use tessera_core::{CellState, Coord, Dimensions, GenerationId, RuleThresholds, Variant};
use tessera_grid::{GenerationGuard, Grid, GridSnapshot};
use tessera_space::{topology_for, Topology};

use crate::config::{ConfigError, EngineConfig, EngineError, ExecutionMode, SeedSpec};
use crate::counter::count_neighbours_at;
use crate::metrics::StepMetrics;
use crate::rule::RuleSet;

/// Cells per rayon task in [`ExecutionMode::Parallel`].
const PARALLEL_CHUNK: usize = 4096;

// Compile-time assertion: Engine can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Engine>();
    }
};

/// Owns the grid, the rule set and the seeding RNG, and advances the
/// automaton one generation at a time.
///
/// # Example
///
/// ```
/// use tessera_engine::{Engine, EngineConfig, SeedSpec};
/// use tessera_core::{CellState, Coord, Dimensions, RuleThresholds, Variant};
///
/// let mut engine = Engine::new(EngineConfig::new(
///     Dimensions::planar(5, 5),
///     Variant::Binary,
///     RuleThresholds::conway(),
///     SeedSpec::Empty,
/// ))
/// .unwrap();
///
/// // A horizontal blinker turns vertical after one generation.
/// for x in 1..=3 {
///     engine.set_cell(&Coord::from_slice(&[x, 2]), CellState::Alive).unwrap();
/// }
/// engine.step();
/// assert_eq!(engine.get(&Coord::from_slice(&[2, 1])).unwrap(), CellState::Alive);
/// assert_eq!(engine.get(&Coord::from_slice(&[1, 2])).unwrap(), CellState::Dead);
/// assert_eq!(engine.live_count(), 3);
/// ```
pub struct Engine {
    grid: Grid,
    rules: RuleSet,
    rng: ChaCha8Rng,
    rng_seed: u64,
    execution: ExecutionMode,
    last_metrics: StepMetrics,
}

impl Engine {
    /// Validate `config`, allocate the grid and apply the initial seed.
    ///
    /// Fails with [`EngineError::InvalidConfiguration`] for bad dimensions,
    /// thresholds or density, and with [`EngineError::DimensionMismatch`]
    /// for a sample seed whose length is not the cell count. Nothing is
    /// retained on failure.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let topology = topology_for(config.dimensions)?;
        let rules = RuleSet::new(
            config.variant,
            config.thresholds,
            topology.neighbourhood_size() as u8,
        )
        .map_err(ConfigError::from)?;

        let mut engine = Self {
            grid: Grid::new(topology),
            rules,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            rng_seed: config.rng_seed,
            execution: config.execution,
            last_metrics: StepMetrics::default(),
        };
        engine.apply_seed(&config.seed)?;

        debug!(
            dimensions = %config.dimensions,
            variant = %config.variant,
            thresholds = %config.thresholds,
            rng_seed = config.rng_seed,
            live = engine.live_count(),
            "engine initialised"
        );
        Ok(engine)
    }

    // ── Stepping ───────────────────────────────────────────────

    /// Compute one generation.
    pub fn step(&mut self) {
        self.step_many(1);
    }

    /// Compute `n` generations back to back. `n == 0` changes nothing,
    /// including the recorded metrics.
    pub fn step_many(&mut self, n: u64) {
        if n == 0 {
            return;
        }
        let start = Instant::now();
        let mut changed_cells = 0;
        for _ in 0..n {
            changed_cells += self.advance();
        }
        self.last_metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            generations: n,
            changed_cells,
            live_cells: self.live_count() as u64,
        };
    }

    /// Evaluate every cell against the current buffer, then publish.
    /// Returns the number of cells that changed state.
    fn advance(&mut self) -> u64 {
        let rules = self.rules;
        let execution = self.execution;
        let start = Instant::now();

        let changed = {
            let GenerationGuard {
                topology,
                current,
                next,
            } = self.grid.begin_generation();
            match execution {
                ExecutionMode::Sequential => evaluate_chunk(topology, current, next, 0, &rules),
                ExecutionMode::Parallel => next
                    .par_chunks_mut(PARALLEL_CHUNK)
                    .enumerate()
                    .map(|(i, chunk)| {
                        evaluate_chunk(topology, current, chunk, i * PARALLEL_CHUNK, &rules)
                    })
                    .sum(),
            }
        };
        self.grid.publish();

        trace!(
            generation = %self.grid.generation(),
            changed,
            elapsed_us = start.elapsed().as_micros() as u64,
            "generation published"
        );
        changed
    }

    // ── Seeding and editing ────────────────────────────────────

    /// Clear both buffers to `Dead` and reset the generation counter.
    /// Calling it twice leaves the same state as calling it once.
    pub fn reset(&mut self) {
        self.grid.clear();
        debug!("engine reset");
    }

    /// Re-populate the grid from `seed` and reset the generation counter.
    ///
    /// Random seeding continues the engine's RNG stream. On error the grid
    /// is left exactly as it was.
    pub fn seed(&mut self, seed: SeedSpec) -> Result<(), EngineError> {
        seed.validate()?;
        self.apply_seed(&seed)?;
        debug!(live = self.live_count(), "engine reseeded");
        Ok(())
    }

    fn apply_seed(&mut self, seed: &SeedSpec) -> Result<(), EngineError> {
        match seed {
            SeedSpec::Empty => self.grid.clear(),
            SeedSpec::RandomDensity { density } => {
                self.grid.seed_random(*density, &mut self.rng)?;
            }
            SeedSpec::FromSamples { samples, threshold } => {
                self.grid.seed_from_samples(samples, *threshold)?;
            }
        }
        Ok(())
    }

    /// Flip a cell between `Dead` and `Alive` and return its new state.
    /// `Stable` cells are not affected.
    ///
    /// Coordinates wrap modulo each extent; a coordinate with the wrong
    /// number of components is an [`EngineError::DimensionMismatch`].
    pub fn toggle(&mut self, coord: &Coord) -> Result<CellState, EngineError> {
        Ok(self.grid.toggle(coord)?)
    }

    /// Overwrite one cell, visible immediately.
    pub fn set_cell(&mut self, coord: &Coord, state: CellState) -> Result<(), EngineError> {
        self.grid.set(coord, state)?;
        Ok(())
    }

    /// Replace the birth and survival bounds. On error the previous
    /// thresholds stay in effect.
    pub fn set_thresholds(&mut self, thresholds: RuleThresholds) -> Result<(), ConfigError> {
        thresholds.validate(self.grid.topology().neighbourhood_size() as u8)?;
        self.rules.set_thresholds(thresholds);
        debug!(%thresholds, "thresholds updated");
        Ok(())
    }

    /// Switch between sequential and parallel stepping.
    pub fn set_execution_mode(&mut self, execution: ExecutionMode) {
        self.execution = execution;
    }

    // ── Snapshots ──────────────────────────────────────────────

    /// Owned copy of the current generation.
    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// Load a snapshot taken from an engine with the same dimensions.
    ///
    /// The RNG stream is not part of a snapshot and is left as it is.
    pub fn restore(&mut self, snapshot: &GridSnapshot) -> Result<(), EngineError> {
        self.grid.restore(snapshot)?;
        debug!(generation = %snapshot.generation(), "snapshot restored");
        Ok(())
    }

    // ── Accessors ──────────────────────────────────────────────

    /// The current generation in flattening order.
    pub fn current_state(&self) -> &[CellState] {
        self.grid.current()
    }

    /// Cells that are `Alive` or `Stable`.
    pub fn live_count(&self) -> usize {
        self.grid.occupied_count()
    }

    /// State of a cell at a wrapped coordinate.
    pub fn get(&self, coord: &Coord) -> Result<CellState, EngineError> {
        Ok(self.grid.get(coord)?)
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The grid's topology.
    pub fn topology(&self) -> &dyn Topology {
        self.grid.topology()
    }

    /// Generations computed since construction, seeding, reset or restore.
    pub fn generation(&self) -> GenerationId {
        self.grid.generation()
    }

    /// Grid extents.
    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    /// The automaton variant.
    pub fn variant(&self) -> Variant {
        self.rules.variant()
    }

    /// The active thresholds.
    pub fn thresholds(&self) -> RuleThresholds {
        self.rules.thresholds()
    }

    /// The seed the RNG was created from.
    pub fn rng_seed(&self) -> u64 {
        self.rng_seed
    }

    /// The current execution mode.
    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution
    }

    /// Metrics from the most recent stepping call.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("grid", &self.grid)
            .field("rules", &self.rules)
            .field("rng_seed", &self.rng_seed)
            .field("execution", &self.execution)
            .finish_non_exhaustive()
    }
}

/// Write the next state of cells `offset..offset + next.len()` into `next`.
///
/// Reads only `current`, so disjoint chunks can be evaluated in any order.
fn evaluate_chunk(
    topology: &dyn Topology,
    current: &[CellState],
    next: &mut [CellState],
    offset: usize,
    rules: &RuleSet,
) -> u64 {
    let mut changed = 0;
    for (i, slot) in next.iter_mut().enumerate() {
        let rank = offset + i;
        let before = current[rank];
        let live = count_neighbours_at(topology, current, rank, |s| rules.counts_as_live(s));
        let after = rules.next(before, live);
        changed += u64::from(after != before);
        *slot = after;
    }
    changed
}
