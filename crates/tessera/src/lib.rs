//! Tessera: a toroidal cellular-automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Tessera sub-crates. For most users, adding `tessera` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! // Conway's Life on a 16×16 torus with a single glider.
//! let mut engine = Engine::new(EngineConfig::new(
//!     Dimensions::planar(16, 16),
//!     Variant::Binary,
//!     RuleThresholds::conway(),
//!     SeedSpec::Empty,
//! ))
//! .unwrap();
//! for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
//!     engine.set_cell(&Coord::from_slice(&[x, y]), CellState::Alive).unwrap();
//! }
//! engine.step_many(4);
//! assert_eq!(engine.generation(), GenerationId(4));
//! assert_eq!(engine.live_count(), 5);
//! assert_eq!(engine.get(&Coord::from_slice(&[2, 1])).unwrap(), CellState::Alive);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Cell states, dimensions, thresholds, IDs |
//! | [`space`] | `tessera-space` | `Topology` trait, 2D and 3D tori, wraparound |
//! | [`grid`] | `tessera-grid` | Double-buffered grid, seeding, snapshots |
//! | [`engine`] | `tessera-engine` | Rules, neighbour counting, the stepping engine |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`tessera-core`).
///
/// Contains [`types::CellState`], [`types::Dimensions`],
/// [`types::RuleThresholds`] and [`types::Variant`].
pub use tessera_core as types;

/// Toroidal topologies (`tessera-space`).
///
/// Provides the [`space::Topology`] trait and the [`space::Torus2D`] and
/// [`space::Torus3D`] backends.
pub use tessera_space as space;

/// Double-buffered cell storage (`tessera-grid`).
///
/// [`grid::Grid`] holds the current and next generations;
/// [`grid::GridSnapshot`] is an owned copy of one generation.
pub use tessera_grid as grid;

/// Generation stepping (`tessera-engine`).
///
/// [`engine::Engine`] is the entry point; [`engine::RuleSet`] and
/// [`engine::count_neighbours`] are usable on their own.
pub use tessera_engine as engine;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessera_core::{
        CellState, Coord, Dimensions, GenerationId, RuleThresholds, ThresholdError, Variant,
    };

    // Space
    pub use tessera_space::{SpaceError, Topology};

    // Grid
    pub use tessera_grid::{Grid, GridError, GridSnapshot};

    // Engine
    pub use tessera_engine::{
        ConfigError, Engine, EngineConfig, EngineError, ExecutionMode, SeedSpec, StepMetrics,
    };
}
