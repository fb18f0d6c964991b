//! Generation stepping for Tessera cellular automata.
//!
//! Provides the [`Engine`] that owns a double-buffered grid and advances it
//! one generation at a time: every cell's live neighbours are counted
//! against the pre-step buffer, the [`RuleSet`] picks its next state, and
//! the buffers are swapped once all cells have been written.
//!
//! ```
//! use tessera_engine::{Engine, EngineConfig, SeedSpec};
//! use tessera_core::{Dimensions, RuleThresholds, Variant};
//!
//! let config = EngineConfig::new(
//!     Dimensions::planar(32, 32),
//!     Variant::Binary,
//!     RuleThresholds::conway(),
//!     SeedSpec::RandomDensity { density: 0.3 },
//! );
//! let mut engine = Engine::new(config).unwrap();
//! engine.step_many(10);
//! assert_eq!(engine.current_state().len(), 32 * 32);
//! assert_eq!(engine.generation().0, 10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod counter;
pub mod engine;
pub mod metrics;
pub mod rule;

pub use config::{ConfigError, EngineConfig, EngineError, ExecutionMode, SeedSpec};
pub use counter::{count_neighbours, count_neighbours_at};
pub use engine::Engine;
pub use metrics::StepMetrics;
pub use rule::RuleSet;
