//! Core types for the Tessera cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! values every other Tessera crate speaks in: cell states, grid
//! dimensions, coordinates, generation counters, and rule thresholds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod dims;
pub mod error;
pub mod id;
pub mod rule;

pub use cell::CellState;
pub use dims::Dimensions;
pub use error::{ThresholdError, ThresholdKind};
pub use id::{Coord, GenerationId};
pub use rule::{RuleThresholds, Variant};
