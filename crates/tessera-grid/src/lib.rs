//! Double-buffered cell storage for Tessera simulations.
//!
//! # Architecture
//!
//! ```text
//! Grid
//! ├── Box<dyn Topology>   (extents, wrap + flatten)
//! ├── current: Vec<CellState>  ←── read by every rule evaluation
//! ├── next:    Vec<CellState>  ←── written during a generation
//! └── generation: GenerationId
//! ```
//!
//! A generation is computed between [`Grid::begin_generation`] and
//! [`Grid::publish`]: the returned [`GenerationGuard`] hands out the
//! read-only current buffer and the writable next buffer at the same time,
//! and `publish` swaps the two `Vec`s without copying. Neither buffer is
//! ever reallocated after construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod seed;
pub mod snapshot;

pub use error::GridError;
pub use grid::{GenerationGuard, Grid};
pub use seed::{luminance, luminance_samples};
pub use snapshot::GridSnapshot;
