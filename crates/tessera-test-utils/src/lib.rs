//! Test fixtures and a reference stepper for Tessera development.
//!
//! - [`patterns`]: well-known 2D patterns and helpers to place them.
//! - [`reference`]: a deliberately naive, coordinate-based stepper that
//!   the optimised engine is checked against.
//! - [`ascii`]: build or print grids from `.`/`#`/`+` text.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod ascii;
pub mod patterns;
pub mod reference;

pub use ascii::{parse_rows, render_rows};
pub use patterns::{live_cells_2d, place, stamp, BLINKER, BLOCK, GLIDER};
pub use reference::{reference_next, reference_step};
