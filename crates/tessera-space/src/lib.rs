//! Toroidal grid topologies for Tessera.
//!
//! This crate defines the [`Topology`] trait, the spatial abstraction
//! through which the grid and the neighbour counter resolve coordinates,
//! together with the two concrete backends the engine supports.
//!
//! # Backends
//!
//! - [`Torus2D`]: flattened planar grid, 8-cell Moore neighbourhood
//! - [`Torus3D`]: volumetric grid, 26-cell Moore neighbourhood
//!
//! Both wrap every axis independently (see [`wrap_axis`]) before a
//! coordinate is flattened, so a step off the right edge of a row lands on
//! the left edge of the *same* row.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod offsets;
pub mod topology;
pub mod torus2d;
pub mod torus3d;
pub mod wrap;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::SpaceError;
pub use offsets::{MOORE_2D, MOORE_3D};
pub use topology::{topology_for, NeighbourRanks, Neighbours, Topology};
pub use torus2d::Torus2D;
pub use torus3d::Torus3D;
pub use wrap::{wrap_axis, wrap_euclid};
