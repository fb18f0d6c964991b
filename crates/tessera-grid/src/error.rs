//! Grid-specific error types.

use std::error::Error;
use std::fmt;

use tessera_core::Dimensions;

/// Errors that can occur while addressing, seeding or restoring a grid.
///
/// On error the grid is left exactly as it was before the call.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A per-cell input has the wrong length.
    DimensionMismatch {
        /// The grid's cell count.
        expected: usize,
        /// Length of the supplied input.
        actual: usize,
    },
    /// A snapshot was taken from a grid with different extents.
    ShapeMismatch {
        /// The grid's extents.
        expected: Dimensions,
        /// The snapshot's extents.
        actual: Dimensions,
    },
    /// A coordinate has the wrong number of components for the grid.
    ArityMismatch {
        /// The grid's number of axes.
        expected: usize,
        /// Components in the supplied coordinate.
        actual: usize,
    },
    /// A snapshot was described with a zero extent.
    EmptyDimensions {
        /// The rejected extents.
        dimensions: Dimensions,
    },
    /// A random-seed density outside `[0, 1]` (or NaN).
    InvalidDensity {
        /// The rejected density.
        value: f64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::ShapeMismatch { expected, actual } => {
                write!(f, "grid is {expected}, snapshot is {actual}")
            }
            Self::ArityMismatch { expected, actual } => {
                write!(f, "coordinate has {actual} components, grid has {expected} axes")
            }
            Self::EmptyDimensions { dimensions } => {
                write!(f, "{dimensions} has a zero extent")
            }
            Self::InvalidDensity { value } => {
                write!(f, "density must be within [0, 1], got {value}")
            }
        }
    }
}

impl Error for GridError {}
