//! Error types for topology construction.

use std::fmt;

/// Errors arising from topology construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// An axis has zero extent.
    EmptySpace {
        /// Name of the empty axis.
        axis: &'static str,
    },
    /// An axis does not fit in the signed coordinate type.
    DimensionTooLarge {
        /// Name of the axis.
        name: &'static str,
        /// Requested extent.
        value: u32,
        /// Largest allowed extent.
        max: u32,
    },
    /// The product of the extents does not fit in `usize`.
    CellCountOverflow {
        /// Human-readable extents, e.g. `"4294967295x4294967295"`.
        dimensions: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace { axis } => write!(f, "axis '{axis}' has zero extent"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "axis '{name}' extent {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { dimensions } => {
                write!(f, "cell count of {dimensions} grid overflows usize")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
