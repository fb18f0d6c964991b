//! Threshold validation errors.

use std::error::Error;
use std::fmt;

/// Which bound pair of a [`RuleThresholds`](crate::RuleThresholds) failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThresholdKind {
    /// `alive_min..=alive_max`.
    Survival,
    /// `dead_min..=dead_max`.
    Birth,
}

impl fmt::Display for ThresholdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Survival => write!(f, "survival"),
            Self::Birth => write!(f, "birth"),
        }
    }
}

/// Errors from [`RuleThresholds::validate`](crate::RuleThresholds::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThresholdError {
    /// Lower bound is above the upper bound.
    MinExceedsMax {
        /// The offending bound pair.
        kind: ThresholdKind,
        /// Configured lower bound.
        min: u8,
        /// Configured upper bound.
        max: u8,
    },
    /// Upper bound can never be reached because the neighbourhood is smaller.
    ExceedsNeighbourhood {
        /// The offending bound pair.
        kind: ThresholdKind,
        /// Configured upper bound.
        max: u8,
        /// Neighbourhood size of the grid's topology.
        neighbourhood_size: u8,
    },
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MinExceedsMax { kind, min, max } => {
                write!(f, "{kind} threshold min {min} exceeds max {max}")
            }
            Self::ExceedsNeighbourhood {
                kind,
                max,
                neighbourhood_size,
            } => write!(
                f,
                "{kind} threshold max {max} exceeds neighbourhood size {neighbourhood_size}"
            ),
        }
    }
}

impl Error for ThresholdError {}
