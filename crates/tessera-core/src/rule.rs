//! Rule thresholds and automaton variants.

use crate::cell::CellState;
use crate::error::{ThresholdError, ThresholdKind};
use std::fmt;

/// Which automaton the rule evaluates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Two-state life-like automaton (`Dead`, `Alive`).
    #[default]
    Binary,
    /// Three-state automaton where every living cell stabilises after one
    /// generation. `Stable` counts as alive and is absorbing.
    ThreeState,
}

impl Variant {
    /// Whether a neighbour in `state` is counted by this variant.
    #[inline]
    pub fn counts_as_live(self, state: CellState) -> bool {
        match self {
            Self::Binary => state.is_alive(),
            Self::ThreeState => state.is_occupied(),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary => write!(f, "binary"),
            Self::ThreeState => write!(f, "three-state"),
        }
    }
}

/// Inclusive neighbour-count bounds for survival and birth.
///
/// A living cell survives when `alive_min <= n <= alive_max`; a dead cell
/// is born when `dead_min <= n <= dead_max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuleThresholds {
    /// Lower survival bound.
    pub alive_min: u8,
    /// Upper survival bound.
    pub alive_max: u8,
    /// Lower birth bound.
    pub dead_min: u8,
    /// Upper birth bound.
    pub dead_max: u8,
}

impl RuleThresholds {
    /// Build thresholds from `(alive_min, alive_max, dead_min, dead_max)`.
    ///
    /// No validation happens here; see [`validate`](Self::validate).
    pub const fn new(alive_min: u8, alive_max: u8, dead_min: u8, dead_max: u8) -> Self {
        Self {
            alive_min,
            alive_max,
            dead_min,
            dead_max,
        }
    }

    /// Conway's Game of Life: B3/S23.
    pub const fn conway() -> Self {
        Self::new(2, 3, 3, 3)
    }

    /// Check `min <= max <= neighbourhood_size` for both bound pairs.
    pub fn validate(&self, neighbourhood_size: u8) -> Result<(), ThresholdError> {
        let pairs = [
            (ThresholdKind::Survival, self.alive_min, self.alive_max),
            (ThresholdKind::Birth, self.dead_min, self.dead_max),
        ];
        for (kind, min, max) in pairs {
            if min > max {
                return Err(ThresholdError::MinExceedsMax { kind, min, max });
            }
            if max > neighbourhood_size {
                return Err(ThresholdError::ExceedsNeighbourhood {
                    kind,
                    max,
                    neighbourhood_size,
                });
            }
        }
        Ok(())
    }

    /// `alive_min <= count <= alive_max`.
    #[inline]
    pub fn survives(&self, count: u8) -> bool {
        (self.alive_min..=self.alive_max).contains(&count)
    }

    /// `dead_min <= count <= dead_max`.
    #[inline]
    pub fn born(&self, count: u8) -> bool {
        (self.dead_min..=self.dead_max).contains(&count)
    }
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self::conway()
    }
}

impl fmt::Display for RuleThresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S{}..{}/B{}..{}",
            self.alive_min, self.alive_max, self.dead_min, self.dead_max
        )
    }
}
