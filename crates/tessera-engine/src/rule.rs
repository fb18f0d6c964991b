//! Per-cell transition function.

use tessera_core::{CellState, RuleThresholds, ThresholdError, Variant};

/// A validated variant + thresholds pair.
///
/// Construction checks the thresholds against the neighbourhood size of
/// the grid the rule will run on, so [`next`](Self::next) never has to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleSet {
    variant: Variant,
    thresholds: RuleThresholds,
}

impl RuleSet {
    /// Validate `thresholds` for a neighbourhood of `neighbourhood_size`
    /// cells (8 in 2D, 26 in 3D).
    pub fn new(
        variant: Variant,
        thresholds: RuleThresholds,
        neighbourhood_size: u8,
    ) -> Result<Self, ThresholdError> {
        thresholds.validate(neighbourhood_size)?;
        Ok(Self {
            variant,
            thresholds,
        })
    }

    /// The automaton variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The birth and survival bounds.
    pub fn thresholds(&self) -> RuleThresholds {
        self.thresholds
    }

    pub(crate) fn set_thresholds(&mut self, thresholds: RuleThresholds) {
        self.thresholds = thresholds;
    }

    /// Whether a neighbour in `state` contributes to the live count.
    #[inline]
    pub fn counts_as_live(&self, state: CellState) -> bool {
        self.variant.counts_as_live(state)
    }

    /// Next state of a cell in `current` with `count` live neighbours.
    ///
    /// Binary: a dead cell is born inside the birth range, a living cell
    /// survives inside the survival range, everything else dies. A `Stable`
    /// cell is treated as living here.
    ///
    /// Three-state: `Alive` always becomes `Stable`, `Stable` never changes,
    /// and a dead cell is born into `Alive` inside the birth range.
    #[inline]
    pub fn next(&self, current: CellState, count: u8) -> CellState {
        match (self.variant, current) {
            (_, CellState::Dead) if self.thresholds.born(count) => CellState::Alive,
            (_, CellState::Dead) => CellState::Dead,
            (Variant::Binary, _) if self.thresholds.survives(count) => CellState::Alive,
            (Variant::Binary, _) => CellState::Dead,
            (Variant::ThreeState, _) => CellState::Stable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn conway() -> RuleSet {
        RuleSet::new(Variant::Binary, RuleThresholds::conway(), 8).unwrap()
    }

    fn three_state() -> RuleSet {
        RuleSet::new(Variant::ThreeState, RuleThresholds::conway(), 8).unwrap()
    }

    #[test]
    fn conway_table() {
        let r = conway();
        for n in 0..=8u8 {
            let born = if n == 3 { CellState::Alive } else { CellState::Dead };
            let kept = if n == 2 || n == 3 {
                CellState::Alive
            } else {
                CellState::Dead
            };
            assert_eq!(r.next(CellState::Dead, n), born, "dead with {n}");
            assert_eq!(r.next(CellState::Alive, n), kept, "alive with {n}");
        }
    }

    #[test]
    fn three_state_alive_always_stabilises() {
        let r = three_state();
        for n in 0..=8u8 {
            assert_eq!(r.next(CellState::Alive, n), CellState::Stable);
            assert_eq!(r.next(CellState::Stable, n), CellState::Stable);
        }
        assert_eq!(r.next(CellState::Dead, 3), CellState::Alive);
        assert_eq!(r.next(CellState::Dead, 2), CellState::Dead);
    }

    #[test]
    fn stable_under_binary_behaves_as_alive() {
        let r = conway();
        assert_eq!(r.next(CellState::Stable, 2), CellState::Alive);
        assert_eq!(r.next(CellState::Stable, 5), CellState::Dead);
        assert!(!r.counts_as_live(CellState::Stable));
    }

    #[test]
    fn invalid_thresholds_rejected() {
        assert!(RuleSet::new(Variant::Binary, RuleThresholds::new(3, 2, 3, 3), 8).is_err());
        assert!(RuleSet::new(Variant::Binary, RuleThresholds::new(2, 3, 3, 9), 8).is_err());
        assert!(RuleSet::new(Variant::Binary, RuleThresholds::new(2, 3, 3, 9), 26).is_ok());
    }

    proptest! {
        #[test]
        fn stable_is_absorbing(n in 0u8..=26) {
            let r = RuleSet::new(Variant::ThreeState, RuleThresholds::new(0, 26, 0, 26), 26).unwrap();
            prop_assert_eq!(r.next(CellState::Stable, n), CellState::Stable);
        }

        #[test]
        fn binary_never_produces_stable(state in 0u8..3, n in 0u8..=8) {
            let cell = CellState::from_u8(state).unwrap();
            prop_assert_ne!(conway().next(cell, n), CellState::Stable);
        }
    }
}
