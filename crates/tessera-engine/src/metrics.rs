//! Per-call stepping metrics.
//!
//! [`StepMetrics`] describes the most recent [`step`](crate::Engine::step)
//! or [`step_many`](crate::Engine::step_many) call.

/// Timing and population data for the last stepping call.
///
/// Durations are in microseconds. `changed_cells` sums over every
/// generation the call computed; `live_cells` is measured once at the end.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole call, in microseconds.
    pub total_us: u64,
    /// Generations computed by the call.
    pub generations: u64,
    /// Cells whose state differed between consecutive buffers.
    pub changed_cells: u64,
    /// `Alive` or `Stable` cells after the call.
    pub live_cells: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = StepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.generations, 0);
        assert_eq!(m.changed_cells, 0);
        assert_eq!(m.live_cells, 0);
    }
}
