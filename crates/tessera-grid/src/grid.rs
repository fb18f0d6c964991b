//! The double-buffered [`Grid`].

use tessera_core::{CellState, Coord, Dimensions, GenerationId};
use tessera_space::{topology_for, SpaceError, Topology};

use crate::error::GridError;
use crate::snapshot::GridSnapshot;

/// Split borrow of a grid for the duration of one generation.
///
/// Created by [`Grid::begin_generation`]. Holds the read-only current
/// buffer and the writable next buffer side by side, so rule evaluation can
/// only ever observe pre-step state. Drop the guard, then call
/// [`Grid::publish`].
#[must_use]
pub struct GenerationGuard<'a> {
    /// Topology used to resolve neighbour indices.
    pub topology: &'a dyn Topology,
    /// Pre-step state; never written during a generation.
    pub current: &'a [CellState],
    /// Post-step state being assembled.
    pub next: &'a mut [CellState],
}

/// Two generation buffers over a toroidal topology.
///
/// `current` is what collaborators see; `next` is the write target of the
/// generation in progress. Both always have length
/// [`cell_count`](Self::cell_count).
pub struct Grid {
    topology: Box<dyn Topology>,
    current: Vec<CellState>,
    next: Vec<CellState>,
    generation: GenerationId,
}

impl Grid {
    /// Allocate an all-`Dead` grid over the given topology.
    pub fn new(topology: Box<dyn Topology>) -> Self {
        let n = topology.cell_count();
        Self {
            topology,
            current: vec![CellState::Dead; n],
            next: vec![CellState::Dead; n],
            generation: GenerationId(0),
        }
    }

    /// Allocate an all-`Dead` torus with the given extents.
    pub fn with_dimensions(dims: Dimensions) -> Result<Self, SpaceError> {
        Ok(Self::new(topology_for(dims)?))
    }

    /// The grid's topology.
    pub fn topology(&self) -> &dyn Topology {
        self.topology.as_ref()
    }

    /// The grid's extents.
    pub fn dimensions(&self) -> Dimensions {
        self.topology.dimensions()
    }

    /// Number of cells in each buffer.
    pub fn cell_count(&self) -> usize {
        self.current.len()
    }

    /// Generations published since construction, seeding or reset.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Read-only view of the current buffer, in flattening order.
    pub fn current(&self) -> &[CellState] {
        &self.current
    }

    /// Flat index of a coordinate after per-axis wraparound.
    ///
    /// Any integer coordinate is accepted; each axis is reduced modulo its
    /// extent. Fails with [`GridError::ArityMismatch`] when `coord` does not
    /// have one component per axis.
    pub fn rank_of(&self, coord: &Coord) -> Result<usize, GridError> {
        let arity = GridError::ArityMismatch {
            expected: self.topology.ndim(),
            actual: coord.len(),
        };
        if coord.len() != self.topology.ndim() {
            return Err(arity);
        }
        let wrapped = self.topology.wrap_coord(coord);
        self.topology.canonical_rank(&wrapped).ok_or(arity)
    }

    /// State of the current buffer at a wrapped coordinate.
    pub fn get(&self, coord: &Coord) -> Result<CellState, GridError> {
        Ok(self.current[self.rank_of(coord)?])
    }

    /// State of the current buffer at a flat index.
    pub fn get_rank(&self, rank: usize) -> Option<CellState> {
        self.current.get(rank).copied()
    }

    /// Write `state` into the next buffer at a wrapped coordinate.
    pub fn set_next(&mut self, coord: &Coord, state: CellState) -> Result<(), GridError> {
        let rank = self.rank_of(coord)?;
        self.next[rank] = state;
        Ok(())
    }

    /// Write `state` into *both* buffers, so the edit is visible now and
    /// survives into the next generation's write target.
    ///
    /// Used for stamping patterns and interactive editing between steps.
    pub fn set(&mut self, coord: &Coord, state: CellState) -> Result<(), GridError> {
        let rank = self.rank_of(coord)?;
        self.current[rank] = state;
        self.next[rank] = state;
        Ok(())
    }

    /// Flip a cell between `Dead` and `Alive` in both buffers and return
    /// the new state. `Stable` cells are left as they are.
    pub fn toggle(&mut self, coord: &Coord) -> Result<CellState, GridError> {
        let rank = self.rank_of(coord)?;
        let flipped = match self.current[rank] {
            CellState::Dead => CellState::Alive,
            CellState::Alive => CellState::Dead,
            CellState::Stable => CellState::Stable,
        };
        self.current[rank] = flipped;
        self.next[rank] = flipped;
        Ok(flipped)
    }

    /// Exchange the roles of the two buffers. No cell data is copied.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Borrow both buffers for one generation.
    pub fn begin_generation(&mut self) -> GenerationGuard<'_> {
        GenerationGuard {
            topology: self.topology.as_ref(),
            current: &self.current,
            next: &mut self.next,
        }
    }

    /// Swap the buffers and advance the generation counter.
    pub fn publish(&mut self) {
        self.swap();
        self.generation = self.generation.next();
    }

    /// Set every cell of both buffers to `Dead` and reset the generation.
    ///
    /// Clears the write target, swaps it in, then clears the old current
    /// buffer as well, so both buffers are identical afterwards.
    pub fn clear(&mut self) {
        self.next.fill(CellState::Dead);
        self.swap();
        self.next.fill(CellState::Dead);
        self.generation = GenerationId(0);
    }

    /// Number of current cells satisfying `predicate`.
    pub fn count_where(&self, predicate: impl Fn(CellState) -> bool) -> usize {
        self.current.iter().filter(|&&s| predicate(s)).count()
    }

    /// Number of current cells that are `Alive` or `Stable`.
    pub fn occupied_count(&self) -> usize {
        self.count_where(CellState::is_occupied)
    }

    /// Load `cells` into both buffers and reset the generation.
    pub(crate) fn load(&mut self, cells: impl IntoIterator<Item = CellState>) {
        for (slot, state) in self.current.iter_mut().zip(cells) {
            *slot = state;
        }
        self.next.copy_from_slice(&self.current);
        self.generation = GenerationId(0);
    }

    /// Owned copy of the current buffer with its generation.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.dimensions(), self.generation, self.current.clone())
    }

    /// Replace the grid's contents with a snapshot taken from a grid of the
    /// same extents.
    pub fn restore(&mut self, snapshot: &GridSnapshot) -> Result<(), GridError> {
        if snapshot.dimensions() != self.dimensions() {
            return Err(GridError::ShapeMismatch {
                expected: self.dimensions(),
                actual: snapshot.dimensions(),
            });
        }
        if snapshot.cells().len() != self.cell_count() {
            return Err(GridError::DimensionMismatch {
                expected: self.cell_count(),
                actual: snapshot.cells().len(),
            });
        }
        self.current.copy_from_slice(snapshot.cells());
        self.next.copy_from_slice(snapshot.cells());
        self.generation = snapshot.generation();
        Ok(())
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("dimensions", &self.dimensions())
            .field("generation", &self.generation)
            .field("occupied", &self.occupied_count())
            .finish()
    }
}
