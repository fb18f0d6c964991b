//! Owned, in-memory copy of a grid generation.

use tessera_core::{CellState, Dimensions, GenerationId};

use crate::error::GridError;

/// An owned copy of a grid's current buffer.
///
/// The only persistence surface of the engine: callers keep snapshots in
/// memory and hand them back to [`Grid::restore`](crate::Grid::restore).
/// A snapshot is `Send` and independent of the grid it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    dimensions: Dimensions,
    generation: GenerationId,
    cells: Vec<CellState>,
}

impl GridSnapshot {
    pub(crate) fn new(
        dimensions: Dimensions,
        generation: GenerationId,
        cells: Vec<CellState>,
    ) -> Self {
        Self {
            dimensions,
            generation,
            cells,
        }
    }

    /// Build a snapshot from explicit cell states.
    ///
    /// Returns `Err(GridError::EmptyDimensions)` if any extent is zero and
    /// `Err(GridError::DimensionMismatch)` if `cells` does not have one
    /// entry per cell of `dimensions`.
    pub fn from_cells(
        dimensions: Dimensions,
        generation: GenerationId,
        cells: Vec<CellState>,
    ) -> Result<Self, GridError> {
        if dimensions.extents().contains(&0) {
            return Err(GridError::EmptyDimensions { dimensions });
        }
        let expected = dimensions.checked_cell_count().unwrap_or(usize::MAX);
        if cells.len() != expected {
            return Err(GridError::DimensionMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self::new(dimensions, generation, cells))
    }

    /// Extents of the grid the snapshot was taken from.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Generation at which the snapshot was taken.
    pub fn generation(&self) -> GenerationId {
        self.generation
    }

    /// Cell states in flattening order.
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// Number of `Alive` or `Stable` cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_occupied()).count()
    }

    /// Render a planar snapshot as one text line per row using
    /// [`CellState::glyph`]. Volumetric snapshots render each z-layer in
    /// turn, separated by a blank line.
    pub fn to_ascii(&self) -> String {
        let (width, rows) = match self.dimensions {
            Dimensions::Planar { width, height } => (width as usize, height as usize),
            Dimensions::Volumetric { x, y, .. } => (x as usize, y as usize),
        };
        if width == 0 || rows == 0 {
            return String::new();
        }
        let mut out = String::with_capacity(self.cells.len() + self.cells.len() / width + 1);
        for (i, layer) in self.cells.chunks(width * rows).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for row in layer.chunks(width) {
                out.extend(row.iter().map(|s| s.glyph()));
                out.push('\n');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_checks_length() {
        let dims = Dimensions::planar(2, 2);
        assert!(GridSnapshot::from_cells(dims, GenerationId(0), vec![CellState::Dead; 3]).is_err());
        let s = GridSnapshot::from_cells(dims, GenerationId(5), vec![CellState::Alive; 4]).unwrap();
        assert_eq!(s.occupied_count(), 4);
        assert_eq!(s.generation(), GenerationId(5));
    }

    #[test]
    fn from_cells_rejects_zero_extent() {
        let dims = Dimensions::planar(0, 3);
        assert_eq!(
            GridSnapshot::from_cells(dims, GenerationId(0), vec![]),
            Err(GridError::EmptyDimensions { dimensions: dims })
        );
        let dims = Dimensions::volumetric(2, 2, 0);
        assert!(matches!(
            GridSnapshot::from_cells(dims, GenerationId(0), vec![]),
            Err(GridError::EmptyDimensions { .. })
        ));
    }

    #[test]
    fn ascii_of_empty_shape_is_empty() {
        let s = GridSnapshot::new(Dimensions::planar(0, 3), GenerationId(0), vec![]);
        assert_eq!(s.to_ascii(), "");
    }

    #[test]
    fn ascii_rows() {
        let dims = Dimensions::planar(3, 2);
        let cells = vec![
            CellState::Dead,
            CellState::Alive,
            CellState::Dead,
            CellState::Stable,
            CellState::Dead,
            CellState::Alive,
        ];
        let s = GridSnapshot::from_cells(dims, GenerationId(0), cells).unwrap();
        assert_eq!(s.to_ascii(), ".#.\n+.#\n");
    }

    #[test]
    fn ascii_layers() {
        let dims = Dimensions::volumetric(1, 1, 2);
        let cells = vec![CellState::Alive, CellState::Dead];
        let s = GridSnapshot::from_cells(dims, GenerationId(0), cells).unwrap();
        assert_eq!(s.to_ascii(), "#\n\n.\n");
    }
}
