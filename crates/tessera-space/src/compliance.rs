//! Topology trait compliance test helpers.
//!
//! These functions verify that a `Topology` implementation satisfies the
//! invariants the grid and neighbour counter rely on. Reused across the
//! backend test modules.

use crate::topology::Topology;
use indexmap::IndexSet;

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(space: &dyn Topology) {
    let ordering = space.canonical_ordering();
    assert_eq!(
        ordering.len(),
        space.cell_count(),
        "canonical_ordering length != cell_count"
    );
    let unique: IndexSet<_> = ordering.iter().cloned().collect();
    assert_eq!(
        unique.len(),
        ordering.len(),
        "canonical_ordering contains duplicates"
    );
}

/// Assert that `canonical_rank` and `coord_of` agree with the ordering.
pub fn assert_rank_roundtrip(space: &dyn Topology) {
    for (i, coord) in space.canonical_ordering().iter().enumerate() {
        assert_eq!(
            space.canonical_rank(coord),
            Some(i),
            "canonical_rank({coord:?}) != {i}"
        );
        assert_eq!(space.coord_of(i).as_ref(), Some(coord), "coord_of({i})");
    }
    assert_eq!(space.coord_of(space.cell_count()), None);
}

/// Assert that every cell has exactly `neighbourhood_size` neighbours, all
/// in range.
pub fn assert_neighbourhood_size_uniform(space: &dyn Topology) {
    let n = space.neighbourhood_size();
    for rank in 0..space.cell_count() {
        let ranks = space.neighbour_ranks(rank);
        assert_eq!(ranks.len(), n, "cell {rank} has {} neighbours", ranks.len());
        assert!(
            ranks.iter().all(|&r| r < space.cell_count()),
            "cell {rank} has an out-of-range neighbour"
        );
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &dyn Topology) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(&coord) {
            assert!(
                space.neighbours(&nb).contains(&coord),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but not vice versa"
            );
        }
    }
}

/// Assert that wrapping an in-range coordinate is the identity.
pub fn assert_wrap_identity_in_range(space: &dyn Topology) {
    for coord in space.canonical_ordering() {
        assert_eq!(space.wrap_coord(&coord), coord);
    }
}

/// Run every compliance check.
pub fn run_full_compliance(space: &dyn Topology) {
    assert_canonical_ordering_complete(space);
    assert_rank_roundtrip(space);
    assert_neighbourhood_size_uniform(space);
    assert_neighbours_symmetric(space);
    assert_wrap_identity_in_range(space);
    assert!(space.topology_eq(space));
}
