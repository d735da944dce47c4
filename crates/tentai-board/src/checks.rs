//! Region invariant assertions shared across test modules.
//!
//! These verify the contracts that every returned region must satisfy,
//! reused by the accretion, galaxy, and hint test modules.

use crate::board::Board;
use crate::grid::AXIS_DELTAS;
use crate::region::Region;
use indexmap::IndexSet;
use std::collections::VecDeque;
use tentai_core::Place;

/// Assert that every member of `region` is a valid cell.
pub fn assert_region_cells(board: &Board, region: &Region) {
    for &cell in region {
        assert!(board.is_cell(cell), "region member {cell} is not a cell");
    }
}

/// Assert that `region` is connected via axis moves between member
/// cells that do not cross a boundary.
pub fn assert_region_connected(board: &Board, region: &Region) {
    let Some(&start) = region.iter().next() else {
        return;
    };
    let mut seen: IndexSet<Place> = IndexSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        for (dx, dy) in AXIS_DELTAS {
            let edge = cell.offset(dx, dy);
            let next = cell.offset(2 * dx, 2 * dy);
            if region.contains(&next) && !board.is_boundary(edge) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    assert_eq!(
        seen.len(),
        region.len(),
        "region is not connected: reached {} of {} cells from {start}",
        seen.len(),
        region.len()
    );
}

/// Assert that `region` is connected via axis moves between member
/// cells, crossing boundaries freely (the hint contract).
pub fn assert_region_connected_ignoring_boundaries(region: &Region) {
    let Some(&start) = region.iter().next() else {
        return;
    };
    let mut seen: IndexSet<Place> = IndexSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        for (dx, dy) in AXIS_DELTAS {
            let next = cell.offset(2 * dx, 2 * dy);
            if region.contains(&next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    assert_eq!(
        seen.len(),
        region.len(),
        "region is not contiguous: reached {} of {} cells from {start}",
        seen.len(),
        region.len()
    );
}

/// Assert that `region` is closed under point-reflection about `center`.
pub fn assert_region_symmetric(board: &Board, center: Place, region: &Region) {
    for &cell in region {
        let opp = board
            .grid()
            .opposing(center, cell)
            .unwrap_or_else(|| panic!("no valid reflection of {cell} about {center}"));
        assert!(
            region.contains(&opp),
            "region not symmetric: {cell} is in, its reflection {opp} is not"
        );
    }
}

/// Assert that every member of `region` is unmarked on `board`.
pub fn assert_region_unmarked(board: &Board, region: &Region) {
    for &cell in region {
        assert_eq!(board.mark(cell), Some(0), "region member {cell} is marked");
    }
}
