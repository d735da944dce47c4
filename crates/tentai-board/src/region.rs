//! Boundary-respecting region accretion.

use crate::board::Board;
use crate::grid::AXIS_DELTAS;
use indexmap::IndexSet;
use std::collections::VecDeque;
use tentai_core::Place;

/// A transient set of cell places, in discovery order.
///
/// Regions are computation results (accreted components, validated
/// galaxies, hint regions), never persisted board state.
pub type Region = IndexSet<Place>;

impl Board {
    /// Accrete into `region` every cell reachable from `seed` without
    /// crossing a boundary.
    ///
    /// From each collected cell, each of the four axis neighbours is
    /// reachable iff the edge between them is not a boundary. Cells
    /// already in `region` are never re-entered, so callers can seed a
    /// shared region from several starting cells and pre-filled cells
    /// block expansion. The result is the maximal boundary-enclosed
    /// connected component containing `seed`; visitation order does not
    /// affect the final set.
    ///
    /// Requires that `seed` is a valid cell.
    pub fn accrete_region(&self, seed: Place, region: &mut Region) {
        debug_assert!(self.is_cell(seed));
        if region.contains(&seed) {
            return;
        }
        let mut queue = VecDeque::new();
        region.insert(seed);
        queue.push_back(seed);
        while let Some(cell) = queue.pop_front() {
            for (dx, dy) in AXIS_DELTAS {
                let edge = cell.offset(dx, dy);
                let next = cell.offset(2 * dx, 2 * dy);
                if !self.is_boundary(edge) && !region.contains(&next) {
                    region.insert(next);
                    queue.push_back(next);
                }
            }
        }
    }
}
