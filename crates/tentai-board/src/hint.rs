//! Maximal symmetric unmarked regions, for interactive hinting.

use crate::board::Board;
use crate::grid::AXIS_DELTAS;
use crate::region::Region;
use tentai_core::Place;

impl Board {
    /// The largest contiguous unmarked region that contains every cell
    /// touching `point` and is point-symmetric about it.
    ///
    /// `point` may be a cell, an edge, or an intersection; the cells
    /// touching it (itself, the two cells flanking an edge, or the four
    /// cells cornered on an intersection) seed the region, and the seed
    /// is empty — as is the result — unless all of them are valid
    /// unmarked cells. Growth then proceeds to a fixed point: each pass
    /// simultaneously adds every unmarked cell that is axis-adjacent to
    /// the region and whose reflection about `point` is also an
    /// unmarked cell. Boundaries and centers are ignored throughout —
    /// this is a what-if computation, not a rule check.
    ///
    /// The working set is private to the call, so externally visible
    /// marks are never touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use tentai_board::Board;
    /// use tentai_core::Place;
    ///
    /// let board = Board::new(7, 7).unwrap();
    /// // About the middle cell, the whole open board is reachable.
    /// assert_eq!(board.max_unmarked_region(Place::new(7, 7)).len(), 49);
    /// ```
    pub fn max_unmarked_region(&self, point: Place) -> Region {
        let mut region = Region::new();
        let touching = self.grid().touching(point);
        if touching.is_empty() || touching.iter().any(|&cell| self.mark(cell) != Some(0)) {
            return region;
        }
        region.extend(touching);

        loop {
            let mut ring = Region::new();
            for &cell in &region {
                for (dx, dy) in AXIS_DELTAS {
                    let next = cell.offset(2 * dx, 2 * dy);
                    if region.contains(&next) || ring.contains(&next) {
                        continue;
                    }
                    if self.mark(next) != Some(0) {
                        continue;
                    }
                    let Some(opp) = self.grid().opposing(point, next) else {
                        continue;
                    };
                    if self.mark(opp) != Some(0) {
                        continue;
                    }
                    ring.insert(next);
                }
            }
            if ring.is_empty() {
                break;
            }
            region.extend(ring);
        }
        region
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks;
    use proptest::prelude::*;

    fn p(x: i32, y: i32) -> Place {
        Place::new(x, y)
    }

    #[test]
    fn middle_cell_grows_to_whole_open_board() {
        let b = Board::new(7, 7).unwrap();
        let region = b.max_unmarked_region(p(7, 7));
        assert_eq!(region.len(), 49);
        checks::assert_region_connected(&b, &region);
        checks::assert_region_symmetric(&b, p(7, 7), &region);
    }

    #[test]
    fn off_center_cell_grows_to_symmetric_block() {
        let b = Board::new(7, 7).unwrap();
        // Reflection about (5, 5) leaves the board for x or y beyond 9,
        // so the region is the 5×5 block of cells with 1 <= x, y <= 9.
        let region = b.max_unmarked_region(p(5, 5));
        assert_eq!(region.len(), 25);
        assert!(region.contains(&p(5, 5)));
        assert!(region.contains(&p(9, 9)));
        assert!(!region.contains(&p(11, 1)));
        checks::assert_region_symmetric(&b, p(5, 5), &region);
    }

    #[test]
    fn edge_point_seeds_both_flanking_cells() {
        let b = Board::new(7, 7).unwrap();
        let region = b.max_unmarked_region(p(7, 6));
        // y reflects through 6, so rows with y = 13 are excluded.
        assert_eq!(region.len(), 42);
        assert!(region.contains(&p(7, 5)));
        assert!(region.contains(&p(7, 7)));
        assert!(!region.contains(&p(7, 13)));
        checks::assert_region_symmetric(&b, p(7, 6), &region);
    }

    #[test]
    fn intersection_point_seeds_four_cells() {
        let b = Board::new(3, 3).unwrap();
        let region = b.max_unmarked_region(p(2, 2));
        // Every further candidate reflects off the board.
        assert_eq!(region.len(), 4);
        checks::assert_region_symmetric(&b, p(2, 2), &region);
    }

    #[test]
    fn marked_touching_cell_yields_empty_region() {
        let mut b = Board::new(7, 7).unwrap();
        b.set_mark(p(7, 7), 1).unwrap();
        assert!(b.max_unmarked_region(p(7, 6)).is_empty());
        assert!(b.max_unmarked_region(p(7, 7)).is_empty());
    }

    #[test]
    fn frame_point_yields_empty_region() {
        let b = Board::new(7, 7).unwrap();
        // Touching cells of frame points fall off the board.
        assert!(b.max_unmarked_region(p(0, 0)).is_empty());
        assert!(b.max_unmarked_region(p(0, 7)).is_empty());
        assert!(b.max_unmarked_region(p(7, 0)).is_empty());
        assert!(b.max_unmarked_region(p(-3, 5)).is_empty());
    }

    #[test]
    fn premarking_shrinks_the_region() {
        let mut b = Board::new(7, 7).unwrap();
        let open = b.max_unmarked_region(p(5, 5));
        b.set_mark(p(3, 5), 2).unwrap();
        let shrunk = b.max_unmarked_region(p(5, 5));
        // The marked cell and its reflection both drop out.
        assert_eq!(shrunk.len(), open.len() - 2);
        assert!(!shrunk.contains(&p(3, 5)));
        assert!(!shrunk.contains(&p(7, 5)));
        checks::assert_region_symmetric(&b, p(5, 5), &shrunk);
        checks::assert_region_unmarked(&b, &shrunk);
    }

    #[test]
    fn result_is_idempotent_and_leaves_marks_alone() {
        let mut b = Board::new(7, 7).unwrap();
        b.set_mark(p(1, 1), 4).unwrap();
        b.set_mark(p(9, 3), 1).unwrap();
        let first = b.max_unmarked_region(p(7, 7));
        let second = b.max_unmarked_region(p(7, 7));
        assert_eq!(first, second);
        assert_eq!(b.mark(p(1, 1)), Some(4));
        assert_eq!(b.mark(p(9, 3)), Some(1));
        for &cell in &first {
            assert_eq!(b.mark(cell), Some(0));
        }
    }

    #[test]
    fn ignores_boundaries_and_centers() {
        let mut open = Board::new(5, 5).unwrap();
        let baseline = open.max_unmarked_region(p(5, 5));
        open.toggle_boundary(p(4, 5)).unwrap();
        open.toggle_boundary(p(5, 4)).unwrap();
        open.place_center(p(3, 3)).unwrap();
        assert_eq!(open.max_unmarked_region(p(5, 5)), baseline);
    }

    proptest! {
        #[test]
        fn symmetric_and_unmarked_under_random_marks(
            marks in proptest::collection::vec((0u32..7, 0u32..7), 0..10),
            px in 1i32..14, py in 1i32..14,
        ) {
            let mut b = Board::new(7, 7).unwrap();
            for (cx, cy) in marks {
                let cell = p(2 * cx as i32 + 1, 2 * cy as i32 + 1);
                b.set_mark(cell, 1).unwrap();
            }
            let point = p(px, py);
            let region = b.max_unmarked_region(point);
            checks::assert_region_unmarked(&b, &region);
            checks::assert_region_connected_ignoring_boundaries(&region);
            for &cell in &region {
                let refl = Place::new(2 * point.x - cell.x, 2 * point.y - cell.y);
                prop_assert!(region.contains(&refl));
            }
        }

        #[test]
        fn more_marks_never_grow_the_region(
            marks in proptest::collection::vec((0u32..7, 0u32..7), 1..8),
        ) {
            let mut b = Board::new(7, 7).unwrap();
            let open_size = b.max_unmarked_region(p(7, 7)).len();
            for (cx, cy) in marks {
                let cell = p(2 * cx as i32 + 1, 2 * cy as i32 + 1);
                b.set_mark(cell, 1).unwrap();
            }
            prop_assert!(b.max_unmarked_region(p(7, 7)).len() <= open_size);
        }
    }
}
