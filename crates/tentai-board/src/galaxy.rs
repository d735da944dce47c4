//! Galaxy validation: symmetry, exclusivity, and the solved check.

use crate::board::Board;
use crate::error::BoardError;
use crate::grid::{PlaceKind, AXIS_DELTAS, DIAGONAL_DELTAS};
use crate::region::Region;
use smallvec::{smallvec, SmallVec};
use tentai_core::Place;

impl Board {
    /// Whether `region` is a correctly formed galaxy around `center`:
    /// nonempty, point-symmetric about `center`, free of interior
    /// boundaries, and free of foreign centers on its cells, adjoining
    /// edges, and corner intersections. Assumes `region` is connected.
    fn is_galaxy(&self, center: Place, region: &Region) -> bool {
        if region.is_empty() {
            return false;
        }
        for &cell in region {
            if self.is_center(cell) && cell != center {
                return false;
            }
            match self.grid().opposing(center, cell) {
                Some(opp) if region.contains(&opp) => {}
                _ => return false,
            }
            for (dx, dy) in AXIS_DELTAS {
                let edge = cell.offset(dx, dy);
                let next = cell.offset(2 * dx, 2 * dy);
                // A boundary must separate the region from its
                // complement, not cut through its interior.
                if self.is_boundary(edge) && region.contains(&next) {
                    return false;
                }
                if self.is_center(edge) && edge != center {
                    return false;
                }
            }
            for (dx, dy) in DIAGONAL_DELTAS {
                let corner = cell.offset(dx, dy);
                if self.is_center(corner) && corner != center {
                    return false;
                }
            }
        }
        true
    }

    /// The galaxy around `center`, if the boundary-enclosed region
    /// containing it forms one.
    ///
    /// The accretion is seeded from the cells `center` sits between:
    /// the cells below and above a horizontal edge, left and right of a
    /// vertical edge, the four diagonal cells of an intersection, or
    /// the cell itself. `Ok(None)` — no galaxy — is the normal negative
    /// outcome when the accreted region fails validation.
    ///
    /// Returns `Err(BoardError::OutOfBounds)` if `center` is not on the
    /// board, or `Err(BoardError::PeripheryCenter)` if it lies on the
    /// outer frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use tentai_board::Board;
    /// use tentai_core::Place;
    ///
    /// // An open board is one big region; it is only symmetric about
    /// // the exact geometric center.
    /// let mut board = Board::new(7, 7).unwrap();
    /// board.place_center(Place::new(7, 7)).unwrap();
    /// let galaxy = board.find_galaxy(Place::new(7, 7)).unwrap().unwrap();
    /// assert_eq!(galaxy.len(), 49);
    /// assert!(board.find_galaxy(Place::new(5, 5)).unwrap().is_none());
    /// ```
    pub fn find_galaxy(&self, center: Place) -> Result<Option<Region>, BoardError> {
        let Some(kind) = self.classify(center) else {
            return Err(BoardError::OutOfBounds {
                place: center,
                bounds: format!("[0, {}) x [0, {})", self.xlim(), self.ylim()),
            });
        };
        if self.grid().on_frame(center) {
            return Err(BoardError::PeripheryCenter { place: center });
        }
        let seeds: SmallVec<[Place; 4]> = match kind {
            PlaceKind::Cell => smallvec![center],
            PlaceKind::HorizEdge => smallvec![center.offset(0, -1), center.offset(0, 1)],
            PlaceKind::VertEdge => smallvec![center.offset(-1, 0), center.offset(1, 0)],
            PlaceKind::Intersection => DIAGONAL_DELTAS
                .iter()
                .map(|&(dx, dy)| center.offset(dx, dy))
                .collect(),
        };
        let mut region = Region::new();
        for seed in seeds {
            self.accrete_region(seed, &mut region);
        }
        Ok(if self.is_galaxy(center, &region) {
            Some(region)
        } else {
            None
        })
    }

    /// Whether the declared centers' galaxies partition the board.
    ///
    /// Every center must yield a galaxy, the galaxies must not overlap,
    /// and together they must cover all `rows × cols` cells. A board
    /// with no centers is never solved.
    pub fn solved(&self) -> bool {
        let mut covered = Region::new();
        for center in self.centers() {
            let Ok(Some(galaxy)) = self.find_galaxy(center) else {
                return false;
            };
            for cell in galaxy {
                if !covered.insert(cell) {
                    return false;
                }
            }
        }
        covered.len() == self.grid().cell_count()
    }

    /// Mark every properly formed galaxy's cells with `v`, unmarking
    /// all other cells first.
    pub fn mark_galaxies(&mut self, v: u32) {
        // Marks do not influence galaxy finding, so all galaxies are
        // computed before any mark is written.
        let galaxies: Vec<Region> = self
            .centers()
            .filter_map(|center| self.find_galaxy(center).ok().flatten())
            .collect();
        self.mark_all(0);
        for galaxy in galaxies {
            for cell in galaxy {
                self.set_mark_internal(cell, v);
            }
        }
    }
}
