//! Board state and galaxy geometry for Galaxies (Tentai Show) puzzles.
//!
//! A puzzle board is a `cols × rows` grid of cells addressed in *doubled
//! coordinates*: cells, the edges between them, and the intersections
//! where edges meet all share one integer coordinate system, with parity
//! deciding which feature a coordinate names (see [`Grid`]). On top of
//! that geometry, [`Board`] stores the mutable puzzle state — boundary
//! edges, galaxy centers, and cell marks — and answers the questions the
//! puzzle rules ask of it:
//!
//! - [`Board::find_galaxy`]: the boundary-enclosed region around a
//!   center, if it forms a valid galaxy (connected, point-symmetric,
//!   free of foreign centers and interior boundaries).
//! - [`Board::solved`]: whether the declared galaxies partition the
//!   whole board.
//! - [`Board::max_unmarked_region`]: the largest symmetric contiguous
//!   unmarked region around a point, for interactive hinting.
//!
//! # Quick start
//!
//! ```
//! use tentai_board::Board;
//! use tentai_core::Place;
//!
//! // A 2×1 board: two cells side by side, one galaxy spanning both.
//! let mut board = Board::new(2, 1).unwrap();
//! board.place_center(Place::new(2, 1)).unwrap(); // the shared edge
//! let galaxy = board.find_galaxy(Place::new(2, 1)).unwrap().unwrap();
//! assert_eq!(galaxy.len(), 2);
//! assert!(board.solved());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod galaxy;
mod grid;
mod hint;
mod region;

#[cfg(test)]
pub(crate) mod checks;

pub use board::Board;
pub use error::BoardError;
pub use grid::{Grid, PlaceKind};
pub use region::Region;
