//! Tentai: a board-state engine for Galaxies (Tentai Show) logic puzzles.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Tentai sub-crates. For most users, adding `tentai` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tentai::prelude::*;
//!
//! // Wall off the two bottom-left cells of a 3×3 board as a domino
//! // and put a galaxy center on their shared edge.
//! let mut board = Board::new(3, 3).unwrap();
//! for edge in [Place::new(1, 2), Place::new(3, 2), Place::new(4, 1)] {
//!     board.toggle_boundary(edge).unwrap();
//! }
//! board.place_center(Place::new(2, 1)).unwrap();
//!
//! let galaxy = board.find_galaxy(Place::new(2, 1)).unwrap().unwrap();
//! assert_eq!(galaxy.len(), 2);
//!
//! // Two cells out of nine: drawn correctly, but not yet a solution.
//! assert!(!board.solved());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tentai-core` | The [`types::Place`] coordinate value type |
//! | [`board`] | `tentai-board` | Board state, geometry, galaxy and hint queries |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core coordinate types (`tentai-core`).
pub use tentai_core as types;

/// Board state, geometry, and puzzle queries (`tentai-board`).
///
/// Contains [`board::Board`], the [`board::Grid`] geometry it is built
/// on, the [`board::Region`] result type, and [`board::BoardError`].
pub use tentai_board as board;

/// Common imports for typical Tentai usage.
///
/// ```rust
/// use tentai::prelude::*;
/// ```
pub mod prelude {
    pub use tentai_board::{Board, BoardError, Grid, PlaceKind, Region};
    pub use tentai_core::Place;
}
