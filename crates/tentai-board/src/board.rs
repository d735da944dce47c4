//! Mutable puzzle state: boundary edges, galaxy centers, cell marks.

use crate::error::BoardError;
use crate::grid::{Grid, PlaceKind};
use indexmap::{IndexMap, IndexSet};
use std::fmt;
use tentai_core::Place;

/// The state of a Galaxies puzzle board.
///
/// A board owns a [`Grid`] (its geometry), a set of boundary edges, an
/// insertion-ordered list of galaxy centers, and a sparse map of cell
/// marks. Cells absent from the mark map are implicitly unmarked
/// (mark 0); stored mark values are `u32`, so marks are non-negative by
/// construction.
///
/// The four periphery edges of the board are always boundaries. They
/// are derived from position, never stored, so no mutation can toggle
/// them away.
///
/// Mutating operations take `&mut self` and must be externally
/// serialized by the caller; every `&self` query is read-only.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    boundaries: IndexSet<Place>,
    centers: IndexSet<Place>,
    marks: IndexMap<Place, u32>,
}

impl Board {
    /// The conventional number of cells on a side of a puzzle board.
    pub const DEFAULT_SIZE: u32 = 7;

    /// Create an empty board with `cols × rows` cells and only the
    /// periphery as boundaries.
    ///
    /// Returns `Err(BoardError::EmptyBoard)` if either dimension is 0,
    /// or `Err(BoardError::DimensionTooLarge)` if either exceeds
    /// [`Grid::MAX_DIM`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tentai_board::Board;
    /// use tentai_core::Place;
    ///
    /// let board = Board::new(7, 7).unwrap();
    /// assert_eq!(board.cols(), 7);
    /// // Periphery edges are boundaries from the start.
    /// assert!(board.is_boundary(Place::new(1, 0)));
    /// assert!(!board.is_boundary(Place::new(1, 2)));
    /// ```
    pub fn new(cols: u32, rows: u32) -> Result<Self, BoardError> {
        Ok(Self::with_grid(Grid::new(cols, rows)?))
    }

    fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            boundaries: IndexSet::new(),
            centers: IndexSet::new(),
            marks: IndexMap::new(),
        }
    }

    /// The board's geometry.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of columns of cells.
    pub fn cols(&self) -> u32 {
        self.grid.cols()
    }

    /// Number of rows of cells.
    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    /// Exclusive upper bound on x coordinates.
    pub fn xlim(&self) -> i32 {
        self.grid.xlim()
    }

    /// Exclusive upper bound on y coordinates.
    pub fn ylim(&self) -> i32 {
        self.grid.ylim()
    }

    /// Classify `p`, or `None` out of bounds. See [`Grid::classify`].
    pub fn classify(&self, p: Place) -> Option<PlaceKind> {
        self.grid.classify(p)
    }

    /// Whether `p` is a valid cell.
    pub fn is_cell(&self, p: Place) -> bool {
        self.grid.is_cell(p)
    }

    /// Whether `p` is a valid edge.
    pub fn is_edge(&self, p: Place) -> bool {
        self.grid.is_edge(p)
    }

    /// Whether `p` is a valid horizontal edge.
    pub fn is_horiz_edge(&self, p: Place) -> bool {
        self.grid.is_horiz_edge(p)
    }

    /// Whether `p` is a valid vertical edge.
    pub fn is_vert_edge(&self, p: Place) -> bool {
        self.grid.is_vert_edge(p)
    }

    /// Whether `p` is a valid intersection.
    pub fn is_intersection(&self, p: Place) -> bool {
        self.grid.is_intersection(p)
    }

    /// Whether a boundary is present at `p`.
    ///
    /// True iff `p` is a stored boundary edge, or an in-bounds edge on
    /// the outer frame of the board. The frame test applies uniformly to
    /// all four sides.
    pub fn is_boundary(&self, p: Place) -> bool {
        self.boundaries.contains(&p) || (self.grid.is_edge(p) && self.grid.on_frame(p))
    }

    /// Whether a center has been placed at `p`.
    pub fn is_center(&self, p: Place) -> bool {
        self.centers.contains(&p)
    }

    /// All placed centers, in insertion order.
    pub fn centers(&self) -> impl Iterator<Item = Place> + '_ {
        self.centers.iter().copied()
    }

    /// Toggle the presence of a boundary at `edge`.
    ///
    /// Returns `Err(BoardError::NotAnEdge)` unless `edge` classifies as
    /// an edge. Toggling a periphery edge is accepted but cannot remove
    /// its boundary status, which is derived from position.
    pub fn toggle_boundary(&mut self, edge: Place) -> Result<(), BoardError> {
        if !self.grid.is_edge(edge) {
            return Err(BoardError::NotAnEdge { place: edge });
        }
        if self.is_boundary(edge) {
            self.boundaries.swap_remove(&edge);
        } else {
            self.boundaries.insert(edge);
        }
        Ok(())
    }

    /// Place a galaxy center at `p`. Placing a center twice is a no-op.
    ///
    /// Returns `Err(BoardError::OutOfBounds)` if `p` is not on the
    /// board, or `Err(BoardError::PeripheryCenter)` if `p` lies on the
    /// outer frame — centers may sit on any interior cell, edge, or
    /// intersection, but never on the frame.
    pub fn place_center(&mut self, p: Place) -> Result<(), BoardError> {
        if !self.grid.contains(p) {
            return Err(BoardError::OutOfBounds {
                place: p,
                bounds: format!("[0, {}) x [0, {})", self.grid.xlim(), self.grid.ylim()),
            });
        }
        if self.grid.on_frame(p) {
            return Err(BoardError::PeripheryCenter { place: p });
        }
        self.centers.insert(p);
        Ok(())
    }

    /// The mark on `cell`, or `None` if `cell` is not a valid cell
    /// address.
    ///
    /// `None` is the invalid-address sentinel; an unmarked cell is
    /// `Some(0)`.
    pub fn mark(&self, cell: Place) -> Option<u32> {
        if !self.grid.is_cell(cell) {
            return None;
        }
        Some(self.marks.get(&cell).copied().unwrap_or(0))
    }

    /// Set the mark on `cell` to `v`.
    ///
    /// Returns `Err(BoardError::NotACell)` unless `cell` classifies as a
    /// cell.
    pub fn set_mark(&mut self, cell: Place, v: u32) -> Result<(), BoardError> {
        if !self.grid.is_cell(cell) {
            return Err(BoardError::NotACell { place: cell });
        }
        self.marks.insert(cell, v);
        Ok(())
    }

    /// Set the marks of all `cells` to `v`.
    ///
    /// Fails on the first non-cell address encountered.
    pub fn mark_cells(
        &mut self,
        cells: impl IntoIterator<Item = Place>,
        v: u32,
    ) -> Result<(), BoardError> {
        for cell in cells {
            self.set_mark(cell, v)?;
        }
        Ok(())
    }

    /// Set the mark of every cell currently present in the mark map to
    /// `v`.
    ///
    /// Only rewrites existing entries; cells that have never been marked
    /// are not materialized.
    pub fn mark_all(&mut self, v: u32) {
        for mark in self.marks.values_mut() {
            *mark = v;
        }
    }

    /// Write `v` for a cell known to be valid.
    pub(crate) fn set_mark_internal(&mut self, cell: Place, v: u32) {
        debug_assert!(self.grid.is_cell(cell));
        self.marks.insert(cell, v);
    }

    /// Clear the board: remove all centers, marks, and non-periphery
    /// boundaries, keeping the current size.
    pub fn clear(&mut self) {
        *self = Self::with_grid(self.grid);
    }

    /// Resize to `cols × rows` and clear.
    ///
    /// Everything except the periphery boundaries is discarded, exactly
    /// as for a freshly constructed board.
    pub fn resize(&mut self, cols: u32, rows: u32) -> Result<(), BoardError> {
        *self = Self::new(cols, rows)?;
        Ok(())
    }
}

impl Default for Board {
    /// An empty board of [`DEFAULT_SIZE`](Self::DEFAULT_SIZE) ×
    /// [`DEFAULT_SIZE`](Self::DEFAULT_SIZE) cells.
    fn default() -> Self {
        Self::with_grid(Grid::default())
    }
}

impl fmt::Display for Board {
    /// Render the board as a fixed-width character grid, one character
    /// per coordinate, rows printed top to bottom.
    ///
    /// Intersections are `'o'` (center) or `' '`; cells are `'O'`/`'o'`
    /// for marked/unmarked centers and `'*'`/`' '` otherwise;
    /// horizontal edges are `'O'`/`'o'` for centers on boundary or
    /// plain edges and `'='`/`'-'` otherwise; vertical edges likewise
    /// with `'I'`/`'|'`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.grid.ylim()).rev() {
            for x in 0..self.grid.xlim() {
                let p = Place::new(x, y);
                let center = self.is_center(p);
                let marked = self.mark(p).unwrap_or(0) > 0;
                let bound = self.is_boundary(p);
                let ch = match self.grid.classify(p) {
                    Some(PlaceKind::Intersection) => {
                        if center {
                            'o'
                        } else {
                            ' '
                        }
                    }
                    Some(PlaceKind::Cell) => match (center, marked) {
                        (true, true) => 'O',
                        (true, false) => 'o',
                        (false, true) => '*',
                        (false, false) => ' ',
                    },
                    Some(PlaceKind::HorizEdge) => match (center, bound) {
                        (true, true) => 'O',
                        (true, false) => 'o',
                        (false, true) => '=',
                        (false, false) => '-',
                    },
                    Some(PlaceKind::VertEdge) => match (center, bound) {
                        (true, true) => 'O',
                        (true, false) => 'o',
                        (false, true) => 'I',
                        (false, false) => '|',
                    },
                    // The loop stays inside the grid bounds.
                    None => ' ',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
