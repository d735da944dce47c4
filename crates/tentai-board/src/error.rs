//! Error types for board construction and mutation.

use std::error::Error;
use std::fmt;
use tentai_core::Place;

/// Errors arising from board construction or precondition violations.
///
/// These are fail-fast rejections of bad arguments. Negative query
/// outcomes — a region that fails galaxy validation, a mark lookup at a
/// non-cell address — are expressed as `Option`, not as errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate is outside the bounds of the board.
    OutOfBounds {
        /// The offending place.
        place: Place,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// An operation that requires an edge was given a non-edge place.
    NotAnEdge {
        /// The offending place.
        place: Place,
    },
    /// An operation that requires a cell was given a non-cell place.
    NotACell {
        /// The offending place.
        place: Place,
    },
    /// A center operation was given a place on the outer frame.
    PeripheryCenter {
        /// The offending place.
        place: Place,
    },
    /// Attempted to construct a board with zero cells.
    EmptyBoard,
    /// A requested dimension exceeds the representable maximum.
    DimensionTooLarge {
        /// Which dimension ("cols" or "rows").
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { place, bounds } => {
                write!(f, "place {place} out of bounds: {bounds}")
            }
            Self::NotAnEdge { place } => write!(f, "place {place} is not an edge"),
            Self::NotACell { place } => write!(f, "place {place} is not a cell"),
            Self::PeripheryCenter { place } => {
                write!(f, "place {place} is on the board periphery")
            }
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for BoardError {}
