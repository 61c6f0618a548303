use thiserror::Error;

use crate::board::Pattern;

/// Errors raised while growing or querying a beam path.
///
/// All variants are validation failures surfaced synchronously at the
/// offending call. A failed operation leaves the beam unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BeamError {
    /// `begin` was called on a beam that already has a starting point.
    #[error("beam has already started")]
    AlreadyStarted,

    /// A move operation was called before `begin`.
    #[error("beam must have at least one point")]
    EmptyChain,

    /// The target point falls outside the board bounds.
    #[error("point ({x}, {y}) is outside the board bounds")]
    OutOfBounds { x: f64, y: f64 },

    /// The normal vector was queried on a point without a successor.
    #[error("beam point has no successor")]
    NoSuccessor,

    /// The normal vector was queried on a point without a predecessor.
    #[error("beam point has no predecessor")]
    NoPredecessor,

    /// The incoming and outgoing directions cancel out, so the bisector
    /// is undefined.
    #[error("normal vector is undefined: incoming and outgoing segments cancel out")]
    DegenerateNormal,
}

/// Errors raised while constructing a breadboard.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum BoardError {
    /// The requested hole pattern is not supported.
    #[error("invalid pattern: {0:?}")]
    UnsupportedPattern(Pattern),

    /// The board dimensions must be positive.
    #[error("board dimensions must be positive, got {width_mm} x {height_mm}")]
    InvalidDimensions { width_mm: f64, height_mm: f64 },
}
