use thiserror::Error;

use crate::notation::Axis;

/// Errors raised when building a [`Grid`](crate::Grid).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("board width must be greater than 1, got {0}")]
    WidthTooSmall(usize),

    #[error("board height must be greater than 1, got {0}")]
    HeightTooSmall(usize),

    /// Tile values would not fit in a `u32`.
    #[error("a {width}x{height} board has too many tiles")]
    TooLarge { width: usize, height: usize },
}

/// Errors raised by the checked [`Move`](crate::Move) constructor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("amount cannot be 0")]
    ZeroAmount,

    /// The amount has no negation in `i32`, so the move could not be undone.
    #[error("amount {0} is out of range")]
    InvalidAmount(i32),

    #[error("{axis} index {index} is out of range, expected 0..{lines}")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        lines: usize,
    },
}

/// Errors raised while reading a move written in programmer's notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty move")]
    Empty,

    #[error("no axis character in move {input:?}")]
    MissingAxis { input: String },

    #[error("invalid axis character {axis:?} in move {input:?}, expected one of r, R, c, C")]
    InvalidAxis { axis: char, input: String },

    #[error("missing amount in move {input:?}")]
    MissingAmount { input: String },

    #[error("invalid amount {amount:?} in move {input:?}")]
    InvalidAmount { amount: String, input: String },

    #[error("amount cannot be 0 in move {input:?}")]
    ZeroAmount { input: String },

    #[error("missing index in move {input:?}")]
    MissingIndex { input: String },

    #[error("invalid index {index:?} in move {input:?}")]
    InvalidIndex { index: String, input: String },

    /// The index does not name a line. `index` is the number as written;
    /// `reverse` is set when it counts from the far edge.
    #[error("{axis} index {index} in move {input:?} is out of range, expected 0..{lines}")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        reverse: bool,
        lines: usize,
        input: String,
    },
}

impl ParseError {
    pub(crate) fn from_move_error(err: MoveError, input: &str) -> Self {
        match err {
            MoveError::ZeroAmount => ParseError::ZeroAmount {
                input: input.to_string(),
            },
            MoveError::InvalidAmount(amount) => ParseError::InvalidAmount {
                amount: amount.to_string(),
                input: input.to_string(),
            },
            MoveError::IndexOutOfRange { axis, index, lines } => ParseError::IndexOutOfRange {
                axis,
                index,
                reverse: false,
                lines,
                input: input.to_string(),
            },
        }
    }
}

/// Errors raised while reading a `WIDTHxHEIGHT` board size.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("empty board size")]
    Empty,

    #[error("{input:?} doesn't look like a board size, expected WIDTHxHEIGHT")]
    NoSeparator { input: String },

    #[error("invalid width {width:?} in board size {input:?}")]
    InvalidWidth { width: String, input: String },

    #[error("invalid height {height:?} in board size {input:?}")]
    InvalidHeight { height: String, input: String },
}
