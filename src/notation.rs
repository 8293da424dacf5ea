//! Moves and the programmer's notation used to write them.
//!
//! ```text
//! move   = amount axis index [ "'" ]
//! amount = [ "-" ] digit { digit }        ; amount != 0
//! axis   = "R" | "r" | "C" | "c"
//! index  = digit { digit }
//! ```
//!
//! A trailing apostrophe counts the index from the far edge, so on a board
//! with five rows `1R0'` moves the bottom row. Formatting a [`Move`] always
//! writes the near-edge index.

use std::fmt;

use crate::board::Grid;
use crate::error::{MoveError, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// How many lines of this kind the grid has: rows for `Row`, columns for
    /// `Column`.
    pub fn line_count(self, grid: &Grid) -> usize {
        match self {
            Axis::Row => grid.height(),
            Axis::Column => grid.width(),
        }
    }

    /// How many cells a single line of this kind holds.
    pub fn line_len(self, grid: &Grid) -> usize {
        match self {
            Axis::Row => grid.width(),
            Axis::Column => grid.height(),
        }
    }

    pub fn notation(self) -> char {
        match self {
            Axis::Row => 'R',
            Axis::Column => 'C',
        }
    }

    fn from_marker(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'r' => Some(Axis::Row),
            'c' => Some(Axis::Column),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Axis::Row => "row",
            Axis::Column => "column",
        };
        write!(f, "{}", s)
    }
}

/// A rotation of one row or column, checked against the grid it was built
/// for.
///
/// A positive amount moves tiles forward (right or down), a negative one
/// backward. The magnitude is the number of unit rotations and is never
/// reduced modulo the line length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    axis: Axis,
    index: usize,
    amount: i32,
}

impl Move {
    pub fn new(axis: Axis, index: usize, amount: i32, grid: &Grid) -> Result<Self, MoveError> {
        if amount == 0 {
            return Err(MoveError::ZeroAmount);
        }
        if amount == i32::MIN {
            return Err(MoveError::InvalidAmount(amount));
        }

        let lines = axis.line_count(grid);
        if index >= lines {
            return Err(MoveError::IndexOutOfRange { axis, index, lines });
        }

        Ok(Self {
            axis,
            index,
            amount,
        })
    }

    /// Builds a move from values already drawn inside the grid's bounds.
    pub(crate) fn within_bounds(axis: Axis, index: usize, amount: i32) -> Self {
        debug_assert!(amount != 0 && amount != i32::MIN);
        Self {
            axis,
            index,
            amount,
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn is_forward(&self) -> bool {
        self.amount > 0
    }

    /// The move that undoes this one.
    pub fn inverse(&self) -> Self {
        Self {
            amount: -self.amount,
            ..*self
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.amount, self.axis.notation(), self.index)
    }
}

/// Parses a move such as `2R0`, `-1c3` or `1R0'` and checks it against
/// `grid`.
pub fn parse_move(input: &str, grid: &Grid) -> Result<Move, ParseError> {
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    let (at, marker) = input
        .char_indices()
        .find(|(_, c)| c.is_alphabetic())
        .ok_or_else(|| ParseError::MissingAxis {
            input: input.to_string(),
        })?;

    let axis = Axis::from_marker(marker).ok_or_else(|| ParseError::InvalidAxis {
        axis: marker,
        input: input.to_string(),
    })?;

    let amount = parse_amount(&input[..at], input)?;

    let rest = &input[at + marker.len_utf8()..];
    let (digits, reverse_index) = match rest.strip_suffix('\'') {
        Some(digits) => (digits, true),
        None => (rest, false),
    };
    let index = parse_index(digits, input)?;

    let index = if reverse_index {
        let lines = axis.line_count(grid);
        lines
            .checked_sub(1)
            .and_then(|last| last.checked_sub(index))
            .ok_or_else(|| ParseError::IndexOutOfRange {
                axis,
                index,
                reverse: true,
                lines,
                input: input.to_string(),
            })?
    } else {
        index
    };

    Move::new(axis, index, amount, grid).map_err(|err| ParseError::from_move_error(err, input))
}

fn parse_amount(text: &str, input: &str) -> Result<i32, ParseError> {
    if text.is_empty() {
        return Err(ParseError::MissingAmount {
            input: input.to_string(),
        });
    }

    let invalid = || ParseError::InvalidAmount {
        amount: text.to_string(),
        input: input.to_string(),
    };

    let digits = text.strip_prefix('-').unwrap_or(text);
    if !is_number(digits) {
        return Err(invalid());
    }

    match text.parse::<i32>() {
        Ok(0) => Err(ParseError::ZeroAmount {
            input: input.to_string(),
        }),
        // Has no negation, so the move could not be undone.
        Ok(i32::MIN) => Err(invalid()),
        Ok(amount) => Ok(amount),
        Err(_) => Err(invalid()),
    }
}

fn parse_index(text: &str, input: &str) -> Result<usize, ParseError> {
    if text.is_empty() {
        return Err(ParseError::MissingIndex {
            input: input.to_string(),
        });
    }

    if !is_number(text) {
        return Err(ParseError::InvalidIndex {
            index: text.to_string(),
            input: input.to_string(),
        });
    }

    text.parse::<usize>().map_err(|_| ParseError::InvalidIndex {
        index: text.to_string(),
        input: input.to_string(),
    })
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
