//! A Loopover board simulator.
//!
//! Loopover is played on a `width * height` board of numbered tiles. The only
//! move is to rotate a whole row or column, wrapping the tile that falls off
//! one edge around to the other. Moves are written in programmer's notation,
//! see [`notation`].
//!
//! ```
//! use loopover::{parse_move, Grid};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! let mv = parse_move("1R0", &grid).unwrap();
//! grid.apply_move(&mv);
//! assert_eq!(grid.rows().next(), Some(&[3, 1, 2][..]));
//!
//! grid.apply_move(&mv.inverse());
//! assert!(grid.is_solved());
//! ```

pub mod board;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod notation;
pub mod rotation;
pub mod shuffle;

pub use crate::board::Grid;
pub use crate::config::{BoardSize, SessionConfig, ShuffleMode};
pub use crate::dimensions::parse_dimensions;
pub use crate::error::{DimensionError, GridError, MoveError, ParseError};
pub use crate::notation::{parse_move, Axis, Move};
pub use crate::rotation::apply_move;
pub use crate::shuffle::Shuffler;
