use log::trace;

use crate::board::Grid;
use crate::notation::{Axis, Move};

/// Applies `mv` to `grid` one unit rotation at a time and returns how many
/// unit rotations were made.
///
/// An amount of `n` always costs `n` rotations, even when `n` is larger than
/// the line, matching what a person does by hand.
pub fn apply_move(grid: &mut Grid, mv: &Move) -> usize {
    let steps = mv.amount().unsigned_abs() as usize;
    let forward = mv.is_forward();

    for _ in 0..steps {
        match mv.axis() {
            Axis::Row => rotate_row(grid, mv.index(), forward),
            Axis::Column => rotate_column(grid, mv.index(), forward),
        }
    }

    trace!("applied {} ({} unit rotations)", mv, steps);
    steps
}

/// Forward carries the last column into the first.
fn rotate_row(grid: &mut Grid, y: usize, forward: bool) {
    let row = grid.row_mut(y);
    if forward {
        row.rotate_right(1);
    } else {
        row.rotate_left(1);
    }
}

/// Forward carries the bottom row into the top.
fn rotate_column(grid: &mut Grid, x: usize, forward: bool) {
    let board = grid.board_mut();
    let last = board.len() - 1;

    if forward {
        let mut carry = board[last][x];
        for row in board.iter_mut() {
            std::mem::swap(&mut row[x], &mut carry);
        }
    } else {
        let mut carry = board[0][x];
        for row in board.iter_mut().rev() {
            std::mem::swap(&mut row[x], &mut carry);
        }
    }
}

impl Grid {
    /// See [`apply_move`].
    pub fn apply_move(&mut self, mv: &Move) -> usize {
        apply_move(self, mv)
    }
}
