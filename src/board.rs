use std::fmt;

use log::debug;

use crate::error::GridError;

/// A `width * height` Loopover board.
///
/// Cells are addressed by column `x` and row `y`. Every value in
/// `1..=width*height` appears exactly once; the only mutations are row and
/// column rotations, swaps done by the shuffler and [`Grid::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    board: Vec<Vec<u32>>,
}

impl Grid {
    /// Creates a solved board. Both dimensions must be greater than 1.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width <= 1 {
            return Err(GridError::WidthTooSmall(width));
        }
        if height <= 1 {
            return Err(GridError::HeightTooSmall(height));
        }
        // Tile values, up to width * height, are stored as u32.
        if width
            .checked_mul(height)
            .and_then(|area| u32::try_from(area).ok())
            .is_none()
        {
            return Err(GridError::TooLarge { width, height });
        }

        let board = (0..height)
            .map(|y| (0..width).map(|x| Self::value_at(width, x, y)).collect())
            .collect();

        debug!("created {}x{} board", width, height);

        Ok(Self {
            width,
            height,
            board,
        })
    }

    fn value_at(width: usize, x: usize, y: usize) -> u32 {
        (x + y * width + 1) as u32
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of tiles on the board, which is also the largest tile value.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// The value `(x, y)` holds when the board is solved.
    pub fn solved_value(&self, x: usize, y: usize) -> u32 {
        Self::value_at(self.width, x, y)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        self.board.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.board.iter().map(Vec::as_slice)
    }

    pub fn reset(&mut self) {
        let width = self.width;
        for (y, row) in self.board.iter_mut().enumerate() {
            for (x, tile) in row.iter_mut().enumerate() {
                *tile = Self::value_at(width, x, y);
            }
        }
        debug!("reset {}x{} board", self.width, self.height);
    }

    pub fn is_solved(&self) -> bool {
        self.board.iter().enumerate().all(|(y, row)| {
            row.iter()
                .enumerate()
                .all(|(x, &tile)| tile == Self::value_at(self.width, x, y))
        })
    }

    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u32] {
        &mut self.board[y]
    }

    pub(crate) fn board_mut(&mut self) -> &mut [Vec<u32>] {
        &mut self.board
    }

    pub(crate) fn swap(&mut self, (x1, y1): (usize, usize), (x2, y2): (usize, usize)) {
        let a = self.board[y1][x1];
        self.board[y1][x1] = self.board[y2][x2];
        self.board[y2][x2] = a;
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pad = self.area().to_string().len();

        for (y, row) in self.board.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &tile in row {
                write!(f, " {:>pad$}", tile, pad = pad)?;
            }
        }
        Ok(())
    }
}
