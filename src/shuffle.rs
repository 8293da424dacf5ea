//! Board scrambling.
//!
//! Two strategies are offered:
//!
//! - [`Shuffler::swap_shuffle`] visits every tile and swaps it with another
//!   tile picked at random. It is fast but not a uniform permutation, since a
//!   later swap can move an earlier tile back.
//! - [`Shuffler::move_shuffle`] plays random forward rotations, which is how
//!   a person would scramble the board by hand.
//!
//! The random source is owned by the [`Shuffler`], so a seeded generator
//! gives the same scramble every time.

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::board::Grid;
use crate::notation::{Axis, Move};
use crate::rotation::apply_move;

#[derive(Debug, Clone)]
pub struct Shuffler<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl Shuffler<ChaCha8Rng> {
    /// Deterministic shuffler: the same seed scrambles the same way.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Shuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Swaps every tile, in column-major order, with a random tile at a
    /// different position.
    pub fn swap_shuffle(&mut self, grid: &mut Grid) {
        let (width, height) = (grid.width(), grid.height());

        for x1 in 0..width {
            for y1 in 0..height {
                let (x2, y2) = loop {
                    let x2 = self.rng.gen_range(0..width);
                    let y2 = self.rng.gen_range(0..height);
                    if (x2, y2) != (x1, y1) {
                        break (x2, y2);
                    }
                };
                grid.swap((x1, y1), (x2, y2));
            }
        }

        debug!("swap shuffled {}x{} board", width, height);
    }

    /// Plays `iterations` random forward moves, or `width + height` moves when
    /// `iterations` is not positive. Returns the number of moves played.
    ///
    /// Each move picks an axis, a line on that axis and an amount in
    /// `1..line_len`, so no move is a full cycle.
    pub fn move_shuffle(&mut self, grid: &mut Grid, iterations: isize) -> usize {
        let iterations = if iterations <= 0 {
            grid.width() + grid.height()
        } else {
            iterations as usize
        };

        for _ in 0..iterations {
            let mv = self.random_move(grid);
            trace!("shuffle move {}", mv);
            apply_move(grid, &mv);
        }

        debug!(
            "move shuffled {}x{} board with {} moves",
            grid.width(),
            grid.height(),
            iterations
        );
        iterations
    }

    fn random_move(&mut self, grid: &Grid) -> Move {
        let axis = if self.rng.gen_bool(0.5) {
            Axis::Row
        } else {
            Axis::Column
        };
        let index = self.rng.gen_range(0..axis.line_count(grid));
        // The other side is at least 2 and the area fits a u32, so a line is
        // shorter than i32::MAX.
        let amount = self.rng.gen_range(1..axis.line_len(grid)) as i32;

        Move::within_bounds(axis, index, amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(grid: &Grid) -> Vec<u32> {
        grid.rows().flatten().copied().collect()
    }

    fn assert_permutation(grid: &Grid) {
        let mut values = tiles(grid);
        values.sort_unstable();
        let expected: Vec<u32> = (1..=grid.area() as u32).collect();
        assert_eq!(values, expected);
    }

    #[test]
    fn test_move_shuffle_default_iterations() {
        let mut grid = Grid::new(4, 3).unwrap();
        let mut shuffler = Shuffler::seeded(42);

        assert_eq!(shuffler.move_shuffle(&mut grid, 0), 7);
        assert_eq!(shuffler.move_shuffle(&mut grid, -5), 7);
        assert_permutation(&grid);
    }

    #[test]
    fn test_move_shuffle_requested_iterations() {
        let mut grid = Grid::new(5, 5).unwrap();
        let mut shuffler = Shuffler::seeded(7);

        assert_eq!(shuffler.move_shuffle(&mut grid, 100), 100);
        assert_permutation(&grid);
    }

    #[test]
    fn test_random_moves_stay_in_bounds() {
        let grid = Grid::new(2, 6).unwrap();
        let mut shuffler = Shuffler::seeded(3);

        for _ in 0..500 {
            let mv = shuffler.random_move(&grid);
            assert!(mv.index() < mv.axis().line_count(&grid));
            assert!(mv.amount() >= 1);
            assert!((mv.amount() as usize) < mv.axis().line_len(&grid));
        }
    }

    #[test]
    fn test_swap_shuffle_keeps_tiles() {
        let mut grid = Grid::new(5, 4).unwrap();
        let mut shuffler = Shuffler::seeded(1);

        shuffler.swap_shuffle(&mut grid);
        assert_permutation(&grid);
        assert!(!grid.is_solved());
    }

    #[test]
    fn test_swap_shuffle_on_smallest_board() {
        let mut grid = Grid::new(2, 2).unwrap();
        let mut shuffler = Shuffler::seeded(9);

        shuffler.swap_shuffle(&mut grid);
        assert_permutation(&grid);
    }

    #[test]
    fn test_same_seed_same_scramble() {
        let mut a = Grid::new(6, 6).unwrap();
        let mut b = Grid::new(6, 6).unwrap();

        Shuffler::seeded(1234).move_shuffle(&mut a, 50);
        Shuffler::seeded(1234).move_shuffle(&mut b, 50);
        assert_eq!(a, b);

        Shuffler::seeded(99).swap_shuffle(&mut a);
        Shuffler::seeded(99).swap_shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_any_rng_can_be_injected() {
        use rand::rngs::StdRng;

        let mut grid = Grid::new(3, 3).unwrap();
        let mut shuffler = Shuffler::new(StdRng::seed_from_u64(5));
        assert_eq!(shuffler.move_shuffle(&mut grid, 10), 10);
        assert_permutation(&grid);
    }
}
