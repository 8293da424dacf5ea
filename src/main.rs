use std::error::Error;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, Stylize};
use clap::Parser;
use log::info;

use loopover::{parse_move, Grid, SessionConfig, ShuffleMode, Shuffler};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = SessionConfig::parse();
    let mut grid = Grid::new(config.size.width, config.size.height)?;
    let mut shuffler = match config.seed {
        Some(seed) => Shuffler::seeded(seed),
        None => Shuffler::from_entropy(),
    };

    match config.shuffle {
        ShuffleMode::None => {}
        ShuffleMode::Swap => shuffler.swap_shuffle(&mut grid),
        ShuffleMode::Moves => {
            let played = shuffler.move_shuffle(&mut grid, config.iterations);
            info!("shuffled with {} moves", played);
        }
    }

    let mut out = io::stdout();
    print_grid(&mut out, &grid)?;

    let mut total = 0;
    for text in &config.moves {
        match parse_move(text, &grid) {
            Ok(mv) => {
                total += grid.apply_move(&mv);
                queue!(out, Print(format!("\n{}\n", mv).bold()))?;
                print_grid(&mut out, &grid)?;
            }
            Err(err) => {
                queue!(out, Print(format!("\nskipped {}\n", err).red()))?;
            }
        }
    }

    if grid.is_solved() {
        queue!(out, Print(format!("\nSolved after {} rotations\n", total).green()))?;
    }
    out.flush()?;

    Ok(())
}

/// Prints the board, highlighting tiles that are already in place.
fn print_grid(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    let pad = grid.area().to_string().len();

    for (y, row) in grid.rows().enumerate() {
        for (x, &tile) in row.iter().enumerate() {
            let cell = format!(" {:>pad$}", tile, pad = pad);
            if tile == grid.solved_value(x, y) {
                queue!(out, Print(cell.green()))?;
            } else {
                queue!(out, Print(cell))?;
            }
        }
        queue!(out, Print("\n"))?;
    }
    Ok(())
}
