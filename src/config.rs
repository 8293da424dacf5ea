//! Settings for a single play session, read from command line arguments.

use clap::{Parser, ValueEnum};

use crate::dimensions::parse_dimensions;
use crate::error::DimensionError;

/// How to scramble the board before the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShuffleMode {
    #[default]
    None,
    /// Swap every tile with a random other tile.
    Swap,
    /// Play random moves, see `--iterations`.
    Moves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSize {
    pub width: usize,
    pub height: usize,
}

fn parse_size(s: &str) -> Result<BoardSize, DimensionError> {
    let (width, height) = parse_dimensions(s)?;
    Ok(BoardSize { width, height })
}

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "loopover", about = "Play Loopover moves written in programmer's notation")]
pub struct SessionConfig {
    /// Board size as WIDTHxHEIGHT, WIDTHXHEIGHT or WIDTH*HEIGHT
    #[arg(long, value_parser = parse_size, default_value = "5x5")]
    pub size: BoardSize,

    /// How to scramble the board before playing: none | swap | moves
    #[arg(long, value_enum, default_value_t = ShuffleMode::None)]
    pub shuffle: ShuffleMode,

    /// Random moves played by --shuffle moves; 0 or less plays width + height
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    pub iterations: isize,

    /// Seed for the shuffler (drawn from the OS when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Moves to play, e.g. 1R0 -2c1 1C0'
    #[arg(allow_hyphen_values = true)]
    pub moves: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::try_parse_from(["loopover"]).unwrap();
        assert_eq!(
            config.size,
            BoardSize {
                width: 5,
                height: 5
            }
        );
        assert_eq!(config.shuffle, ShuffleMode::None);
        assert_eq!(config.iterations, 0);
        assert_eq!(config.seed, None);
        assert!(config.moves.is_empty());
    }

    #[test]
    fn test_options_and_moves() {
        let config = SessionConfig::try_parse_from([
            "loopover",
            "--size",
            "4*3",
            "--shuffle",
            "moves",
            "--iterations",
            "20",
            "--seed",
            "42",
            "1R0",
            "-2c1'",
        ])
        .unwrap();

        assert_eq!(
            config.size,
            BoardSize {
                width: 4,
                height: 3
            }
        );
        assert_eq!(config.shuffle, ShuffleMode::Moves);
        assert_eq!(config.iterations, 20);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.moves, vec!["1R0".to_string(), "-2c1'".to_string()]);
    }

    #[test]
    fn test_leading_backward_move() {
        let config = SessionConfig::try_parse_from(["loopover", "-1R0", "2C1"]).unwrap();
        assert_eq!(config.moves, vec!["-1R0".to_string(), "2C1".to_string()]);
    }

    #[test]
    fn test_negative_iterations() {
        let config =
            SessionConfig::try_parse_from(["loopover", "--shuffle", "moves", "--iterations", "-3"])
                .unwrap();
        assert_eq!(config.iterations, -3);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(SessionConfig::try_parse_from(["loopover", "--size", "5-5"]).is_err());
        assert!(SessionConfig::try_parse_from(["loopover", "--size"]).is_err());
        assert!(SessionConfig::try_parse_from(["loopover", "--shuffle", "riffle"]).is_err());
        assert!(SessionConfig::try_parse_from(["loopover", "--seed", "abc"]).is_err());
    }
}
