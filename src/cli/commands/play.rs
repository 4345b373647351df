//! Play command - play a game against the computer.

use std::str::FromStr;

use rand::seq::SliceRandom;
use reversi::board::piece::Piece;
use reversi::game::config::PlayerKind;
use reversi::game::renderer::ConditionalStatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

/// The human's color; `random` picks one when the game starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorChoice {
    Black,
    White,
    Random,
}

impl ColorChoice {
    fn resolve(self) -> Piece {
        match self {
            ColorChoice::Black => Piece::Black,
            ColorChoice::White => Piece::White,
            ColorChoice::Random => *Piece::PLAYERS
                .choose(&mut rand::thread_rng())
                .unwrap_or(&Piece::Black),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = &'static str;

    fn from_str(choice: &str) -> Result<Self, Self::Err> {
        match choice {
            "black" => Ok(ColorChoice::Black),
            "white" => Ok(ColorChoice::White),
            "random" => Ok(ColorChoice::Random),
            _ => Err("invalid color; options are: black, white, random"),
        }
    }
}

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: ColorChoice,
    #[structopt(short, long, default_value = "8")]
    pub size: usize,
    #[structopt(
        long = "opponent",
        default_value = "computer",
        help = "computer or random"
    )]
    pub opponent: PlayerKind,
    #[structopt(
        long,
        help = "The computer takes the highest ranked move instead of searching"
    )]
    pub deterministic: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let human_color = self.color.resolve();
        let mut config = create_config(self.size, self.depth, self.deterministic);
        match human_color {
            Piece::White => {
                config.black = self.opponent;
                config.white = PlayerKind::Human;
            }
            _ => {
                config.black = PlayerKind::Human;
                config.white = self.opponent;
            }
        }
        run_game_loop(config, ConditionalStatsRenderer { human_color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi::game::config::DEFAULT_BOARD_SIZE;
    use reversi::search::DEFAULT_SEARCH_DEPTH;

    #[test]
    fn test_defaults_match_library() {
        let args = PlayArgs::from_iter(vec!["play"]);
        assert_eq!(args.depth, DEFAULT_SEARCH_DEPTH);
        assert_eq!(args.size, DEFAULT_BOARD_SIZE);
        assert_eq!(args.color, ColorChoice::Random);
        assert_eq!(args.opponent, PlayerKind::Computer);
        assert!(!args.deterministic);
    }

    #[test]
    fn test_color_choice() {
        assert_eq!(ColorChoice::Black.resolve(), Piece::Black);
        assert_eq!(ColorChoice::White.resolve(), Piece::White);
        assert!(ColorChoice::Random.resolve().is_player());
        assert!(ColorChoice::from_str("green").is_err());
    }
}
