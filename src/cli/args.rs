//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{play::PlayArgs, pvp::PvpArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(name = "reversi", about = "A reversi engine implemented in Rust ●○")]
pub enum Reversi {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches for the best move using alpha-beta pruning at the given `--depth` (default: 5). Your color is chosen at random unless you specify one with `--color`. The board is `--size` squares wide (default: 8, between 4 and 10)."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine, on a board `--size` squares wide (default: 8)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch two automated players, `--black` and `--white` (computer or random), play each other, pausing `--delay` milliseconds between moves (default: 1000)."
    )]
    Watch(WatchArgs),
}

impl crate::cli::commands::Command for Reversi {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
        }
    }
}
