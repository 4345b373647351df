//! Watch command - watch two automated players play each other.

use std::time::Duration;

use reversi::game::config::PlayerKind;
use reversi::game::renderer::StatsRenderer;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "5")]
    pub depth: u8,
    #[structopt(short, long, default_value = "8")]
    pub size: usize,
    #[structopt(long, default_value = "computer")]
    pub black: PlayerKind,
    #[structopt(long, default_value = "computer")]
    pub white: PlayerKind,
    #[structopt(long)]
    pub deterministic: bool,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        if !self.black.is_automated() || !self.white.is_automated() {
            eprintln!("error: watch needs two automated players; use `play` or `pvp` instead");
            std::process::exit(1);
        }

        let delay = Some(Duration::from_millis(self.delay_ms));
        let mut config = create_config(self.size, self.depth, self.deterministic);
        config.black = self.black;
        config.white = self.white;
        config.delay = delay;

        run_game_loop(
            config,
            StatsRenderer {
                delay_between_moves: delay,
            },
        );
    }
}
