//! PvP command - play a game against another human.

use reversi::game::config::PlayerKind;
use reversi::game::renderer::SimpleRenderer;
use reversi::search::DEFAULT_SEARCH_DEPTH;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short, long, default_value = "8")]
    pub size: usize,
}

impl Command for PvpArgs {
    fn execute(self) {
        let mut config = create_config(self.size, DEFAULT_SEARCH_DEPTH, false);
        config.black = PlayerKind::Human;
        config.white = PlayerKind::Human;
        run_game_loop(config, SimpleRenderer);
    }
}
