//! Shared utilities for CLI commands.

use std::process;

use log::error;
use reversi::game::config::GameConfig;
use reversi::game::input_source::{ConfiguredInput, HumanInput};
use reversi::game::r#loop::GameLoop;
use reversi::game::renderer::GameRenderer;
use reversi::game::Game;

/// Plays games with `config` until the player quits or declines a rematch.
pub(crate) fn run_game_loop<R>(config: GameConfig, renderer: R)
where
    R: GameRenderer,
{
    let mut input = ConfiguredInput::new(&config, HumanInput::stdin());

    loop {
        let game = match Game::new(&config) {
            Ok(game) => game,
            Err(err) => exit_with_error(err),
        };

        let outcome = GameLoop::new(game, &mut input, &renderer, rand::thread_rng()).run();
        match outcome {
            Ok(Some(_)) => {}
            Ok(None) => return,
            Err(err) => exit_with_error(err),
        }

        match input.human.prompt_replay() {
            Ok(true) => continue,
            Ok(false) => return,
            Err(err) => exit_with_error(err),
        }
    }
}

fn exit_with_error<E: std::fmt::Display>(err: E) -> ! {
    error!("{}", err);
    eprintln!("error: {}", err);
    process::exit(1);
}

pub(crate) fn create_config(size: usize, depth: u8, deterministic: bool) -> GameConfig {
    GameConfig {
        size,
        search_depth: depth,
        deterministic,
        ..GameConfig::default()
    }
}
