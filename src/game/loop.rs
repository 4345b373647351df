use log::warn;
use rand::Rng;

use crate::board::piece::Piece;
use crate::game::display::GameDisplay;
use crate::game::input_source::{InputError, InputSource, MoveInput};
use crate::game::renderer::GameRenderer;
use crate::game::{Game, GameEnding, GameError, TurnChange};

/// Drives one game: render, ask the current color's input for a move, apply
/// it, repeat until the game ends or the player quits.
pub struct GameLoop<I: InputSource, R: GameRenderer, G: Rng> {
    game: Game,
    ui: GameDisplay,
    input: I,
    renderer: R,
    rng: G,
    notice: Option<String>,
}

impl<I: InputSource, R: GameRenderer, G: Rng> GameLoop<I, R, G> {
    pub fn new(game: Game, input: I, renderer: R, rng: G) -> Self {
        Self {
            game,
            ui: GameDisplay::new(),
            input,
            renderer,
            rng,
            notice: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the ending, or `None` if the player quit first.
    pub fn run(&mut self) -> Result<Option<GameEnding>, GameError> {
        loop {
            if let Some(ending) = self.game.outcome() {
                self.renderer.render(&mut self.ui, &self.game);
                let (black, white) = self.game.board().player_scores();
                match ending {
                    GameEnding::Winner(winner) => println!("{} wins!", winner),
                    GameEnding::Tie => println!("Tie!"),
                }
                println!("Final score: black {} white {}", black, white);
                return Ok(Some(ending));
            }

            self.renderer.render(&mut self.ui, &self.game);
            if let Some(notice) = self.notice.take() {
                println!("{}", notice);
            }

            let current_turn = self.game.turn();
            let (result, automated) = match self.input.get_move(current_turn) {
                Ok(MoveInput::Quit) => return Ok(None),
                Ok(MoveInput::Square(square)) => (self.game.play_square(square), false),
                Ok(MoveInput::UseEngine) => (self.game.play_best_move(), true),
                Ok(MoveInput::UseRandom) => (self.game.play_random_move(&mut self.rng), true),
                Err(error @ InputError::InvalidInput { .. }) => {
                    self.notice = Some(format!("error: {}", error));
                    continue;
                }
                Err(error) => return Err(error.into()),
            };

            match result {
                Ok(change) => {
                    self.note_turn_change(current_turn, change);
                    if automated {
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                }
                Err(error @ GameError::IllegalMove { .. }) => {
                    warn!("{} tried an illegal move: {}", current_turn, error);
                    self.notice = Some(format!("error: {}", error));
                }
                Err(error) => return Err(error),
            }
        }
    }

    fn note_turn_change(&mut self, mover: Piece, change: TurnChange) {
        if let TurnChange::Pass { passed } = change {
            self.notice = Some(format!(
                "{} has no legal move and passes; {} plays again",
                passed, mover
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::Square;
    use crate::game::config::{GameConfig, PlayerKind};
    use crate::game::input_source::{ConfiguredInput, HumanInput};
    use crate::game::renderer::StatsRenderer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn config(black: PlayerKind, white: PlayerKind) -> GameConfig {
        GameConfig {
            size: 4,
            search_depth: 2,
            black,
            white,
            deterministic: false,
            delay: None,
        }
    }

    fn game_loop(
        config: &GameConfig,
        human_lines: &'static str,
    ) -> GameLoop<ConfiguredInput<HumanInput<Cursor<&'static str>>>, StatsRenderer, StdRng> {
        let input = ConfiguredInput::new(config, HumanInput::new(Cursor::new(human_lines)));
        let renderer = StatsRenderer {
            delay_between_moves: config.delay,
        };
        GameLoop::new(
            Game::new(config).unwrap(),
            input,
            renderer,
            StdRng::seed_from_u64(11),
        )
    }

    #[test]
    fn test_quit_ends_without_outcome() {
        let config = config(PlayerKind::Human, PlayerKind::Computer);
        let mut game_loop = game_loop(&config, "quit\n");
        assert_eq!(game_loop.run().unwrap(), None);
        assert_eq!(game_loop.game().log().len(), 1);
    }

    #[test]
    fn test_bad_input_is_reported_and_retried() {
        let config = config(PlayerKind::Human, PlayerKind::Human);
        let mut game_loop = game_loop(&config, "what\n0 0\n2 3\nquit\n");
        assert_eq!(game_loop.run().unwrap(), None);

        let game = game_loop.game();
        assert_eq!(game.log().len(), 2);
        assert_eq!(game.last_move().map(|m| m.square), Some(Square::new(2, 3)));
        assert_eq!(game.turn(), Piece::White);
    }

    #[test]
    fn test_automated_game_runs_to_the_end() {
        let config = config(PlayerKind::Computer, PlayerKind::Random);
        let mut game_loop = game_loop(&config, "");
        let ending = game_loop.run().unwrap();
        assert!(ending.is_some());
        assert_eq!(ending, game_loop.game().outcome());
        assert!(game_loop.game().is_over());
    }
}
