//! Where the moves for each color come from.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::piece::Piece;
use crate::board::square::Square;
use crate::game::config::{GameConfig, PlayerKind};

static COORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})\s*[,\s]\s*(\d{1,2})$").expect("COORD_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveInput {
    Square(Square),
    UseEngine,
    UseRandom,
    Quit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        if trimmed == "q" || trimmed == "quit" {
            return Ok(MoveInput::Quit);
        }

        if let Some(caps) = COORD_RE.captures(&trimmed) {
            let x = caps[1].parse::<i32>();
            let y = caps[2].parse::<i32>();
            if let (Ok(x), Ok(y)) = (x, y) {
                return Ok(MoveInput::Square(Square::new(x, y)));
            }
        }

        Err(InputError::InvalidInput {
            input: input.trim().to_string(),
        })
    }
}

pub trait InputSource {
    fn get_move(&mut self, current_turn: Piece) -> Result<MoveInput, InputError>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn get_move(&mut self, current_turn: Piece) -> Result<MoveInput, InputError> {
        (**self).get_move(current_turn)
    }
}

/// Reads `x y` coordinates from any line-based reader, stdin by default.
pub struct HumanInput<R: BufRead> {
    reader: R,
}

impl HumanInput<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> HumanInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        io::stdout().flush().map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .map_err(|error| InputError::IOError {
                error: error.to_string(),
            })?;

        // end of input ends the session
        if read == 0 {
            return Ok("quit".to_string());
        }
        Ok(input)
    }

    /// Asks whether to start another game; anything but `y`/`yes` declines.
    pub fn prompt_replay(&mut self) -> Result<bool, InputError> {
        print!("Play again? (y/n) ");
        let answer = self.read_line()?;
        Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

impl<R: BufRead> InputSource for HumanInput<R> {
    fn get_move(&mut self, _current_turn: Piece) -> Result<MoveInput, InputError> {
        let line = self.read_line()?;
        line.parse()
    }
}

/// Reads human moves from `human`, and asks the engine or the random player
/// for the automated colors.
pub struct ConfiguredInput<H: InputSource> {
    pub black: PlayerKind,
    pub white: PlayerKind,
    pub human: H,
}

impl<H: InputSource> ConfiguredInput<H> {
    pub fn new(config: &GameConfig, human: H) -> Self {
        Self {
            black: config.black,
            white: config.white,
            human,
        }
    }
}

impl<H: InputSource> InputSource for ConfiguredInput<H> {
    fn get_move(&mut self, current_turn: Piece) -> Result<MoveInput, InputError> {
        let kind = match current_turn {
            Piece::White => self.white,
            _ => self.black,
        };
        match kind {
            PlayerKind::Human => self.human.get_move(current_turn),
            PlayerKind::Computer => Ok(MoveInput::UseEngine),
            PlayerKind::Random => Ok(MoveInput::UseRandom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!(
            MoveInput::from_str("2 3").unwrap(),
            MoveInput::Square(Square::new(2, 3))
        );
        assert_eq!(
            MoveInput::from_str(" 10,4 \n").unwrap(),
            MoveInput::Square(Square::new(10, 4))
        );
        assert_eq!(
            MoveInput::from_str("0, 7").unwrap(),
            MoveInput::Square(Square::new(0, 7))
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(MoveInput::from_str("quit").unwrap(), MoveInput::Quit);
        assert_eq!(MoveInput::from_str("Q").unwrap(), MoveInput::Quit);
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", "a1", "1", "1 2 3", "-1 2", "100 1"] {
            assert!(MoveInput::from_str(input).is_err(), "{:?}", input);
        }
    }

    #[test]
    fn test_human_input_reads_lines() {
        let mut human = HumanInput::new(Cursor::new("3 4\nnonsense\n"));
        assert_eq!(
            human.get_move(Piece::Black).unwrap(),
            MoveInput::Square(Square::new(3, 4))
        );
        assert!(human.get_move(Piece::Black).is_err());
        assert_eq!(human.get_move(Piece::Black).unwrap(), MoveInput::Quit);
    }

    #[test]
    fn test_prompt_replay() {
        let mut human = HumanInput::new(Cursor::new("yes\nn\n"));
        assert!(human.prompt_replay().unwrap());
        assert!(!human.prompt_replay().unwrap());
        assert!(!human.prompt_replay().unwrap());
    }

    #[test]
    fn test_configured_input_delegates_by_color() {
        let config = GameConfig {
            black: PlayerKind::Human,
            white: PlayerKind::Random,
            ..GameConfig::default()
        };
        let human = HumanInput::new(Cursor::new("1 2\n"));
        let mut input = ConfiguredInput::new(&config, human);
        assert_eq!(input.get_move(Piece::White).unwrap(), MoveInput::UseRandom);
        assert_eq!(
            input.get_move(Piece::Black).unwrap(),
            MoveInput::Square(Square::new(1, 2))
        );

        input.white = PlayerKind::Computer;
        assert_eq!(input.get_move(Piece::White).unwrap(), MoveInput::UseEngine);
    }
}
