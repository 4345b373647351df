use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::board::piece::Piece;
use crate::search::DEFAULT_SEARCH_DEPTH;

pub const MIN_BOARD_SIZE: usize = 4;
pub const MAX_BOARD_SIZE: usize = 10;
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Who decides the moves for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    /// Searches with minimax.
    Computer,
    /// Picks uniformly among the legal moves.
    Random,
}

impl PlayerKind {
    pub fn is_automated(&self) -> bool {
        *self != PlayerKind::Human
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_str = match self {
            PlayerKind::Human => "human",
            PlayerKind::Computer => "computer",
            PlayerKind::Random => "random",
        };
        write!(f, "{}", kind_str)
    }
}

type ParseError = &'static str;
impl FromStr for PlayerKind {
    type Err = ParseError;
    fn from_str(kind: &str) -> Result<Self, Self::Err> {
        match kind {
            "human" => Ok(PlayerKind::Human),
            "computer" => Ok(PlayerKind::Computer),
            "random" => Ok(PlayerKind::Random),
            _ => Err("invalid player; options are: human, computer, random"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("board size must be between 4 and 10, got {size}")]
    InvalidSize { size: usize },
    #[error("search depth must be at least 1")]
    InvalidDepth,
}

/// Settings for one game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub size: usize,
    pub search_depth: u8,
    pub black: PlayerKind,
    pub white: PlayerKind,
    /// Computer players take the highest ranked move instead of searching.
    pub deterministic: bool,
    /// Pause after each automated move, so games between computers can be followed.
    pub delay: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            search_depth: DEFAULT_SEARCH_DEPTH,
            black: PlayerKind::Human,
            white: PlayerKind::Computer,
            deterministic: false,
            delay: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < MIN_BOARD_SIZE || self.size > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidSize { size: self.size });
        }
        if self.search_depth == 0 && !self.deterministic {
            return Err(ConfigError::InvalidDepth);
        }
        Ok(())
    }

    pub fn player(&self, color: Piece) -> PlayerKind {
        match color {
            Piece::White => self.white,
            _ => self.black,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.size, 8);
        assert_eq!(config.search_depth, 5);
    }

    #[test]
    fn test_size_bounds() {
        for size in MIN_BOARD_SIZE..=MAX_BOARD_SIZE {
            let config = GameConfig {
                size,
                ..GameConfig::default()
            };
            assert!(config.validate().is_ok());
        }
        for size in [0, 3, 11, 64] {
            let config = GameConfig {
                size,
                ..GameConfig::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::InvalidSize { size }));
        }
    }

    #[test]
    fn test_zero_depth_needs_deterministic_mode() {
        let mut config = GameConfig {
            search_depth: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDepth));
        config.deterministic = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_player_lookup() {
        let config = GameConfig::default();
        assert_eq!(config.player(Piece::Black), PlayerKind::Human);
        assert_eq!(config.player(Piece::White), PlayerKind::Computer);
    }

    #[test]
    fn test_parse_player_kind() {
        assert_eq!(PlayerKind::from_str("random"), Ok(PlayerKind::Random));
        assert_eq!(PlayerKind::from_str("computer"), Ok(PlayerKind::Computer));
        assert!(PlayerKind::from_str("robot").is_err());
        assert!(PlayerKind::Random.is_automated());
        assert!(!PlayerKind::Human.is_automated());
    }
}
