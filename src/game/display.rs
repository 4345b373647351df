use crate::board::piece::Piece;
use crate::board::Board;
use crate::reversi_move::Move;
use termion::{clear, cursor};

pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Draws the board and the game info into the buffer, then prints the
    /// whole frame at once.
    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Piece,
        last_move: Option<&Move>,
        stats: Option<&str>,
    ) {
        self.clear();
        self.write_game_state(board, current_turn, last_move, stats);
        print!("{}", self.buffer);
    }

    fn write_game_state(
        &mut self,
        board: &Board,
        current_turn: Piece,
        last_move: Option<&Move>,
        stats: Option<&str>,
    ) {
        self.buffer.push_str(&board.to_grid());
        self.buffer.push('\n');

        let (black, white) = board.player_scores();
        self.buffer.push_str(&format!(
            "{} black: {}  {} white: {}\n",
            Piece::Black.to_unicode_char(),
            black,
            Piece::White.to_unicode_char(),
            white
        ));
        self.buffer.push_str(&format!("Turn: {}\n", current_turn));

        if let Some(last_move) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", last_move));
        }

        if let Some(stats) = stats {
            self.buffer.push_str(&format!("\n{}\n", stats));
        }
    }

    #[cfg(test)]
    fn buffer(self) -> String {
        self.buffer
    }
}
