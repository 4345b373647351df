use std::time::Duration;

use crate::board::piece::Piece;
use crate::game::display::GameDisplay;
use crate::game::Game;
use crate::search::SearchStats;

pub trait GameRenderer {
    fn render(&self, ui: &mut GameDisplay, game: &Game);
    fn frame_delay(&self) -> Option<Duration>;
}

impl<T: GameRenderer + ?Sized> GameRenderer for &T {
    fn render(&self, ui: &mut GameDisplay, game: &Game) {
        (**self).render(ui, game)
    }

    fn frame_delay(&self) -> Option<Duration> {
        (**self).frame_delay()
    }
}

fn format_stats(stats: &SearchStats) -> String {
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {}, cutoffs: {})\n* Move took: {}",
        stats
            .last_score
            .map_or("-".to_string(), |s| format!("{:.3}", s)),
        stats.positions_searched,
        stats.depth,
        stats.cutoffs,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

/// Board only, for games between humans.
pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(&self, ui: &mut GameDisplay, game: &Game) {
        ui.render_game_state(game.board(), game.turn(), game.last_move(), None);
        println!("Enter your move as `x y`, or `quit`:");
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

/// Board plus the statistics of the last search.
pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(&self, ui: &mut GameDisplay, game: &Game) {
        let stats_display = format_stats(&game.search_stats());
        ui.render_game_state(
            game.board(),
            game.turn(),
            game.last_move(),
            Some(&stats_display),
        );
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// Stats renderer that prompts only when it is the human's turn.
pub struct ConditionalStatsRenderer {
    pub human_color: Piece,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(&self, ui: &mut GameDisplay, game: &Game) {
        let stats_display = format_stats(&game.search_stats());
        ui.render_game_state(
            game.board(),
            game.turn(),
            game.last_move(),
            Some(&stats_display),
        );
        if game.turn() == self.human_color {
            println!("Enter your move as `x y`, or `quit`:");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_stats() {
        let stats = SearchStats {
            positions_searched: 42,
            cutoffs: 3,
            depth: 4,
            last_score: Some(1.5),
            last_search_duration: None,
        };
        assert_eq!(
            format_stats(&stats),
            "* Score: 1.500\n* Positions searched: 42 (depth: 4, cutoffs: 3)\n* Move took: -"
        );
    }

    #[test]
    fn test_frame_delay() {
        let delay = Some(Duration::from_millis(250));
        assert_eq!(StatsRenderer { delay_between_moves: delay }.frame_delay(), delay);
        assert_eq!(SimpleRenderer.frame_delay(), None);
    }
}
