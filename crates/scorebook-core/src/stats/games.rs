// Game-level views: type filter, recent games, per-game box score.

use std::collections::HashSet;

use serde::Serialize;

use super::{BattingCounts, PitchingCounts};
use crate::model::{Game, GameType, PitchingLine, PlateAppearance};

/// Restricts event collections to games of one type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameFilter {
    #[default]
    All,
    Official,
    Practice,
}

impl GameFilter {
    pub fn includes(self, game: &Game) -> bool {
        match self {
            GameFilter::All => true,
            GameFilter::Official => game.game_type == GameType::Official,
            GameFilter::Practice => game.game_type == GameType::Practice,
        }
    }

    fn game_ids<'g>(self, games: &'g [Game]) -> HashSet<&'g str> {
        games
            .iter()
            .filter(|g| self.includes(g))
            .map(|g| g.id.as_str())
            .collect()
    }

    /// Plate appearances belonging to an included game. With `All`, every
    /// appearance is kept, including ones whose game is not on record.
    pub fn plate_appearances<'a>(
        self,
        games: &[Game],
        plate_appearances: &'a [PlateAppearance],
    ) -> Vec<&'a PlateAppearance> {
        if self == GameFilter::All {
            return plate_appearances.iter().collect();
        }
        let ids = self.game_ids(games);
        plate_appearances
            .iter()
            .filter(|pa| ids.contains(pa.game_id.as_str()))
            .collect()
    }

    /// Pitching lines belonging to an included game; see
    /// [`GameFilter::plate_appearances`].
    pub fn pitching_lines<'a>(
        self,
        games: &[Game],
        pitching_lines: &'a [PitchingLine],
    ) -> Vec<&'a PitchingLine> {
        if self == GameFilter::All {
            return pitching_lines.iter().collect();
        }
        let ids = self.game_ids(games);
        pitching_lines
            .iter()
            .filter(|line| ids.contains(line.game_id.as_str()))
            .collect()
    }
}

/// Sort games by date, oldest first. Stable; games whose date cannot be
/// parsed sort before all dated games.
pub fn games_by_date(games: &[Game]) -> Vec<&Game> {
    let mut sorted: Vec<&Game> = games.iter().collect();
    sorted.sort_by_key(|g| g.parsed_date());
    sorted
}

/// The `limit` most recent games, newest first.
pub fn recent_games(games: &[Game], limit: usize) -> Vec<&Game> {
    let mut sorted = games_by_date(games);
    sorted.reverse();
    sorted.truncate(limit);
    sorted
}

/// Team totals for a single game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameBoxScore {
    pub batting: BattingCounts,
    pub pitching: PitchingCounts,
    pub innings_pitched: f64,
}

pub fn game_box_score(
    game_id: &str,
    plate_appearances: &[PlateAppearance],
    pitching_lines: &[PitchingLine],
) -> GameBoxScore {
    let batting = BattingCounts::from_appearances(
        plate_appearances.iter().filter(|pa| pa.game_id == game_id),
    );
    let pitching =
        PitchingCounts::from_lines(pitching_lines.iter().filter(|l| l.game_id == game_id));
    GameBoxScore {
        batting,
        pitching,
        innings_pitched: pitching.innings_pitched(),
    }
}
