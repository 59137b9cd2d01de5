// Team-wide reducers over the flat collections.

use serde::Serialize;

use super::{BattingCounts, PitchingCounts};
use crate::model::{Game, GameResult, GameType, PitchingLine, PlateAppearance};

/// Team batting average across every plate appearance.
pub fn team_batting_avg<'a, I>(plate_appearances: I) -> f64
where
    I: IntoIterator<Item = &'a PlateAppearance>,
{
    BattingCounts::from_appearances(plate_appearances).avg()
}

/// Team ERA (7-inning scale) across every pitching line.
pub fn team_era<'a, I>(pitching_lines: I) -> f64
where
    I: IntoIterator<Item = &'a PitchingLine>,
{
    PitchingCounts::from_lines(pitching_lines).era()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinLossRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl WinLossRecord {
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

pub fn win_loss_record<'a, I>(games: I) -> WinLossRecord
where
    I: IntoIterator<Item = &'a Game>,
{
    let mut record = WinLossRecord::default();
    for game in games {
        match game.result {
            GameResult::Win => record.wins += 1,
            GameResult::Loss => record.losses += 1,
            GameResult::Tie => record.ties += 1,
        }
    }
    record
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GameTypeCounts {
    pub official: u32,
    pub practice: u32,
}

pub fn game_type_counts<'a, I>(games: I) -> GameTypeCounts
where
    I: IntoIterator<Item = &'a Game>,
{
    let mut counts = GameTypeCounts::default();
    for game in games {
        match game.game_type {
            GameType::Official => counts.official += 1,
            GameType::Practice => counts.practice += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AtBatResult, Hand};
    use crate::stats::batting::aggregate_batting;
    use crate::stats::test_support::{line, pa, player};

    fn game(id: &str, result: GameResult, game_type: GameType) -> Game {
        Game {
            id: id.to_string(),
            date: "2026-01-12".to_string(),
            opponent: "東町タイガース".to_string(),
            result,
            score_for: 0,
            score_against: 0,
            game_type,
            scoreboard_image_ref: None,
        }
    }

    #[test]
    fn team_avg_matches_sum_of_player_lines() {
        let roster = vec![player("A", Hand::Right), player("B", Hand::Left)];
        let pas = vec![
            pa("g1", "A", AtBatResult::Single),
            pa("g1", "A", AtBatResult::Walk),
            pa("g1", "B", AtBatResult::Strikeout),
            pa("g1", "B", AtBatResult::Sacrifice),
            pa("g1", "B", AtBatResult::Triple),
        ];
        let per_player = aggregate_batting(&pas, &roster, None);
        let hits: u32 = per_player.iter().map(|a| a.hits).sum();
        let at_bats: u32 = per_player.iter().map(|a| a.at_bats).sum();
        let team = team_batting_avg(&pas);
        assert!((team - hits as f64 / at_bats as f64).abs() < 1e-12);
        assert!((team - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn team_era_uses_outs() {
        let lines = vec![line("g1", "A", 4.2, 2), line("g1", "B", 2.1, 1)];
        // 21 outs, 3 ER -> 3 * 21 / 21
        assert!((team_era(&lines) - 3.0).abs() < 1e-9);
        assert_eq!(team_era(&[] as &[PitchingLine]), 0.0);
    }

    #[test]
    fn win_loss_and_type_counts() {
        let games = vec![
            game("g1", GameResult::Win, GameType::Official),
            game("g2", GameResult::Loss, GameType::Official),
            game("g3", GameResult::Win, GameType::Practice),
            game("g4", GameResult::Tie, GameType::Practice),
        ];
        let r = win_loss_record(&games);
        assert_eq!(r, WinLossRecord { wins: 2, losses: 1, ties: 1 });
        assert_eq!(r.games(), 4);
        assert_eq!(
            game_type_counts(&games),
            GameTypeCounts { official: 2, practice: 2 }
        );
    }

    #[test]
    fn empty_collections_are_zero() {
        let none: Vec<PlateAppearance> = Vec::new();
        assert_eq!(team_batting_avg(&none), 0.0);
        let no_games: Vec<Game> = Vec::new();
        assert_eq!(win_loss_record(&no_games).games(), 0);
    }
}
