// Rolling per-game batting average for one player.

use serde::Serialize;

use super::games::games_by_date;
use super::BattingCounts;
use crate::model::{Game, PlateAppearance};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    /// "vs {opponent}".
    pub game_label: String,
    /// Within-game average, rounded to three decimals.
    pub avg: f64,
    /// The game's date string, unchanged.
    pub date: String,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Per-game averages for `player_name` over their last `window_size` games,
/// oldest first.
///
/// Games are matched on the literal recorded name; no fuzzy resolution is
/// applied here.
pub fn recent_batting_trend(
    plate_appearances: &[PlateAppearance],
    games: &[Game],
    player_name: &str,
    window_size: usize,
) -> Vec<TrendPoint> {
    if window_size == 0 {
        return Vec::new();
    }

    let own: Vec<&PlateAppearance> = plate_appearances
        .iter()
        .filter(|pa| pa.player_name == player_name)
        .collect();

    let played: Vec<&Game> = games_by_date(games)
        .into_iter()
        .filter(|g| own.iter().any(|pa| pa.game_id == g.id))
        .collect();

    let start = played.len().saturating_sub(window_size);
    played[start..]
        .iter()
        .map(|game| {
            let counts = BattingCounts::from_appearances(
                own.iter().copied().filter(|pa| pa.game_id == game.id),
            );
            TrendPoint {
                game_label: game.label(),
                avg: round3(counts.avg()),
                date: game.date.clone(),
            }
        })
        .collect()
}
