// Per-player pitching aggregation.

use serde::Serialize;

use super::{bucket_by_player, PitchingCounts};
use crate::model::{PitchingLine, Player};

/// Pitching line for one resolved player across all their games.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingAggregation {
    pub player_name: String,
    /// Number of pitching lines in the bucket.
    pub games: u32,
    /// Fractional-third notation, re-derived from summed outs.
    pub innings_pitched: f64,
    pub runs_allowed: u32,
    pub earned_runs: u32,
    pub hits_allowed: u32,
    pub walks_allowed: u32,
    pub strikeouts: u32,
    pub total_pitches: u32,
    pub strikes: u32,
    pub balls: u32,
    pub era: f64,
    pub strike_percentage: f64,
}

impl PitchingAggregation {
    fn from_counts(player_name: String, c: &PitchingCounts) -> Self {
        Self {
            player_name,
            games: c.lines,
            innings_pitched: c.innings_pitched(),
            runs_allowed: c.runs_allowed,
            earned_runs: c.earned_runs,
            hits_allowed: c.hits_allowed,
            walks_allowed: c.walks_allowed,
            strikeouts: c.strikeouts,
            total_pitches: c.total_pitches,
            strikes: c.strikes,
            balls: c.balls,
            era: c.era(),
            strike_percentage: c.strike_percentage(),
        }
    }
}

fn raw_pitcher_name(line: &PitchingLine) -> &str {
    &line.player_name
}

/// Aggregate pitching lines per resolved player, sorted by ERA ascending
/// (ties keep bucket order).
///
/// Bucketing and the raw-name filter behave as in
/// [`aggregate_batting`](super::batting::aggregate_batting), so every roster
/// player is listed, including non-pitchers with an ERA of 0.
pub fn aggregate_pitching<'a, I>(
    pitching_lines: I,
    roster: &[Player],
    player_filter: Option<&str>,
) -> Vec<PitchingAggregation>
where
    I: IntoIterator<Item = &'a PitchingLine>,
{
    let mut results: Vec<PitchingAggregation> =
        bucket_by_player(pitching_lines, roster, player_filter, raw_pitcher_name)
            .into_iter()
            .map(|(name, lines)| {
                let counts = PitchingCounts::from_lines(lines);
                PitchingAggregation::from_counts(name, &counts)
            })
            .collect();

    results.sort_by(|a, b| a.era.total_cmp(&b.era));
    results
}
