// Statistics engine: per-player aggregation, team summary, trends and
// per-game box scores.
//
// Every view counts events through `BattingCounts` / `PitchingCounts`, so
// "hit", "at-bat" and the ERA formula are defined once.

pub mod batting;
pub mod games;
pub mod pitching;
pub mod team;
pub mod trend;

use std::collections::HashMap;

use serde::Serialize;

use crate::innings::{innings_to_outs, outs_to_innings};
use crate::model::{AtBatResult, PitchingLine, PlateAppearance, Player};
use crate::names::NameResolver;

/// Regulation length of a game in this league.
pub const REGULATION_INNINGS: u32 = 7;

/// `numerator / denominator`, or 0 when the denominator is 0.
pub(crate) fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn bump(total: &mut u32, amount: u32) {
    *total = total.saturating_add(amount);
}

/// Group records by resolved player name.
///
/// Every roster player gets a bucket first (in roster order, so players
/// without events still appear); names that resolve off-roster get a bucket
/// when first seen. `filter` selects records by their raw, unresolved name.
pub(crate) fn bucket_by_player<'a, T, I>(
    records: I,
    roster: &[Player],
    filter: Option<&str>,
    raw_name: fn(&T) -> &str,
) -> Vec<(String, Vec<&'a T>)>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut buckets: Vec<(String, Vec<&'a T>)> = Vec::with_capacity(roster.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(roster.len());

    for p in roster {
        if !index.contains_key(&p.name) {
            index.insert(p.name.clone(), buckets.len());
            buckets.push((p.name.clone(), Vec::new()));
        }
    }

    let filter = filter.filter(|f| !f.is_empty());
    let resolver = NameResolver::new(roster);
    for record in records {
        let raw = raw_name(record);
        if filter.is_some_and(|f| f != raw) {
            continue;
        }
        let resolved = resolver.resolve(raw);
        match index.get(&resolved) {
            Some(&i) => buckets[i].1.push(record),
            None => {
                index.insert(resolved.clone(), buckets.len());
                buckets.push((resolved, vec![record]));
            }
        }
    }

    buckets
}

// ---------------------------------------------------------------------------
// Batting counts
// ---------------------------------------------------------------------------

/// Counting stats over any set of plate appearances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingCounts {
    pub plate_appearances: u32,
    pub at_bats: u32,
    pub hits: u32,
    pub doubles: u32,
    pub triples: u32,
    pub homeruns: u32,
    pub walks: u32,
    pub hbp: u32,
    pub strikeouts: u32,
    pub sacrifices: u32,
    pub reached_on_error: u32,
    pub rbi: u32,
    pub runs: u32,
    pub stolen_bases: u32,
}

impl BattingCounts {
    pub fn from_appearances<'a, I>(appearances: I) -> Self
    where
        I: IntoIterator<Item = &'a PlateAppearance>,
    {
        let mut counts = Self::default();
        for pa in appearances {
            counts.record(pa);
        }
        counts
    }

    /// Add one plate appearance. Totals saturate at `u32::MAX`.
    pub fn record(&mut self, pa: &PlateAppearance) {
        bump(&mut self.plate_appearances, 1);
        if pa.result.is_at_bat() {
            bump(&mut self.at_bats, 1);
        }
        if pa.result.is_hit() {
            bump(&mut self.hits, 1);
        }
        let tally = match pa.result {
            AtBatResult::Double => Some(&mut self.doubles),
            AtBatResult::Triple => Some(&mut self.triples),
            AtBatResult::Homerun => Some(&mut self.homeruns),
            AtBatResult::Walk => Some(&mut self.walks),
            AtBatResult::Hbp => Some(&mut self.hbp),
            AtBatResult::Strikeout => Some(&mut self.strikeouts),
            AtBatResult::Sacrifice => Some(&mut self.sacrifices),
            AtBatResult::Error => Some(&mut self.reached_on_error),
            AtBatResult::Single | AtBatResult::Groundout | AtBatResult::Flyout => None,
        };
        if let Some(tally) = tally {
            bump(tally, 1);
        }
        bump(&mut self.rbi, pa.rbi);
        bump(&mut self.runs, pa.runs);
        bump(&mut self.stolen_bases, pa.stolen_bases);
    }

    /// Hits / at-bats.
    pub fn avg(&self) -> f64 {
        ratio(self.hits, self.at_bats)
    }

    /// (H + BB + HBP) / (AB + BB + HBP + SAC).
    pub fn obp(&self) -> f64 {
        let on_base = [self.hits, self.walks, self.hbp];
        let chances = [self.at_bats, self.walks, self.hbp, self.sacrifices];
        let on_base: u64 = on_base.iter().map(|&n| u64::from(n)).sum();
        let chances: u64 = chances.iter().map(|&n| u64::from(n)).sum();
        if chances == 0 {
            0.0
        } else {
            on_base as f64 / chances as f64
        }
    }
}

// ---------------------------------------------------------------------------
// Pitching counts
// ---------------------------------------------------------------------------

/// Counting stats over any set of pitching lines. Innings are held as outs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingCounts {
    pub lines: u32,
    pub outs: u32,
    pub runs_allowed: u32,
    pub earned_runs: u32,
    pub hits_allowed: u32,
    pub walks_allowed: u32,
    pub strikeouts: u32,
    pub total_pitches: u32,
    pub strikes: u32,
    pub balls: u32,
}

impl PitchingCounts {
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a PitchingLine>,
    {
        let mut counts = Self::default();
        for line in lines {
            counts.record(line);
        }
        counts
    }

    /// Add one pitching line. Totals saturate at `u32::MAX`.
    pub fn record(&mut self, line: &PitchingLine) {
        bump(&mut self.lines, 1);
        bump(&mut self.outs, innings_to_outs(line.innings_pitched));
        bump(&mut self.runs_allowed, line.runs_allowed);
        bump(&mut self.earned_runs, line.earned_runs);
        bump(&mut self.hits_allowed, line.hits_allowed);
        bump(&mut self.walks_allowed, line.walks_allowed);
        bump(&mut self.strikeouts, line.strikeouts);
        bump(&mut self.total_pitches, line.total_pitches);
        bump(&mut self.strikes, line.strikes);
        bump(&mut self.balls, line.balls);
    }

    /// Innings pitched in fractional-third notation.
    pub fn innings_pitched(&self) -> f64 {
        outs_to_innings(self.outs)
    }

    /// ERA scaled to a 7-inning game, computed on outs:
    /// `ER * 7 * 3 / outs`.
    pub fn era(&self) -> f64 {
        if self.outs == 0 {
            return 0.0;
        }
        f64::from(self.earned_runs) * f64::from(REGULATION_INNINGS * 3) / f64::from(self.outs)
    }

    /// Strikes as a percentage of total pitches.
    pub fn strike_percentage(&self) -> f64 {
        100.0 * ratio(self.strikes, self.total_pitches)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::model::{AtBatResult, Hand, PitchingLine, PlateAppearance, Player};

    pub fn player(name: &str, bats: Hand) -> Player {
        Player {
            id: format!("p-{name}"),
            name: name.to_string(),
            jersey_number: 0,
            grade: String::new(),
            position: String::new(),
            throwing_hand: Hand::Right,
            batting_hand: bats,
        }
    }

    pub fn pa(game_id: &str, name: &str, result: AtBatResult) -> PlateAppearance {
        PlateAppearance {
            id: format!("pa-{game_id}-{name}"),
            game_id: game_id.to_string(),
            player_name: name.to_string(),
            inning: 1,
            result,
            batted_ball_type: None,
            batted_ball_direction: None,
            rbi: 0,
            runs: 0,
            stolen_bases: 0,
        }
    }

    pub fn line(game_id: &str, name: &str, ip: f64, earned_runs: u32) -> PitchingLine {
        PitchingLine {
            id: format!("ps-{game_id}-{name}"),
            game_id: game_id.to_string(),
            player_name: name.to_string(),
            innings_pitched: ip,
            runs_allowed: earned_runs,
            earned_runs,
            hits_allowed: 0,
            walks_allowed: 0,
            strikeouts: 0,
            total_pitches: 0,
            strikes: 0,
            balls: 0,
        }
    }
}
