// Per-player batting aggregation.

use std::collections::HashMap;

use serde::Serialize;

use super::{bucket_by_player, ratio, BattingCounts};
use crate::model::{BattedBallType, Hand, PlateAppearance, Player};

// ---------------------------------------------------------------------------
// Batted-ball direction
// ---------------------------------------------------------------------------

/// Spray category of a batted ball relative to the batter's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprayDirection {
    Pull,
    Center,
    Opposite,
}

/// Classify a defensive-position code (1-9) for a batter.
///
/// Pitcher, catcher and center field are always center. Third, short and
/// left are the pull side for a right-handed batter; first, second and
/// right are the pull side for a left-handed batter. Switch hitters are
/// treated as right-handed.
pub fn spray_direction(position: u8, bats: Hand) -> SprayDirection {
    if matches!(position, 1 | 2 | 8) {
        return SprayDirection::Center;
    }
    let pull_side: &[u8] = match bats {
        Hand::Left => &[3, 4, 9],
        Hand::Right | Hand::Switch => &[5, 6, 7],
    };
    if pull_side.contains(&position) {
        SprayDirection::Pull
    } else {
        SprayDirection::Opposite
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DirectionBreakdown {
    pub pull: u32,
    pub center: u32,
    pub opposite: u32,
}

impl DirectionBreakdown {
    fn record(&mut self, direction: SprayDirection) {
        match direction {
            SprayDirection::Pull => self.pull += 1,
            SprayDirection::Center => self.center += 1,
            SprayDirection::Opposite => self.opposite += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.pull + self.center + self.opposite
    }

    /// Percentage of classified balls in `direction` (0 when none).
    pub fn share(&self, direction: SprayDirection) -> f64 {
        let n = match direction {
            SprayDirection::Pull => self.pull,
            SprayDirection::Center => self.center,
            SprayDirection::Opposite => self.opposite,
        };
        100.0 * ratio(n, self.total())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BattedBallBreakdown {
    pub grounder: u32,
    pub liner: u32,
    pub fly: u32,
}

impl BattedBallBreakdown {
    fn record(&mut self, kind: BattedBallType) {
        match kind {
            BattedBallType::Grounder => self.grounder += 1,
            BattedBallType::Liner => self.liner += 1,
            BattedBallType::Fly => self.fly += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.grounder + self.liner + self.fly
    }

    /// Percentage of typed balls of `kind` (0 when none).
    pub fn share(&self, kind: BattedBallType) -> f64 {
        let n = match kind {
            BattedBallType::Grounder => self.grounder,
            BattedBallType::Liner => self.liner,
            BattedBallType::Fly => self.fly,
        };
        100.0 * ratio(n, self.total())
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Batting line for one resolved player.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BattingAggregation {
    pub player_name: String,
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
    pub rbi: u32,
    pub runs: u32,
    pub stolen_bases: u32,
    pub avg: f64,
    pub obp: f64,
    pub direction_breakdown: DirectionBreakdown,
    pub batted_ball_breakdown: BattedBallBreakdown,
}

impl BattingAggregation {
    fn from_bucket(player_name: String, appearances: &[&PlateAppearance], bats: Hand) -> Self {
        let counts = BattingCounts::from_appearances(appearances.iter().copied());

        let mut direction_breakdown = DirectionBreakdown::default();
        let mut batted_ball_breakdown = BattedBallBreakdown::default();
        for pa in appearances {
            if let Some(code) = pa.direction_code() {
                direction_breakdown.record(spray_direction(code, bats));
            }
            if let Some(kind) = pa.batted_ball_type {
                batted_ball_breakdown.record(kind);
            }
        }

        Self {
            player_name,
            plate_appearances: counts.plate_appearances,
            at_bats: counts.at_bats,
            hits: counts.hits,
            doubles: counts.doubles,
            triples: counts.triples,
            homeruns: counts.homeruns,
            walks: counts.walks,
            hbp: counts.hbp,
            strikeouts: counts.strikeouts,
            sacrifices: counts.sacrifices,
            rbi: counts.rbi,
            runs: counts.runs,
            stolen_bases: counts.stolen_bases,
            avg: counts.avg(),
            obp: counts.obp(),
            direction_breakdown,
            batted_ball_breakdown,
        }
    }

    /// Balls in play with a usable direction code.
    pub fn direction_total(&self) -> u32 {
        self.direction_breakdown.total()
    }

    pub fn batted_ball_total(&self) -> u32 {
        self.batted_ball_breakdown.total()
    }
}

fn raw_batter_name(pa: &PlateAppearance) -> &str {
    &pa.player_name
}

/// Aggregate plate appearances per resolved player.
///
/// Every roster player appears in the output, with zeros if they have no
/// events. `player_filter` keeps only events whose raw (unresolved) name
/// equals it. Output is sorted by batting average, highest first; ties keep
/// bucket order.
pub fn aggregate_batting<'a, I>(
    plate_appearances: I,
    roster: &[Player],
    player_filter: Option<&str>,
) -> Vec<BattingAggregation>
where
    I: IntoIterator<Item = &'a PlateAppearance>,
{
    let hands: HashMap<&str, Hand> = roster
        .iter()
        .map(|p| (p.name.as_str(), p.batting_hand))
        .collect();

    let mut results: Vec<BattingAggregation> =
        bucket_by_player(plate_appearances, roster, player_filter, raw_batter_name)
            .into_iter()
            .map(|(name, appearances)| {
                let bats = hands.get(name.as_str()).copied().unwrap_or_default();
                BattingAggregation::from_bucket(name, &appearances, bats)
            })
            .collect();

    results.sort_by(|a, b| b.avg.total_cmp(&a.avg));
    results
}
