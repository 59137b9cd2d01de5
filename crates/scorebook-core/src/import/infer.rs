// Column inference: map loosely-labelled rows onto typed records.

use chrono::Utc;
use tracing::{info, warn};

use super::aliases::{self, game, pitching, plate_appearance, player};
use super::{ImportError, RecordKind, Row};
use crate::dataset::ImportBatch;
use crate::model::{
    normalize_direction, AtBatResult, BattedBallType, Game, GameResult, GameType, Hand,
    PitchingLine, PlateAppearance, Player,
};
use crate::numeric::{parse_count, parse_inning, parse_number_or_zero};

type ColumnRule = fn(column: &str, alias: &str) -> bool;

fn equals(column: &str, alias: &str) -> bool {
    column == alias
}

fn starts_with(column: &str, alias: &str) -> bool {
    column.starts_with(alias)
}

fn contains(column: &str, alias: &str) -> bool {
    column.contains(alias)
}

/// Column-matching rules in precedence order, applied to lowercased
/// `(column, alias)` pairs.
const COLUMN_RULES: [ColumnRule; 3] = [equals, starts_with, contains];

/// Pick the column that supplies a field.
///
/// Rules are tried in order (equal, starts-with, contains, all
/// case-insensitive). Within a rule, earlier aliases win, then earlier
/// columns.
pub fn infer_column<'c>(columns: &[&'c str], aliases: &[&str]) -> Option<&'c str> {
    let lowered: Vec<String> = columns.iter().map(|c| c.trim().to_lowercase()).collect();
    let aliases: Vec<String> = aliases.iter().map(|a| a.to_lowercase()).collect();
    for rule in COLUMN_RULES {
        for alias in &aliases {
            if let Some(i) = lowered.iter().position(|c| rule(c, alias)) {
                return Some(columns[i]);
            }
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Shape guard
// ---------------------------------------------------------------------------

/// Reject the row set if any column carries another kind's signature token.
fn check_shape(target: RecordKind, rows: &[Row]) -> Result<(), ImportError> {
    for row in rows {
        for column in row.labels() {
            let lower = column.to_lowercase();
            for found in RecordKind::ALL.into_iter().filter(|k| *k != target) {
                if aliases::signature(found).iter().any(|t| lower.contains(t)) {
                    warn!(%target, %found, column, "import aborted: column belongs to another record kind");
                    return Err(ImportError::ShapeMismatch {
                        target,
                        found,
                        column: column.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Cell access
// ---------------------------------------------------------------------------

fn cell<'r>(row: &'r Row, aliases: &[&str]) -> Option<&'r str> {
    let labels = row.labels();
    let column = infer_column(&labels, aliases)?;
    row.get(column)
}

/// Trimmed cell text, or "" when no column matches.
fn text<'r>(row: &'r Row, aliases: &[&str]) -> &'r str {
    cell(row, aliases).map(str::trim).unwrap_or("")
}

fn non_empty(row: &Row, aliases: &[&str]) -> Option<String> {
    Some(text(row, aliases))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// The strike-count cell, unless the matched column is really a strikeout
/// column (`strike` is a prefix of `strikeouts`, and both appear as 三振).
fn strikes_cell(row: &Row) -> &str {
    let labels = row.labels();
    let Some(column) = infer_column(&labels, pitching::STRIKES) else {
        return "";
    };
    let lower = column.to_lowercase();
    if pitching::STRIKEOUTS
        .iter()
        .any(|a| lower.contains(&a.to_lowercase()))
    {
        return "";
    }
    row.get(column).map(str::trim).unwrap_or("")
}

/// Parse an enumerated cell; blank means default, unknown logs and
/// falls back to the default.
fn label_or_default<T: Default>(
    raw: &str,
    parse: fn(&str) -> Option<T>,
    field: &'static str,
    row: usize,
) -> T {
    if raw.is_empty() {
        return T::default();
    }
    parse(raw).unwrap_or_else(|| {
        warn!(field, value = raw, row, "unrecognized label, using default");
        T::default()
    })
}

fn batted_ball_type(raw: &str, row: usize) -> Option<BattedBallType> {
    if raw.is_empty() {
        return None;
    }
    let parsed = BattedBallType::from_label(raw);
    if parsed.is_none() {
        warn!(field = "battedBallType", value = raw, row, "unrecognized label, leaving empty");
    }
    parsed
}

// ---------------------------------------------------------------------------
// Importer
// ---------------------------------------------------------------------------

/// Builds typed records from parsed rows.
///
/// Record ids are generated as `csv-{kind}-{stamp}-{index}`; `stamp`
/// defaults to the current time in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct Importer {
    stamp: i64,
}

impl Default for Importer {
    fn default() -> Self {
        Self::new()
    }
}

impl Importer {
    pub fn new() -> Self {
        Self::with_stamp(Utc::now().timestamp_millis())
    }

    pub fn with_stamp(stamp: i64) -> Self {
        Self { stamp }
    }

    fn id(&self, prefix: &str, index: usize) -> String {
        format!("csv-{prefix}-{}-{index}", self.stamp)
    }

    pub fn games(&self, rows: &[Row]) -> Result<Vec<Game>, ImportError> {
        check_shape(RecordKind::Game, rows)?;
        let games: Vec<Game> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| Game {
                id: self.id("game", i),
                date: text(row, game::DATE).to_string(),
                opponent: text(row, game::OPPONENT).to_string(),
                result: label_or_default(
                    text(row, game::RESULT),
                    GameResult::from_label,
                    "result",
                    i + 1,
                ),
                score_for: parse_count(text(row, game::SCORE_FOR)),
                score_against: parse_count(text(row, game::SCORE_AGAINST)),
                game_type: label_or_default(
                    text(row, game::GAME_TYPE),
                    GameType::from_label,
                    "gameType",
                    i + 1,
                ),
                scoreboard_image_ref: non_empty(row, game::SCOREBOARD),
            })
            .collect();
        info!(kind = %RecordKind::Game, count = games.len(), "imported rows");
        Ok(games)
    }

    pub fn plate_appearances(&self, rows: &[Row]) -> Result<Vec<PlateAppearance>, ImportError> {
        use plate_appearance as pa;

        check_shape(RecordKind::PlateAppearance, rows)?;
        let appearances: Vec<PlateAppearance> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| PlateAppearance {
                id: self.id("pa", i),
                game_id: text(row, pa::GAME_ID).to_string(),
                player_name: text(row, pa::PLAYER_NAME).to_string(),
                inning: parse_inning(text(row, pa::INNING)),
                result: label_or_default(
                    text(row, pa::RESULT),
                    AtBatResult::from_label,
                    "result",
                    i + 1,
                ),
                batted_ball_type: batted_ball_type(text(row, pa::BATTED_BALL_TYPE), i + 1),
                batted_ball_direction: normalize_direction(text(row, pa::BATTED_BALL_DIRECTION)),
                rbi: parse_count(text(row, pa::RBI)),
                runs: parse_count(text(row, pa::RUNS)),
                stolen_bases: parse_count(text(row, pa::STOLEN_BASES)),
            })
            .collect();
        info!(kind = %RecordKind::PlateAppearance, count = appearances.len(), "imported rows");
        Ok(appearances)
    }

    pub fn pitching_lines(&self, rows: &[Row]) -> Result<Vec<PitchingLine>, ImportError> {
        check_shape(RecordKind::Pitching, rows)?;
        let lines: Vec<PitchingLine> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| PitchingLine {
                id: self.id("pitch", i),
                game_id: text(row, pitching::GAME_ID).to_string(),
                player_name: text(row, pitching::PLAYER_NAME).to_string(),
                innings_pitched: parse_number_or_zero(text(row, pitching::INNINGS_PITCHED))
                    .max(0.0),
                runs_allowed: parse_count(text(row, pitching::RUNS_ALLOWED)),
                earned_runs: parse_count(text(row, pitching::EARNED_RUNS)),
                hits_allowed: parse_count(text(row, pitching::HITS)),
                walks_allowed: parse_count(text(row, pitching::WALKS)),
                strikeouts: parse_count(text(row, pitching::STRIKEOUTS)),
                total_pitches: parse_count(text(row, pitching::TOTAL_PITCHES)),
                strikes: parse_count(strikes_cell(row)),
                balls: parse_count(text(row, pitching::BALLS)),
            })
            .collect();
        info!(kind = %RecordKind::Pitching, count = lines.len(), "imported rows");
        Ok(lines)
    }

    /// Roster rows. Requires a recognisable name column; rows with a blank
    /// name are dropped.
    pub fn players(&self, rows: &[Row]) -> Result<Vec<Player>, ImportError> {
        check_shape(RecordKind::Player, rows)?;
        if let Some(first) = rows.first() {
            if infer_column(&first.labels(), player::NAME).is_none() {
                return Err(ImportError::MissingNameColumn);
            }
        }
        let players: Vec<Player> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| !text(row, player::NAME).is_empty())
            .map(|(i, row)| Player {
                id: self.id("player", i),
                name: text(row, player::NAME).to_string(),
                jersey_number: parse_count(text(row, player::NUMBER)),
                grade: text(row, player::GRADE).to_string(),
                position: text(row, player::POSITION).to_string(),
                throwing_hand: label_or_default(
                    text(row, player::THROW_HAND),
                    Hand::from_label,
                    "throwHand",
                    i + 1,
                ),
                batting_hand: label_or_default(
                    text(row, player::BAT_HAND),
                    Hand::from_label,
                    "batHand",
                    i + 1,
                ),
            })
            .collect();
        info!(kind = %RecordKind::Player, count = players.len(), "imported rows");
        Ok(players)
    }

    /// Import `rows` as `kind`, wrapped as a batch supplying only that
    /// collection.
    pub fn import(&self, kind: RecordKind, rows: &[Row]) -> Result<ImportBatch, ImportError> {
        let batch = match kind {
            RecordKind::Game => ImportBatch {
                games: Some(self.games(rows)?),
                ..ImportBatch::default()
            },
            RecordKind::PlateAppearance => ImportBatch {
                plate_appearances: Some(self.plate_appearances(rows)?),
                ..ImportBatch::default()
            },
            RecordKind::Pitching => ImportBatch {
                pitching_lines: Some(self.pitching_lines(rows)?),
                ..ImportBatch::default()
            },
            RecordKind::Player => ImportBatch {
                players: Some(self.players(rows)?),
                ..ImportBatch::default()
            },
        };
        Ok(batch)
    }
}
