// CSV export with canonical headers.
//
// Output starts with a UTF-8 byte-order mark so spreadsheet tools detect
// the encoding. Headers match the first alias of each import field, so an
// exported file imports back without renaming columns.

use csv::Writer;
use thiserror::Error;

use crate::model::{Game, PitchingLine, PlateAppearance, Player};

const BOM: &str = "\u{feff}";

pub const PLAYER_HEADERS: [&str; 6] =
    ["name", "number", "grade", "position", "throwHand", "batHand"];

pub const GAME_HEADERS: [&str; 8] = [
    "id",
    "date",
    "opponent",
    "result",
    "scoreFor",
    "scoreAgainst",
    "gameType",
    "scoreboardImageUrl",
];

pub const PLATE_APPEARANCE_HEADERS: [&str; 10] = [
    "id",
    "gameId",
    "playerName",
    "inning",
    "result",
    "battedBallType",
    "battedBallDirection",
    "rbi",
    "runs",
    "stolenBases",
];

pub const PITCHING_HEADERS: [&str; 11] = [
    "gameId",
    "playerName",
    "ip",
    "runsAllowed",
    "earnedRuns",
    "hits",
    "walks",
    "strikeouts",
    "totalPitches",
    "strikes",
    "balls",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush CSV output: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Write a header row plus one row per record, returning BOM-prefixed text.
fn write_csv<T, const N: usize>(
    headers: [&str; N],
    records: &[T],
    to_row: impl Fn(&T) -> [String; N],
) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(headers)?;
    for record in records {
        writer.write_record(to_row(record))?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(format!("{BOM}{}", String::from_utf8(bytes)?))
}

pub fn export_players(players: &[Player]) -> Result<String, ExportError> {
    write_csv(PLAYER_HEADERS, players, |p| {
        [
            p.name.clone(),
            p.jersey_number.to_string(),
            p.grade.clone(),
            p.position.clone(),
            p.throwing_hand.label().to_string(),
            p.batting_hand.label().to_string(),
        ]
    })
}

pub fn export_games(games: &[Game]) -> Result<String, ExportError> {
    write_csv(GAME_HEADERS, games, |g| {
        [
            g.id.clone(),
            g.date.clone(),
            g.opponent.clone(),
            g.result.code().to_string(),
            g.score_for.to_string(),
            g.score_against.to_string(),
            g.game_type.code().to_string(),
            g.scoreboard_image_ref.clone().unwrap_or_default(),
        ]
    })
}

pub fn export_plate_appearances(pas: &[PlateAppearance]) -> Result<String, ExportError> {
    write_csv(PLATE_APPEARANCE_HEADERS, pas, |pa| {
        [
            pa.id.clone(),
            pa.game_id.clone(),
            pa.player_name.clone(),
            pa.inning.to_string(),
            pa.result.code().to_string(),
            pa.batted_ball_type
                .map(|t| t.code().to_string())
                .unwrap_or_default(),
            pa.batted_ball_direction.clone().unwrap_or_default(),
            pa.rbi.to_string(),
            pa.runs.to_string(),
            pa.stolen_bases.to_string(),
        ]
    })
}

pub fn export_pitching_lines(lines: &[PitchingLine]) -> Result<String, ExportError> {
    write_csv(PITCHING_HEADERS, lines, |l| {
        [
            l.game_id.clone(),
            l.player_name.clone(),
            l.innings_pitched.to_string(),
            l.runs_allowed.to_string(),
            l.earned_runs.to_string(),
            l.hits_allowed.to_string(),
            l.walks_allowed.to_string(),
            l.strikeouts.to_string(),
            l.total_pitches.to_string(),
            l.strikes.to_string(),
            l.balls.to_string(),
        ]
    })
}
