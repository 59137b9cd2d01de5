// Column-name vocabularies for import.
//
// Each field lists the labels it may appear under, in priority order; the
// first entry is always the canonical header written by `export`. Matching
// is case-insensitive.
//
// The signature lists hold tokens that only ever appear in one kind of
// file. They drive the shape guard, so a token shared by two kinds (e.g.
// 失点, which is both a game's runs-against and a pitcher's runs allowed)
// must not be listed.

use super::RecordKind;

/// `(canonical header, aliases)` for every inferred field of a record kind.
pub type FieldTable = &'static [(&'static str, &'static [&'static str])];

pub mod game {
    pub const DATE: &[&str] = &["date", "日付", "試合日"];
    pub const OPPONENT: &[&str] = &["opponent", "対戦相手", "相手"];
    pub const RESULT: &[&str] = &["result", "結果", "勝敗"];
    pub const SCORE_FOR: &[&str] = &["scoreFor", "得点", "自チーム得点", "score for"];
    pub const SCORE_AGAINST: &[&str] = &["scoreAgainst", "失点", "相手得点", "score against"];
    pub const GAME_TYPE: &[&str] = &["gameType", "試合種別", "種別", "type"];
    pub const SCOREBOARD: &[&str] = &["scoreboardImageUrl", "scoreboard", "スコアボード"];

    pub const FIELDS: super::FieldTable = &[
        ("date", DATE),
        ("opponent", OPPONENT),
        ("result", RESULT),
        ("scoreFor", SCORE_FOR),
        ("scoreAgainst", SCORE_AGAINST),
        ("gameType", GAME_TYPE),
        ("scoreboardImageUrl", SCOREBOARD),
    ];
}

pub mod plate_appearance {
    pub const GAME_ID: &[&str] = &["gameId", "試合ID", "game"];
    pub const PLAYER_NAME: &[&str] = &["playerName", "選手名", "打者", "name", "player"];
    pub const INNING: &[&str] = &["inning", "イニング", "回"];
    pub const RESULT: &[&str] = &["result", "打席結果", "結果"];
    pub const BATTED_BALL_TYPE: &[&str] = &["battedBallType", "打球種類", "打球タイプ", "type"];
    pub const BATTED_BALL_DIRECTION: &[&str] =
        &["battedBallDirection", "打球方向", "方向", "direction"];
    pub const RBI: &[&str] = &["rbi", "打点"];
    pub const RUNS: &[&str] = &["runs", "得点"];
    pub const STOLEN_BASES: &[&str] = &["stolenBases", "盗塁", "sb"];

    pub const FIELDS: super::FieldTable = &[
        ("gameId", GAME_ID),
        ("playerName", PLAYER_NAME),
        ("inning", INNING),
        ("result", RESULT),
        ("battedBallType", BATTED_BALL_TYPE),
        ("battedBallDirection", BATTED_BALL_DIRECTION),
        ("rbi", RBI),
        ("runs", RUNS),
        ("stolenBases", STOLEN_BASES),
    ];
}

pub mod pitching {
    pub const GAME_ID: &[&str] = super::plate_appearance::GAME_ID;
    pub const PLAYER_NAME: &[&str] =
        &["playerName", "選手名", "投手", "name", "player"];
    pub const INNINGS_PITCHED: &[&str] = &["ip", "inningsPitched", "投球回", "イニング"];
    pub const RUNS_ALLOWED: &[&str] = &["runsAllowed", "失点", "runs allowed"];
    pub const EARNED_RUNS: &[&str] = &["earnedRuns", "自責点", "自責"];
    pub const HITS: &[&str] = &["hits", "hitsAllowed", "被安打", "安打"];
    pub const WALKS: &[&str] = &["walks", "walksAllowed", "与四球", "四球", "bb"];
    pub const STRIKEOUTS: &[&str] = &["strikeouts", "奪三振", "三振", "so"];
    pub const TOTAL_PITCHES: &[&str] = &["totalPitches", "球数", "投球数", "pitches"];
    pub const STRIKES: &[&str] = &["strikes", "ストライク", "strike"];
    pub const BALLS: &[&str] = &["balls", "ボール", "ball"];

    pub const FIELDS: super::FieldTable = &[
        ("gameId", GAME_ID),
        ("playerName", PLAYER_NAME),
        ("ip", INNINGS_PITCHED),
        ("runsAllowed", RUNS_ALLOWED),
        ("earnedRuns", EARNED_RUNS),
        ("hits", HITS),
        ("walks", WALKS),
        ("strikeouts", STRIKEOUTS),
        ("totalPitches", TOTAL_PITCHES),
        ("strikes", STRIKES),
        ("balls", BALLS),
    ];
}

pub mod player {
    pub const NAME: &[&str] = &["name", "選手名", "氏名", "名前"];
    pub const NUMBER: &[&str] = &["number", "背番号", "jerseyNumber"];
    pub const GRADE: &[&str] = &["grade", "学年"];
    pub const POSITION: &[&str] = &["position", "守備位置", "ポジション", "pos"];
    pub const THROW_HAND: &[&str] = &["throwHand", "throwingHand", "投球腕", "throws"];
    pub const BAT_HAND: &[&str] = &["batHand", "battingHand", "bats"];

    pub const FIELDS: super::FieldTable = &[
        ("name", NAME),
        ("number", NUMBER),
        ("grade", GRADE),
        ("position", POSITION),
        ("throwHand", THROW_HAND),
        ("batHand", BAT_HAND),
    ];
}

const GAME_SIGNATURE: &[&str] = &[
    "opponent",
    "対戦相手",
    "相手チーム",
    "scorefor",
    "scoreagainst",
    "gametype",
    "試合種別",
    "勝敗",
];

const PLATE_APPEARANCE_SIGNATURE: &[&str] =
    &["rbi", "打点", "打席結果", "battedball", "打球", "stolenbase", "盗塁"];

const PITCHING_SIGNATURE: &[&str] = &[
    "inningspitched",
    "投球回",
    "球数",
    "totalpitches",
    "earnedruns",
    "自責点",
    "runsallowed",
    "被安打",
    "与四球",
    "奪三振",
];

const PLAYER_SIGNATURE: &[&str] = &[
    "背番号",
    "jerseynumber",
    "throwhand",
    "bathand",
    "投打",
    "学年",
    "grade",
];

/// Lowercase tokens whose presence in a column name marks a file as `kind`.
pub fn signature(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Game => GAME_SIGNATURE,
        RecordKind::PlateAppearance => PLATE_APPEARANCE_SIGNATURE,
        RecordKind::Pitching => PITCHING_SIGNATURE,
        RecordKind::Player => PLAYER_SIGNATURE,
    }
}

pub fn fields(kind: RecordKind) -> FieldTable {
    match kind {
        RecordKind::Game => game::FIELDS,
        RecordKind::PlateAppearance => plate_appearance::FIELDS,
        RecordKind::Pitching => pitching::FIELDS,
        RecordKind::Player => player::FIELDS,
    }
}
