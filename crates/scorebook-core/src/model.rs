// Record types shared by aggregation, import and persistence.
//
// Field names serialize in camelCase, with the roster's stored names
// (`number`, `throwHand`, `batHand`) kept as-is.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enumerations
// ---------------------------------------------------------------------------

/// Terminal result of a plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AtBatResult {
    #[default]
    Single,
    Double,
    Triple,
    Homerun,
    Walk,
    Hbp,
    Strikeout,
    Groundout,
    Flyout,
    Error,
    Sacrifice,
}

impl AtBatResult {
    pub const ALL: [AtBatResult; 11] = [
        AtBatResult::Single,
        AtBatResult::Double,
        AtBatResult::Triple,
        AtBatResult::Homerun,
        AtBatResult::Walk,
        AtBatResult::Hbp,
        AtBatResult::Strikeout,
        AtBatResult::Groundout,
        AtBatResult::Flyout,
        AtBatResult::Error,
        AtBatResult::Sacrifice,
    ];

    /// Single, double, triple or home run.
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            AtBatResult::Single | AtBatResult::Double | AtBatResult::Triple | AtBatResult::Homerun
        )
    }

    /// Counts toward the batting-average denominator: everything except
    /// walk, hit-by-pitch and sacrifice.
    pub fn is_at_bat(self) -> bool {
        !matches!(
            self,
            AtBatResult::Walk | AtBatResult::Hbp | AtBatResult::Sacrifice
        )
    }

    /// Whether the ball was put in play (used to decide if a batted-ball
    /// type and direction can be recorded).
    pub fn is_ball_in_play(self) -> bool {
        self.is_hit()
            || matches!(
                self,
                AtBatResult::Groundout | AtBatResult::Flyout | AtBatResult::Error
            )
    }

    pub fn code(self) -> &'static str {
        match self {
            AtBatResult::Single => "single",
            AtBatResult::Double => "double",
            AtBatResult::Triple => "triple",
            AtBatResult::Homerun => "homerun",
            AtBatResult::Walk => "walk",
            AtBatResult::Hbp => "hbp",
            AtBatResult::Strikeout => "strikeout",
            AtBatResult::Groundout => "groundout",
            AtBatResult::Flyout => "flyout",
            AtBatResult::Error => "error",
            AtBatResult::Sacrifice => "sacrifice",
        }
    }

    /// Lenient parse accepting the English code or a score-sheet label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let lower = label.to_lowercase();
        if let Some(r) = Self::ALL.iter().copied().find(|r| r.code() == lower) {
            return Some(r);
        }
        let r = match label {
            "単打" | "安打" | "ヒット" => AtBatResult::Single,
            "二塁打" | "ツーベース" => AtBatResult::Double,
            "三塁打" | "スリーベース" => AtBatResult::Triple,
            "本塁打" | "ホームラン" => AtBatResult::Homerun,
            "四球" => AtBatResult::Walk,
            "死球" => AtBatResult::Hbp,
            "三振" => AtBatResult::Strikeout,
            "ゴロ" | "ゴロアウト" => AtBatResult::Groundout,
            "フライ" | "フライアウト" => AtBatResult::Flyout,
            "エラー" | "失策" => AtBatResult::Error,
            "犠打" | "犠飛" | "犠牲" => AtBatResult::Sacrifice,
            _ => match lower.as_str() {
                "1b" => AtBatResult::Single,
                "2b" => AtBatResult::Double,
                "3b" => AtBatResult::Triple,
                "hr" | "home run" => AtBatResult::Homerun,
                "bb" => AtBatResult::Walk,
                "k" | "so" => AtBatResult::Strikeout,
                "e" => AtBatResult::Error,
                "sac" => AtBatResult::Sacrifice,
                _ => return None,
            },
        };
        Some(r)
    }
}

/// Trajectory of a ball put in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BattedBallType {
    Grounder,
    Liner,
    Fly,
}

impl BattedBallType {
    pub fn code(self) -> &'static str {
        match self {
            BattedBallType::Grounder => "grounder",
            BattedBallType::Liner => "liner",
            BattedBallType::Fly => "fly",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "grounder" | "ground" | "gb" | "ゴロ" => Some(BattedBallType::Grounder),
            "liner" | "line" | "ld" | "ライナー" => Some(BattedBallType::Liner),
            "fly" | "flyball" | "fb" | "フライ" => Some(BattedBallType::Fly),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    #[default]
    Win,
    Loss,
    Tie,
}

impl GameResult {
    pub fn code(self) -> &'static str {
        match self {
            GameResult::Win => "win",
            GameResult::Loss => "loss",
            GameResult::Tie => "tie",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "win" | "w" | "勝" | "勝ち" | "○" => Some(GameResult::Win),
            "loss" | "lose" | "l" | "負" | "負け" | "●" => Some(GameResult::Loss),
            "tie" | "draw" | "t" | "分" | "引き分け" | "△" => Some(GameResult::Tie),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    Official,
    Practice,
}

impl GameType {
    pub fn code(self) -> &'static str {
        match self {
            GameType::Official => "official",
            GameType::Practice => "practice",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "official" | "公式" | "公式戦" => Some(GameType::Official),
            "practice" | "練習" | "練習試合" => Some(GameType::Practice),
            _ => None,
        }
    }
}

/// Throwing or batting hand. Stored with the roster's Japanese labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Hand {
    #[default]
    #[serde(rename = "右", alias = "right", alias = "R")]
    Right,
    #[serde(rename = "左", alias = "left", alias = "L")]
    Left,
    #[serde(rename = "両", alias = "switch", alias = "S")]
    Switch,
}

impl Hand {
    pub fn label(self) -> &'static str {
        match self {
            Hand::Right => "右",
            Hand::Left => "左",
            Hand::Switch => "両",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "右" | "右投" | "右打" | "r" | "right" => Some(Hand::Right),
            "左" | "左投" | "左打" | "l" | "left" => Some(Hand::Left),
            "両" | "両打" | "s" | "switch" => Some(Hand::Switch),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Roster entry. `name` is the canonical key that event records are
/// reconciled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(rename = "number", default)]
    pub jersey_number: u32,
    #[serde(default)]
    pub grade: String,
    #[serde(default)]
    pub position: String,
    #[serde(rename = "throwHand", default)]
    pub throwing_hand: Hand,
    #[serde(rename = "batHand", default)]
    pub batting_hand: Hand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    pub date: String,
    pub opponent: String,
    pub result: GameResult,
    #[serde(default)]
    pub score_for: u32,
    #[serde(default)]
    pub score_against: u32,
    #[serde(default)]
    pub game_type: GameType,
    #[serde(
        rename = "scoreboardImageUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub scoreboard_image_ref: Option<String>,
}

impl Game {
    /// Parsed calendar date, if the stored string is recognisable.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_game_date(&self.date)
    }

    /// Human-readable label used in trend output.
    pub fn label(&self) -> String {
        format!("vs {}", self.opponent)
    }
}

/// One batter's turn at bat. `player_name` is free text and may not match
/// a roster name exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateAppearance {
    pub id: String,
    pub game_id: String,
    pub player_name: String,
    #[serde(default)]
    pub inning: u32,
    pub result: AtBatResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batted_ball_type: Option<BattedBallType>,
    /// Defensive position (1-9) the ball was hit toward, kept as recorded.
    /// Older datasets may hold non-numeric values here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batted_ball_direction: Option<String>,
    #[serde(default)]
    pub rbi: u32,
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub stolen_bases: u32,
}

impl PlateAppearance {
    /// Defensive-position code 1-9, or `None` when the recorded direction
    /// is missing or not such a code.
    pub fn direction_code(&self) -> Option<u8> {
        let code = self.batted_ball_direction.as_deref()?.trim().parse::<u8>().ok()?;
        (1..=9).contains(&code).then_some(code)
    }
}

/// A pitcher's line for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchingLine {
    pub id: String,
    pub game_id: String,
    pub player_name: String,
    /// Fractional-third notation: `4.2` is four innings and two outs.
    #[serde(default)]
    pub innings_pitched: f64,
    #[serde(default)]
    pub runs_allowed: u32,
    #[serde(default)]
    pub earned_runs: u32,
    #[serde(default)]
    pub hits_allowed: u32,
    #[serde(default)]
    pub walks_allowed: u32,
    #[serde(default)]
    pub strikeouts: u32,
    #[serde(default)]
    pub total_pitches: u32,
    #[serde(default)]
    pub strikes: u32,
    #[serde(default)]
    pub balls: u32,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a stored game date. Accepts `YYYY-MM-DD`, `YYYY/MM/DD` and
/// RFC 3339 timestamps.
pub fn parse_game_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y/%m/%d"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Map a recorded direction to a defensive-position code string.
///
/// Digits pass through; single-kanji position names from score sheets
/// ("遊", "中", ...) become their numbers. Anything else is kept verbatim.
pub fn normalize_direction(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let code = match raw {
        "投" => "1",
        "捕" => "2",
        "一" => "3",
        "二" => "4",
        "三" => "5",
        "遊" => "6",
        "左" => "7",
        "中" => "8",
        "右" => "9",
        other => other,
    };
    Some(code.to_string())
}
