// Bundled demo dataset: a twelve-player roster, seven games, and seeded
// plate appearances and pitching lines. Used when nothing is stored yet.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scorebook_core::dataset::Dataset;
use scorebook_core::innings::outs_to_innings;
use scorebook_core::model::{
    AtBatResult, BattedBallType, Game, GameResult, GameType, Hand, PitchingLine,
    PlateAppearance, Player,
};

const PLAYERS: [(&str, u32, &str, &str, Hand, Hand); 12] = [
    ("田中 翔太", 1, "6年", "投手", Hand::Right, Hand::Right),
    ("佐藤 大翔", 2, "6年", "捕手", Hand::Right, Hand::Right),
    ("鈴木 陽向", 3, "6年", "一塁手", Hand::Left, Hand::Left),
    ("高橋 蒼空", 4, "5年", "二塁手", Hand::Right, Hand::Right),
    ("伊藤 悠真", 5, "5年", "遊撃手", Hand::Right, Hand::Left),
    ("渡辺 湊", 6, "5年", "三塁手", Hand::Right, Hand::Right),
    ("中村 颯太", 7, "4年", "左翼手", Hand::Left, Hand::Left),
    ("小林 蓮", 8, "4年", "中堅手", Hand::Right, Hand::Right),
    ("加藤 大和", 9, "4年", "右翼手", Hand::Right, Hand::Right),
    ("山田 樹", 10, "6年", "投手", Hand::Left, Hand::Left),
    ("松本 朝陽", 11, "3年", "遊撃手", Hand::Right, Hand::Right),
    ("井上 瑛太", 12, "3年", "捕手", Hand::Right, Hand::Right),
];

const GAMES: [(&str, &str, GameResult, u32, u32, GameType); 7] = [
    ("2026-01-12", "東町タイガース", GameResult::Win, 8, 3, GameType::Official),
    ("2026-01-19", "南海ドルフィンズ", GameResult::Loss, 2, 5, GameType::Official),
    ("2026-01-26", "西山イーグルス", GameResult::Win, 6, 4, GameType::Practice),
    ("2026-02-02", "北風ファイターズ", GameResult::Win, 10, 2, GameType::Official),
    ("2026-02-09", "中央ライオンズ", GameResult::Tie, 4, 4, GameType::Practice),
    ("2026-02-16", "三河スターズ", GameResult::Win, 7, 1, GameType::Official),
    ("2026-02-23", "港町シーガルズ", GameResult::Loss, 3, 6, GameType::Official),
];

/// Result distribution for generated plate appearances.
const RESULT_WEIGHTS: [(AtBatResult, u32); 11] = [
    (AtBatResult::Single, 25),
    (AtBatResult::Double, 8),
    (AtBatResult::Triple, 2),
    (AtBatResult::Homerun, 1),
    (AtBatResult::Walk, 12),
    (AtBatResult::Hbp, 3),
    (AtBatResult::Strikeout, 18),
    (AtBatResult::Groundout, 15),
    (AtBatResult::Flyout, 12),
    (AtBatResult::Error, 2),
    (AtBatResult::Sacrifice, 2),
];

const BATTED_BALL_TYPES: [BattedBallType; 3] = [
    BattedBallType::Grounder,
    BattedBallType::Liner,
    BattedBallType::Fly,
];

/// The first four roster players take the mound.
const PITCHERS: usize = 4;
const LINEUP: usize = 9;
const GAME_OUTS: u32 = 21;

const PA_SEED: u64 = 42;
const PITCHING_SEED: u64 = 99;

fn pick_result(rng: &mut ChaCha8Rng) -> AtBatResult {
    RESULT_WEIGHTS
        .choose_weighted(rng, |&(_, weight)| weight)
        .map(|&(result, _)| result)
        .unwrap_or_default()
}

fn players() -> Vec<Player> {
    PLAYERS
        .iter()
        .enumerate()
        .map(|(i, &(name, number, grade, position, throws, bats))| Player {
            id: format!("p-{:03}", i + 1),
            name: name.to_string(),
            jersey_number: number,
            grade: grade.to_string(),
            position: position.to_string(),
            throwing_hand: throws,
            batting_hand: bats,
        })
        .collect()
}

fn games() -> Vec<Game> {
    GAMES
        .iter()
        .enumerate()
        .map(|(i, &(date, opponent, result, score_for, score_against, game_type))| Game {
            id: format!("game-{:03}", i + 1),
            date: date.to_string(),
            opponent: opponent.to_string(),
            result,
            score_for,
            score_against,
            game_type,
            scoreboard_image_ref: None,
        })
        .collect()
}

fn plate_appearances(games: &[Game]) -> Vec<PlateAppearance> {
    let mut rng = ChaCha8Rng::seed_from_u64(PA_SEED);
    let mut pas = Vec::new();

    for game in games {
        for &(name, ..) in PLAYERS.iter().take(LINEUP) {
            let count = rng.gen_range(3..=4);
            for inning in 1..=count {
                let result = pick_result(&mut rng);
                let in_play = result.is_ball_in_play();
                let batted_ball_type =
                    in_play.then(|| BATTED_BALL_TYPES[rng.gen_range(0..BATTED_BALL_TYPES.len())]);
                let batted_ball_direction = in_play.then(|| rng.gen_range(1..=9u32).to_string());
                let rbi = match result {
                    AtBatResult::Homerun => rng.gen_range(1..=2),
                    AtBatResult::Single | AtBatResult::Double | AtBatResult::Triple => {
                        u32::from(rng.gen_bool(0.4))
                    }
                    _ => 0,
                };
                let stolen_bases = match result {
                    AtBatResult::Single | AtBatResult::Walk => {
                        u32::from(rng.gen_bool(1.0 / 6.0))
                    }
                    _ => 0,
                };
                pas.push(PlateAppearance {
                    id: format!("demo-pa-{}", pas.len() + 1),
                    game_id: game.id.clone(),
                    player_name: name.to_string(),
                    inning,
                    result,
                    batted_ball_type,
                    batted_ball_direction,
                    rbi,
                    runs: u32::from(result == AtBatResult::Homerun),
                    stolen_bases,
                });
            }
        }
    }

    pas
}

fn pitching_lines(games: &[Game]) -> Vec<PitchingLine> {
    let mut rng = ChaCha8Rng::seed_from_u64(PITCHING_SEED);
    let mut lines = Vec::new();

    for game in games {
        let pitchers: u32 = rng.gen_range(1..=2);
        let staff = PLAYERS.iter().take((pitchers as usize).min(PITCHERS));
        for (slot, &(name, ..)) in staff.enumerate() {
            // Starter takes any remainder so the game totals 21 outs.
            let slot = slot as u32;
            let outs = GAME_OUTS / pitchers + u32::from(slot < GAME_OUTS % pitchers);
            let total_pitches: u32 = rng.gen_range(40..80);
            let strike_ratio = rng.gen_range(0.5..0.7);
            let strikes = (total_pitches as f64 * strike_ratio) as u32;
            let runs_allowed: u32 = rng.gen_range(0..4);
            let earned_runs = rng.gen_range(0..3).min(runs_allowed);
            lines.push(PitchingLine {
                id: format!("demo-ps-{}", lines.len() + 1),
                game_id: game.id.clone(),
                player_name: name.to_string(),
                innings_pitched: outs_to_innings(outs),
                runs_allowed,
                earned_runs,
                hits_allowed: rng.gen_range(0..6),
                walks_allowed: rng.gen_range(0..3),
                strikeouts: rng.gen_range(0..6),
                total_pitches,
                strikes,
                balls: total_pitches - strikes,
            });
        }
    }

    lines
}

/// Build the demo dataset. Deterministic: every call returns equal data.
pub fn demo_dataset() -> Dataset {
    let games = games();
    Dataset {
        players: players(),
        plate_appearances: plate_appearances(&games),
        pitching_lines: pitching_lines(&games),
        games,
    }
}
