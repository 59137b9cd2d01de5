// The scorebook's full record set and the edits applied to it.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::import::ImportError;
use crate::model::{Game, PitchingLine, PlateAppearance, Player};

/// Everything the scorebook records. Aggregations are computed from this
/// value and never stored in it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub games: Vec<Game>,
    #[serde(default)]
    pub plate_appearances: Vec<PlateAppearance>,
    #[serde(rename = "pitchingStats", alias = "pitchingLines", default)]
    pub pitching_lines: Vec<PitchingLine>,
}

/// Records produced by one import. `None` means the import did not
/// touch that collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportBatch {
    pub players: Option<Vec<Player>>,
    pub games: Option<Vec<Game>>,
    pub plate_appearances: Option<Vec<PlateAppearance>>,
    pub pitching_lines: Option<Vec<PitchingLine>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportMode {
    /// Append to existing records; players are de-duplicated by name.
    #[default]
    Add,
    /// Replace each collection the batch supplies.
    Overwrite,
}

impl FromStr for ImportMode {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(ImportMode::Add),
            "overwrite" | "replace" => Ok(ImportMode::Overwrite),
            other => Err(ImportError::UnknownMode {
                mode: other.to_string(),
            }),
        }
    }
}

impl Dataset {
    pub fn add_game(&mut self, game: Game) {
        self.games.push(game);
    }

    pub fn add_plate_appearances(&mut self, pas: impl IntoIterator<Item = PlateAppearance>) {
        self.plate_appearances.extend(pas);
    }

    pub fn add_pitching_lines(&mut self, lines: impl IntoIterator<Item = PitchingLine>) {
        self.pitching_lines.extend(lines);
    }

    /// Append players whose name is not already on the roster. A name
    /// repeated within `players` is added once. Returns how many were added.
    pub fn add_players(&mut self, players: impl IntoIterator<Item = Player>) -> usize {
        let mut seen: HashSet<String> = self.players.iter().map(|p| p.name.clone()).collect();
        let before = self.players.len();
        for player in players {
            if seen.insert(player.name.clone()) {
                self.players.push(player);
            }
        }
        self.players.len() - before
    }

    /// Replace the player with the same id. Returns false if none matched.
    pub fn update_player(&mut self, player: Player) -> bool {
        match self.players.iter_mut().find(|p| p.id == player.id) {
            Some(slot) => {
                *slot = player;
                true
            }
            None => false,
        }
    }

    /// Remove the player with this id. Event records naming the player are
    /// left as they are.
    pub fn remove_player(&mut self, player_id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != player_id);
        self.players.len() != before
    }

    pub fn set_players(&mut self, players: Vec<Player>) {
        self.players = players;
    }

    pub fn player_names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn apply_import(&mut self, batch: ImportBatch, mode: ImportMode) {
        match mode {
            ImportMode::Add => {
                if let Some(players) = batch.players {
                    self.add_players(players);
                }
                if let Some(games) = batch.games {
                    self.games.extend(games);
                }
                if let Some(pas) = batch.plate_appearances {
                    self.add_plate_appearances(pas);
                }
                if let Some(lines) = batch.pitching_lines {
                    self.add_pitching_lines(lines);
                }
            }
            ImportMode::Overwrite => {
                if let Some(players) = batch.players {
                    self.players = players;
                }
                if let Some(games) = batch.games {
                    self.games = games;
                }
                if let Some(pas) = batch.plate_appearances {
                    self.plate_appearances = pas;
                }
                if let Some(lines) = batch.pitching_lines {
                    self.pitching_lines = lines;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AtBatResult, Hand};
    use crate::stats::test_support::{line, pa, player};

    fn sample() -> Dataset {
        Dataset {
            players: vec![player("田中", Hand::Right), player("鈴木", Hand::Left)],
            games: Vec::new(),
            plate_appearances: vec![pa("g1", "田中", AtBatResult::Single)],
            pitching_lines: vec![line("g1", "鈴木", 7.0, 1)],
        }
    }

    #[test]
    fn import_mode_parses_aliases() {
        assert_eq!("add".parse::<ImportMode>(), Ok(ImportMode::Add));
        assert_eq!("Overwrite".parse::<ImportMode>(), Ok(ImportMode::Overwrite));
        assert_eq!("replace".parse::<ImportMode>(), Ok(ImportMode::Overwrite));
        assert_eq!(
            "merge".parse::<ImportMode>(),
            Err(ImportError::UnknownMode {
                mode: "merge".to_string()
            })
        );
    }

    #[test]
    fn add_game_appends_and_set_players_replaces_roster() {
        let mut data = sample();
        data.add_game(Game {
            id: "g1".to_string(),
            date: "2026-01-12".to_string(),
            opponent: "東町タイガース".to_string(),
            result: crate::model::GameResult::Win,
            score_for: 8,
            score_against: 3,
            game_type: crate::model::GameType::Official,
            scoreboard_image_ref: None,
        });
        assert_eq!(data.games.len(), 1);
        assert_eq!(data.games[0].opponent, "東町タイガース");

        data.set_players(vec![player("佐藤", Hand::Right)]);
        assert_eq!(data.player_names(), ["佐藤"]);
        assert_eq!(data.plate_appearances.len(), 1);
    }

    #[test]
    fn add_players_skips_existing_and_repeated_names() {
        let mut data = sample();
        let added = data.add_players(vec![
            player("田中", Hand::Left),
            player("佐藤", Hand::Right),
            player("佐藤", Hand::Left),
        ]);
        assert_eq!(added, 1);
        assert_eq!(data.player_names(), ["田中", "鈴木", "佐藤"]);
        assert_eq!(data.players[2].batting_hand, Hand::Right);
    }

    #[test]
    fn update_and_remove_by_id() {
        let mut data = sample();
        let mut edited = data.players[1].clone();
        edited.jersey_number = 18;
        assert!(data.update_player(edited));
        assert_eq!(data.players[1].jersey_number, 18);

        let ghost = player("幽霊", Hand::Right);
        assert!(!data.update_player(ghost));

        let id = data.players[0].id.clone();
        assert!(data.remove_player(&id));
        assert!(!data.remove_player(&id));
        assert_eq!(data.player_names(), ["鈴木"]);
        assert_eq!(data.plate_appearances.len(), 1);
    }

    #[test]
    fn add_mode_appends_every_supplied_collection() {
        let mut data = sample();
        let batch = ImportBatch {
            players: Some(vec![player("鈴木", Hand::Right), player("佐藤", Hand::Right)]),
            plate_appearances: Some(vec![pa("g2", "佐藤", AtBatResult::Walk)]),
            ..ImportBatch::default()
        };
        data.apply_import(batch, ImportMode::Add);
        assert_eq!(data.players.len(), 3);
        assert_eq!(data.plate_appearances.len(), 2);
        assert_eq!(data.pitching_lines.len(), 1);
    }

    #[test]
    fn overwrite_mode_replaces_only_supplied_collections() {
        let mut data = sample();
        let batch = ImportBatch {
            plate_appearances: Some(vec![
                pa("g2", "佐藤", AtBatResult::Walk),
                pa("g2", "佐藤", AtBatResult::Double),
            ]),
            pitching_lines: Some(Vec::new()),
            ..ImportBatch::default()
        };
        data.apply_import(batch, ImportMode::Overwrite);
        assert_eq!(data.players.len(), 2);
        assert_eq!(data.plate_appearances.len(), 2);
        assert_eq!(data.plate_appearances[0].game_id, "g2");
        assert!(data.pitching_lines.is_empty());
    }

    #[test]
    fn serializes_with_stored_collection_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("plateAppearances").is_some());
        assert!(json.get("pitchingStats").is_some());
        assert_eq!(json["players"][0]["throwHand"], "右");
    }

    #[test]
    fn missing_collections_deserialize_empty() {
        let data: Dataset = serde_json::from_str(r#"{"players": []}"#).unwrap();
        assert!(data.games.is_empty());
        assert!(data.pitching_lines.is_empty());

        let data: Dataset =
            serde_json::from_str(r#"{"pitchingLines": [{"id": "x", "gameId": "g", "playerName": "A"}]}"#)
                .unwrap();
        assert_eq!(data.pitching_lines.len(), 1);
        assert_eq!(data.pitching_lines[0].innings_pitched, 0.0);
    }
}
