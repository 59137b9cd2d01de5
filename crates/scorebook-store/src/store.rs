// Dataset persistence on top of a key-value blob store.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use scorebook_core::dataset::Dataset;
use scorebook_core::model::{Game, PitchingLine, PlateAppearance, Player};

use crate::demo::demo_dataset;

/// A string-valued key-value store.
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn put(&self, key: &str, value: &str) -> Result<()>;
}

/// The stored blob as written, with every collection optional so absent
/// ones can be told apart from empty ones.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDataset {
    players: Option<Vec<Player>>,
    games: Option<Vec<Game>>,
    plate_appearances: Option<Vec<PlateAppearance>>,
    #[serde(rename = "pitchingStats", alias = "pitchingLines")]
    pitching_lines: Option<Vec<PitchingLine>>,
}

/// Loads and saves the whole dataset as one JSON blob under `key`.
pub struct DatasetStore<S> {
    store: S,
    key: String,
}

impl<S: BlobStore> DatasetStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load the stored dataset.
    ///
    /// With nothing stored, the demo dataset is returned. A stored blob
    /// missing a collection gets that collection from the demo dataset;
    /// collections stored empty stay empty.
    pub fn load(&self) -> Result<Dataset> {
        let Some(json) = self.store.get(&self.key)? else {
            info!(key = %self.key, "no stored dataset, using demo data");
            return Ok(demo_dataset());
        };
        let stored: StoredDataset =
            serde_json::from_str(&json).context("failed to deserialize stored dataset")?;

        let mut demo: Option<Dataset> = None;
        let mut from_demo = |collection: &'static str| {
            info!(collection, "collection missing from stored dataset, using demo data");
            demo.get_or_insert_with(demo_dataset).clone()
        };

        let players = match stored.players {
            Some(players) => players,
            None => from_demo("players").players,
        };
        let games = match stored.games {
            Some(games) => games,
            None => from_demo("games").games,
        };
        let plate_appearances = match stored.plate_appearances {
            Some(pas) => pas,
            None => from_demo("plateAppearances").plate_appearances,
        };
        let pitching_lines = match stored.pitching_lines {
            Some(lines) => lines,
            None => from_demo("pitchingStats").pitching_lines,
        };

        Ok(Dataset {
            players,
            games,
            plate_appearances,
            pitching_lines,
        })
    }

    pub fn save(&self, dataset: &Dataset) -> Result<()> {
        let json = serde_json::to_string(dataset).context("failed to serialize dataset")?;
        self.store
            .put(&self.key, &json)
            .with_context(|| format!("failed to save dataset under {}", self.key))
    }

    /// Replace the stored dataset with the demo dataset and return it.
    pub fn reset(&self) -> Result<Dataset> {
        let demo = demo_dataset();
        self.save(&demo)?;
        info!(key = %self.key, "dataset reset to demo data");
        Ok(demo)
    }
}
