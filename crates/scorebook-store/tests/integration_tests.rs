// Integration tests for scorebook persistence.
//
// Datasets are saved to and loaded from a real SQLite database (in memory
// or on disk), with configuration read from a scorebook.toml.

use std::fs;

use scorebook_core::dataset::ImportMode;
use scorebook_core::import::{parse_rows, Importer, RecordKind};
use scorebook_core::stats::batting::aggregate_batting;
use scorebook_core::stats::games::recent_games;
use scorebook_core::stats::trend::recent_batting_trend;
use scorebook_store::config::DEFAULT_APP_KEY;
use scorebook_store::{demo_dataset, load_config, BlobStore, Database, DatasetStore};

fn memory_store() -> DatasetStore<Database> {
    DatasetStore::new(Database::open(":memory:").unwrap(), DEFAULT_APP_KEY)
}

#[test]
fn first_load_returns_demo_dataset() {
    let store = memory_store();
    let data = store.load().unwrap();
    assert_eq!(data, demo_dataset());
    assert!(store.inner().get(DEFAULT_APP_KEY).unwrap().is_none());
}

#[test]
fn imported_records_survive_save_and_load() {
    let store = memory_store();
    let mut data = store.load().unwrap();

    let rows = parse_rows(
        "date,opponent,result,scoreFor,scoreAgainst,gameType\n2026-03-01,緑ヶ丘,win,5,2,official\n"
            .as_bytes(),
        true,
    )
    .unwrap();
    let batch = Importer::with_stamp(9).import(RecordKind::Game, &rows).unwrap();
    data.apply_import(batch, ImportMode::Add);
    store.save(&data).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.games.len(), 8);
    assert_eq!(recent_games(&loaded.games, 1)[0].opponent, "緑ヶ丘");
    assert_eq!(loaded, data);
}

#[test]
fn overwrite_import_persists_only_replaced_collection() {
    let store = memory_store();
    let mut data = store.load().unwrap();

    let rows = parse_rows("name,number\n新人 太郎,20\n".as_bytes(), true).unwrap();
    let batch = Importer::with_stamp(9).import(RecordKind::Player, &rows).unwrap();
    data.apply_import(batch, ImportMode::Overwrite);
    store.save(&data).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.player_names(), ["新人 太郎"]);
    assert_eq!(loaded.games, demo_dataset().games);
}

#[test]
fn partial_blob_is_completed_from_demo() {
    let store = memory_store();
    store
        .inner()
        .put(DEFAULT_APP_KEY, r#"{"players": [], "plateAppearances": []}"#)
        .unwrap();
    let loaded = store.load().unwrap();
    let demo = demo_dataset();
    assert!(loaded.players.is_empty());
    assert!(loaded.plate_appearances.is_empty());
    assert_eq!(loaded.games, demo.games);
    assert_eq!(loaded.pitching_lines, demo.pitching_lines);
}

#[test]
fn demo_dataset_aggregates_cleanly() {
    let demo = demo_dataset();
    let batting = aggregate_batting(&demo.plate_appearances, &demo.players, None);
    // 12 roster players, no off-roster names
    assert_eq!(batting.len(), 12);
    for window in batting.windows(2) {
        assert!(window[0].avg >= window[1].avg);
    }
    let trend = recent_batting_trend(&demo.plate_appearances, &demo.games, "田中 翔太", 5);
    assert_eq!(trend.len(), 5);
    assert_eq!(trend[4].date, "2026-02-23");
}

#[test]
fn config_and_file_database_work_together() {
    let dir = std::env::temp_dir().join("scorebook_store_file_db");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let db_path = dir.join("team.db");
    let config_path = dir.join("scorebook.toml");
    fs::write(
        &config_path,
        format!(
            "[storage]\ndb_path = \"{}\"\napp_key = \"team-b\"\n",
            db_path.display()
        ),
    )
    .unwrap();

    let config = load_config(&config_path).unwrap();
    assert_eq!(config.storage.app_key, "team-b");

    {
        let store = DatasetStore::new(
            Database::open(&config.storage.db_path).unwrap(),
            config.storage.app_key.clone(),
        );
        let mut data = store.reset().unwrap();
        data.players.truncate(3);
        store.save(&data).unwrap();
    }

    let reopened = DatasetStore::new(
        Database::open(&config.storage.db_path).unwrap(),
        config.storage.app_key.clone(),
    );
    let loaded = reopened.load().unwrap();
    assert_eq!(loaded.players.len(), 3);
    assert_eq!(config.stats.recent_games(&loaded).len(), 5);
    assert_eq!(config.stats.batting_trend(&loaded, "田中 翔太").len(), 5);
}
