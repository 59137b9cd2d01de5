// Persistence for the scorebook: SQLite blob storage, configuration and
// the bundled demo dataset.

pub mod config;
pub mod db;
pub mod demo;
pub mod store;

pub use config::{load_config, Config, ConfigError};
pub use db::Database;
pub use demo::demo_dataset;
pub use store::{BlobStore, DatasetStore};
