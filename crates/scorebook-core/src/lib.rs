// Library root: statistics aggregation, player-name reconciliation and
// tabular import/export for a youth-baseball scorebook.

pub mod dataset;
pub mod export;
pub mod import;
pub mod innings;
pub mod model;
pub mod names;
pub mod numeric;
pub mod stats;
