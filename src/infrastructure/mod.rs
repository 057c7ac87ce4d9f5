mod clients;
mod scrapers;
mod storage;

pub use clients::quanthockey::{FetchParams, QuantHockeyClient};
pub use scrapers::{quanthockey::QuantHockeyScraper, StatsPage};
pub use storage::fs_store::FileSystemStore;
