use crate::config::Config;
use crate::error::Result;
use crate::infrastructure::{FileSystemStore, QuantHockeyClient, QuantHockeyScraper};
use crate::services::{ScrapingService, StatsService};
use std::sync::Arc;
use tracing::info;

mod config;
mod domain;
mod error;
mod infrastructure;
mod services;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;
    tracing_subscriber::fmt()
        .with_max_level(config.log_level()?)
        .init();

    config.ensure_directories()?;

    let store = Arc::new(FileSystemStore::new(&config.args.data_dir));
    let client = QuantHockeyClient::new(config.http_client.clone(), config.fetch_params.clone());
    let scraping = ScrapingService::new(
        client,
        QuantHockeyScraper::new()?,
        config.page_delay(),
        !config.args.no_progress,
    );

    let service = StatsService::new(scraping, store, config.args.output.clone());
    let written = service.process().await?;

    info!("Ranking completed: {} entries", written);
    Ok(())
}
