use crate::config::cli::Args;
use crate::error::{Result, StatsError};
use crate::infrastructure::FetchParams;
use clap::Parser;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{info, Level};

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub fetch_params: FetchParams,
    pub http_client: Client,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let fetch_params = match &args.params_file {
            Some(path) => load_params(path)?,
            None => FetchParams {
                season: args.season.clone(),
                season_type: args.season_type.clone(),
                league: args.league.clone(),
                lang: args.lang.clone(),
                ..FetchParams::default()
            },
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            fetch_params,
            http_client,
        })
    }

    pub fn log_level(&self) -> Result<Level> {
        self.args
            .log_level
            .parse()
            .map_err(|_| StatsError::Parse(format!("invalid log level '{}'", self.args.log_level)))
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.args.page_delay_ms)
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }

        info!("Data dir {:?} exists", self.args.data_dir);
        Ok(())
    }
}

fn load_params(path: &Path) -> Result<FetchParams> {
    let params = serde_json::from_str(&std::fs::read_to_string(path)?)?;
    info!("Loaded request parameters from {:?}", path);
    Ok(params)
}
