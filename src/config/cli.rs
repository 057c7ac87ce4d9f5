use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// File name of the ranked report, written inside the data directory
    #[arg(long, default_value = "rankings.txt")]
    pub output: String,

    /// Directory to store output data
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Season identifier, e.g. 2017-18
    #[arg(long, default_value = "2017-18")]
    pub season: String,

    /// Season type (reg, playoffs)
    #[arg(long, default_value = "reg")]
    pub season_type: String,

    /// League code
    #[arg(long, default_value = "NHL")]
    pub league: String,

    /// Language code of the rendered tables
    #[arg(long, default_value = "en")]
    pub lang: String,

    /// JSON file with request parameters; overrides the season/league flags
    #[arg(long, env = "HOCKEYRANK_PARAMS")]
    pub params_file: Option<PathBuf>,

    /// Pause between page requests, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub page_delay_ms: u64,

    /// Hide the pagination progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
