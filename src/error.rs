use crate::domain::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Selector error: {0}")]
    Selector(String),
    #[error("Failed to fetch {category} page {page}: {reason}")]
    Fetch {
        category: Category,
        page: u32,
        reason: String,
    },
    #[error(
        "Row shape mismatch for {category}: column {column} ({attribute}) requested, row has {cells} cells"
    )]
    ShapeMismatch {
        category: Category,
        attribute: &'static str,
        column: usize,
        cells: usize,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
