use crate::domain::fetcher::PageFetcher;
use crate::domain::Category;
use crate::error::{Result, StatsError};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// Query parameters shared by every page request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FetchParams {
    pub base_url: String,
    pub stat_category: String,
    pub season: String,
    pub season_type: String,
    pub lang: String,
    pub league: String,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            base_url: "https://www.quanthockey.com/scripts/AjaxPaginate.php".to_string(),
            stat_category: "Season".to_string(),
            season: "2017-18".to_string(),
            season_type: "reg".to_string(),
            lang: "en".to_string(),
            league: "NHL".to_string(),
        }
    }
}

impl FetchParams {
    pub fn query(&self, category: Category, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("cat", self.stat_category.clone()),
            ("pos", category.describe().request_value.to_string()),
            ("SS", self.season.clone()),
            ("st", self.season_type.clone()),
            ("lang", self.lang.clone()),
            ("page", page.to_string()),
            ("league", self.league.clone()),
        ]
    }
}

pub struct QuantHockeyClient {
    client: Client,
    params: FetchParams,
}

impl QuantHockeyClient {
    pub fn new(client: Client, params: FetchParams) -> Self {
        Self { client, params }
    }
}

impl PageFetcher for QuantHockeyClient {
    async fn fetch_page(&self, category: Category, page: u32) -> Result<String> {
        debug!("Fetching {} page {}", category, page);

        let response = self
            .client
            .get(&self.params.base_url)
            .query(&self.params.query(category, page))
            .send()
            .await?;

        check_status(category, page, response.status())?;
        Ok(response.text().await?)
    }
}

fn check_status(category: Category, page: u32, status: StatusCode) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    Err(StatsError::Fetch {
        category,
        page,
        reason: format!("HTTP {}", status),
    })
}
