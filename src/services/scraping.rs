use crate::domain::fetcher::PageFetcher;
use crate::domain::{Category, Entity};
use crate::error::{Result, StatsError};
use crate::infrastructure::{QuantHockeyScraper, StatsPage};
use crate::services::extraction::extract;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info};

/// Walks every page of a category's stats table and turns each row into an entity.
pub struct ScrapingService<F> {
    fetcher: F,
    scraper: QuantHockeyScraper,
    page_delay: Duration,
    show_progress: bool,
}

impl<F: PageFetcher> ScrapingService<F> {
    pub fn new(
        fetcher: F,
        scraper: QuantHockeyScraper,
        page_delay: Duration,
        show_progress: bool,
    ) -> Self {
        info!("Created new Scraping service");
        Self {
            fetcher,
            scraper,
            page_delay,
            show_progress,
        }
    }

    /// Collects all entities of `category` in page-then-row order.
    ///
    /// The page count comes from the pagination control on page 1; without one
    /// only page 1 is read. Any failing page aborts the whole category.
    pub async fn collect(&self, category: Category) -> Result<Vec<Entity>> {
        let first = self.fetch(category, 1).await?;
        let total_pages = first.last_page.unwrap_or(1).max(1);
        info!("Collecting {} stats from {} page(s)", category, total_pages);

        let progress = self.progress_bar(category, total_pages)?;
        let mut entities = extract_rows(category, &first.rows)?;
        progress.inc(1);

        for page in 2..=total_pages {
            sleep(self.page_delay).await;
            let stats_page = self.fetch(category, page).await?;
            entities.extend(extract_rows(category, &stats_page.rows)?);
            progress.inc(1);
        }

        progress.finish_with_message(format!("{} done", category));
        info!("Collected {} {} entries", entities.len(), category);
        Ok(entities)
    }

    async fn fetch(&self, category: Category, page: u32) -> Result<StatsPage> {
        let body = self.fetcher.fetch_page(category, page).await?;
        let stats_page = self
            .scraper
            .parse_page(&body)
            .ok_or_else(|| StatsError::Fetch {
                category,
                page,
                reason: "response has no stats table".to_string(),
            })?;
        debug!(
            "{} page {}: {} rows, last page link {:?}",
            category,
            page,
            stats_page.rows.len(),
            stats_page.last_page
        );
        Ok(stats_page)
    }

    fn progress_bar(&self, category: Category, total_pages: u32) -> Result<ProgressBar> {
        if !self.show_progress {
            return Ok(ProgressBar::hidden());
        }

        let pb = ProgressBar::new(u64::from(total_pages));
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| StatsError::Other(e.to_string()))?,
        );
        pb.set_message(format!("{} pages", category));
        Ok(pb)
    }
}

fn extract_rows(category: Category, rows: &[Vec<String>]) -> Result<Vec<Entity>> {
    rows.iter().map(|row| extract(category, row)).collect()
}
