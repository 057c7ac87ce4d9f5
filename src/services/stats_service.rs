use crate::domain::fetcher::PageFetcher;
use crate::domain::storage::Storage;
use crate::domain::{Category, ScoredEntity};
use crate::error::Result;
use crate::services::{ranking::aggregate_and_render, scoring::score, scraping::ScrapingService};
use std::sync::Arc;
use tracing::info;

pub struct StatsService<F> {
    scraping: ScrapingService<F>,
    store: Arc<dyn Storage>,
    output: String,
}

impl<F: PageFetcher> StatsService<F> {
    pub fn new(scraping: ScrapingService<F>, store: Arc<dyn Storage>, output: String) -> Self {
        Self {
            scraping,
            store,
            output,
        }
    }

    /// Runs the whole pipeline and returns the number of report lines written.
    ///
    /// Nothing is written unless both categories were collected completely.
    pub async fn process(&self) -> Result<usize> {
        info!("Starting stats processing pipeline");

        let skaters = self.collect_and_score(Category::Skater).await?;
        let goalies = self.collect_and_score(Category::Goalie).await?;

        let lines = aggregate_and_render(skaters, goalies);
        if let Some(top) = lines.first() {
            info!("Top entry: {}", top.trim_end());
        }

        self.store.save_report(&self.output, &lines)?;
        info!("Wrote {} ranked entries to {}", lines.len(), self.output);

        Ok(lines.len())
    }

    async fn collect_and_score(&self, category: Category) -> Result<Vec<ScoredEntity>> {
        let entities = self.scraping.collect(category).await?;
        let scored = score(entities, category.weights());
        info!("Scored {} {} entries", scored.len(), category);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StatsError;
    use crate::infrastructure::{FileSystemStore, QuantHockeyScraper};
    use crate::services::test_support::{page_html, row_for, CannedFetcher};
    use std::time::Duration;

    fn service(fetcher: CannedFetcher, store: FileSystemStore) -> StatsService<CannedFetcher> {
        let scraping = ScrapingService::new(
            fetcher,
            QuantHockeyScraper::new().unwrap(),
            Duration::ZERO,
            false,
        );
        StatsService::new(scraping, Arc::new(store), "rankings.txt".to_string())
    }

    #[tokio::test]
    async fn writes_merged_ranking() {
        let skaters = page_html(
            &[
                row_for(
                    Category::Skater,
                    &[
                        ("name", "Depth Forward"),
                        ("position", "LW"),
                        ("goals", "2"),
                        ("assists", "1"),
                        ("shots", "3"),
                        ("hits", "1"),
                    ],
                ),
                row_for(
                    Category::Skater,
                    &[("name", "Scorer"), ("position", "C"), ("goals", "20")],
                ),
            ],
            None,
        );
        let goalies = page_html(
            &[row_for(
                Category::Goalie,
                &[("name", "Starter"), ("wins", "10"), ("shutouts", "2")],
            )],
            None,
        );
        let fetcher = CannedFetcher::default()
            .with_page(Category::Skater, 1, skaters)
            .with_page(Category::Goalie, 1, goalies);

        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());
        let written = service(fetcher, store.clone()).process().await.unwrap();

        assert_eq!(written, 3);
        let report = std::fs::read_to_string(store.path_for("rankings.txt")).unwrap();
        assert_eq!(
            report,
            "1   Scorer                        C    100\n\
             2   Starter                       G     56\n\
             3   Depth Forward                 LW    17\n"
        );
    }

    #[tokio::test]
    async fn failure_leaves_no_report() {
        let skaters = page_html(
            &[row_for(Category::Skater, &[("name", "Only Skater")])],
            None,
        );
        // No goalie pages at all
        let fetcher = CannedFetcher::default().with_page(Category::Skater, 1, skaters);

        let dir = tempfile::tempdir().unwrap();
        let store = FileSystemStore::new(dir.path());
        let err = service(fetcher, store.clone()).process().await.unwrap_err();

        assert!(matches!(
            err,
            StatsError::Fetch {
                category: Category::Goalie,
                page: 1,
                ..
            }
        ));
        assert!(!store.path_for("rankings.txt").exists());
    }
}
