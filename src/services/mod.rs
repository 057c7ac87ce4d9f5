pub(crate) mod extraction;
pub(crate) mod ranking;
pub(crate) mod scoring;
pub(crate) mod scraping;
pub(crate) mod stats_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use scraping::ScrapingService;
pub use stats_service::StatsService;
