use super::Category;
use crate::error::Result;
use std::future::Future;

/// Source of rendered stats pages.
///
/// Pages are numbered from 1. The returned body is the raw HTML fragment; parsing
/// into rows happens on the caller's side so no parse tree is held across an await.
pub trait PageFetcher {
    fn fetch_page(
        &self,
        category: Category,
        page: u32,
    ) -> impl Future<Output = Result<String>> + Send;
}
