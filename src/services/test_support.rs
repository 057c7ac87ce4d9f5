use crate::domain::fetcher::PageFetcher;
use crate::domain::Category;
use crate::error::{Result, StatsError};
use rustc_hash::FxHashMap;
use std::sync::Mutex;

/// In-memory page source; unknown pages answer like a 404.
#[derive(Default)]
pub struct CannedFetcher {
    pages: FxHashMap<(Category, u32), String>,
    requests: Mutex<Vec<(Category, u32)>>,
}

impl CannedFetcher {
    pub fn with_page(mut self, category: Category, page: u32, body: String) -> Self {
        self.pages.insert((category, page), body);
        self
    }

    pub fn requests(&self) -> Vec<(Category, u32)> {
        self.requests.lock().unwrap().clone()
    }
}

impl PageFetcher for CannedFetcher {
    async fn fetch_page(&self, category: Category, page: u32) -> Result<String> {
        self.requests.lock().unwrap().push((category, page));
        self.pages
            .get(&(category, page))
            .cloned()
            .ok_or(StatsError::Fetch {
                category,
                page,
                reason: "HTTP 404 Not Found".to_string(),
            })
    }
}

/// A row wide enough for `category`, with stats defaulting to "0".
pub fn row_for(category: Category, values: &[(&str, &str)]) -> Vec<String> {
    let schema = category.schema();
    let width = schema.iter().map(|&(_, column)| column).max().unwrap_or(0);
    let mut cells = vec!["0".to_string(); width];

    for &(attribute, value) in values {
        let (_, column) = schema
            .iter()
            .find(|(name, _)| *name == attribute)
            .unwrap_or_else(|| panic!("{attribute} is not a {category} column"));
        cells[column - 1] = value.to_string();
    }
    cells
}

pub fn page_html(rows: &[Vec<String>], last_page: Option<u32>) -> String {
    let mut html = String::from("<table><thead><tr><th>Rk</th></tr></thead><tbody>");
    for row in rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");

    if let Some(last) = last_page {
        html.push_str(r#"<ul class="pagination">"#);
        for page in 1..=last {
            html.push_str(&format!("<li><a>{page}</a></li>"));
        }
        html.push_str("<li><a>Next</a></li></ul>");
    }
    html
}
