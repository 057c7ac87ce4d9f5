use crate::error::{Result, StatsError};
use scraper::Selector;

pub(crate) mod quanthockey;

/// Rows and pagination signal read from one rendered page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsPage {
    pub rows: Vec<Vec<String>>,
    /// Number shown on the last page link, if the page has a pagination control.
    pub last_page: Option<u32>,
}

pub struct Selectors {
    pub table: Selector,
    pub row: Selector,
    pub cell: Selector,
    pub page_link: Selector,
}

impl Selectors {
    pub fn new(
        table_selector: &str,
        row_selector: &str,
        cell_selector: &str,
        page_link_selector: &str,
    ) -> Result<Self> {
        Ok(Self {
            table: parse(table_selector)?,
            row: parse(row_selector)?,
            cell: parse(cell_selector)?,
            page_link: parse(page_link_selector)?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| StatsError::Selector(e.to_string()))
}
