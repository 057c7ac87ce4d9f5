use super::{Selectors, StatsPage};
use crate::error::Result;
use scraper::{ElementRef, Html};

pub struct QuantHockeyScraper {
    selectors: Selectors,
}

impl QuantHockeyScraper {
    pub fn new() -> Result<Self> {
        Ok(Self {
            selectors: Selectors::new("tbody", "tr", "th, td", "ul.pagination a")?,
        })
    }

    /// Reads rows and the pagination signal. `None` when the body has no table
    /// body at all, i.e. it is not a stats page.
    pub fn parse_page(&self, body: &str) -> Option<StatsPage> {
        let document = Html::parse_document(body);
        let table = document.select(&self.selectors.table).next()?;

        let rows = table
            .select(&self.selectors.row)
            .filter_map(|row| self.row_cells(row))
            .collect();

        // Links like "Next" or "»" sit after the numbered ones
        let last_page = document
            .select(&self.selectors.page_link)
            .filter_map(|link| cell_text(link).parse::<u32>().ok())
            .last();

        Some(StatsPage { rows, last_page })
    }

    /// Cell texts of a data row. Empty rows and single spanning cells
    /// ("No players found") are not data rows.
    fn row_cells(&self, row: ElementRef) -> Option<Vec<String>> {
        let cells: Vec<ElementRef> = row.select(&self.selectors.cell).collect();
        match cells.as_slice() {
            [] => None,
            [only] if only.value().attr("colspan").is_some() => None,
            _ => Some(cells.into_iter().map(cell_text).collect()),
        }
    }
}

fn cell_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
