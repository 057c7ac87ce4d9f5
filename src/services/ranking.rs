use crate::domain::{Category, ScoredEntity};

/// Position label printed for goalies, whose table has no position column.
pub const GOALIE_LABEL: &str = "G";

/// Merges both categories, orders them by score (highest first) and renders one
/// fixed-width line per entity.
///
/// Equal scores keep the order they were collected in: skaters before goalies,
/// then page and row order.
pub fn aggregate_and_render(skaters: Vec<ScoredEntity>, goalies: Vec<ScoredEntity>) -> Vec<String> {
    let mut ranked = skaters;
    ranked.extend(goalies);
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    ranked
        .iter()
        .enumerate()
        .map(|(i, entry)| render_line(i + 1, entry))
        .collect()
}

pub fn render_line(rank: usize, entry: &ScoredEntity) -> String {
    let label = match entry.entity.category {
        Category::Skater => entry.entity.text("position"),
        Category::Goalie => GOALIE_LABEL.into(),
    };

    format!(
        "{:<4}{:<30}{:<3}{:>5}",
        rank,
        entry.name(),
        label,
        entry.score
    )
}
