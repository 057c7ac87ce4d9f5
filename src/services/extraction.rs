use crate::domain::{AttrValue, Category, Entity};
use crate::error::{Result, StatsError};
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashMap;

static GROUPED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d{1,3}(,\d{3})+(\.\d+)?$").unwrap());

/// Builds an entity from one table row using the category's column schema.
///
/// A row too short for the schema is a `ShapeMismatch`; a cell that does not read
/// as a number is kept as text.
pub fn extract(category: Category, row: &[String]) -> Result<Entity> {
    let schema = category.schema();
    let mut attributes = FxHashMap::default();
    attributes.reserve(schema.len());

    for &(attribute, column) in schema {
        let cell = column
            .checked_sub(1)
            .and_then(|index| row.get(index))
            .ok_or(StatsError::ShapeMismatch {
                category,
                attribute,
                column,
                cells: row.len(),
            })?;

        attributes.insert(attribute, coerce(cell));
    }

    Ok(Entity::new(category, attributes))
}

pub fn coerce(cell: &str) -> AttrValue {
    let trimmed = cell.trim();

    let parsed = if GROUPED_NUMBER.is_match(trimmed) {
        trimmed.replace(',', "").parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };

    match parsed {
        Ok(n) if n.is_finite() => AttrValue::Number(n),
        _ => AttrValue::Text(cell.to_string()),
    }
}
