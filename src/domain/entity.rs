use super::Category;
use rustc_hash::FxHashMap;
use std::borrow::Cow;

/// A single extracted cell: numeric when the text parsed, otherwise the text itself.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
}

impl AttrValue {
    /// Numeric view of the value. Text counts as zero.
    pub fn as_number(&self) -> f64 {
        match self {
            AttrValue::Number(n) => *n,
            AttrValue::Text(_) => 0.0,
        }
    }

    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            AttrValue::Number(n) => Cow::Owned(n.to_string()),
            AttrValue::Text(s) => Cow::Borrowed(s),
        }
    }
}

/// One participant's row, keyed by the attribute names of its category's schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub category: Category,
    pub attributes: FxHashMap<&'static str, AttrValue>,
}

impl Entity {
    pub fn new(category: Category, attributes: FxHashMap<&'static str, AttrValue>) -> Self {
        Self {
            category,
            attributes,
        }
    }

    pub fn get(&self, attribute: &str) -> Option<&AttrValue> {
        self.attributes.get(attribute)
    }

    pub fn number(&self, attribute: &str) -> f64 {
        self.get(attribute).map(AttrValue::as_number).unwrap_or(0.0)
    }

    pub fn text(&self, attribute: &str) -> Cow<'_, str> {
        self.get(attribute)
            .map(AttrValue::as_text)
            .unwrap_or(Cow::Borrowed(""))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntity {
    pub entity: Entity,
    pub score: f64,
}

impl ScoredEntity {
    pub fn name(&self) -> Cow<'_, str> {
        self.entity.text("name")
    }
}
