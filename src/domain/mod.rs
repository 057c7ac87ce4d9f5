mod category;
mod entity;
pub(crate) mod fetcher;
pub(crate) mod storage;

pub use category::Category;
pub use entity::{AttrValue, Entity, ScoredEntity};
