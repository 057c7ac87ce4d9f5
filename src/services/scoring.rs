use crate::domain::{Entity, ScoredEntity};
use rayon::prelude::*;

/// Weighted sum of the entity's attributes. Text values count as zero.
pub fn calculate_score(entity: &Entity, weights: &[(&str, f64)]) -> f64 {
    weights
        .iter()
        .map(|&(attribute, weight)| entity.number(attribute) * weight)
        .sum()
}

/// Attaches a score to every entity, keeping input order.
pub fn score(entities: Vec<Entity>, weights: &[(&str, f64)]) -> Vec<ScoredEntity> {
    entities
        .into_par_iter()
        .map(|entity| {
            let score = calculate_score(&entity, weights);
            ScoredEntity { entity, score }
        })
        .collect()
}
