use super::tokenizer::{contains_ci, count_ci};
use crate::store::types::Resource;

/// Phrase containment weight relative to a single term occurrence.
pub const PHRASE_WEIGHT: usize = 10;

/// Relevance score of a resource for the unified search.
///
/// Each textual attribute containing the full phrase contributes
/// `PHRASE_WEIGHT`; every occurrence of every term in every textual attribute
/// contributes 1. Offsets are never computed here, only counts.
pub fn relevance_score(resource: &Resource, phrase: &str, terms: &[String]) -> usize {
    let mut score = 0;
    for text in resource.text_values() {
        if contains_ci(text, phrase) {
            score += PHRASE_WEIGHT;
        }
        for term in terms {
            score += count_ci(text, term);
        }
    }
    score
}
