use crate::config::Vocabulary;
use crate::store::types::Kind;

/// Splits a raw query into whitespace-delimited tokens, keeping duplicates
/// and order.
pub fn split_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .map(|term| term.to_string())
        .collect()
}

/// Tokens of `query` with the kind's stop-words removed. Stop-word matching
/// is against the lowercased token.
pub fn search_terms(query: &str, vocab: &Vocabulary, kind: Kind) -> Vec<String> {
    split_terms(query)
        .into_iter()
        .filter(|term| !vocab.is_stop_word(kind, term))
        .collect()
}

/// Case-insensitive substring containment.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Number of case-insensitive substring occurrences of `needle` in
/// `haystack`. Zero for an empty needle.
pub fn count_ci(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .to_lowercase()
        .matches(&needle.to_lowercase())
        .count()
}
