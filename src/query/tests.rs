//! Query Module Tests
//!
//! Validates parameter extraction and the filter/search/sort pipeline,
//! including the silent-ignore semantics for unknown fields and keywords.

use super::compiler::apply_query_options;
use super::options::{OptionsError, QueryOptions, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
use crate::config::Vocabulary;
use crate::store::memory::MemoryStore;
use crate::store::types::{Kind, SeedFile};

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn options(pairs: &[(&str, &str)]) -> QueryOptions {
    QueryOptions::from_params(&params(pairs)).expect("options parse")
}

fn fixture() -> MemoryStore {
    let file: SeedFile = serde_json::from_value(serde_json::json!({
        "states": [{"name": "Texas"}, {"name": "Ohio"}],
        "housing": [
            {"external_id": "h1", "name": "Harbor House", "category": "Shelter",
             "address": "12 Main St, Austin", "rating": 4.5,
             "types": ["establishment", "point_of_interest"],
             "keyword": "supportive housing", "state_name": "Texas",
             "states": ["Texas"]},
            {"external_id": "h2", "name": "Transition Center", "category": "Shelter",
             "address": "9 Elm Ave, Columbus", "rating": 3.0,
             "types": ["real_estate_agency"],
             "keyword": "transitional housing", "state_name": "Ohio",
             "states": ["Ohio"]},
            {"external_id": "h3", "name": "Austin Housing Authority", "category": "Agency",
             "rating": 4.5, "types": ["local_government_office"],
             "keyword": "housing authority", "state_name": "Texas",
             "states": ["Texas"]}
        ]
    }))
    .unwrap();
    MemoryStore::from_seed(file).unwrap()
}

fn names(results: &[crate::store::types::Resource]) -> Vec<&str> {
    results.iter().map(|r| r.name.as_str()).collect()
}

// ============================================================
// OPTIONS PARSING TESTS
// ============================================================

#[test]
fn test_defaults() {
    let opts = options(&[]);
    assert_eq!(opts.page_number, DEFAULT_PAGE_NUMBER);
    assert_eq!(opts.page_size, DEFAULT_PAGE_SIZE);
    assert!(opts.filters.is_empty());
    assert!(opts.search.is_none());
    assert!(opts.sort.is_none());
}

#[test]
fn test_filter_keys_are_unwrapped_in_order() {
    let opts = options(&[("filter[state]", "Texas"), ("filter[rating]", "4.5")]);
    assert_eq!(
        opts.filters,
        vec![
            ("state".to_string(), "Texas".to_string()),
            ("rating".to_string(), "4.5".to_string()),
        ]
    );
}

#[test]
fn test_unrelated_params_are_dropped() {
    let opts = options(&[("utm_source", "mail"), ("filter[state", "broken")]);
    assert!(opts.filters.is_empty());
}

#[test]
fn test_page_params() {
    let opts = options(&[("page[number]", "2"), ("page[size]", "10")]);
    assert_eq!(opts.page_number, 2);
    assert_eq!(opts.page_size, 10);
}

#[test]
fn test_bad_page_number_is_an_error() {
    let err = QueryOptions::from_params(&params(&[("page[number]", "two")])).unwrap_err();
    assert_eq!(err, OptionsError::InvalidPage("page[number]"));
}

#[test]
fn test_zero_page_size_is_an_error() {
    let err = QueryOptions::from_params(&params(&[("page[size]", "0")])).unwrap_err();
    assert_eq!(err, OptionsError::InvalidPage("page[size]"));
}

#[test]
fn test_blank_search_phrase_is_none() {
    let opts = options(&[("search", "   ")]);
    assert!(opts.search_phrase().is_none());
    let opts = options(&[("search", " foster ")]);
    assert_eq!(opts.search_phrase(), Some("foster"));
}

// ============================================================
// FILTER TESTS
// ============================================================

#[test]
fn test_no_options_returns_everything_by_id() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(&store, &vocab, Kind::Housing, &options(&[]));
    assert_eq!(
        names(&results),
        vec!["Harbor House", "Transition Center", "Austin Housing Authority"]
    );
}

#[test]
fn test_state_filter_uses_linked_states() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[state]", "Ohio")]),
    );
    assert_eq!(names(&results), vec!["Transition Center"]);
}

#[test]
fn test_state_filter_accepts_multiple_names() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[state]", "Ohio, Texas")]),
    );
    assert_eq!(results.len(), 3);
}

#[test]
fn test_types_filter_matches_any_tag() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[types]", "real_estate_agency,local_government_office")]),
    );
    assert_eq!(
        names(&results),
        vec!["Transition Center", "Austin Housing Authority"]
    );
}

#[test]
fn test_keyword_filter_exact_match() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[keyword]", "supportive housing")]),
    );
    assert_eq!(names(&results), vec!["Harbor House"]);
}

#[test]
fn test_keyword_filter_bracketed_list() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[keyword]", "[supportive housing, housing authority]")]),
    );
    assert_eq!(names(&results), vec!["Harbor House", "Austin Housing Authority"]);
}

#[test]
fn test_out_of_vocabulary_keyword_is_no_constraint() {
    let store = fixture();
    let vocab = Vocabulary::builtin();

    let unfiltered = apply_query_options(&store, &vocab, Kind::Housing, &options(&[]));
    let bogus = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[keyword]", "weird value")]),
    );
    assert_eq!(names(&bogus), names(&unfiltered));
}

#[test]
fn test_unknown_vocabulary_values_are_dropped_not_fatal() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[keyword]", "bogus, supportive housing")]),
    );
    assert_eq!(names(&results), vec!["Harbor House"]);
}

#[test]
fn test_string_attribute_filter_is_substring_ci() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[address]", "main st")]),
    );
    assert_eq!(names(&results), vec!["Harbor House"]);
}

#[test]
fn test_numeric_attribute_filter_is_equality() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[rating]", "4.5")]),
    );
    assert_eq!(names(&results), vec!["Harbor House", "Austin Housing Authority"]);

    let none = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[rating]", "not-a-number")]),
    );
    assert!(none.is_empty());
}

#[test]
fn test_unknown_filter_field_is_ignored() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[color]", "blue")]),
    );
    assert_eq!(results.len(), 3);
}

#[test]
fn test_filters_compose_conjunctively() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[state]", "Texas"), ("filter[rating]", "4.5")]),
    );
    assert_eq!(names(&results), vec!["Harbor House", "Austin Housing Authority"]);
}

// ============================================================
// SEARCH TESTS
// ============================================================

#[test]
fn test_search_matches_any_text_attribute() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("search", "columbus")]),
    );
    assert_eq!(names(&results), vec!["Transition Center"]);
}

#[test]
fn test_search_stop_word_only_still_matches_by_phrase() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    // "housing" is a stop word for the housing kind, so no terms survive;
    // the full phrase still matches by substring.
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("search", "housing")]),
    );
    assert_eq!(
        names(&results),
        vec!["Harbor House", "Transition Center", "Austin Housing Authority"]
    );
}

#[test]
fn test_search_tokens_widen_the_match() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    // The phrase matches nothing as a whole, but its tokens match separately.
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("search", "harbor columbus")]),
    );
    assert_eq!(names(&results), vec!["Harbor House", "Transition Center"]);
}

#[test]
fn test_search_runs_after_filters() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(
        &store,
        &vocab,
        Kind::Housing,
        &options(&[("filter[state]", "Texas"), ("search", "harbor columbus")]),
    );
    assert_eq!(names(&results), vec!["Harbor House"]);
}

// ============================================================
// SORT TESTS
// ============================================================

#[test]
fn test_sort_ascending_by_name() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results =
        apply_query_options(&store, &vocab, Kind::Housing, &options(&[("sort", "name")]));
    assert_eq!(
        names(&results),
        vec!["Austin Housing Authority", "Harbor House", "Transition Center"]
    );
}

#[test]
fn test_sort_descending_with_minus_prefix() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results =
        apply_query_options(&store, &vocab, Kind::Housing, &options(&[("sort", "-rating")]));
    let ratings: Vec<Option<f64>> = results.iter().map(|r| r.rating).collect();
    assert_eq!(ratings, vec![Some(4.5), Some(4.5), Some(3.0)]);
}

#[test]
fn test_sort_unknown_field_keeps_filtered_order() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let sorted =
        apply_query_options(&store, &vocab, Kind::Housing, &options(&[("sort", "nope")]));
    let unsorted = apply_query_options(&store, &vocab, Kind::Housing, &options(&[]));
    assert_eq!(names(&sorted), names(&unsorted));
}

#[test]
fn test_default_sort_is_ascending_id() {
    let store = fixture();
    let vocab = Vocabulary::builtin();
    let results = apply_query_options(&store, &vocab, Kind::Housing, &options(&[]));
    let ids: Vec<u64> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
