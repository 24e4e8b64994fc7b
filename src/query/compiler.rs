use super::options::QueryOptions;
use crate::config::Vocabulary;
use crate::search::tokenizer::{contains_ci, search_terms};
use crate::store::memory::MemoryStore;
use crate::store::types::{Kind, Resource};

/// Compiles request parameters into a filtered, sorted view over one
/// resource kind. Applied in order: filters, free-text search, sort. The
/// returned vector is owned by the caller.
pub fn apply_query_options(
    store: &MemoryStore,
    vocab: &Vocabulary,
    kind: Kind,
    options: &QueryOptions,
) -> Vec<Resource> {
    let mut results: Vec<Resource> = store.scan(kind).cloned().collect();

    for (field, value) in &options.filters {
        apply_filter(store, vocab, kind, &mut results, field, value);
    }

    if let Some(phrase) = options.search_phrase() {
        let terms = search_terms(phrase, vocab, kind);
        results.retain(|resource| matches_search(resource, phrase, &terms));
    }

    match options.sort.as_deref() {
        Some(sort) => {
            let descending = sort.starts_with('-');
            let field = sort.trim_start_matches('-');
            if Resource::has_field(field) {
                results.sort_by(|a, b| {
                    let ordering = a.compare_by(b, field);
                    if descending {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                });
            }
            // Unknown sort fields leave the filtered order untouched.
        }
        None => results.sort_by_key(|resource| resource.id),
    }

    results
}

/// Disjunctive free-text predicate: any textual attribute contains the full
/// phrase or any surviving term, case-insensitively.
pub fn matches_search(resource: &Resource, phrase: &str, terms: &[String]) -> bool {
    resource.text_values().any(|text| {
        contains_ci(text, phrase) || terms.iter().any(|term| contains_ci(text, term))
    })
}

fn apply_filter(
    store: &MemoryStore,
    vocab: &Vocabulary,
    kind: Kind,
    results: &mut Vec<Resource>,
    field: &str,
    value: &str,
) {
    match field {
        "state" => {
            let wanted: Vec<&str> = value.split(',').map(str::trim).collect();
            results.retain(|resource| {
                store
                    .linked_state_names(kind, resource.id)
                    .iter()
                    .any(|name| wanted.iter().any(|w| w == name))
            });
        }
        "types" => {
            let wanted: Vec<&str> = value.split(',').map(str::trim).collect();
            results.retain(|resource| {
                resource
                    .types
                    .iter()
                    .any(|tag| wanted.iter().any(|w| *w == tag.as_str()))
            });
        }
        "keyword" => {
            let surviving: Vec<&str> = keyword_values(value)
                .into_iter()
                .filter(|v| vocab.is_allowed_keyword(kind, v))
                .collect();
            // No surviving values means no constraint, not an empty result.
            if !surviving.is_empty() {
                results.retain(|resource| {
                    resource
                        .keyword
                        .as_deref()
                        .is_some_and(|k| surviving.iter().any(|s| *s == k))
                });
            }
        }
        _ => {
            if !Resource::has_field(field) {
                return; // unknown fields are silently ignored
            }
            results.retain(|resource| matches_attribute(resource, field, value));
        }
    }
}

/// Splits a requested keyword filter value, accepting both `a,b` and
/// `[a, b]` notations.
fn keyword_values(value: &str) -> Vec<&str> {
    let value = value.trim();
    let inner = value
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(value);
    inner
        .split(',')
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect()
}

/// Generic attribute filter: string attributes match by case-insensitive
/// substring containment, non-string attributes by equality against the
/// parsed value (an unparseable value matches nothing).
fn matches_attribute(resource: &Resource, field: &str, value: &str) -> bool {
    match field {
        "id" => value.parse::<u64>().is_ok_and(|id| resource.id == id),
        "lat" => float_equals(resource.lat, value),
        "lng" => float_equals(resource.lng, value),
        "rating" => float_equals(resource.rating, value),
        "types" => resource.types.iter().any(|tag| tag == value),
        "retrieved_at" => value
            .parse::<chrono::DateTime<chrono::Utc>>()
            .is_ok_and(|ts| resource.retrieved_at == ts),
        _ => resource
            .text_field(field)
            .is_some_and(|text| contains_ci(text, value)),
    }
}

fn float_equals(attribute: Option<f64>, value: &str) -> bool {
    match (attribute, value.parse::<f64>()) {
        (Some(actual), Ok(wanted)) => actual == wanted,
        _ => false,
    }
}
