use regex::{Regex, RegexBuilder};
use serde::Serialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

/// One search term found in a field: where every case-insensitive occurrence
/// starts and ends, as half-open character offsets into the field's value.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MatchRecord {
    pub term: String,
    pub occurrences: Vec<(usize, usize)>,
}

/// Scans a serialized resource for search-term occurrences.
///
/// Walks the value tree and scans every string leaf. Paths are built with
/// `.key` for mapping steps (bare `key` at the root) and `[index]` for
/// sequence steps. The full phrase is recorded one occurrence per record;
/// each term not identical to the phrase is recorded as one record holding
/// all of its occurrences. Records agreeing on (lowercased term, offsets)
/// are deduplicated. Paths with no matches are absent from the result.
pub fn compute_matches(
    value: &Value,
    phrase: Option<&str>,
    terms: &[String],
) -> BTreeMap<String, Vec<MatchRecord>> {
    let mut matches = BTreeMap::new();

    let phrase = phrase.filter(|p| !p.is_empty());
    if phrase.is_none() && terms.is_empty() {
        return matches;
    }

    let phrase_regex = phrase.and_then(literal_regex);
    let term_regexes: Vec<(&str, Regex)> = terms
        .iter()
        .filter(|term| !phrase.is_some_and(|p| term.to_lowercase() == p.to_lowercase()))
        .filter_map(|term| literal_regex(term).map(|re| (term.as_str(), re)))
        .collect();

    walk(
        String::new(),
        value,
        &mut |path, text| {
            let mut found = Vec::new();

            if let (Some(phrase), Some(re)) = (phrase, &phrase_regex) {
                for m in re.find_iter(text) {
                    found.push(MatchRecord {
                        term: phrase.to_string(),
                        occurrences: vec![char_span(text, m.start(), m.end())],
                    });
                }
            }

            for (term, re) in &term_regexes {
                let occurrences: Vec<(usize, usize)> = re
                    .find_iter(text)
                    .map(|m| char_span(text, m.start(), m.end()))
                    .collect();
                if !occurrences.is_empty() {
                    found.push(MatchRecord {
                        term: term.to_string(),
                        occurrences,
                    });
                }
            }

            if !found.is_empty() {
                matches.insert(path, dedup_records(found));
            }
        },
    );

    matches
}

/// Case-insensitive regex matching a term literally.
fn literal_regex(term: &str) -> Option<Regex> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Recursion over the serialized tree. Only string leaves are scanned;
/// numbers, booleans and nulls are skipped, containers are always entered.
fn walk(path: String, value: &Value, scan: &mut dyn FnMut(String, &str)) {
    match value {
        Value::String(text) => scan(path, text),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(format!("{path}[{index}]"), item, scan);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{path}.{key}")
                };
                walk(child_path, child, scan);
            }
        }
        _ => {}
    }
}

/// Converts byte offsets from the regex engine into character offsets.
fn char_span(text: &str, start: usize, end: usize) -> (usize, usize) {
    let start_chars = text[..start].chars().count();
    let matched_chars = text[start..end].chars().count();
    (start_chars, start_chars + matched_chars)
}

fn dedup_records(found: Vec<MatchRecord>) -> Vec<MatchRecord> {
    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter(|record| seen.insert((record.term.to_lowercase(), record.occurrences.clone())))
        .collect()
}
