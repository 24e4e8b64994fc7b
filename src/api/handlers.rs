use super::error::ApiError;
use super::pagination::{build_links, paginate, total_pages};
use super::response::{as_resource, envelope, serialize_resource};
use crate::config::Vocabulary;
use crate::query::{apply_query_options, matches_search, QueryOptions};
use crate::search::matches::compute_matches;
use crate::search::scorer::relevance_score;
use crate::search::tokenizer::{search_terms, split_terms};
use crate::store::memory::MemoryStore;
use crate::store::types::Kind;
use axum::extract::{Extension, Path, Query};
use axum::Json;
use serde_json::{json, Map, Value};
use std::str::FromStr;
use std::sync::Arc;

pub async fn handle_health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// `GET /api/:kind/:id` — one resource with its cross-kind summaries.
pub async fn handle_get_resource(
    Path((kind, id)): Path<(String, u64)>,
    Extension(store): Extension<Arc<MemoryStore>>,
) -> Result<Json<Value>, ApiError> {
    let kind = Kind::from_str(&kind).map_err(|_| ApiError::NotFound)?;
    let resource = store.get(kind, id).ok_or(ApiError::NotFound)?;
    Ok(Json(Value::Object(serialize_resource(
        &store, kind, resource,
    ))))
}

/// `GET /api/:kind` — filtered, searched, sorted, paginated listing with
/// per-item match annotations.
pub async fn handle_list_resources(
    Path(kind): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    Extension(store): Extension<Arc<MemoryStore>>,
    Extension(vocab): Extension<Arc<Vocabulary>>,
) -> Result<Json<Value>, ApiError> {
    let kind = Kind::from_str(&kind).map_err(|_| ApiError::NotFound)?;
    let options = QueryOptions::from_params(&params)?;

    let results = apply_query_options(&store, &vocab, kind, &options);
    if results.is_empty() {
        return Err(ApiError::NotFound);
    }
    tracing::debug!("{} listing matched {} resources", kind, results.len());

    // The annotator scans the raw whitespace tokens of the query; stop-word
    // removal only narrows which rows qualify, not what gets highlighted.
    let phrase = options.search_phrase();
    let raw_terms = phrase.map(split_terms).unwrap_or_default();

    let mut items: Vec<Map<String, Value>> = Vec::with_capacity(results.len());
    for resource in &results {
        let mut item = serialize_resource(&store, kind, resource);
        let matches = match phrase {
            Some(phrase) => compute_matches(&Value::Object(item.clone()), Some(phrase), &raw_terms),
            None => Default::default(),
        };
        item.insert("matches".to_string(), json!(matches));
        items.push(item);
    }

    let total = items.len();
    let pages = total_pages(total, options.page_size);
    let data: Vec<Value> = paginate(&items, options.page_number, options.page_size)
        .iter()
        .map(|item| as_resource(item.clone(), kind))
        .collect();
    let route = format!("/api/{kind}");
    let links = build_links(&route, options.page_number, options.page_size, pages);

    Ok(Json(envelope(data, links, total)))
}

/// `GET /api/search_all` — ranked, mixed-kind search across all partitions
/// (or a single one when `model=` is given).
pub async fn handle_search_all(
    Query(params): Query<Vec<(String, String)>>,
    Extension(store): Extension<Arc<MemoryStore>>,
    Extension(vocab): Extension<Arc<Vocabulary>>,
) -> Result<Json<Value>, ApiError> {
    let options = QueryOptions::from_params(&params)?;
    let phrase = options
        .search_phrase()
        .ok_or_else(|| ApiError::BadRequest("No search query provided".to_string()))?;

    let kinds: Vec<Kind> = match options.model.as_deref() {
        Some(model) => vec![Kind::from_str(model)?],
        None => Kind::SEARCH_ORDER.to_vec(),
    };

    let phrase_lower = phrase.to_lowercase();
    let mut scored: Vec<(Map<String, Value>, Kind, usize)> = Vec::new();
    for kind in kinds {
        let terms = search_terms(phrase, &vocab, kind);
        for resource in store.scan(kind) {
            if !matches_search(resource, phrase, &terms) {
                continue;
            }
            let score = relevance_score(resource, &phrase_lower, &terms);
            let mut item = serialize_resource(&store, kind, resource);
            let matches =
                compute_matches(&Value::Object(item.clone()), Some(&phrase_lower), &terms);
            item.insert("matches".to_string(), json!(matches));
            scored.push((item, kind, score));
        }
    }

    // Stable sort: ties keep the fixed kind processing order, then store
    // iteration order within a kind.
    scored.sort_by(|a, b| b.2.cmp(&a.2));
    tracing::debug!("search_all {:?} matched {} resources", phrase, scored.len());

    let total = scored.len();
    let pages = total_pages(total, options.page_size);
    let data: Vec<Value> = paginate(&scored, options.page_number, options.page_size)
        .iter()
        .map(|(item, kind, _)| as_resource(item.clone(), *kind))
        .collect();
    let links = build_links(
        "/api/search_all",
        options.page_number,
        options.page_size,
        pages,
    );

    Ok(Json(envelope(data, links, total)))
}
