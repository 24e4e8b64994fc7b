use super::pagination::Links;
use crate::store::memory::MemoryStore;
use crate::store::types::{Kind, Resource};
use serde_json::{json, Map, Value};

/// Serializes a resource with its cross-kind `in_state_resources` summaries
/// attached. The resolver runs over the resource's linked state ids; an
/// unlinked resource gets two empty lists.
pub fn serialize_resource(store: &MemoryStore, kind: Kind, resource: &Resource) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("id".to_string(), json!(resource.id));
    fields.insert("external_id".to_string(), json!(resource.external_id));
    fields.insert("name".to_string(), json!(resource.name));
    fields.insert("address".to_string(), json!(resource.address));
    fields.insert("lat".to_string(), json!(resource.lat));
    fields.insert("lng".to_string(), json!(resource.lng));
    fields.insert("rating".to_string(), json!(resource.rating));
    fields.insert("types".to_string(), json!(resource.types));
    fields.insert("category".to_string(), json!(resource.category));
    fields.insert("keyword".to_string(), json!(resource.keyword));
    fields.insert("phone".to_string(), json!(resource.phone));
    fields.insert("website".to_string(), json!(resource.website));
    fields.insert("photo_url".to_string(), json!(resource.photo_url));
    fields.insert("state_name".to_string(), json!(resource.state_name));
    fields.insert("source".to_string(), json!(resource.source));
    fields.insert(
        "retrieved_at".to_string(),
        json!(resource.retrieved_at.to_rfc3339()),
    );

    let state_ids = store.linked_states(kind, resource.id);
    let mut related = Map::new();
    for other in kind.others() {
        related.insert(
            other.as_str().to_string(),
            json!(store.states_linked_resources(other, &state_ids)),
        );
    }
    fields.insert("in_state_resources".to_string(), Value::Object(related));

    fields
}

/// Wraps a serialized resource into the envelope item shape: stringified id,
/// kind name as `type`, everything else under `attributes`.
pub fn as_resource(item: Map<String, Value>, kind: Kind) -> Value {
    let id = item
        .get("id")
        .and_then(Value::as_u64)
        .map(|id| id.to_string())
        .unwrap_or_default();
    let attributes: Map<String, Value> =
        item.into_iter().filter(|(key, _)| key != "id").collect();

    json!({
        "id": id,
        "type": kind.as_str(),
        "attributes": attributes,
    })
}

/// Top-level paginated envelope.
pub fn envelope(data: Vec<Value>, links: Links, total: usize) -> Value {
    json!({
        "data": data,
        "jsonapi": { "version": "1.0" },
        "links": links,
        "meta": { "total": total },
    })
}
