//! In-Memory Resource Store
//!
//! Read-only store backing the query engine. Three per-kind partitions of
//! resources keyed by id, a state table, and a per-kind resource↔state link
//! relation. Populated once from a seed document and never mutated, so it is
//! shared across request handlers without locks.

use super::types::{Kind, RelatedResource, Resource, SeedFile, SeedResource, State};
use anyhow::{bail, Result};
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet, HashMap};

pub struct MemoryStore {
    /// One id-ordered partition per kind, indexed by `Kind::index()`.
    partitions: [BTreeMap<u64, Resource>; 3],
    states: BTreeMap<u64, State>,
    /// resource id -> linked state ids, one map per kind.
    links: [HashMap<u64, BTreeSet<u64>>; 3],
}

impl MemoryStore {
    /// Builds the store from a seed document. Resource ids are assigned
    /// sequentially per kind in seed order; states referenced by a resource
    /// but not declared in the seed's state list are registered on the fly.
    pub fn from_seed(seed: SeedFile) -> Result<Self> {
        let mut store = MemoryStore {
            partitions: Default::default(),
            states: BTreeMap::new(),
            links: Default::default(),
        };

        let mut state_ids: HashMap<String, u64> = HashMap::new();
        for state in &seed.states {
            register_state(&mut store.states, &mut state_ids, &state.name);
        }

        store.load_kind(Kind::Housing, seed.housing, &mut state_ids)?;
        store.load_kind(Kind::Counseling, seed.counseling, &mut state_ids)?;
        store.load_kind(Kind::Organizations, seed.organizations, &mut state_ids)?;

        Ok(store)
    }

    fn load_kind(
        &mut self,
        kind: Kind,
        rows: Vec<SeedResource>,
        state_ids: &mut HashMap<String, u64>,
    ) -> Result<()> {
        let loaded_at = Utc::now();
        let mut seen_external = BTreeSet::new();

        for (position, row) in rows.into_iter().enumerate() {
            let id = position as u64 + 1;
            if !seen_external.insert(row.external_id.clone()) {
                bail!(
                    "duplicate external_id {:?} in {} seed data",
                    row.external_id,
                    kind
                );
            }

            let mut linked = BTreeSet::new();
            for state_name in &row.states {
                linked.insert(register_state(&mut self.states, state_ids, state_name));
            }
            if !linked.is_empty() {
                self.links[kind.index()].insert(id, linked);
            }

            let resource = Resource {
                id,
                external_id: row.external_id,
                name: row.name,
                address: row.address,
                lat: row.lat,
                lng: row.lng,
                rating: row.rating,
                types: row.types,
                category: row.category,
                keyword: row.keyword,
                phone: row.phone,
                website: row.website,
                photo_url: row.photo_url,
                state_name: row.state_name,
                source: row.source,
                retrieved_at: row.retrieved_at.unwrap_or(loaded_at),
            };
            self.partitions[kind.index()].insert(id, resource);
        }
        Ok(())
    }

    /// All resources of a kind, ascending by id.
    pub fn scan(&self, kind: Kind) -> impl Iterator<Item = &Resource> {
        self.partitions[kind.index()].values()
    }

    pub fn get(&self, kind: Kind, id: u64) -> Option<&Resource> {
        self.partitions[kind.index()].get(&id)
    }

    pub fn len(&self, kind: Kind) -> usize {
        self.partitions[kind.index()].len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(|p| p.is_empty())
    }

    /// State ids linked to the given resource. Empty set when the resource
    /// has no links (the guaranteed-no-match sentinel for the resolver).
    pub fn linked_states(&self, kind: Kind, id: u64) -> BTreeSet<u64> {
        self.links[kind.index()]
            .get(&id)
            .cloned()
            .unwrap_or_default()
    }

    /// Names of the states linked to the given resource.
    pub fn linked_state_names(&self, kind: Kind, id: u64) -> Vec<&str> {
        self.links[kind.index()]
            .get(&id)
            .into_iter()
            .flatten()
            .filter_map(|sid| self.states.get(sid))
            .map(|s| s.name.as_str())
            .collect()
    }

    /// Relationship resolver join: summaries of every `kind` resource linked
    /// to at least one of `state_ids`. Empty input yields an empty result.
    /// Order is store iteration order; callers must not rely on it.
    pub fn states_linked_resources(
        &self,
        kind: Kind,
        state_ids: &BTreeSet<u64>,
    ) -> Vec<RelatedResource> {
        if state_ids.is_empty() {
            return Vec::new();
        }
        self.scan(kind)
            .filter(|r| {
                self.links[kind.index()]
                    .get(&r.id)
                    .is_some_and(|linked| !linked.is_disjoint(state_ids))
            })
            .map(|r| RelatedResource {
                id: r.id,
                name: r.name.clone(),
                category: r.category.clone(),
            })
            .collect()
    }
}

/// Returns the id of the named state, registering it first when unseen.
fn register_state(
    states: &mut BTreeMap<u64, State>,
    state_ids: &mut HashMap<String, u64>,
    name: &str,
) -> u64 {
    if let Some(id) = state_ids.get(name) {
        return *id;
    }
    let id = states.len() as u64 + 1;
    states.insert(
        id,
        State {
            id,
            name: name.to_string(),
        },
    );
    state_ids.insert(name.to_string(), id);
    id
}
