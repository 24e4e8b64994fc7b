//! Store Data Types
//!
//! Entity definitions shared across the engine: the resource kind tag, the
//! generic `Resource` record (one shape for all three kinds), the `State`
//! reference entity, the lightweight related-resource summary, and the seed
//! file format consumed at startup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Partition tag for the three structurally identical resource kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Housing,
    Counseling,
    Organizations,
}

impl Kind {
    /// Canonical order, used for route documentation and for picking "the
    /// other two kinds" of a resource.
    pub const ALL: [Kind; 3] = [Kind::Housing, Kind::Counseling, Kind::Organizations];

    /// Fixed processing order of the unified search: organizations first,
    /// then housing, then counseling. Ties in relevance preserve this order.
    pub const SEARCH_ORDER: [Kind; 3] = [Kind::Organizations, Kind::Housing, Kind::Counseling];

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Housing => "housing",
            Kind::Counseling => "counseling",
            Kind::Organizations => "organizations",
        }
    }

    /// Dense index for per-kind tables and store partitions.
    pub fn index(&self) -> usize {
        match self {
            Kind::Housing => 0,
            Kind::Counseling => 1,
            Kind::Organizations => 2,
        }
    }

    /// The two kinds other than `self`, in canonical order.
    pub fn others(&self) -> [Kind; 2] {
        match self {
            Kind::Housing => [Kind::Counseling, Kind::Organizations],
            Kind::Counseling => [Kind::Housing, Kind::Organizations],
            Kind::Organizations => [Kind::Housing, Kind::Counseling],
        }
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "housing" => Ok(Kind::Housing),
            "counseling" => Ok(Kind::Counseling),
            "organizations" => Ok(Kind::Organizations),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No such model: {}", self.0)
    }
}

impl std::error::Error for UnknownKind {}

/// A community resource row. All three kinds share this shape; the kind is
/// carried by the store partition, not the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: u64,
    pub external_id: String,
    pub name: String,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub rating: Option<f64>,
    pub types: Vec<String>,
    pub category: String,
    pub keyword: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub photo_url: Option<String>,
    pub state_name: Option<String>,
    pub source: Option<String>,
    pub retrieved_at: DateTime<Utc>,
}

/// Names of the string-typed attributes, the only ones free-text search, the
/// scorer and substring filters ever scan.
pub const TEXT_FIELDS: [&str; 10] = [
    "external_id",
    "name",
    "address",
    "category",
    "keyword",
    "phone",
    "website",
    "photo_url",
    "state_name",
    "source",
];

impl Resource {
    /// Looks up a string-typed attribute by name. `None` for unset optional
    /// fields and for non-string attributes.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        match name {
            "external_id" => Some(self.external_id.as_str()),
            "name" => Some(self.name.as_str()),
            "address" => self.address.as_deref(),
            "category" => Some(self.category.as_str()),
            "keyword" => self.keyword.as_deref(),
            "phone" => self.phone.as_deref(),
            "website" => self.website.as_deref(),
            "photo_url" => self.photo_url.as_deref(),
            "state_name" => self.state_name.as_deref(),
            "source" => self.source.as_deref(),
            _ => None,
        }
    }

    /// Iterator over the values of all set string-typed attributes.
    pub fn text_values(&self) -> impl Iterator<Item = &str> {
        TEXT_FIELDS
            .iter()
            .copied()
            .filter_map(|field| self.text_field(field))
    }

    /// Whether `name` is an attribute of the resource shape at all.
    pub fn has_field(name: &str) -> bool {
        matches!(
            name,
            "id" | "external_id"
                | "name"
                | "address"
                | "lat"
                | "lng"
                | "rating"
                | "types"
                | "category"
                | "keyword"
                | "phone"
                | "website"
                | "photo_url"
                | "state_name"
                | "source"
                | "retrieved_at"
        )
    }

    /// Orders two resources by the named attribute. Unset optional values
    /// sort first, like SQL NULLs under ascending order.
    pub fn compare_by(&self, other: &Resource, field: &str) -> Ordering {
        match field {
            "id" => self.id.cmp(&other.id),
            "lat" => compare_floats(self.lat, other.lat),
            "lng" => compare_floats(self.lng, other.lng),
            "rating" => compare_floats(self.rating, other.rating),
            "types" => self.types.cmp(&other.types),
            "retrieved_at" => self.retrieved_at.cmp(&other.retrieved_at),
            _ => self.text_field(field).cmp(&other.text_field(field)),
        }
    }
}

fn compare_floats(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Pure reference entity; resources point at states through the link table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub id: u64,
    pub name: String,
}

/// Summary record returned by the cross-kind relationship lookup.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RelatedResource {
    pub id: u64,
    pub name: String,
    pub category: String,
}

/// On-disk seed document loaded once at startup. Stands in for the external
/// ingestion and state-linking scripts.
#[derive(Debug, Deserialize, Default)]
pub struct SeedFile {
    #[serde(default)]
    pub states: Vec<SeedState>,
    #[serde(default)]
    pub housing: Vec<SeedResource>,
    #[serde(default)]
    pub counseling: Vec<SeedResource>,
    #[serde(default)]
    pub organizations: Vec<SeedResource>,
}

#[derive(Debug, Deserialize)]
pub struct SeedState {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SeedResource {
    pub external_id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub types: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub keyword: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub retrieved_at: Option<DateTime<Utc>>,
    /// Names of the states this resource is linked to.
    #[serde(default)]
    pub states: Vec<String>,
}
