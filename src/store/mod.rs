//! Resource Store Module
//!
//! The data layer of the directory: entity types shared by every component
//! and the read-only in-memory store the engine queries.
//!
//! ## Responsibilities
//! - **Entities**: the `Kind` partition tag, the generic `Resource` record,
//!   the `State` reference entity and the related-resource summary.
//! - **Storage**: id-ordered per-kind partitions seeded once at startup.
//! - **Relationship resolution**: the shared-state join used to attach
//!   `in_state_resources` summaries across kinds.
//!
//! ## Submodules
//! - **`types`**: entity and seed-file definitions.
//! - **`memory`**: the `MemoryStore` implementation.

pub mod memory;
pub mod types;

pub use memory::MemoryStore;
pub use types::{Kind, RelatedResource, Resource, State};
