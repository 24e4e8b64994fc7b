//! Search Module
//!
//! Text scanning and ranking for the directory's search features.
//!
//! ## Responsibilities
//! - **Tokenization**: splitting raw query strings into terms and removing
//!   per-kind stop-words via the vocabulary configuration.
//! - **Match annotation**: walking a serialized resource and recording
//!   path-qualified character-offset spans for every phrase and term
//!   occurrence, so clients can highlight exactly what matched.
//! - **Relevance scoring**: ranking resources across all three kinds in the
//!   unified search by phrase and term occurrence counts.
//!
//! ## Submodules
//! - **`tokenizer`**: term splitting and case-insensitive containment helpers.
//! - **`matches`**: the `compute_matches` annotator.
//! - **`scorer`**: the occurrence-count ranking signal.

pub mod matches;
pub mod scorer;
pub mod tokenizer;

pub use matches::{compute_matches, MatchRecord};
pub use scorer::relevance_score;
