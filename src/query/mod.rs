//! Query Option Compiler
//!
//! Turns raw request parameters into a filtered and sorted view over one
//! resource kind.
//!
//! ## Pipeline
//! Filters run first (`state`, `types`, `keyword`, then any other known
//! attribute), free-text search second, sorting last. Unknown filter fields,
//! out-of-vocabulary keyword values and unknown sort fields are ignored
//! rather than rejected; the request still succeeds without that constraint.
//!
//! ## Submodules
//! - **`options`**: parameter extraction (`filter[...]`, `search`, `sort`,
//!   `model`, `page[number]`, `page[size]`).
//! - **`compiler`**: filter/search/sort application against the store.

pub mod compiler;
pub mod options;

pub use compiler::{apply_query_options, matches_search};
pub use options::{OptionsError, QueryOptions, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

#[cfg(test)]
mod tests;
