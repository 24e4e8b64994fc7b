//! Community Resource Directory Library
//!
//! This library crate defines the core modules of the directory API. It
//! serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of five loosely coupled subsystems:
//!
//! - **`config`**: Process-wide vocabulary tables (per-kind stop-words and
//!   allowed keyword values), loaded once at startup.
//! - **`store`**: The data layer. Entity types plus a read-only in-memory
//!   store with per-kind partitions, a state table and the resource↔state
//!   link relation used for cross-kind relationship resolution.
//! - **`query`**: The query option compiler. Turns raw request parameters
//!   into filtered and sorted views over one resource kind.
//! - **`search`**: The text scanning logic. Tokenization, the match
//!   annotator that records path-qualified highlight offsets, and the
//!   relevance scorer behind the unified search.
//! - **`api`**: The HTTP surface. Axum handlers, pagination and link
//!   building, envelope assembly and the request error type.

pub mod api;
pub mod config;
pub mod query;
pub mod search;
pub mod store;
