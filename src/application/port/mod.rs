// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters
//! implement. The traits use only domain types, ensuring the application
//! layer remains independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`search`]: Remote repository search and avatar retrieval
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so they can back Iced `Task`s
//! - Network-facing operations are `async` (via `async-trait`, so the
//!   port stays usable as a trait object)

pub mod search;

// Re-export main types for convenience
pub use search::{RepoSearcher, SearchError, SharedSearcher};
