//! # lp-store
//!
//! JSON-file persistence for Launchpad collections.
//!
//! Every collection is a JSON array in its own file, loaded whole and
//! rewritten whole after each mutation. A missing or corrupt file loads as an
//! empty collection. `RecordManager<T>` owns one collection; the `repos`
//! modules add the per-kind create/update rules, and `UploadManager` pairs
//! upload metadata with the artifacts on disk.

pub mod error;
pub mod export;
mod helpers;
pub mod json_store;
pub mod manager;
pub mod record;
pub mod repos;
pub mod updates;

#[cfg(test)]
mod test_support;

pub use error::StoreError;
pub use manager::RecordManager;
pub use record::{Record, RecordRef};
pub use repos::{IdeaManager, LinkManager, TestingNoteLog, UploadManager};
