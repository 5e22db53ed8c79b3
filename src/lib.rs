//! Employee roster engine.
//!
//! An in-memory collection store (filter, sort, add, update over a derived view)
//! with snapshot persistence, plus the record editor logic used by the edit form.

pub mod config;
pub mod data;
pub mod editor;
pub mod errors;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use store::CollectionStore;

#[cfg(test)]
mod tests;
