//! In-memory data layer for the movies service.
//!
//! Holds the movie model, the shared [`MovieStore`], the repository that
//! reads and mutates it, and seed dataset loading.

use std::path::Path;
use std::sync::Arc;

pub mod models;
pub mod repositories;
pub mod seed;
pub mod store;

pub use seed::SeedError;
pub use store::MovieStore;

/// Shared handle to the store, cloned into every request.
pub type StoreHandle = Arc<MovieStore>;

/// Build the shared store from the seed dataset at `seed_path`, or the
/// embedded dataset when `None`.
pub fn create_store(seed_path: Option<&Path>) -> Result<StoreHandle, SeedError> {
    let movies = seed::load_seed(seed_path)?;
    Ok(Arc::new(MovieStore::new(movies)))
}
