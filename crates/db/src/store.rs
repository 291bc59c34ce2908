//! In-memory movie store.
//!
//! A single ordered sequence behind a `tokio` read/write lock. Repositories
//! take a guard for the whole of a lookup-then-mutate sequence so no other
//! request can interleave between finding a record and changing it.

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::movie::Movie;

/// Owns every movie record for the lifetime of the process.
///
/// Designed to be wrapped in `Arc` and shared through the application state.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MovieStore {
    /// Create a store holding `movies` in the given order.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    /// Shared access to the sequence.
    pub async fn read(&self) -> RwLockReadGuard<'_, Vec<Movie>> {
        self.movies.read().await
    }

    /// Exclusive access to the sequence.
    pub async fn write(&self) -> RwLockWriteGuard<'_, Vec<Movie>> {
        self.movies.write().await
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

/// Position of the first record with `id` (linear scan).
pub fn find_index(movies: &[Movie], id: &str) -> Option<usize> {
    movies.iter().position(|m| m.id == id)
}

/// First record with `id` (linear scan).
pub fn find_by_id<'a>(movies: &'a [Movie], id: &str) -> Option<&'a Movie> {
    movies.iter().find(|m| m.id == id)
}
