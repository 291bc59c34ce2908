//! Repository for the in-memory movie collection.
//!
//! Provides list/find/create/update/delete over a [`MovieStore`]. Every
//! mutating operation holds the write guard from lookup to mutation.

use movies_core::types::MovieId;
use movies_core::validation::{MoviePatch, NewMovie};
use uuid::Uuid;

use crate::models::movie::Movie;
use crate::store::{find_by_id, find_index, MovieStore};

/// Provides data access for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// All movies in store order.
    pub async fn list(store: &MovieStore) -> Vec<Movie> {
        store.read().await.clone()
    }

    /// Movies matching `predicate`, in store order.
    pub async fn filter<P>(store: &MovieStore, predicate: P) -> Vec<Movie>
    where
        P: Fn(&Movie) -> bool,
    {
        store
            .read()
            .await
            .iter()
            .filter(|&m| predicate(m))
            .cloned()
            .collect()
    }

    /// Movies having `genre` among their genres (case-insensitive), in store order.
    pub async fn list_by_genre(store: &MovieStore, genre: &str) -> Vec<Movie> {
        Self::filter(store, |m| m.has_genre(genre)).await
    }

    /// Find a movie by id. Returns `None` if no record has that id.
    pub async fn find_by_id(store: &MovieStore, id: &str) -> Option<Movie> {
        find_by_id(&store.read().await, id).cloned()
    }

    /// Append a new movie under a freshly generated id.
    pub async fn create(store: &MovieStore, input: NewMovie) -> Movie {
        let mut movies = store.write().await;
        let movie = Movie::from_new(generate_id(&movies), input);
        movies.push(movie.clone());
        movie
    }

    /// Shallow-merge `patch` onto the movie with `id`.
    ///
    /// Returns the updated record, or `None` if no record has that id.
    pub async fn update(store: &MovieStore, id: &str, patch: &MoviePatch) -> Option<Movie> {
        let mut movies = store.write().await;
        let index = find_index(&movies, id)?;
        let movie = &mut movies[index];
        movie.apply_patch(patch);
        Some(movie.clone())
    }

    /// Remove the movie with `id`.
    ///
    /// Returns the removed record, or `None` if no record has that id.
    pub async fn delete(store: &MovieStore, id: &str) -> Option<Movie> {
        let mut movies = store.write().await;
        let index = find_index(&movies, id)?;
        Some(movies.remove(index))
    }
}

/// Random v4 UUID not held by any live record.
fn generate_id(movies: &[Movie]) -> MovieId {
    loop {
        let id = Uuid::new_v4().to_string();
        if find_index(movies, &id).is_none() {
            return id;
        }
    }
}
