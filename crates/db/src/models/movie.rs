//! Movie record stored in memory.

use movies_core::genre::same_genre;
use movies_core::types::MovieId;
use movies_core::validation::{MoviePatch, NewMovie};
use serde::{Deserialize, Serialize};

/// A movie as held by the store and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<String>,
    pub rate: f64,
}

impl Movie {
    /// Build a record from a validated submission and a server-assigned id.
    pub fn from_new(id: MovieId, new: NewMovie) -> Self {
        Self {
            id,
            title: new.title,
            year: new.year,
            director: new.director,
            duration: new.duration,
            poster: new.poster,
            genre: new.genre,
            rate: new.rate,
        }
    }

    /// Shallow merge: every field present in `patch` overwrites the stored
    /// value, absent fields are kept. The id is never touched.
    pub fn apply_patch(&mut self, patch: &MoviePatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(director) = &patch.director {
            self.director = director.clone();
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(poster) = &patch.poster {
            self.poster = poster.clone();
        }
        if let Some(genre) = &patch.genre {
            self.genre = genre.clone();
        }
        if let Some(rate) = patch.rate {
            self.rate = rate;
        }
    }

    /// Whether any of this movie's genres matches `genre`, ignoring case.
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genre.iter().any(|g| same_genre(g, genre))
    }
}
