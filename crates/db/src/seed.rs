//! Seed dataset loading.
//!
//! The store starts from a JSON array of movie records, either the dataset
//! compiled into the binary or a file named in configuration.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::models::movie::Movie;

/// Dataset compiled into the binary, used when no seed path is configured.
pub const DEFAULT_SEED: &str = include_str!("../data/movies.json");

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate movie id in seed data: {0}")]
    DuplicateId(String),
}

/// Parse a JSON array of movies, rejecting duplicate identifiers.
pub fn parse_seed(json: &str) -> Result<Vec<Movie>, SeedError> {
    let movies: Vec<Movie> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(movies.len());
    for movie in &movies {
        if !seen.insert(movie.id.as_str()) {
            return Err(SeedError::DuplicateId(movie.id.clone()));
        }
    }

    Ok(movies)
}

/// Load the seed dataset from `path`, or the embedded dataset when `None`.
pub fn load_seed(path: Option<&Path>) -> Result<Vec<Movie>, SeedError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let movies = parse_seed(&json)?;
            tracing::info!(path = %path.display(), count = movies.len(), "Loaded seed file");
            Ok(movies)
        }
        None => {
            let movies = parse_seed(DEFAULT_SEED)?;
            tracing::info!(count = movies.len(), "Loaded embedded seed dataset");
            Ok(movies)
        }
    }
}
