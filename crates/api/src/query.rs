//! Query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /movies` (`?genre=`).
///
/// An empty `genre` is treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct MovieListParams {
    pub genre: Option<String>,
}

impl MovieListParams {
    /// The genre to filter on, if one was given.
    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }
}
