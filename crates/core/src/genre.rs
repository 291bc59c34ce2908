//! Genre vocabulary and matching rules.
//!
//! Movie genres are drawn from a fixed vocabulary. How strictly incoming
//! genre names are checked against it is controlled by [`GenrePolicy`].

use std::fmt;
use std::str::FromStr;

/* --------------------------------------------------------------------------
   Vocabulary
   -------------------------------------------------------------------------- */

/// All genres accepted under [`GenrePolicy::Enumerated`], in canonical spelling.
pub const GENRES: &[&str] = &[
    "Action",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Drama",
    "Fantasy",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Thriller",
];

/// Look up the canonical spelling of a genre name, ignoring case.
///
/// Returns `None` when the name is not part of [`GENRES`].
pub fn canonical_genre(name: &str) -> Option<&'static str> {
    GENRES.iter().copied().find(|g| same_genre(g, name))
}

/// Case-insensitive genre comparison used for both filtering and dedup.
pub fn same_genre(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/* --------------------------------------------------------------------------
   Policy
   -------------------------------------------------------------------------- */

/// How incoming genre names are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GenrePolicy {
    /// Names must match [`GENRES`] (case-insensitively) and are stored in
    /// canonical spelling.
    #[default]
    Enumerated,
    /// Any non-empty name is accepted verbatim.
    Open,
}

/// Why a single genre name was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreRejection {
    Empty,
    Unknown,
}

impl GenrePolicy {
    /// Normalize one genre name under this policy.
    pub fn accept(self, name: &str) -> Result<String, GenreRejection> {
        if name.trim().is_empty() {
            return Err(GenreRejection::Empty);
        }
        match self {
            GenrePolicy::Enumerated => canonical_genre(name)
                .map(str::to_string)
                .ok_or(GenreRejection::Unknown),
            GenrePolicy::Open => Ok(name.to_string()),
        }
    }
}

impl FromStr for GenrePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enumerated" | "strict" => Ok(GenrePolicy::Enumerated),
            "open" => Ok(GenrePolicy::Open),
            other => Err(format!(
                "Invalid genre policy '{other}'. Must be one of: enumerated, open"
            )),
        }
    }
}

impl fmt::Display for GenrePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenrePolicy::Enumerated => f.write_str("enumerated"),
            GenrePolicy::Open => f.write_str("open"),
        }
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
