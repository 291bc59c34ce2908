//! Domain logic for the movies service.
//!
//! Pure logic only: the error taxonomy, the genre vocabulary, the movie
//! payload validation and the cross-origin allow-list. Nothing in this crate
//! touches the store or the HTTP layer.

pub mod error;
pub mod genre;
pub mod origin;
pub mod types;
pub mod validation;
