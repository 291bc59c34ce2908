/// Movie identifiers are opaque strings (UUID v4 text for server-generated ones).
pub type MovieId = String;
