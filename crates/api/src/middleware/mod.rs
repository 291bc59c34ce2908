//! Request middleware.
//!
//! - [`origin::origin_gate`] -- Rejects requests whose `Origin` is not allow-listed.

pub mod origin;
