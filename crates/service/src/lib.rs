//! Service layer: the durable document store behind the HTTP surface.
//! - Owns the single `gamestate` row and its bootstrap seed.
//! - Keeps the document opaque; parsing happens at the HTTP boundary.

pub mod errors;
pub mod runtime;
pub mod storage;
