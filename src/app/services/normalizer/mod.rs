//! Field mapping and normalization for raw ingest rows
//!
//! This module turns each raw row into exactly one stable
//! [`NormalizedMessage`](crate::app::models::NormalizedMessage), mediated by
//! a caller-supplied [`SchemaMapping`]. Normalization is a pure function of
//! its inputs: no I/O, no hidden state, and deterministic identifiers.
//!
//! ## Architecture
//!
//! - [`mapping`] - Column mapping configuration (`SchemaMapping`)
//! - [`normalize`] - The `MessageNormalizer` itself
//! - [`message_id`] - Deterministic id synthesis (32-bit FNV-1a)
//! - [`timestamp`] - Canonicalization of export timestamps to UTC

pub mod mapping;
pub mod message_id;
pub mod normalize;
pub mod timestamp;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use mapping::SchemaMapping;
pub use normalize::MessageNormalizer;
