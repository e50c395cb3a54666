//! Raw card-catalog acquisition and parsing.
//!
//! This crate owns everything upstream of normalization: the serde data
//! model for the published per-side JSON catalogs, the set reference
//! registry, and fetch-if-absent retrieval of the published datasets.

pub mod cards;
pub mod error;
pub mod fetch;
pub mod sets;

pub use cards::{CardFace, CatalogFile, RawCard};
pub use error::DataError;
pub use sets::{SetInfo, SetRegistry};
