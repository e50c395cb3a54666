//! Core types shared across the cardlink crates.
//!
//! This crate is a leaf: the `Side` enum partitioning the card pool and a
//! few string utilities used by the normalization pipeline.

pub mod side;
pub mod util;

pub use side::{Side, SideParseError};
