//! The name-normalization and identity-resolution pipeline.
//!
//! Turns raw card records into flat [`CardRow`]s: collector-code derivation,
//! heuristic title/subtitle splitting, nickname generation, double-sided row
//! expansion, exact-duplicate detection, and cross-side name-collision
//! disambiguation. Data flows strictly forward: raw card → normalized row(s)
//! → collision-checked registry → emitted rows.

pub mod emitter;
pub mod error;
pub mod name_parser;
pub mod nicknames;
pub mod normalizer;
pub mod resolver;
pub mod types;

pub use emitter::{write_rows, write_rows_to_path};
pub use error::CatalogError;
pub use name_parser::{DualName, SplitTitle, clean_title, parse_dual_name, split_title};
pub use normalizer::Normalizer;
pub use resolver::{RegisterOutcome, Resolver};
pub use types::CardRow;
