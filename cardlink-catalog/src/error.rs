/// Errors that can occur in the normalization/resolution pipeline.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A card references a set the reference dataset doesn't know. Fatal:
    /// the collector code cannot be derived without the set abbreviation.
    #[error("Unknown set '{set_id}' referenced by card {card_id}")]
    UnknownSet { set_id: String, card_id: i64 },
}

impl CatalogError {
    pub fn unknown_set(set_id: impl Into<String>, card_id: i64) -> Self {
        Self::UnknownSet {
            set_id: set_id.into(),
            card_id,
        }
    }
}
