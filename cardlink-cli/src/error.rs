use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Dataset acquisition or parsing failed
    #[error("Data error: {0}")]
    Data(#[from] cardlink_data::DataError),

    /// Normalization/resolution pipeline error
    #[error("Catalog error: {0}")]
    Catalog(#[from] cardlink_catalog::CatalogError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
