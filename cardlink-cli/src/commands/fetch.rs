use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cardlink_data::fetch::{DEFAULT_DATASETS, ensure_datasets};

use crate::error::CliError;

/// Download any missing default datasets into the data directory.
pub(crate) fn run_fetch(data_dir: &Path) -> Result<(), CliError> {
    let paths = ensure_datasets(data_dir, DEFAULT_DATASETS)?;

    log::info!(
        "{} {} datasets available:",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        paths.len()
    );
    for path in &paths {
        log::info!("  {}", path.display());
    }
    Ok(())
}
