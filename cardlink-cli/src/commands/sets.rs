use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cardlink_data::sets::SetRegistry;

use crate::error::CliError;

/// List the set registry loaded from the local reference dataset.
pub(crate) fn run_sets(data_dir: &Path) -> Result<(), CliError> {
    let path = data_dir.join("sets.json");
    if !path.exists() {
        return Err(CliError::config(format!(
            "{} not found; run 'cardlink fetch' first",
            path.display()
        )));
    }

    let registry = SetRegistry::from_path(&path)?;
    log::info!(
        "{}",
        format!("{} sets:", registry.len()).if_supports_color(Stdout, |t| t.bold())
    );
    for (id, info) in registry.entries() {
        log::info!(
            "  {:>6}  {:<6} {}",
            id,
            info.abbr.if_supports_color(Stdout, |t| t.cyan()),
            info.name
        );
    }
    Ok(())
}
