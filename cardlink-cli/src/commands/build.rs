use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cardlink_catalog::{Normalizer, Resolver, write_rows_to_path};
use cardlink_data::cards::parse_catalog_file;
use cardlink_data::fetch::ensure_dataset;
use cardlink_data::sets::SetRegistry;

use crate::error::CliError;

/// Catalog files processed when no inputs are given, in first-wins order.
const DEFAULT_CATALOGS: &[&str] = &["Light.json", "Dark.json"];

/// Run the full pipeline: load the set registry, normalize every catalog in
/// order, resolve collisions, and write the TSV.
///
/// Fatal errors (unreadable datasets, unknown set ids) abort before any
/// output is written.
pub(crate) fn run_build(
    data_dir: &Path,
    out: &Path,
    inputs: Vec<PathBuf>,
    offline: bool,
) -> Result<(), CliError> {
    let sets_path = resolve_dataset(data_dir, "sets.json", offline)?;
    let registry = SetRegistry::from_path(&sets_path)?;
    log::debug!("Loaded {} sets from {}", registry.len(), sets_path.display());

    let catalog_paths = if inputs.is_empty() {
        DEFAULT_CATALOGS
            .iter()
            .map(|name| resolve_dataset(data_dir, name, offline))
            .collect::<Result<Vec<_>, _>>()?
    } else {
        inputs
    };

    let normalizer = Normalizer::new(&registry);
    let mut resolver = Resolver::new();

    for path in &catalog_paths {
        let catalog = parse_catalog_file(path)?;
        log::info!(
            "Processing {} ({} cards)",
            path.display(),
            catalog.cards.len()
        );
        for card in &catalog.cards {
            for row in normalizer.normalize(card)? {
                resolver.register(row);
            }
        }
    }

    let duplicates = resolver.duplicate_count();
    let rows = resolver.finish();
    write_rows_to_path(out, &rows)?;

    log::info!(
        "{} Wrote {} rows to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        rows.len(),
        out.display()
    );
    if duplicates > 0 {
        log::warn!("Dropped {duplicates} duplicate rows (first write wins)");
    }
    Ok(())
}

/// Resolve a dataset path: local file if present, otherwise downloaded —
/// unless `offline`, in which case a missing file is a configuration error.
fn resolve_dataset(data_dir: &Path, name: &str, offline: bool) -> Result<PathBuf, CliError> {
    let local = data_dir.join(name);
    if offline {
        if !local.exists() {
            return Err(CliError::config(format!(
                "{} not found and --offline given",
                local.display()
            )));
        }
        return Ok(local);
    }
    Ok(ensure_dataset(data_dir, name)?)
}
