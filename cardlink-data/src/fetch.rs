//! Fetch-if-absent retrieval of the published datasets.
//!
//! The catalogs and the set reference dataset are published as raw JSON in
//! the upstream repository. A file already present locally is used as-is
//! (catalogs are versioned snapshots — a maintainer pins them by keeping
//! them on disk). There is no retry logic: this is a one-shot batch tool.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DataError;

/// Base URL of the published card-catalog repository.
pub const DATASET_BASE_URL: &str =
    "https://raw.githubusercontent.com/swccgpc/swccg-card-json/main/";

/// Default datasets fetched before a build: the two side catalogs and the
/// set reference dataset. Legacy pools exist upstream but are opt-in.
pub const DEFAULT_DATASETS: &[&str] = &["Light.json", "Dark.json", "sets.json"];

/// Construct the download URL for a published dataset.
fn download_url(filename: &str) -> String {
    format!("{DATASET_BASE_URL}{filename}")
}

/// Ensure a dataset is present in `dir`, downloading it if absent.
///
/// Returns the local path. A failed download is fatal — the pipeline cannot
/// run on a partial input set.
pub fn ensure_dataset(dir: &Path, filename: &str) -> Result<PathBuf, DataError> {
    let path = dir.join(filename);
    if path.exists() {
        log::debug!("Using local {}", path.display());
        return Ok(path);
    }

    let url = download_url(filename);
    log::info!("Downloading {url}");

    let response = reqwest::blocking::get(&url)
        .map_err(|e| DataError::download(format!("{filename}: {e}")))?;

    if !response.status().is_success() {
        return Err(DataError::download(format!(
            "HTTP {} for {filename} ({url})",
            response.status()
        )));
    }

    let bytes = response
        .bytes()
        .map_err(|e| DataError::download(format!("{filename}: {e}")))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, &bytes)?;

    Ok(path)
}

/// Ensure every named dataset is present in `dir`, in order.
pub fn ensure_datasets(dir: &Path, filenames: &[&str]) -> Result<Vec<PathBuf>, DataError> {
    filenames
        .iter()
        .map(|name| ensure_dataset(dir, name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_file_short_circuits_download() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Light.json");
        fs::write(&path, r#"{"cards": []}"#).unwrap();

        let resolved = ensure_dataset(dir.path(), "Light.json").unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    fn url_construction() {
        assert_eq!(
            download_url("sets.json"),
            "https://raw.githubusercontent.com/swccgpc/swccg-card-json/main/sets.json"
        );
    }
}
