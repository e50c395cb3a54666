//! The row emitter.
//!
//! Serializes resolved rows as tab-separated text in a fixed column order.
//! Iteration order is the resolver's insertion order — stable across runs
//! with the same inputs, but not semantically meaningful.

use std::io::Write;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::CardRow;

/// Fixed output column order.
pub const COLUMNS: [&str; 9] = [
    "ID",
    "ImageURL",
    "WikiURL",
    "CollInfo",
    "DisplayName",
    "Title",
    "Subtitle",
    "TitleSuffix",
    "Nicknames",
];

/// Write the header and one row per card to `writer`.
pub fn write_rows<W: Write>(writer: W, rows: &[CardRow]) -> Result<(), CatalogError> {
    // Fields are written verbatim: the consumer splits on tabs and knows
    // nothing about quoting, and titles legitimately contain `"`.
    let mut out = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);

    out.write_record(COLUMNS)?;
    for row in rows {
        let nicknames = row.nicknames.join(",");
        out.write_record([
            row.identifier.as_str(),
            row.image_url.as_str(),
            row.wiki_url.as_str(),
            row.collector_code.as_str(),
            row.display_name.as_str(),
            row.title.as_str(),
            row.subtitle.as_str(),
            row.title_suffix.as_str(),
            nicknames.as_str(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

/// Write rows to a file path. The destination is opened once and written
/// sequentially; a fatal error mid-run leaves no partial-write rollback
/// (acceptable for a maintainer-run batch tool).
pub fn write_rows_to_path(path: &Path, rows: &[CardRow]) -> Result<(), CatalogError> {
    let file = std::fs::File::create(path)?;
    write_rows(std::io::BufWriter::new(file), rows)
}
