//! Serde data model for the published per-side card catalogs.
//!
//! The upstream project publishes one JSON file per side (`Light.json`,
//! `Dark.json`, plus optional legacy pools). Fields we don't use are
//! ignored; fields that are sometimes absent upstream default rather than
//! fail — the catalogs are versioned snapshots, not validated input.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// A parsed catalog file: one side's full card pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub cards: Vec<RawCard>,
}

/// A single raw card record as published upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    /// Numeric id, unique within a side+set.
    pub id: i64,
    /// "Light" or "Dark". Absent on a handful of malformed records.
    #[serde(default)]
    pub side: Option<String>,
    /// Set identifier (e.g., "1", "200d"). May encode a virtual/legacy range.
    #[serde(default)]
    pub set: String,
    /// Rarity code (e.g., "R1", "C2", "U").
    #[serde(default)]
    pub rarity: String,
    /// Composite external identifier with a numeric suffix (e.g., "1_42").
    #[serde(default)]
    pub gemp_id: String,
    /// Front face (always present).
    pub front: CardFace,
    /// Back face for double-sided cards.
    #[serde(default)]
    pub back: Option<CardFace>,
    /// Pre-supplied alternate lookup names.
    #[serde(default)]
    pub abbr: Option<Vec<String>>,
}

impl RawCard {
    /// The numeric suffix of the composite external identifier
    /// (the part after the first underscore), if present.
    pub fn gemp_number(&self) -> Option<&str> {
        self.gemp_id.split_once('_').map(|(_, num)| num)
    }
}

/// One face of a card: title plus image reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardFace {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    /// Card type (e.g., "Character", "Location"). Informational only.
    #[serde(default, rename = "type")]
    pub card_type: Option<String>,
}

/// Parse a catalog file from a reader.
pub fn parse_catalog<R: Read>(reader: R) -> Result<CatalogFile, DataError> {
    let catalog: CatalogFile = serde_json::from_reader(reader)?;
    if catalog.cards.is_empty() {
        return Err(DataError::invalid_data("Catalog contains no cards"));
    }
    Ok(catalog)
}

/// Parse a catalog file from a file path.
pub fn parse_catalog_file(path: &Path) -> Result<CatalogFile, DataError> {
    let file = std::fs::File::open(path)?;
    parse_catalog(std::io::BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CATALOG: &str = r#"{
        "cards": [
            {
                "id": 1,
                "side": "Light",
                "set": "1",
                "rarity": "R1",
                "gempId": "1_20",
                "front": {
                    "title": "•Obi-Wan Kenobi, Jedi Knight",
                    "imageUrl": "https://example.test/cards/1_20.png",
                    "type": "Character"
                }
            },
            {
                "id": 5300,
                "side": "Dark",
                "set": "211",
                "rarity": "V",
                "gempId": "211_7",
                "front": {
                    "title": "Evacuation Control (V)",
                    "imageUrl": "https://example.test/cards/211_7.png"
                },
                "abbr": ["Evac Control"]
            }
        ]
    }"#;

    #[test]
    fn parses_catalog() {
        let catalog = parse_catalog(SAMPLE_CATALOG.as_bytes()).unwrap();
        assert_eq!(catalog.cards.len(), 2);

        let obi = &catalog.cards[0];
        assert_eq!(obi.id, 1);
        assert_eq!(obi.side.as_deref(), Some("Light"));
        assert_eq!(obi.gemp_id, "1_20");
        assert_eq!(obi.gemp_number(), Some("20"));
        assert_eq!(obi.front.title, "•Obi-Wan Kenobi, Jedi Knight");
        assert_eq!(obi.front.card_type.as_deref(), Some("Character"));
        assert!(obi.back.is_none());

        let evac = &catalog.cards[1];
        assert_eq!(evac.set, "211");
        assert_eq!(evac.abbr.as_deref(), Some(&["Evac Control".to_string()][..]));
    }

    #[test]
    fn empty_catalog_is_an_error() {
        let result = parse_catalog(r#"{"cards": []}"#.as_bytes());
        assert!(result.is_err());
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"cards": [{"id": 9, "front": {"title": "Lone Card"}}]}"#;
        let catalog = parse_catalog(json.as_bytes()).unwrap();
        let card = &catalog.cards[0];
        assert_eq!(card.side, None);
        assert_eq!(card.rarity, "");
        assert_eq!(card.gemp_number(), None);
        assert_eq!(card.front.image_url, "");
    }
}
