//! Per-card normalization.
//!
//! For each raw card this derives the virtual-tagged display name, the
//! stable collector code, the title/subtitle split, the title suffix, the
//! nickname list, and — for double-sided cards — expands the record into a
//! front and a back row.

use cardlink_core::Side;
use cardlink_core::util::zero_pad3;
use cardlink_data::cards::{CardFace, RawCard};
use cardlink_data::sets::SetRegistry;

use crate::error::CatalogError;
use crate::name_parser::{
    ANGLE_MARKER, DIAMOND, SplitTitle, clean_title, parse_dual_name, split_title, title_suffix,
};
use crate::nicknames::{apply_bonus_nicknames, clean_alternate};
use crate::types::CardRow;

/// Query template the wiki URL is built from; the display name is
/// URL-escaped into it.
const WIKI_SEARCH_URL: &str = "https://scomp.starwarsccg.org/?search=";

/// Exclusive bounds of the reserved virtual-set numeric range.
const VIRTUAL_RANGE: (u32, u32) = (199, 300);

/// Non-numeric set identifiers with a fixed numeric equivalent for
/// virtual-range checking.
const VIRTUAL_SET_ALIASES: &[(&str, u32)] = &[("200d", 200)];

/// Resolve a set identifier to its numeric value for range checking.
fn set_number(set_id: &str) -> Option<u32> {
    if let Ok(n) = set_id.parse::<u32>() {
        return Some(n);
    }
    VIRTUAL_SET_ALIASES
        .iter()
        .find(|(alias, _)| *alias == set_id)
        .map(|(_, n)| *n)
}

/// Whether a set identifier falls in the reserved virtual range
/// (exclusive on both ends).
fn is_virtual_set(set_id: &str) -> bool {
    set_number(set_id).is_some_and(|n| n > VIRTUAL_RANGE.0 && n < VIRTUAL_RANGE.1)
}

/// Normalizes raw cards against a loaded set registry.
#[derive(Debug)]
pub struct Normalizer<'a> {
    sets: &'a SetRegistry,
}

impl<'a> Normalizer<'a> {
    pub fn new(sets: &'a SetRegistry) -> Self {
        Self { sets }
    }

    /// Normalize one raw card into one row, or two for double-sided cards.
    ///
    /// An unknown set id is fatal — collector codes cannot be derived
    /// without the set abbreviation. Missing non-identity fields degrade
    /// with a diagnostic instead.
    pub fn normalize(&self, card: &RawCard) -> Result<Vec<CardRow>, CatalogError> {
        let side = Side::from_raw(card.side.as_deref());
        if side == Side::Unknown {
            log::warn!(
                "Card {} ('{}') has no recognizable side; continuing without one",
                card.id,
                card.front.title
            );
        }

        // Virtual-set title tagging
        let mut display = card.front.title.clone();
        if is_virtual_set(&card.set) && !display.contains("(V)") {
            display.push_str(" (V)");
        }

        let set_info = self
            .sets
            .lookup(&card.set)
            .ok_or_else(|| CatalogError::unknown_set(&card.set, card.id))?;

        let collector_code = derive_collector_code(card, &set_info.abbr, &display);
        let suffix = title_suffix(&display);
        let split = split_title(&clean_title(&display));

        // Cosmetic glyph substitution happens after all matching-relevant
        // derivation is done.
        let display = display.replace(ANGLE_MARKER, DIAMOND);

        let mut nicknames = vec![display.clone()];
        if let Some(alternates) = &card.abbr {
            nicknames.extend(alternates.iter().filter_map(|a| clean_alternate(a)));
        }
        apply_bonus_nicknames(&split.title, &mut nicknames);

        let front = CardRow {
            identifier: card.id.to_string(),
            image_url: card.front.image_url.clone(),
            wiki_url: wiki_url(&display),
            collector_code,
            display_name: display,
            title: split.title.clone(),
            subtitle: split.subtitle.clone(),
            title_suffix: suffix.to_string(),
            nicknames,
            side,
        };

        if split.double_sided {
            Ok(expand_double_sided(front, &split, card.back.as_ref()))
        } else {
            Ok(vec![front])
        }
    }
}

/// Derive the stable collector code:
/// `abbr + rarity + zero-padded(3) numeric suffix [+ "AI"] [+ "OAI"]`.
///
/// The code must stay independent of title formatting so the same physical
/// card maps to the same code across runs; only the variant markers feed in.
fn derive_collector_code(card: &RawCard, abbr: &str, display: &str) -> String {
    let number = match card.gemp_number() {
        Some(n) => zero_pad3(n),
        None => {
            log::warn!(
                "Card {} ('{}') has no numeric suffix in external id '{}'",
                card.id,
                card.front.title,
                card.gemp_id
            );
            String::new()
        }
    };

    let mut code = format!("{}{}{}", abbr, card.rarity, number);
    if display.contains("(AI)") {
        code.push_str("AI");
    }
    if display.contains("(OAI)") {
        code.push_str("OAI");
    }
    code
}

/// Build the wiki search URL for a display name.
fn wiki_url(display: &str) -> String {
    format!("{WIKI_SEARCH_URL}{}", urlencoding::encode(display))
}

/// Expand a double-sided card into front and back rows.
///
/// Both rows get "F"/"B" suffixes on identifier and collector code. For
/// same-named cards the per-face display names are re-derived from the raw
/// dual name and tagged "(Front)"/"(Back)"; otherwise the faces swap
/// title/subtitle so a lookup by either face finds both.
fn expand_double_sided(front: CardRow, split: &SplitTitle, back_face: Option<&CardFace>) -> Vec<CardRow> {
    let base = front;
    let dual = parse_dual_name(&base.display_name);
    if dual.is_none() {
        // Shouldn't happen for a row flagged double-sided, but a malformed
        // name falls back to the unsplit display rather than aborting.
        log::warn!(
            "Double-sided card {} has no parseable dual name: '{}'",
            base.identifier,
            base.display_name
        );
    }

    let back_image = match back_face {
        Some(face) => face.image_url.clone(),
        None => {
            log::warn!(
                "Double-sided card {} has no back face; reusing front image",
                base.identifier
            );
            base.image_url.clone()
        }
    };

    let (front_display, back_display) = if split.same_name {
        match &dual {
            Some(d) => {
                let sfx = d.suffix.as_deref().map(|s| format!(" {s}")).unwrap_or_default();
                (
                    format!("{}{} (Front)", d.left, sfx),
                    format!("{}{} (Back)", d.right, sfx),
                )
            }
            None => (
                format!("{} (Front)", base.display_name),
                format!("{} (Back)", base.display_name),
            ),
        }
    } else {
        let back = match &dual {
            Some(d) => {
                let sfx = d.suffix.as_deref().map(|s| format!(" {s}")).unwrap_or_default();
                format!("{} / {}{}", d.right, d.left, sfx)
            }
            None => base.display_name.clone(),
        };
        (base.display_name.clone(), back)
    };

    let back = CardRow {
        identifier: format!("{}B", base.identifier),
        image_url: back_image,
        wiki_url: wiki_url(&back_display),
        collector_code: format!("{}B", base.collector_code),
        display_name: back_display,
        // Swapped faces, unless both faces share the name.
        title: if split.same_name {
            base.title.clone()
        } else {
            base.subtitle.clone()
        },
        subtitle: if split.same_name {
            base.subtitle.clone()
        } else {
            base.title.clone()
        },
        title_suffix: base.title_suffix.clone(),
        nicknames: base.nicknames.clone(),
        side: base.side,
    };

    let front = CardRow {
        identifier: format!("{}F", base.identifier),
        collector_code: format!("{}F", base.collector_code),
        wiki_url: wiki_url(&front_display),
        display_name: front_display,
        ..base
    };

    vec![front, back]
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardlink_data::cards::parse_catalog;
    use cardlink_data::sets::SetRegistry;

    const SAMPLE_SETS: &str = r#"[
        {"id": "1", "name": "Premiere", "abbr": "PR"},
        {"id": "9", "name": "Death Star II", "abbr": "DS2"},
        {"id": "210", "name": "Set 10", "abbr": "V10"},
        {"id": "200d", "name": "Virtual Defensive Shields", "abbr": "VS"}
    ]"#;

    fn registry() -> SetRegistry {
        SetRegistry::from_reader(SAMPLE_SETS.as_bytes()).unwrap()
    }

    fn card(json: &str) -> RawCard {
        parse_catalog(format!(r#"{{"cards": [{json}]}}"#).as_bytes())
            .unwrap()
            .cards
            .remove(0)
    }

    #[test]
    fn basic_normalization() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 20, "side": "Light", "set": "1", "rarity": "R1", "gempId": "1_20",
                "front": {"title": "•Obi-Wan Kenobi, Jedi Knight",
                          "imageUrl": "https://img.test/1_20.png"}}"#,
        );

        let rows = normalizer.normalize(&raw).unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.identifier, "20");
        assert_eq!(row.collector_code, "PRR1020");
        assert_eq!(row.title, "Obi-Wan Kenobi");
        assert_eq!(row.subtitle, "Jedi Knight");
        assert_eq!(row.title_suffix, "");
        assert!(row.nicknames.contains(&"General Kenobi".to_string()));
        assert!(row.nicknames.contains(&"Hello There".to_string()));
        assert!(row.wiki_url.starts_with(WIKI_SEARCH_URL));
    }

    #[test]
    fn virtual_set_gains_marker() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 3, "side": "Dark", "set": "210", "rarity": "V", "gempId": "210_3",
                "front": {"title": "Elis Helrot", "imageUrl": "https://img.test/210_3.png"}}"#,
        );

        let row = &normalizer.normalize(&raw).unwrap()[0];
        assert_eq!(row.display_name, "Elis Helrot (V)");
        assert_eq!(row.title_suffix, "(V)");
        assert_eq!(row.title, "Elis Helrot");
        assert_eq!(row.collector_code, "V10V003");
    }

    #[test]
    fn virtual_alias_maps_to_range() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 1, "side": "Dark", "set": "200d", "rarity": "V", "gempId": "200d_1",
                "front": {"title": "Battle Order", "imageUrl": "https://img.test/200d_1.png"}}"#,
        );

        let row = &normalizer.normalize(&raw).unwrap()[0];
        assert_eq!(row.display_name, "Battle Order (V)");
        assert_eq!(row.title_suffix, "(V)");
    }

    #[test]
    fn existing_marker_is_not_doubled() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 7, "side": "Dark", "set": "210", "rarity": "V", "gempId": "210_7",
                "front": {"title": "Evacuation Control (V)", "imageUrl": "https://img.test/x.png"}}"#,
        );

        let row = &normalizer.normalize(&raw).unwrap()[0];
        assert_eq!(row.display_name, "Evacuation Control (V)");
    }

    #[test]
    fn ai_marker_feeds_code_and_suffix() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 12, "side": "Dark", "set": "1", "rarity": "C2", "gempId": "1_242",
                "front": {"title": "Vader's Eye (AI)", "imageUrl": "https://img.test/x.png"}}"#,
        );

        let row = &normalizer.normalize(&raw).unwrap()[0];
        assert_eq!(row.collector_code, "PRC2242AI");
        assert_eq!(row.title_suffix, "(AI)");
        assert_eq!(row.title, "Vader's Eye");
    }

    #[test]
    fn oai_marker_feeds_code_but_not_suffix() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 30, "side": "Dark", "set": "1", "rarity": "C2", "gempId": "1_300",
                "front": {"title": "Imperial Justice (OAI)", "imageUrl": ""}}"#,
        );

        let row = &normalizer.normalize(&raw).unwrap()[0];
        assert_eq!(row.collector_code, "PRC2300OAI");
        // "(OAI)" is not a title suffix — only "(AI)" and "(V)" are.
        assert_eq!(row.title_suffix, "");
    }

    #[test]
    fn ai_and_oai_markers_both_apply() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 31, "side": "Dark", "set": "1", "rarity": "C2", "gempId": "1_301",
                "front": {"title": "Overwhelmed (AI) (OAI)", "imageUrl": ""}}"#,
        );

        let row = &normalizer.normalize(&raw).unwrap()[0];
        assert_eq!(row.collector_code, "PRC2301AIOAI");
        assert_eq!(row.title_suffix, "(AI)");
    }

    #[test]
    fn unknown_set_is_fatal() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 1, "side": "Light", "set": "77", "rarity": "C", "gempId": "77_1",
                "front": {"title": "Lost Card", "imageUrl": ""}}"#,
        );

        assert!(matches!(
            normalizer.normalize(&raw),
            Err(CatalogError::UnknownSet { .. })
        ));
    }

    #[test]
    fn angle_marker_becomes_diamond() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 4, "side": "Dark", "set": "9", "rarity": "U", "gempId": "9_4",
                "front": {"title": "<>Endor Operations", "imageUrl": ""}}"#,
        );

        let row = &normalizer.normalize(&raw).unwrap()[0];
        assert_eq!(row.display_name, "\u{25C7}Endor Operations");
        assert_eq!(row.title, "Endor Operations");
    }

    #[test]
    fn double_sided_swaps_faces() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 9, "side": "Light", "set": "9", "rarity": "R", "gempId": "9_9",
                "front": {"title": "I Feel The Conflict / Sense The Future",
                          "imageUrl": "https://img.test/front.png"},
                "back": {"title": "Sense The Future",
                         "imageUrl": "https://img.test/back.png"}}"#,
        );

        let rows = normalizer.normalize(&raw).unwrap();
        assert_eq!(rows.len(), 2);

        let (front, back) = (&rows[0], &rows[1]);
        assert_eq!(front.identifier, "9F");
        assert_eq!(back.identifier, "9B");
        assert_eq!(front.collector_code, "DS2R009F");
        assert_eq!(back.collector_code, "DS2R009B");
        assert_eq!(front.title, "I Feel The Conflict");
        assert_eq!(front.subtitle, "Sense The Future");
        assert_eq!(back.title, "Sense The Future");
        assert_eq!(back.subtitle, "I Feel The Conflict");
        assert_eq!(back.image_url, "https://img.test/back.png");
        assert_eq!(
            back.display_name,
            "Sense The Future / I Feel The Conflict"
        );
    }

    #[test]
    fn same_name_double_sided_tags_faces() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 77, "side": "Light", "set": "9", "rarity": "R", "gempId": "9_77",
                "front": {"title": "•The Falcon, Junkyard Garbage/•The Falcon, Junkyard Garbage",
                          "imageUrl": "https://img.test/front.png"},
                "back": {"title": "•The Falcon, Junkyard Garbage",
                         "imageUrl": "https://img.test/back.png"}}"#,
        );

        let rows = normalizer.normalize(&raw).unwrap();
        assert_eq!(rows.len(), 2);

        let (front, back) = (&rows[0], &rows[1]);
        assert!(front.display_name.ends_with("(Front)"));
        assert!(back.display_name.ends_with("(Back)"));
        // Faces are NOT swapped for same-named cards.
        assert_eq!(front.title, "The Falcon");
        assert_eq!(front.subtitle, "Junkyard Garbage");
        assert_eq!(back.title, "The Falcon");
        assert_eq!(back.subtitle, "Junkyard Garbage");
    }

    #[test]
    fn supplied_alternates_become_nicknames() {
        let sets = registry();
        let normalizer = Normalizer::new(&sets);
        let raw = card(
            r#"{"id": 7, "side": "Dark", "set": "210", "rarity": "V", "gempId": "210_7",
                "front": {"title": "Evacuation Control (V)", "imageUrl": ""},
                "abbr": ["Evac Control", "EC"]}"#,
        );

        let row = &normalizer.normalize(&raw).unwrap()[0];
        assert!(row.nicknames.contains(&"Evac Control".to_string()));
        // Pure abbreviations are filtered.
        assert!(!row.nicknames.contains(&"EC".to_string()));
        // Display name always seeds the list.
        assert_eq!(row.nicknames[0], "Evacuation Control (V)");
    }
}
