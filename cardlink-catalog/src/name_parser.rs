//! Parser for card title conventions.
//!
//! Card titles encode metadata in-band:
//! ```text
//! •Obi-Wan Kenobi, Jedi Knight
//! Malachor: Sith Temple Upper Chamber
//! •The Falcon, Junkyard Garbage/•The Falcon, Junkyard Garbage
//! Evacuation Control (V)
//! ```
//!
//! This module extracts the clean working title, splits composite titles
//! into title/subtitle pairs, and parses dual-face display names. All
//! functions here are pure; the ambiguity of the heuristics is documented
//! where it applies.

/// Uniqueness-bullet glyph carried by many card titles.
pub const BULLET: &str = "\u{2022}";

/// Angle-bracket marker substituted with a diamond glyph for display.
pub const ANGLE_MARKER: &str = "<>";

/// Diamond glyph used in place of the angle-bracket marker.
pub const DIAMOND: &str = "\u{25C7}";

/// Virtual-card marker, stripped for splitting logic.
pub const VIRTUAL_MARKER: &str = " (V)";

/// AI-card marker, stripped for splitting logic.
pub const AI_MARKER: &str = " (AI)";

/// Strip display-only glyphs and variant markers to produce the clean
/// working title the splitting heuristics operate on.
///
/// # Examples
///
/// ```
/// use cardlink_catalog::name_parser::clean_title;
///
/// assert_eq!(clean_title("\u{2022}Luke Skywalker (V)"), "Luke Skywalker");
/// assert_eq!(clean_title("<>Tatooine (AI)"), "Tatooine");
/// ```
pub fn clean_title(raw: &str) -> String {
    raw.replace(BULLET, "")
        .replace(VIRTUAL_MARKER, "")
        .replace(AI_MARKER, "")
        .replace(ANGLE_MARKER, "")
        .trim()
        .to_string()
}

/// Result of splitting a clean working title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitTitle {
    /// Always non-empty (falls back to the whole input).
    pub title: String,
    /// Empty when no heuristic fired.
    pub subtitle: String,
    /// The raw title contained a "/" — two physical faces, one card.
    pub double_sided: bool,
    /// Both "/" halves were equal after trimming: a same-named
    /// double-sided card.
    pub same_name: bool,
}

/// Split a clean working title into title/subtitle.
///
/// Separator rules, in order:
/// - `/` means two faces of one physical card. Equal halves (after trim)
///   flag `same_name`; differing halves become title/subtitle and flag
///   `double_sided`.
/// - `&` splits the same way but does NOT imply a physical second face.
/// - A title with exactly one comma splits on it; two or more commas are
///   treated as an enumeration and left atomic.
/// - Otherwise a colon splits on its first occurrence.
/// - Otherwise an open parenthesis splits on its first occurrence, with
///   the trailing `)` stripped. This deliberately also fires on
///   parentheticals that are not true subtitles (e.g., a location
///   qualifier); only the auxiliary subtitle field is affected.
pub fn split_title(clean: &str) -> SplitTitle {
    let mut split = SplitTitle {
        title: clean.trim().to_string(),
        subtitle: String::new(),
        double_sided: false,
        same_name: false,
    };

    if let Some((left, right)) = clean.split_once('/') {
        let (left, right) = (left.trim(), right.trim());
        if left == right {
            split.title = left.to_string();
            split.double_sided = true;
            split.same_name = true;
        } else {
            split.title = left.to_string();
            split.subtitle = right.to_string();
            split.double_sided = true;
        }
    } else if let Some((left, right)) = clean.split_once('&') {
        let (left, right) = (left.trim(), right.trim());
        if left != right {
            split.title = left.to_string();
            split.subtitle = right.to_string();
        }
    }

    if split.subtitle.is_empty() {
        extract_subtitle(&mut split);
    }

    // Title must never end up empty, whatever the separators did. A name
    // with nothing left of its separator falls back to the unsplit input,
    // and no second face can be derived from it.
    if split.title.is_empty() {
        split.title = clean.trim().to_string();
        split.subtitle = String::new();
        split.double_sided = false;
        split.same_name = false;
    }

    split
}

/// Single-title subtitle extraction: comma (exactly one), then colon, then
/// parenthesis. Mutates `split` in place; runs only when no separator rule
/// already produced a subtitle.
fn extract_subtitle(split: &mut SplitTitle) {
    let title = split.title.clone();

    if title.matches(',').count() == 1 {
        if let Some((head, tail)) = title.split_once(',') {
            split.title = head.trim().to_string();
            split.subtitle = tail.trim().to_string();
        }
    } else if title.contains(':') {
        if let Some((head, tail)) = title.split_once(':') {
            split.title = head.trim().to_string();
            split.subtitle = tail.trim().to_string();
        }
    } else if title.contains('(') {
        if let Some((head, tail)) = title.split_once('(') {
            split.title = head.trim().to_string();
            split.subtitle = tail.trim().trim_end_matches(')').trim().to_string();
        }
    }

    // Title must never end up empty; a leading separator collapses back.
    if split.title.is_empty() {
        split.title = title.trim().to_string();
        split.subtitle = String::new();
    }
}

/// A dual-face display name parsed into its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualName {
    pub left: String,
    pub right: String,
    /// Trailing variant marker applying to the whole card, if any.
    pub suffix: Option<String>,
}

/// Known trailing markers treated as whole-card suffixes by
/// [`parse_dual_name`].
const DUAL_SUFFIXES: &[&str] = &["(V)", "(AI)", "(OAI)"];

/// Parse a raw display name of the form `left / right (suffix)?`.
///
/// Used to re-derive per-face display names for double-sided cards. The
/// trailing parenthetical is only taken as a suffix when it is a known
/// variant marker — anything else stays part of the right face's name.
/// Returns `None` when the name has no `/`; callers fall back to the
/// unsplit name.
pub fn parse_dual_name(raw: &str) -> Option<DualName> {
    let (left, rest) = raw.split_once('/')?;
    let mut right = rest.trim();
    let mut suffix = None;

    for marker in DUAL_SUFFIXES {
        if let Some(stripped) = right.strip_suffix(marker) {
            right = stripped.trim_end();
            suffix = Some((*marker).to_string());
            break;
        }
    }

    Some(DualName {
        left: left.trim().to_string(),
        right: right.to_string(),
        suffix,
    })
}

/// Derive the title suffix from a (virtual-tagged) display name.
///
/// "(AI)" takes precedence over "(V)" when both could apply.
pub fn title_suffix(display: &str) -> &'static str {
    if display.contains("(AI)") {
        "(AI)"
    } else if display.contains("(V)") {
        "(V)"
    } else {
        ""
    }
}
