//! Nickname generation helpers.
//!
//! Every row's nickname list is seeded with its display name, extended with
//! cleaned-up supplied alternates, and finally passed through a closed,
//! data-driven bonus table keyed by substring match on the title.

use cardlink_core::util::is_all_uppercase;

/// Bonus nicknames injected by substring match on the clean title.
///
/// A closed, hard-coded list — not a pattern system. Ordered; each matching
/// pattern contributes its entries, skipping ones already present.
pub const BONUS_NICKNAMES: &[(&str, &[&str])] = &[
    ("Obi-Wan", &["Obi-Wan", "Kenobi", "General Kenobi", "Hello There"]),
    ("Kenobi", &["Obi-Wan", "Kenobi", "General Kenobi", "Hello There"]),
];

/// Clean a supplied alternate name for use as a nickname.
///
/// Strips a trailing single-letter virtual marker ("... V"), collapses
/// embedded "(V)" markers, and rejects alternates that are entirely
/// upper-case — those are pure abbreviations the consumer handles on its
/// own. Returns `None` when nothing usable remains.
pub fn clean_alternate(alt: &str) -> Option<String> {
    let collapsed = alt.replace(" (V)", "").replace("(V)", "");
    let mut cleaned = collapsed.trim();
    if let Some(stripped) = cleaned.strip_suffix(" V").or_else(|| cleaned.strip_suffix(" v")) {
        cleaned = stripped.trim_end();
    }

    if cleaned.is_empty() || is_all_uppercase(cleaned) {
        return None;
    }
    Some(cleaned.to_string())
}

/// Apply the bonus-nickname table for `title`, appending entries not
/// already present in `nicknames`.
pub fn apply_bonus_nicknames(title: &str, nicknames: &mut Vec<String>) {
    for (pattern, extras) in BONUS_NICKNAMES {
        if !title.contains(pattern) {
            continue;
        }
        for extra in *extras {
            if !nicknames.iter().any(|n| n == extra) {
                nicknames.push((*extra).to_string());
            }
        }
    }
}
