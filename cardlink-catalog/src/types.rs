//! The flat tabular row entity the pipeline produces.

use cardlink_core::Side;

/// One emitted row of the output table.
///
/// Created once per source card (twice for double-sided cards), mutated only
/// during collision resolution (display-name prefixing), then emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRow {
    /// Source id, suffixed "F"/"B" when the card is double-sided.
    pub identifier: String,
    pub image_url: String,
    pub wiki_url: String,
    /// `abbr + rarity + zero-padded(3) number [+ "AI"|"OAI"] [+ "F"|"B"]`.
    pub collector_code: String,
    /// Human-readable name. May gain a side prefix during collision
    /// resolution, and "(Front)"/"(Back)" tags for same-named dual faces.
    pub display_name: String,
    /// Always non-empty.
    pub title: String,
    /// May be empty.
    pub subtitle: String,
    /// One of "", "(AI)", "(V)". AI takes precedence.
    pub title_suffix: String,
    /// Alternate lookup strings, in generation order. Matching strategy is
    /// the consumer's concern; duplicates across rows are tolerated.
    pub nicknames: Vec<String>,
    /// Which pool the card belongs to; drives collision disambiguation.
    pub side: Side,
}

impl CardRow {
    /// Composite key for exact-duplicate detection. Uses the display name
    /// as it stood at registration time — collision prefixes applied later
    /// don't retroactively change identity.
    pub fn composite_key(&self) -> String {
        format!(
            "{}{}{}",
            self.identifier, self.collector_code, self.display_name
        )
    }

    /// Collision-bucket key: title and subtitle concatenated. The lack of a
    /// delimiter is an accepted ambiguity — two different splits can map to
    /// the same bucket, which only ever widens disambiguation.
    pub fn collision_key(&self) -> String {
        format!("{}{}", self.title, self.subtitle)
    }
}
