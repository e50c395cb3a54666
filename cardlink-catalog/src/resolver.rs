//! The identity resolver.
//!
//! Owns the run-scoped registries: the composite-key map used for
//! exact-duplicate detection ("first write wins") and the collision buckets
//! used to disambiguate titles that appear on both sides. State is owned by
//! the resolver and threaded explicitly through a run — nothing lives at
//! module scope.

use std::collections::HashMap;

use cardlink_core::Side;

use crate::types::CardRow;

/// Outcome of registering a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Accepted,
    /// An identical composite key was already registered; the incoming row
    /// was dropped and the first-seen row kept.
    Duplicate,
}

/// Per-collision-key row indices, partitioned by side.
#[derive(Debug, Default)]
struct Bucket {
    light: Vec<usize>,
    dark: Vec<usize>,
}

impl Bucket {
    fn for_side(&mut self, side: Side) -> Option<&mut Vec<usize>> {
        match side {
            Side::Light => Some(&mut self.light),
            Side::Dark => Some(&mut self.dark),
            // Unknown-side rows can't participate in cross-side
            // disambiguation.
            Side::Unknown => None,
        }
    }

    fn is_cross_side(&self) -> bool {
        !self.light.is_empty() && !self.dark.is_empty()
    }
}

/// Accumulates accepted rows in insertion order, detecting duplicates and
/// collecting collision buckets along the way.
#[derive(Debug, Default)]
pub struct Resolver {
    rows: Vec<CardRow>,
    known: HashMap<String, usize>,
    buckets: HashMap<String, Bucket>,
    duplicates: usize,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a normalized row.
    ///
    /// A row whose composite key (identifier + collector code + display
    /// name) is already present is dropped with a diagnostic naming both
    /// entries; the run continues. First-registered wins, which makes the
    /// caller's input-file ordering an explicit part of the contract.
    pub fn register(&mut self, row: CardRow) -> RegisterOutcome {
        let key = row.composite_key();
        if let Some(&existing_idx) = self.known.get(&key) {
            let existing = &self.rows[existing_idx];
            log::warn!(
                "Duplicate identifier: dropping {} '{}' ({}); keeping {} '{}' ({})",
                row.identifier,
                row.display_name,
                row.collector_code,
                existing.identifier,
                existing.display_name,
                existing.collector_code,
            );
            self.duplicates += 1;
            return RegisterOutcome::Duplicate;
        }

        let idx = self.rows.len();
        let collision_key = row.collision_key();
        if let Some(per_side) = self
            .buckets
            .entry(collision_key)
            .or_default()
            .for_side(row.side)
        {
            per_side.push(idx);
        }
        self.known.insert(key, idx);
        self.rows.push(row);
        RegisterOutcome::Accepted
    }

    /// Number of accepted rows so far.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of dropped duplicate rows so far.
    pub fn duplicate_count(&self) -> usize {
        self.duplicates
    }

    /// Apply cross-side disambiguation and return all accepted rows in
    /// insertion order.
    ///
    /// Every bucket populated on both sides has all its rows (both sides)
    /// rewritten with the side's bracket tag; buckets confined to one side
    /// stay unprefixed so the common case carries no visual noise.
    pub fn finish(mut self) -> Vec<CardRow> {
        for bucket in self.buckets.values() {
            if !bucket.is_cross_side() {
                continue;
            }
            for &idx in bucket.light.iter().chain(bucket.dark.iter()) {
                let row = &mut self.rows[idx];
                row.display_name =
                    format!("{} {}", row.side.bracket_tag(), row.display_name);
            }
        }
        self.rows
    }
}
