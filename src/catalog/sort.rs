//! Sort engine: type-aware, stable column ordering.

use crate::model::{EnrichedProduct, SortKey};
use crate::state::{SortDirection, SortState};
use icu_collator::{Collator, CollatorOptions, Strength};
use std::cmp::Ordering;
use tracing::warn;

thread_local! {
    /// Root-locale collator at tertiary strength, built once per thread.
    static COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    Collator::try_new(&Default::default(), options)
        .inspect_err(|e| warn!(error = ?e, "collator unavailable, falling back to code point order"))
        .ok()
}

/// Compare two strings with the Unicode root collation (CLDR defaults).
///
/// Base letters decide first, so accents and case do not move a word
/// across the alphabet (`"café" < "cafz"`, `"Éclair" < "Fudge"`).
/// Punctuation sorts before digits, digits before letters. Accents break
/// ties before case does, and lower-case sorts first
/// (`"apple" < "Apple" < "banana"`).
pub fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}

/// Compare two rows on one column, ascending.
pub fn compare_by(key: SortKey, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    match key {
        SortKey::Id => a.id().get().cmp(&b.id().get()),
        SortKey::Name => collate(a.name(), b.name()),
        SortKey::Category => collate(&a.category().title, &b.category().title),
        SortKey::User => collate(&a.user().name, &b.user().name),
    }
}

/// Order `rows` by `state`.
///
/// Unsorted state returns `rows` untouched. Descending reverses the
/// comparator rather than the output, and `sort_by` is stable, so equal keys
/// keep their input order in both directions.
pub fn sort(mut rows: Vec<&EnrichedProduct>, state: SortState) -> Vec<&EnrichedProduct> {
    let (Some(key), Some(direction)) = (state.key(), state.direction()) else {
        return rows;
    };

    rows.sort_by(|a, b| {
        let ordering = compare_by(key, a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    rows
}
