//! Tri-state column sorting.
//!
//! SortState is either unsorted or exactly one (column, direction) pair.
//! "Direction is none iff key is none" holds by construction: there is no
//! way to build a key without a direction or a direction without a key.

use crate::model::SortKey;

// ===== SortDirection =====

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

// ===== SortIndicator =====

/// Per-column header indicator shown to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// This column is not the active sort column.
    Unsorted,
    /// Active, ascending.
    Ascending,
    /// Active, descending.
    Descending,
}

// ===== SortState =====

/// Current sort selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortState(Option<(SortKey, SortDirection)>);

impl SortState {
    /// No sorting: rows keep their filtered order.
    pub const UNSORTED: SortState = SortState(None);

    /// Sort by `key` in `direction`.
    pub const fn by(key: SortKey, direction: SortDirection) -> Self {
        Self(Some((key, direction)))
    }

    /// Active column, if any.
    pub fn key(self) -> Option<SortKey> {
        self.0.map(|(key, _)| key)
    }

    /// Active direction, if any. `None` exactly when [`key`](Self::key) is `None`.
    pub fn direction(self) -> Option<SortDirection> {
        self.0.map(|(_, direction)| direction)
    }

    /// True when no column is active.
    pub fn is_unsorted(self) -> bool {
        self.0.is_none()
    }

    /// Apply a press on column `pressed`.
    ///
    /// ```text
    /// none          --k--> (k, asc)
    /// (k, asc)      --k--> (k, desc)
    /// (k, desc)     --k--> none
    /// (j != k, any) --k--> (k, asc)
    /// ```
    pub fn toggle(self, pressed: SortKey) -> Self {
        match self.0 {
            Some((key, SortDirection::Asc)) if key == pressed => {
                Self::by(pressed, SortDirection::Desc)
            }
            Some((key, SortDirection::Desc)) if key == pressed => Self::UNSORTED,
            _ => Self::by(pressed, SortDirection::Asc),
        }
    }

    /// Header indicator for `column`.
    pub fn indicator(self, column: SortKey) -> SortIndicator {
        match self.0 {
            Some((key, SortDirection::Asc)) if key == column => SortIndicator::Ascending,
            Some((key, SortDirection::Desc)) if key == column => SortIndicator::Descending,
            _ => SortIndicator::Unsorted,
        }
    }
}
