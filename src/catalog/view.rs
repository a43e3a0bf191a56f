//! Derived view: filter then sort, recomputed on demand.

use super::{filter, sort, Catalog};
use crate::model::{EnrichedProduct, SortKey};
use crate::state::{SortIndicator, SortState, ViewState};
use tracing::trace;

/// Rows to display, or the empty-result condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivedView<'a> {
    /// At least one product matched, in display order.
    Rows(Vec<&'a EnrichedProduct>),
    /// The filters matched nothing. Not an error.
    NoMatches,
}

impl<'a> DerivedView<'a> {
    /// Displayed rows; empty for [`DerivedView::NoMatches`].
    pub fn rows(&self) -> &[&'a EnrichedProduct] {
        match self {
            DerivedView::Rows(rows) => rows,
            DerivedView::NoMatches => &[],
        }
    }

    /// Number of displayed rows.
    pub fn len(&self) -> usize {
        self.rows().len()
    }

    /// True for [`DerivedView::NoMatches`].
    pub fn is_empty(&self) -> bool {
        matches!(self, DerivedView::NoMatches)
    }
}

/// `sort(filter(products, state.filter), state.sort)`.
///
/// Pure: calling it twice with the same arguments gives the same rows.
pub fn derive<'a>(catalog: &'a Catalog, state: &ViewState) -> DerivedView<'a> {
    let filtered: Vec<&EnrichedProduct> = filter(catalog.products(), &state.filter).collect();
    let rows = sort(filtered, state.sort);

    trace!(
        rows = rows.len(),
        total = catalog.products().len(),
        "derived view"
    );

    if rows.is_empty() {
        DerivedView::NoMatches
    } else {
        DerivedView::Rows(rows)
    }
}

/// Header indicator for `column` under `sort`.
pub fn sort_indicator(sort: &SortState, column: SortKey) -> SortIndicator {
    sort.indicator(column)
}
