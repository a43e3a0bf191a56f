//! Catalog pipeline (pure): join → filter → sort.
//!
//! The joiner runs once at load. The filter and sort stages run on every
//! state change through [`derive`]; nothing is cached between runs.

mod filter;
mod join;
mod sort;
#[cfg(test)]
pub(crate) mod test_support;
mod view;

pub use filter::{filter, matches, matches_categories, matches_owner, matches_search};
pub use join::join;
pub use sort::{collate, compare_by, sort};
pub use view::{derive, sort_indicator, DerivedView};

use crate::model::{Category, EnrichedProduct, User};

/// The joined, read-only catalog.
///
/// Built once by [`join`] and borrowed by every derivation afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<EnrichedProduct>,
}

impl Catalog {
    /// All users in fixture order (the owner tabs).
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All categories in fixture order (the category chips).
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Joined products in fixture order.
    pub fn products(&self) -> &[EnrichedProduct] {
        &self.products
    }
}
