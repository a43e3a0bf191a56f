//! Filter pipeline: owner, name search and category predicates.
//!
//! The three predicates are independent and combine with logical AND, so
//! their order of application never changes the result.

use crate::model::EnrichedProduct;
use crate::state::FilterState;

/// Owner predicate: passes when no owner is selected or the product's
/// resolved owner is the selected one.
pub fn matches_owner(product: &EnrichedProduct, state: &FilterState) -> bool {
    state
        .owner()
        .is_none_or(|owner| product.user_id() == owner)
}

/// Search predicate: case-insensitive substring match on the product name.
/// An empty search term always passes.
pub fn matches_search(product: &EnrichedProduct, state: &FilterState) -> bool {
    let term = state.search();
    if term.is_empty() {
        return true;
    }
    product.name().to_lowercase().contains(&term.to_lowercase())
}

/// Category predicate: passes when no categories are selected or the
/// product's category is one of them.
pub fn matches_categories(product: &EnrichedProduct, state: &FilterState) -> bool {
    state.all_categories_selected() || state.is_category_selected(product.category_id())
}

/// All three predicates combined.
pub fn matches(product: &EnrichedProduct, state: &FilterState) -> bool {
    matches_owner(product, state)
        && matches_search(product, state)
        && matches_categories(product, state)
}

/// Lazily filter `products`, preserving their relative order.
///
/// Yielded rows borrow from `products` only, so they outlive `state`.
pub fn filter<'a, 's>(
    products: &'a [EnrichedProduct],
    state: &'s FilterState,
) -> impl Iterator<Item = &'a EnrichedProduct> + 's
where
    'a: 's,
{
    products.iter().filter(move |p| matches(p, state))
}
