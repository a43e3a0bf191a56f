//! Data joiner: attach each product's category and that category's owner.

use super::Catalog;
use crate::model::{
    Category, CategoryId, DataIntegrityError, EnrichedProduct, RawCatalog, User, UserId,
};
use std::collections::HashMap;
use tracing::{error, info};

/// Join the three raw record sets into a [`Catalog`].
///
/// Output products keep fixture order. Only references reachable from a
/// product are resolved: a category nobody lists products under is carried
/// through as-is.
///
/// # Errors
///
/// Returns the first [`DataIntegrityError`] encountered, in product order.
pub fn join(raw: RawCatalog) -> Result<Catalog, DataIntegrityError> {
    let RawCatalog {
        users,
        categories,
        products,
    } = raw;

    let users_by_id: HashMap<UserId, &User> = users.iter().map(|u| (u.id, u)).collect();

    let categories_by_id: HashMap<CategoryId, &Category> =
        categories.iter().map(|c| (c.id, c)).collect();

    let mut enriched = Vec::with_capacity(products.len());
    for product in products {
        let Some(category) = categories_by_id.get(&product.category_id) else {
            let err = DataIntegrityError::UnknownCategory {
                product: product.id,
                category: product.category_id,
            };
            error!(%err, "catalog join failed");
            return Err(err);
        };
        let Some(user) = users_by_id.get(&category.owner_id) else {
            let err = DataIntegrityError::UnknownOwner {
                category: category.id,
                owner: category.owner_id,
            };
            error!(%err, "catalog join failed");
            return Err(err);
        };
        enriched.push(EnrichedProduct::new(
            product,
            Category::clone(category),
            User::clone(user),
        ));
    }

    info!(
        users = users.len(),
        categories = categories.len(),
        products = enriched.len(),
        "catalog joined"
    );

    Ok(Catalog {
        users,
        categories,
        products: enriched,
    })
}
