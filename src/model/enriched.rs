//! Denormalized product rows.

use super::identifiers::{CategoryId, ProductId, UserId};
use super::records::{Category, Product, User};

/// A product joined with its resolved category and that category's owner.
///
/// Only the joiner constructs these, and only after both references have
/// resolved, so a value of this type never carries a dangling reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedProduct {
    product: Product,
    category: Category,
    user: User,
}

impl EnrichedProduct {
    pub(crate) fn new(product: Product, category: Category, user: User) -> Self {
        debug_assert_eq!(product.category_id, category.id);
        debug_assert_eq!(category.owner_id, user.id);
        Self {
            product,
            category,
            user,
        }
    }

    /// Product identity.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Product name.
    pub fn name(&self) -> &str {
        &self.product.name
    }

    /// The underlying product record.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// The resolved category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The resolved owner of the category.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Shorthand for `self.category().id`.
    pub fn category_id(&self) -> CategoryId {
        self.category.id
    }

    /// Shorthand for `self.user().id`.
    pub fn user_id(&self) -> UserId {
        self.user.id
    }
}
