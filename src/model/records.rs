//! Raw catalog records as they arrive from the data source.
//!
//! These are immutable once loaded. References between records are plain
//! identifiers; resolving them is the joiner's job.

use super::identifiers::{CategoryId, ProductId, UserId};
use serde::{Deserialize, Serialize};

/// Sex marker of a user, used only for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Serialized as `"m"`.
    #[serde(rename = "m")]
    Male,
    /// Serialized as `"f"`.
    #[serde(rename = "f")]
    Female,
}

/// A catalog user. Users own categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identity.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Sex marker.
    pub sex: Sex,
}

/// A product category, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Identity.
    pub id: CategoryId,
    /// Human-readable title.
    pub title: String,
    /// Icon glyph shown next to the title (usually an emoji).
    pub icon: String,
    /// Owning user.
    pub owner_id: UserId,
}

/// A product, belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Identity.
    pub id: ProductId,
    /// Product name, the target of free-text search.
    pub name: String,
    /// Category this product is listed under.
    pub category_id: CategoryId,
}

/// The three record sets exactly as loaded, before any joining.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCatalog {
    /// All users, in fixture order.
    pub users: Vec<User>,
    /// All categories, in fixture order.
    pub categories: Vec<Category>,
    /// All products, in fixture order.
    pub products: Vec<Product>,
}
