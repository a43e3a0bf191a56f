//! Table columns that can be sorted.

/// A sortable column of the product table.
///
/// Declaration order is the on-screen column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Product identity (numeric).
    Id,
    /// Product name.
    Name,
    /// Title of the product's category.
    Category,
    /// Display name of the category's owner.
    User,
}

impl SortKey {
    /// All columns in on-screen order.
    pub const ALL: [SortKey; 4] = [SortKey::Id, SortKey::Name, SortKey::Category, SortKey::User];

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Name => "Product",
            SortKey::Category => "Category",
            SortKey::User => "User",
        }
    }

    /// Parse a config/CLI column name (`id`, `name`, `category`, `user`).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "id" => Some(SortKey::Id),
            "name" | "product" => Some(SortKey::Name),
            "category" => Some(SortKey::Category),
            "user" => Some(SortKey::User),
            _ => None,
        }
    }
}
