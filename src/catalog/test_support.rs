//! Shared record builders for catalog unit tests.

use super::{join, Catalog};
use crate::model::{Category, CategoryId, Product, ProductId, RawCatalog, Sex, User, UserId};

pub(crate) fn user(id: u32, name: &str, sex: Sex) -> User {
    User {
        id: UserId::new(id),
        name: name.to_string(),
        sex,
    }
}

pub(crate) fn category(id: u32, title: &str, owner: u32) -> Category {
    Category {
        id: CategoryId::new(id),
        title: title.to_string(),
        icon: "*".to_string(),
        owner_id: UserId::new(owner),
    }
}

pub(crate) fn product(id: u32, name: &str, category: u32) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category_id: CategoryId::new(category),
    }
}

/// Two products, two categories, two owners.
pub(crate) fn two_fruits_raw() -> RawCatalog {
    RawCatalog {
        users: vec![user(100, "Max", Sex::Male), user(200, "Ann", Sex::Female)],
        categories: vec![category(10, "Fruit", 100), category(20, "Fruit2", 200)],
        products: vec![product(1, "Apple", 10), product(2, "Banana", 20)],
    }
}

pub(crate) fn two_fruits() -> Catalog {
    join(two_fruits_raw()).unwrap()
}

pub(crate) fn ids<'a>(rows: impl IntoIterator<Item = &'a crate::model::EnrichedProduct>) -> Vec<u32> {
    rows.into_iter().map(|p| p.id().get()).collect()
}
