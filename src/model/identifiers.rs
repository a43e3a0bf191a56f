//! Record identifier newtypes.
//!
//! Each record kind gets its own identifier type so a category id can never
//! be compared against a user id by accident. Identifiers are plain numbers
//! on the wire (`serde(transparent)`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a [`User`](crate::model::User).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Wrap a raw numeric id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a [`Category`](crate::model::Category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(u32);

impl CategoryId {
    /// Wrap a raw numeric id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity of a [`Product`](crate::model::Product).
///
/// This is the only identifier that is also a sortable column, so its
/// ordering is the numeric ordering of the raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Wrap a raw numeric id.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
