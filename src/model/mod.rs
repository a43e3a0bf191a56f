//! Domain model types (pure).
//!
//! All types in this module are pure data. Nothing here performs I/O.

pub mod column;
pub mod enriched;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod records;

// Re-export for convenience
pub use column::SortKey;
pub use enriched::EnrichedProduct;
pub use error::{AppError, DataIntegrityError, InputError};
pub use identifiers::{CategoryId, ProductId, UserId};
pub use key_action::KeyAction;
pub use records::{Category, Product, RawCatalog, Sex, User};
