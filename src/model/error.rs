//! Error types for the catalog viewer.
//!
//! Errors are layered with `thiserror` and compose via `?` and `From`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for loading and running the viewer
//!   - [`InputError`] - Fixture file could not be read or decoded
//!   - [`DataIntegrityError`] - A product or category references a record that does not exist
//!   - [`ConfigError`] - Config file exists but is unreadable or invalid
//!   - [`LoggingError`] - Log file location is unusable
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! # Recovery Strategy
//!
//! Every variant here is fatal and load-time only. Once the catalog is joined,
//! filtering, sorting and state transitions are total functions and cannot fail.
//! An empty filter result is not an error at all; it is reported as
//! [`DerivedView::NoMatches`](crate::catalog::DerivedView::NoMatches).

use super::identifiers::{CategoryId, ProductId, UserId};
use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// # Examples
///
/// ```no_run
/// use prodcat::model::error::{AppError, InputError};
///
/// fn start() -> Result<(), AppError> {
///     // InputError converts to AppError via From
///     let _raw = load_fixture()?;
///     Ok(())
/// }
/// # fn load_fixture() -> Result<(), InputError> { Ok(()) }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the catalog fixture.
    #[error("Failed to read catalog data: {0}")]
    Input(#[from] InputError),

    /// The fixture violates referential integrity.
    ///
    /// The fixture contract is closed and trusted, so there is no recovery:
    /// initialization aborts.
    #[error("Catalog data is inconsistent: {0}")]
    DataIntegrity(#[from] DataIntegrityError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// **Recovery**: restore the terminal, print to stderr, exit non-zero.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the catalog fixture from disk.
///
/// The embedded fixture cannot produce [`InputError::FileNotFound`] or
/// [`InputError::Io`]; it can only be malformed if the binary was built from
/// a broken fixture, which the test suite guards against.
#[derive(Debug, Error)]
pub enum InputError {
    /// The data file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use prodcat::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing.json"),
    /// };
    /// assert!(err.to_string().contains("/tmp/missing.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The data file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data is not a valid catalog document.
    #[error("Malformed catalog data in {origin}: {reason}")]
    Malformed {
        /// Where the data came from (a path, or `<embedded>`).
        origin: String,
        /// Decoder error text.
        reason: String,
    },
}

/// A reference in the fixture does not resolve.
///
/// Raised by the joiner the first time a lookup misses; remaining records are
/// not inspected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataIntegrityError {
    /// A product points at a category id that is not in the category set.
    #[error("product {product} references unknown category {category}")]
    UnknownCategory {
        /// The offending product.
        product: ProductId,
        /// The id that did not resolve.
        category: CategoryId,
    },

    /// A category points at an owner id that is not in the user set.
    #[error("category {category} references unknown owner {owner}")]
    UnknownOwner {
        /// The offending category.
        category: CategoryId,
        /// The id that did not resolve.
        owner: UserId,
    },
}
