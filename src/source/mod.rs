//! Catalog data sources.
//!
//! The viewer reads one JSON document holding users, categories and
//! products. It is either compiled into the binary or read from a file named
//! on the command line or in the config. Either way it is decoded once, at
//! the boundary, into [`RawCatalog`].

use crate::model::error::InputError;
use crate::model::RawCatalog;
use std::path::PathBuf;
use tracing::{debug, info};

/// The fixture shipped inside the binary.
const EMBEDDED_CATALOG: &str = include_str!("../../fixtures/catalog.json");

/// Origin label used in errors for the embedded fixture.
pub const EMBEDDED_ORIGIN: &str = "<embedded>";

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// The fixture compiled into the binary.
    #[default]
    Embedded,
    /// A JSON file on disk with the same shape as the embedded fixture.
    File(PathBuf),
}

impl CatalogSource {
    /// Pick a source: a file if a path was given, otherwise the embedded
    /// fixture.
    pub fn detect(path: Option<PathBuf>) -> Self {
        path.map_or(CatalogSource::Embedded, CatalogSource::File)
    }

    /// Read and decode the document.
    ///
    /// # Errors
    ///
    /// Returns `InputError::FileNotFound` if the file does not exist.
    /// Returns `InputError::Io` for other read failures.
    /// Returns `InputError::Malformed` if the text is not a catalog document.
    pub fn load(&self) -> Result<RawCatalog, InputError> {
        match self {
            CatalogSource::Embedded => parse_catalog(EMBEDDED_CATALOG, EMBEDDED_ORIGIN),
            CatalogSource::File(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound { path: path.clone() });
                }
                let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), bytes = text.len(), "read catalog file");
                parse_catalog(&text, &path.display().to_string())
            }
        }
    }
}

/// Decode a catalog document. `origin` only labels errors.
///
/// Unknown top-level fields are ignored; a missing collection is an error.
pub fn parse_catalog(text: &str, origin: &str) -> Result<RawCatalog, InputError> {
    let raw: RawCatalog = serde_json::from_str(text).map_err(|e| InputError::Malformed {
        origin: origin.to_string(),
        reason: e.to_string(),
    })?;

    debug!(
        origin,
        users = raw.users.len(),
        categories = raw.categories.len(),
        products = raw.products.len(),
        "decoded catalog"
    );
    Ok(raw)
}
