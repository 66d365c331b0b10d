//! Catalog payload loading errors.

use thiserror::Error;

use storefront_core::DomainError;

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The payload was not valid catalog JSON, could not be read, or held an
    /// invalid product.
    #[error("failed to parse catalog payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// The products parsed but do not form a valid catalog.
    #[error("invalid catalog: {0}")]
    Invalid(#[from] DomainError),
}
