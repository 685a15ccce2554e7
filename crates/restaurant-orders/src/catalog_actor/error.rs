//! Error types for the catalog actors.

use crate::error::RestaurantError;
use crate::model::CategoryId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by the Category and MenuItem actors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("{0} must not be empty")]
    Blank(&'static str),

    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    #[error("no such category: {0}")]
    NoSuchCategory(CategoryId),

    /// A call to another actor failed while validating.
    #[error(transparent)]
    Dependency(#[from] RestaurantError),
}

impl From<CatalogError> for RestaurantError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Blank(_) | CatalogError::NonPositivePrice(_) => {
                RestaurantError::Validation(e.to_string())
            }
            CatalogError::NoSuchCategory(_) => RestaurantError::NotFound(e.to_string()),
            CatalogError::Dependency(inner) => inner,
        }
    }
}
