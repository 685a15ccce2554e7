//! Error types for the Cart actor.

use crate::error::RestaurantError;
use crate::model::{MenuItemId, PriceOverflow};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("quantity must be at least 1")]
    ZeroQuantity,

    #[error("no such menu item: {0}")]
    NoSuchMenuItem(MenuItemId),

    /// `quantity * unit_price` is too large to represent.
    #[error("line price out of range")]
    LinePriceOverflow(#[from] PriceOverflow),

    /// The cart changed after it was read; nothing was cleared.
    #[error("cart changed since revision {expected} (now {actual})")]
    RevisionMismatch { expected: u64, actual: u64 },

    #[error(transparent)]
    Dependency(#[from] RestaurantError),
}

impl From<CartError> for RestaurantError {
    fn from(e: CartError) -> Self {
        match e {
            CartError::ZeroQuantity | CartError::LinePriceOverflow(_) => {
                RestaurantError::Validation(e.to_string())
            }
            CartError::NoSuchMenuItem(_) => RestaurantError::NotFound(e.to_string()),
            CartError::RevisionMismatch { .. } => RestaurantError::Unavailable(e.to_string()),
            CartError::Dependency(inner) => inner,
        }
    }
}
