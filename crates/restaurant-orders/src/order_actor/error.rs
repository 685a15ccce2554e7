//! Error types for the Order actor.

use crate::error::RestaurantError;
use crate::model::{OrderField, PriceOverflow, UserId};
use thiserror::Error;

/// Errors that can occur during checkout and order edits.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Checkout found no cart lines.
    #[error("cart is empty")]
    EmptyCart,

    /// The cart total is too large to represent.
    #[error("order total out of range")]
    TotalOverflow(#[from] PriceOverflow),

    /// The editor's roles do not allow changing this field.
    #[error("not allowed to change {0}")]
    FieldForbidden(OrderField),

    /// The patch named no field at all.
    #[error("no changes given")]
    EmptyPatch,

    /// The proposed delivery crew does not exist or lacks the DeliveryCrew role.
    #[error("no such delivery crew: {0}")]
    NoSuchDeliveryCrew(UserId),

    /// A call to another actor failed; carries that actor's boundary error.
    #[error(transparent)]
    Dependency(#[from] RestaurantError),
}

impl From<OrderError> for RestaurantError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::EmptyCart => RestaurantError::EmptyCart,
            OrderError::FieldForbidden(_) => RestaurantError::Forbidden(e.to_string()),
            OrderError::TotalOverflow(_) | OrderError::EmptyPatch => {
                RestaurantError::Validation(e.to_string())
            }
            OrderError::NoSuchDeliveryCrew(_) => {
                RestaurantError::NotFound("no such delivery crew".to_string())
            }
            OrderError::Dependency(inner) => inner,
        }
    }
}
