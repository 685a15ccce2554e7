//! # Boundary Errors
//!
//! Every client operation returns [`RestaurantError`]. Each actor has its own error enum
//! (`UserError`, `CatalogError`, `CartError`, `OrderError`); clients recover it from the
//! framework error with a downcast and convert it here.

use actor_framework::FrameworkError;
use thiserror::Error;

/// Failure kinds surfaced to the caller of the ordering core.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The referenced entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller lacks permission for the requested action or field.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Checkout was attempted with no cart lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// The request contradicts the current state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An actor could not be reached, or an atomic sequence was abandoned.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

/// Converts a framework error, recovering the entity error `E` when it is one.
///
/// A missing entity becomes `NotFound`; channel failures and foreign entity errors
/// become `Unavailable`.
pub(crate) fn from_framework<E>(e: FrameworkError) -> RestaurantError
where
    E: std::error::Error + Into<RestaurantError> + 'static,
{
    match e.downcast::<E>() {
        Ok(entity_error) => entity_error.into(),
        Err(FrameworkError::NotFound(key)) => RestaurantError::NotFound(key),
        Err(other) => RestaurantError::Unavailable(other.to_string()),
    }
}
