//! Error types for the User actor.

use crate::error::RestaurantError;
use crate::model::Role;
use thiserror::Error;

/// Errors that can occur during user and membership operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// Usernames identify users for role grants and cannot be blank.
    #[error("username must not be empty")]
    EmptyUsername,

    /// Revoking a role the user does not hold.
    #[error("user is not part of {0}")]
    NotInRole(Role),
}

impl From<UserError> for RestaurantError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::EmptyUsername => RestaurantError::Validation(e.to_string()),
            UserError::NotInRole(_) => RestaurantError::Conflict(e.to_string()),
        }
    }
}
