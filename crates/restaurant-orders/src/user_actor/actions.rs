//! Custom actions for the User actor.

use crate::model::Role;

/// Membership changes on a single user.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Adds the role. Granting a held role is a no-op that reports `false`.
    Grant(Role),
    /// Removes the role; fails with [`UserError::NotInRole`](super::UserError::NotInRole)
    /// when the user does not hold it.
    Revoke(Role),
}
