//! Entity trait implementation for the User domain type.
//!
//! Role membership lives on the user, so granting and revoking are actions on the user
//! entity and are serialized with every other change to that user.

use super::actions::UserAction;
use super::error::UserError;
use crate::model::{User, UserCreate, UserId, UserUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = UserAction;
    type ActionResult = bool;
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, Self::Error> {
        let username = params.username.trim();
        if username.is_empty() {
            return Err(UserError::EmptyUsername);
        }
        Ok(Self {
            id,
            username: username.to_string(),
            first_name: params.first_name,
            last_name: params.last_name,
            roles: params.roles,
        })
    }

    /// Handles updates to the user's profile fields.
    async fn on_update(&mut self, update: UserUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        Ok(())
    }

    /// Grants and revokes roles. Returns whether the membership changed.
    async fn handle_action(&mut self, action: UserAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            UserAction::Grant(role) => Ok(self.roles.insert(role)),
            UserAction::Revoke(role) => {
                if self.roles.remove(role) {
                    Ok(true)
                } else {
                    Err(UserError::NotInRole(role))
                }
            }
        }
    }
}
