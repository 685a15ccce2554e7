//! Entity trait implementation for the Cart domain type.

use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::clients::MenuClient;
use crate::model::{Cart, CartLine, UserId};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::debug;

#[async_trait]
impl ActorEntity for Cart {
    type Id = UserId;
    type Create = Infallible;
    type Update = Infallible;
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = MenuClient;
    type Error = CartError;

    fn from_create_params(_id: UserId, params: Infallible) -> Result<Self, Self::Error> {
        match params {}
    }

    /// Every user owns an empty cart until they add something.
    fn implicit(owner: &UserId) -> Option<Self> {
        Some(Cart::empty(*owner))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &MenuClient) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        menu: &MenuClient,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddLine {
                menuitem_id,
                quantity,
            } => {
                if quantity == 0 {
                    return Err(CartError::ZeroQuantity);
                }
                let item = menu
                    .get(menuitem_id)
                    .await?
                    .ok_or(CartError::NoSuchMenuItem(menuitem_id))?;
                let line = CartLine::new(menuitem_id, quantity, item.price)?;
                debug!(owner = %self.owner, %menuitem_id, price = %line.price(), "Line priced");
                self.upsert(line.clone());
                Ok(CartActionResult::AddLine(line))
            }
            CartAction::Clear => Ok(CartActionResult::Clear(self.clear())),
            CartAction::ClearAt(expected) => {
                if self.revision() != expected {
                    return Err(CartError::RevisionMismatch {
                        expected,
                        actual: self.revision(),
                    });
                }
                Ok(CartActionResult::ClearAt(self.clear()))
            }
        }
    }
}
