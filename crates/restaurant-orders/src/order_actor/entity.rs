//! Entity trait implementation for the Order domain type.
//!
//! Checkout happens in `on_create` and field edits in `on_update`. Both run inside one
//! order-actor message: the new order is stored only after the cart was cleared, and an
//! edit is stored only after every field passed its checks.

use super::error::OrderError;
use super::permissions::first_forbidden;
use crate::clients::{CartClient, UserClient};
use crate::model::{Checkout, Order, OrderId, OrderUpdate, Role, UserId};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;
use tracing::{debug, info};

async fn ensure_delivery_crew(users: &UserClient, id: UserId) -> Result<(), OrderError> {
    match users.get(id).await? {
        Some(user) if user.roles.contains(Role::DeliveryCrew) => Ok(()),
        _ => Err(OrderError::NoSuchDeliveryCrew(id)),
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = Checkout;
    type Update = OrderUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = (CartClient, UserClient);
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: Checkout) -> Result<Self, Self::Error> {
        Ok(Order::pending(id, params.user_id, Utc::now().date_naive()))
    }

    /// Checkout: copy the owner's cart into this order, then clear the cart.
    ///
    /// The cart is cleared only if it is still at the revision that was copied. Any
    /// failure discards the order and leaves the cart as it was.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (carts, _) = ctx;
        let snapshot = carts.snapshot(self.user_id).await?;
        if snapshot.lines.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        self.fill_from(&snapshot.lines)?;
        debug!(order_id = %self.id, items = self.items().len(), total = %self.total(), "Order priced");

        let cleared = carts.clear_at(self.user_id, snapshot.revision).await?;
        info!(order_id = %self.id, user_id = %self.user_id, cleared, "Cart checked out");
        Ok(())
    }

    /// Field-level edit: validate every field, then apply all of them.
    async fn on_update(&mut self, update: OrderUpdate, ctx: &Self::Context) -> Result<(), Self::Error> {
        let (_, users) = ctx;
        let OrderUpdate { editor, patch } = update;

        let fields = patch.fields();
        if fields.is_empty() {
            return Err(OrderError::EmptyPatch);
        }
        if let Some(field) = first_forbidden(editor, &fields) {
            return Err(OrderError::FieldForbidden(field));
        }
        if let Some(crew) = patch.delivery_crew {
            ensure_delivery_crew(users, crew).await?;
        }

        self.apply(patch);
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &Self::Context) -> Result<(), Self::Error> {
        match action {}
    }
}
