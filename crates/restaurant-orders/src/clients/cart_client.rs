//! # Cart Client
//!
//! The caller's own cart. Operations taking an [`Identity`] act on that identity's cart;
//! `snapshot` and `clear_at` take a user id and are used by checkout.
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::error::{from_framework, RestaurantError};
use crate::model::{Cart, CartLine, CartSnapshot, Identity, MenuItemId, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        from_framework::<CartError>(e)
    }
}

fn unexpected(result: CartActionResult) -> RestaurantError {
    RestaurantError::Unavailable(format!("unexpected cart reply {result:?}"))
}

impl CartClient {
    async fn act(&self, owner: UserId, action: CartAction) -> Result<CartActionResult, RestaurantError> {
        self.inner
            .perform_action(owner, action)
            .await
            .map_err(Self::map_error)
    }

    /// Prices `menuitem_id` at its current menu price and sets its quantity in the
    /// caller's cart, replacing any earlier line for the same item.
    #[instrument(skip(self, identity), fields(user = %identity.user_id()))]
    pub async fn add_line(
        &self,
        identity: &Identity,
        menuitem_id: MenuItemId,
        quantity: u32,
    ) -> Result<CartLine, RestaurantError> {
        let action = CartAction::AddLine {
            menuitem_id,
            quantity,
        };
        match self.act(identity.user_id(), action).await? {
            CartActionResult::AddLine(line) => Ok(line),
            other => Err(unexpected(other)),
        }
    }

    /// The caller's lines, ordered by menu item id.
    #[instrument(skip(self, identity), fields(user = %identity.user_id()))]
    pub async fn list_lines(&self, identity: &Identity) -> Result<Vec<CartLine>, RestaurantError> {
        Ok(self.snapshot(identity.user_id()).await?.lines)
    }

    /// Empties the caller's cart. Returns the number of removed lines; an empty cart
    /// gives 0.
    #[instrument(skip(self, identity), fields(user = %identity.user_id()))]
    pub async fn clear(&self, identity: &Identity) -> Result<usize, RestaurantError> {
        match self.act(identity.user_id(), CartAction::Clear).await? {
            CartActionResult::Clear(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    /// The owner's lines together with the cart revision they were read at.
    #[instrument(skip(self))]
    pub async fn snapshot(&self, owner: UserId) -> Result<CartSnapshot, RestaurantError> {
        let cart = self.get(owner).await?.unwrap_or_else(|| Cart::empty(owner));
        debug!(revision = cart.revision(), "Cart read");
        Ok(cart.snapshot())
    }

    /// Clears the owner's cart only if it is still at `revision`.
    #[instrument(skip(self))]
    pub async fn clear_at(&self, owner: UserId, revision: u64) -> Result<usize, RestaurantError> {
        match self.act(owner, CartAction::ClearAt(revision)).await? {
            CartActionResult::ClearAt(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }
}
