//! # Order Client
//!
//! Checkout, role-scoped order listing, and order administration.
//!
//! Checkout and edits are validated inside the Order actor (`on_create` and
//! `on_update`); this client chooses what a caller may see and who may delete.
use crate::error::{from_framework, RestaurantError};
use crate::model::{Checkout, Identity, Order, OrderId, OrderItem, OrderPatch, OrderUpdate, Role};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        from_framework::<OrderError>(e)
    }
}

/// Which orders a caller may list.
fn visible_to(identity: &Identity) -> Filter<Order> {
    let me = identity.user_id();
    if identity.roles().contains_any(&[Role::Manager, Role::Admin]) {
        Filter::all()
    } else if identity.has(Role::DeliveryCrew) {
        Filter::new(move |order: &Order| order.delivery_crew == Some(me))
    } else {
        Filter::new(move |order: &Order| order.user_id == me)
    }
}

impl OrderClient {
    /// Turns the caller's cart into a pending order and empties the cart.
    ///
    /// Fails with `EmptyCart` when there is nothing to check out, and with
    /// `Unavailable` when the cart could not be cleared; in both cases no order exists
    /// afterwards and the cart is unchanged.
    #[instrument(skip(self, identity), fields(user = %identity.user_id()))]
    pub async fn checkout(&self, identity: &Identity) -> Result<Order, RestaurantError> {
        let params = Checkout {
            user_id: identity.user_id(),
        };
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Checkout complete");
        self.fetch(id).await
    }

    /// Orders the caller may see, ordered by id. No match gives an empty list.
    ///
    /// Manager and Admin see every order, delivery crew the orders assigned to them,
    /// customers their own.
    #[instrument(skip(self, identity), fields(user = %identity.user_id()))]
    pub async fn list_orders(&self, identity: &Identity) -> Result<Vec<Order>, RestaurantError> {
        let mut orders = self.list(visible_to(identity)).await?;
        orders.sort_by_key(|order| order.id);
        Ok(orders)
    }

    #[instrument(skip(self, _identity))]
    pub async fn get_order(
        &self,
        _identity: &Identity,
        id: OrderId,
    ) -> Result<Order, RestaurantError> {
        self.fetch(id).await
    }

    /// The frozen items of an order, for any caller.
    #[instrument(skip(self, _identity))]
    pub async fn get_order_items(
        &self,
        _identity: &Identity,
        id: OrderId,
    ) -> Result<Vec<OrderItem>, RestaurantError> {
        Ok(self.fetch(id).await?.items().to_vec())
    }

    /// Applies `patch` if the caller's roles allow every field in it.
    ///
    /// Either every field is written or none is.
    #[instrument(skip(self, identity), fields(user = %identity.user_id()))]
    pub async fn update_order(
        &self,
        identity: &Identity,
        id: OrderId,
        patch: OrderPatch,
    ) -> Result<Order, RestaurantError> {
        let update = OrderUpdate {
            editor: identity.roles(),
            patch,
        };
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Manager or Admin only.
    #[instrument(skip(self, identity), fields(user = %identity.user_id()))]
    pub async fn delete_order(&self, identity: &Identity, id: OrderId) -> Result<(), RestaurantError> {
        identity.require_any(&[Role::Manager, Role::Admin])?;
        self.delete(id).await?;
        info!(order_id = %id, "Order deleted");
        Ok(())
    }

    async fn fetch(&self, id: OrderId) -> Result<Order, RestaurantError> {
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(format!("order {id}")))
    }
}
