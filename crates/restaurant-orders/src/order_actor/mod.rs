//! # Order Actor
//!
//! Owns every order. Orders are created only by checkout (a `Create` request carrying
//! [`Checkout`](crate::model::Checkout)) and edited only through an
//! [`OrderUpdate`](crate::model::OrderUpdate) checked against the [`permissions`] matrix.
//!
//! The actor is started with `(CartClient, UserClient)`: the cart client to read and
//! clear the cart during checkout, the user client to vet a proposed delivery crew.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`permissions`] - who may change which field
//! - [`error`] - [`OrderError`]

pub mod entity;
pub mod error;
pub mod permissions;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, OrderClient::new(generic_client))
}
