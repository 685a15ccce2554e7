//! # Cart Actor
//!
//! One cart per user, keyed by [`UserId`](crate::model::UserId). Carts are implicit:
//! the actor answers for any user id with an empty cart and stores it on the first
//! change. The actor is started with a [`MenuClient`] to price new lines.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Cart`]
//! - [`actions`] - [`CartAction`] and [`CartActionResult`]
//! - [`error`] - [`CartError`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::Cart;
use actor_framework::ResourceActor;

/// Creates a new Cart actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<Cart>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CartClient::new(generic_client))
}
