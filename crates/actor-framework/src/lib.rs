//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent actor systems. The crate implements a
//! **Resource-Oriented Architecture (ROA)** on top of the **Actor Model**: every kind of
//! resource (users, menu items, carts, orders) is owned by exactly one actor, and every
//! actor speaks the same small protocol of Create, Get, List, Update, Delete and
//! resource-specific Actions.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the domain model and its lifecycle hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]): owns the store and processes one message at
//!    a time.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): cloneable handles that
//!    send requests and await the replies.
//!
//! Business rules are written once in the entity hooks; the actor handles the message
//! passing, id allocation and storage.
//!
//! ## Staged Commits
//!
//! `on_update` and `handle_action` run against a clone of the stored entity. The clone
//! replaces the stored value only when the hook returns `Ok`, so a hook that fails after
//! touching some fields leaves the entity exactly as it was. `on_create` runs before the
//! entity is inserted, so a failing create stores nothing.
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Dish { id: u32, title: String, price_cents: u32 }
//!
//! #[derive(Debug)] struct DishCreate { title: String, price_cents: u32 }
//! #[derive(Debug)] struct DishUpdate { title: Option<String>, price_cents: Option<u32> }
//! #[derive(Debug)] enum DishAction {}
//!
//! #[derive(Debug, thiserror::Error)]
//! enum DishError {
//!     #[error("price must be positive")]
//!     InvalidPrice,
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Update = DishUpdate;
//!     type Action = DishAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = DishError;
//!
//!     fn from_create_params(id: u32, params: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, title: params.title, price_cents: params.price_cents })
//!     }
//!
//!     async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         if let Some(title) = update.title { self.title = title; }
//!         if let Some(price) = update.price_cents {
//!             if price == 0 { return Err(DishError::InvalidPrice); }
//!             self.price_cents = price;
//!         }
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, a: DishAction, _: &()) -> Result<(), Self::Error> {
//!         match a {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Dish>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create(DishCreate { title: "Soup".into(), price_cents: 450 })
//!         .await
//!         .unwrap();
//!
//!     // The title is set before the price check fails; neither change is kept.
//!     let err = client
//!         .update(id, DishUpdate { title: Some("Stew".into()), price_cents: Some(0) })
//!         .await
//!         .unwrap_err();
//!     assert!(matches!(err.downcast::<DishError>(), Ok(DishError::InvalidPrice)));
//!
//!     let dish = client.get(id).await.unwrap().unwrap();
//!     assert_eq!(dish.title, "Soup");
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when an actor starts (`run(context)`), not when it is
//! constructed. All actors are created first, then each is started with clones of the
//! clients it needs:
//!
//! ```rust,ignore
//! let (cart_actor, carts) = ResourceActor::<Cart>::new(32);
//! let (order_actor, orders) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(cart_actor.run(menu.clone()));
//! // checkout reads and clears carts from inside the order actor
//! tokio::spawn(order_actor.run((carts.clone(), users.clone())));
//! ```
//!
//! ## Errors
//!
//! Each entity has its own error type. It reaches the caller boxed inside
//! [`FrameworkError::EntityError`] and is recovered with [`FrameworkError::downcast`].
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Messages are processed sequentially within an actor; the store needs no lock.
//! - Different actors run in parallel.
//! - An actor may await another actor from inside a hook. The dependency graph between
//!   actors must stay acyclic or the two mailboxes deadlock.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, a client whose requests are answered from
//! queued expectations, so an actor or a client wrapper can be tested without its
//! dependencies.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
