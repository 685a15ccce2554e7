//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (users, menu items, carts,
//! orders, ...) implements to be owned by a generic [`ResourceActor`](crate::ResourceActor).
//! It names the id, DTO, action, context and error types of the resource and provides the
//! lifecycle hooks the actor calls while processing requests.
//!
//! # Staged hooks
//! `on_update` and `handle_action` always run against a *staged copy* of the stored
//! entity. The actor swaps the copy into its store only when the hook returns `Ok`, so a
//! hook may mutate `self` field by field and still fail halfway without leaving a partial
//! write behind. `on_create` runs before the entity is inserted at all.
//!
//! # Implicit entities
//! Some resources exist for every id without being created first (a shopping cart exists
//! for every user, it is just empty). Such entities override [`ActorEntity::implicit`]
//! and the actor treats a missing id as that blank instance.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook when the actor starts (`run(context)`), which lets an entity
/// reach its dependencies (for example the cart client used by checkout) without wiring
/// them at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per actor; clients recover it with
    /// [`FrameworkError::downcast`](crate::FrameworkError::downcast).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Blank instance for ids that were never created.
    ///
    /// Returning `Some` makes the entity implicit: `Get` answers with the blank
    /// instance and `Action` runs against it, storing it once the action commits.
    fn implicit(_id: &Self::Id) -> Option<Self> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is stored.
    /// Returning an error discards the entity.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on a staged copy when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action on a staged copy.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
