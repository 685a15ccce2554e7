//! # User Actor
//!
//! Owns the user records, which double as the role membership store read by
//! [`UserClient::resolve`] and written by the [`StaffClient`](crate::clients::StaffClient).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`actions`] - [`UserAction`] for role grants and revocations
//! - [`error`] - [`UserError`]
//!
//! ## Usage
//!
//! ```rust
//! use restaurant_orders::model::{Role, UserCreate};
//! use restaurant_orders::user_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, users) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let ana = users.register(UserCreate::customer("ana")).await?;
//!     let identity = users.resolve(ana.id).await?;
//!     assert!(identity.is_customer());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::User;
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(capacity: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, UserClient::new(generic_client))
}
