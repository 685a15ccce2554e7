//! # Restaurant Orders
//!
//! The ordering core of a restaurant backend, built on [`actor_framework`]: catalog,
//! per-user carts, atomic checkout, role-scoped order administration and staff
//! membership.
//!
//! ## 🚀 Core Components
//!
//! - **[model]**: ids, roles, users, catalog, carts and orders. Each stored type implements
//!   [`ActorEntity`](actor_framework::ActorEntity) in its actor module.
//! - **[user_actor]**, **[catalog_actor]**, **[cart_actor]**, **[order_actor]**: entity
//!   behavior (validation, checkout, field permissions).
//! - **[clients]**: the public operations. Every call takes an explicit
//!   [`Identity`](model::Identity) and returns [`RestaurantError`].
//! - **[lifecycle]**: [`RestaurantSystem`](lifecycle::RestaurantSystem), configuration and
//!   tracing setup.
//!
//! ## 📚 Quick Start
//!
//! The binary in `main.rs` seeds staff, builds a menu, checks out a cart and walks the
//! order through assignment and delivery.
//!
//! ## 🧪 Testing
//!
//! Client tests run against [`actor_framework::mock`]; `tests/order_actor_test.rs` runs a
//! real Order actor against mocked carts and users; `tests/integration_test.rs` goes
//! through the whole system.

pub mod cart_actor;
pub mod catalog_actor;
pub mod clients;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod user_actor;

pub use error::RestaurantError;
