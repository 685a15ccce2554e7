//! Type-safe clients, one per actor, plus the staff manager built on the user client.
//!
//! Each client wraps a [`ResourceClient`](actor_framework::ResourceClient), implements
//! [`ActorClient`](actor_framework::ActorClient) with [`RestaurantError`](crate::RestaurantError)
//! as its error, and checks the caller's [`Identity`](crate::model::Identity) before
//! sending privileged requests.

pub mod cart_client;
pub mod catalog_client;
pub mod order_client;
pub mod staff_client;
pub mod user_client;

pub use cart_client::CartClient;
pub use catalog_client::{CategoryClient, MenuClient};
pub use order_client::OrderClient;
pub use staff_client::StaffClient;
pub use user_client::UserClient;
