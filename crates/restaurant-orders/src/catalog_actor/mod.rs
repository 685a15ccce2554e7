//! # Catalog Actors
//!
//! Categories and menu items, each owned by its own actor. Menu items depend on
//! categories (`Context = CategoryClient`); categories depend on nothing.
//!
//! - [`category`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Category`]
//! - [`menu_item`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`CatalogError`], shared by both

pub mod category;
pub mod error;
pub mod menu_item;

pub use error::*;

use crate::clients::{CategoryClient, MenuClient};
use crate::model::{Category, MenuItem};
use actor_framework::ResourceActor;

/// Trims `value`, rejecting it when nothing is left.
fn require_text(field: &'static str, value: &str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CatalogError::Blank(field))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Creates a new Category actor and its client.
pub fn new_categories(capacity: usize) -> (ResourceActor<Category>, CategoryClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, CategoryClient::new(generic_client))
}

/// Creates a new MenuItem actor and its client. Start it with a [`CategoryClient`].
pub fn new_menu(capacity: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, MenuClient::new(generic_client))
}
