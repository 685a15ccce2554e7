//! Entity trait implementation for [`Category`].
//!
//! Categories are created and listed, never edited.

use super::error::CatalogError;
use super::require_text;
use crate::model::{Category, CategoryCreate, CategoryId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            slug: require_text("slug", &params.slug)?,
            title: require_text("title", &params.title)?,
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
