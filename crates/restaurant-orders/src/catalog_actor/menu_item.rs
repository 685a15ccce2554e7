//! Entity trait implementation for [`MenuItem`].
//!
//! The menu actor is started with a [`CategoryClient`] so that creating or moving an
//! item can check that the target category exists.

use super::error::CatalogError;
use super::require_text;
use crate::clients::CategoryClient;
use crate::model::{CategoryId, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::ActorClient;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::convert::Infallible;

fn positive(price: Decimal) -> Result<Decimal, CatalogError> {
    if price > Decimal::ZERO {
        Ok(price)
    } else {
        Err(CatalogError::NonPositivePrice(price))
    }
}

async fn ensure_category(categories: &CategoryClient, id: CategoryId) -> Result<(), CatalogError> {
    match categories.get(id).await? {
        Some(_) => Ok(()),
        None => Err(CatalogError::NoSuchCategory(id)),
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Context = CategoryClient;
    type Error = CatalogError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            title: require_text("title", &params.title)?,
            price: positive(params.price)?,
            featured: params.featured,
            category_id: params.category_id,
        })
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), Self::Error> {
        ensure_category(categories, self.category_id).await
    }

    /// Partial update. Runs on a staged copy, so a failed check keeps the old values.
    async fn on_update(
        &mut self,
        update: MenuItemUpdate,
        categories: &CategoryClient,
    ) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            self.title = require_text("title", &title)?;
        }
        if let Some(price) = update.price {
            self.price = positive(price)?;
        }
        if let Some(featured) = update.featured {
            self.featured = featured;
        }
        if let Some(category_id) = update.category_id {
            ensure_category(categories, category_id).await?;
            self.category_id = category_id;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Infallible,
        _ctx: &CategoryClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
