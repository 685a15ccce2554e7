//! # Catalog Clients
//!
//! Categories and menu items. Reads are open to every caller; writes check the caller's
//! roles first. Listings come back ordered by id, without filtering or pagination.
use crate::catalog_actor::CatalogError;
use crate::error::{from_framework, RestaurantError};
use crate::model::{
    Category, CategoryCreate, Identity, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate,
    Role,
};
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{info, instrument};

/// Client for interacting with the Category actor.
#[derive(Clone)]
pub struct CategoryClient {
    inner: ResourceClient<Category>,
}

impl CategoryClient {
    pub fn new(inner: ResourceClient<Category>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Category> for CategoryClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Category> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        from_framework::<CatalogError>(e)
    }
}

impl CategoryClient {
    /// Admin only. Slugs are unique (checked before the insert, not atomically with it).
    #[instrument(skip(self, identity), fields(by = identity.username()))]
    pub async fn create_category(
        &self,
        identity: &Identity,
        params: CategoryCreate,
    ) -> Result<Category, RestaurantError> {
        identity.require(Role::Admin)?;

        let slug = params.slug.trim().to_string();
        let taken = self
            .list(Filter::new(move |c: &Category| c.slug == slug))
            .await?;
        if !taken.is_empty() {
            return Err(RestaurantError::Conflict(format!(
                "category slug {} is taken",
                params.slug.trim()
            )));
        }

        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Category created");
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<Category>, RestaurantError> {
        let mut categories = self.list(Filter::all()).await?;
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }
}

/// Client for interacting with the MenuItem actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        from_framework::<CatalogError>(e)
    }
}

impl MenuClient {
    /// Manager or Admin.
    #[instrument(skip(self, identity), fields(by = identity.username()))]
    pub async fn create_menu_item(
        &self,
        identity: &Identity,
        params: MenuItemCreate,
    ) -> Result<MenuItem, RestaurantError> {
        identity.require_any(&[Role::Manager, Role::Admin])?;
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Menu item created");
        self.get_menu_item(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_menu_item(&self, id: MenuItemId) -> Result<MenuItem, RestaurantError> {
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(format!("menu item {id}")))
    }

    #[instrument(skip(self))]
    pub async fn list_menu_items(&self) -> Result<Vec<MenuItem>, RestaurantError> {
        let mut items = self.list(Filter::all()).await?;
        items.sort_by_key(|item| item.id);
        Ok(items)
    }

    /// Manager only. Cart lines and orders keep the price they were created with.
    #[instrument(skip(self, identity), fields(by = identity.username()))]
    pub async fn update_menu_item(
        &self,
        identity: &Identity,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, RestaurantError> {
        identity.require(Role::Manager)?;
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Manager only.
    #[instrument(skip(self, identity), fields(by = identity.username()))]
    pub async fn delete_menu_item(
        &self,
        identity: &Identity,
        id: MenuItemId,
    ) -> Result<(), RestaurantError> {
        identity.require(Role::Manager)?;
        self.delete(id).await
    }
}
