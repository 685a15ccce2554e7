//! # User Client
//!
//! Registration, lookup and role resolution against the User actor.
use crate::error::{from_framework, RestaurantError};
use crate::model::{Identity, Role, User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserError};
use actor_framework::{ActorClient, Filter, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        from_framework::<UserError>(e)
    }
}

impl UserClient {
    /// Registers a user. Usernames are unique.
    ///
    /// The uniqueness check and the insert are two requests, so two concurrent
    /// registrations of one username can both succeed.
    #[instrument(skip(self))]
    pub async fn register(&self, params: UserCreate) -> Result<User, RestaurantError> {
        if self.find_by_username(&params.username).await?.is_some() {
            return Err(RestaurantError::Conflict(format!(
                "username {} is taken",
                params.username.trim()
            )));
        }
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        debug!(%id, "Registered");
        self.lookup(id).await
    }

    /// The user with `id`, or `NotFound`.
    #[instrument(skip(self))]
    pub async fn lookup(&self, id: UserId) -> Result<User, RestaurantError> {
        self.get(id)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(format!("user {id}")))
    }

    /// Resolves the caller's identity and current roles.
    #[instrument(skip(self))]
    pub async fn resolve(&self, id: UserId) -> Result<Identity, RestaurantError> {
        let user = self.lookup(id).await?;
        Ok(Identity::from(&user))
    }

    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, RestaurantError> {
        let wanted = username.trim().to_string();
        let mut found = self
            .list(Filter::new(move |user: &User| user.username == wanted))
            .await?;
        Ok(found.pop())
    }

    /// Updates the caller's own profile.
    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        identity: &Identity,
        update: UserUpdate,
    ) -> Result<User, RestaurantError> {
        self.inner
            .update(identity.user_id(), update)
            .await
            .map_err(Self::map_error)
    }

    /// Users holding `role`, ordered by id.
    pub(crate) async fn members(&self, role: Role) -> Result<Vec<User>, RestaurantError> {
        let mut users = self
            .list(Filter::new(move |user: &User| user.roles.contains(role)))
            .await?;
        users.sort_by_key(|user| user.id);
        Ok(users)
    }

    pub(crate) async fn change_role(
        &self,
        id: UserId,
        action: UserAction,
    ) -> Result<bool, RestaurantError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}
