//! # Staff Client
//!
//! Manager-only administration of the Manager and Delivery crew role sets. The
//! memberships live on the user records, so this client is a thin layer over
//! [`UserClient`].
use crate::error::RestaurantError;
use crate::model::{Identity, Role, User, UserId};
use crate::user_actor::UserAction;
use crate::clients::UserClient;
use tracing::{info, instrument};

/// Roles a Manager may hand out or take away.
const STAFF_ROLES: [Role; 2] = [Role::Manager, Role::DeliveryCrew];

fn staff_role(role: Role) -> Result<Role, RestaurantError> {
    if STAFF_ROLES.contains(&role) {
        Ok(role)
    } else {
        Err(RestaurantError::Validation(format!(
            "{role} membership is not managed here"
        )))
    }
}

#[derive(Clone)]
pub struct StaffClient {
    users: UserClient,
}

impl StaffClient {
    pub fn new(users: UserClient) -> Self {
        Self { users }
    }

    /// Adds `role` to the user named `username`. Granting a held role is not an error.
    ///
    /// Returns whether the membership changed.
    #[instrument(skip(self, identity), fields(by = identity.username()))]
    pub async fn grant_role(
        &self,
        identity: &Identity,
        username: &str,
        role: Role,
    ) -> Result<bool, RestaurantError> {
        identity.require(Role::Manager)?;
        let role = staff_role(role)?;
        let target = self
            .users
            .find_by_username(username)
            .await?
            .ok_or_else(|| RestaurantError::NotFound(format!("user {}", username.trim())))?;

        let changed = self.users.change_role(target.id, UserAction::Grant(role)).await?;
        info!(target = %target.id, %role, changed, "Role granted");
        Ok(changed)
    }

    /// Removes `role` from user `target`; `Conflict` if they do not hold it.
    #[instrument(skip(self, identity), fields(by = identity.username()))]
    pub async fn revoke_role(
        &self,
        identity: &Identity,
        target: UserId,
        role: Role,
    ) -> Result<(), RestaurantError> {
        identity.require(Role::Manager)?;
        let role = staff_role(role)?;
        self.users.change_role(target, UserAction::Revoke(role)).await?;
        info!(%target, %role, "Role revoked");
        Ok(())
    }

    /// Every user holding `role`, ordered by id.
    #[instrument(skip(self, identity), fields(by = identity.username()))]
    pub async fn list_members(
        &self,
        identity: &Identity,
        role: Role,
    ) -> Result<Vec<User>, RestaurantError> {
        identity.require(Role::Manager)?;
        self.users.members(role).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RoleSet;
    use actor_framework::mock::MockClient;

    fn manager() -> Identity {
        Identity::new(UserId(1), "mia", RoleSet::from([Role::Manager]))
    }

    fn user(id: u32, username: &str, roles: RoleSet) -> User {
        User {
            id: UserId(id),
            username: username.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            roles,
        }
    }

    #[tokio::test]
    async fn grant_requires_manager_before_any_lookup() {
        let mock = MockClient::<User>::new();
        let staff = StaffClient::new(UserClient::new(mock.client()));

        let crew = Identity::new(UserId(2), "dana", RoleSet::from([Role::DeliveryCrew]));
        let err = staff
            .grant_role(&crew, "ana", Role::DeliveryCrew)
            .await
            .unwrap_err();
        assert!(matches!(err, RestaurantError::Forbidden(_)));

        let err = staff.grant_role(&manager(), "ana", Role::Admin).await.unwrap_err();
        assert!(matches!(err, RestaurantError::Validation(_)));

        // Neither call reached the user actor.
        mock.verify();
    }

    #[tokio::test]
    async fn grant_to_unknown_username_is_not_found() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list()
            .return_ok(vec![user(5, "ana", RoleSet::empty())]);
        let staff = StaffClient::new(UserClient::new(mock.client()));

        let err = staff
            .grant_role(&manager(), "bob", Role::DeliveryCrew)
            .await
            .unwrap_err();
        assert_eq!(err, RestaurantError::NotFound("user bob".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn grant_sends_action_for_resolved_user() {
        let mut mock = MockClient::<User>::new();
        mock.expect_list()
            .return_ok(vec![user(5, "ana", RoleSet::empty())]);
        mock.expect_action(UserId(5)).return_ok(true);
        let staff = StaffClient::new(UserClient::new(mock.client()));

        let changed = staff
            .grant_role(&manager(), "ana", Role::DeliveryCrew)
            .await
            .unwrap();
        assert!(changed);
        mock.verify();
    }

    #[tokio::test]
    async fn list_members_sorts_by_id() {
        let crew = RoleSet::from([Role::DeliveryCrew]);
        let mut mock = MockClient::<User>::new();
        mock.expect_list().return_ok(vec![
            user(9, "zed", crew),
            user(4, "dana", crew),
            user(6, "ana", RoleSet::empty()),
        ]);
        let staff = StaffClient::new(UserClient::new(mock.client()));

        let members = staff
            .list_members(&manager(), Role::DeliveryCrew)
            .await
            .unwrap();
        let ids: Vec<UserId> = members.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![UserId(4), UserId(9)]);
    }
}
