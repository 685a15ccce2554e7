use crate::error::RestaurantError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Type-safe identifier for Users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A staff role. A user holding none of them is a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    DeliveryCrew,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::DeliveryCrew];

    fn bit(self) -> u8 {
        match self {
            Role::Admin => 0b001,
            Role::Manager => 0b010,
            Role::DeliveryCrew => 0b100,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::DeliveryCrew => "Delivery crew",
        })
    }
}

/// The roles held by one user, as a bitset.
///
/// Serialized as a list of role names so the wire format does not depend on the bit
/// layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Role>", into = "Vec<Role>")]
pub struct RoleSet(u8);

impl RoleSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn contains(self, role: Role) -> bool {
        self.0 & role.bit() != 0
    }

    pub fn contains_any(self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.contains(*role))
    }

    /// Adds `role`; returns whether the set changed.
    pub fn insert(&mut self, role: Role) -> bool {
        let changed = !self.contains(role);
        self.0 |= role.bit();
        changed
    }

    /// Removes `role`; returns whether the set changed.
    pub fn remove(&mut self, role: Role) -> bool {
        let changed = self.contains(role);
        self.0 &= !role.bit();
        changed
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Role> {
        Role::ALL.into_iter().filter(move |role| self.contains(*role))
    }
}

impl From<Vec<Role>> for RoleSet {
    fn from(roles: Vec<Role>) -> Self {
        roles.into_iter().collect()
    }
}

impl From<RoleSet> for Vec<Role> {
    fn from(set: RoleSet) -> Self {
        set.iter().collect()
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        let mut set = RoleSet::empty();
        for role in iter {
            set.insert(role);
        }
        set
    }
}

impl<const N: usize> From<[Role; N]> for RoleSet {
    fn from(roles: [Role; N]) -> Self {
        roles.into_iter().collect()
    }
}

/// Represents a registered user and their role memberships.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
/// The user store doubles as the role membership store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: RoleSet,
}

/// Payload for registering a new user.
///
/// `roles` is normally empty; it is set when seeding the first staff accounts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: RoleSet,
}

impl UserCreate {
    pub fn customer(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    pub fn with_roles(mut self, roles: impl Into<RoleSet>) -> Self {
        self.roles = roles.into();
        self
    }
}

/// Payload for updating a user's profile. Roles change only through grant/revoke.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A resolved caller: who they are and which roles they held when resolved.
///
/// Every privileged operation takes an `&Identity` explicitly; nothing reads the caller
/// from ambient state. Obtain one from [`UserClient::resolve`](crate::clients::UserClient::resolve).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    user_id: UserId,
    username: String,
    roles: RoleSet,
}

impl Identity {
    pub fn new(user_id: UserId, username: impl Into<String>, roles: RoleSet) -> Self {
        Self {
            user_id,
            username: username.into(),
            roles,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn roles(&self) -> RoleSet {
        self.roles
    }

    pub fn has(&self, role: Role) -> bool {
        self.roles.contains(role)
    }

    pub fn is_customer(&self) -> bool {
        self.roles.is_empty()
    }

    /// Fails with `Forbidden` unless the caller holds `role`.
    pub fn require(&self, role: Role) -> Result<(), RestaurantError> {
        if self.has(role) {
            Ok(())
        } else {
            Err(RestaurantError::Forbidden(format!(
                "{} requires role {role}",
                self.username
            )))
        }
    }

    /// Fails with `Forbidden` unless the caller holds at least one of `roles`.
    pub fn require_any(&self, roles: &[Role]) -> Result<(), RestaurantError> {
        if self.roles.contains_any(roles) {
            return Ok(());
        }
        let names: Vec<String> = roles.iter().map(Role::to_string).collect();
        Err(RestaurantError::Forbidden(format!(
            "{} requires one of: {}",
            self.username,
            names.join(", ")
        )))
    }
}

impl From<&User> for Identity {
    fn from(user: &User) -> Self {
        Self::new(user.id, user.username.clone(), user.roles)
    }
}
