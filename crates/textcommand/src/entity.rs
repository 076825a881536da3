//! Platform entities that mentions can refer to, and the cache used to look them up.

use std::collections::HashMap;
use std::fmt;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

/// Numeric platform identifier.
pub type Snowflake = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub bot: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Role,
    User,
    Channel,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Role => "Role",
            EntityKind::User => "User",
            EntityKind::Channel => "Channel",
        };
        f.write_str(label)
    }
}

/// Read-only view over the platform client's entity caches.
///
/// Lookups never hit the network.
pub trait EntityLookup: Send + Sync {
    fn role(&self, id: Snowflake) -> Option<Role>;
    fn user(&self, id: Snowflake) -> Option<User>;
    fn channel(&self, id: Snowflake) -> Option<Channel>;
}

/// In-memory entity tables, filled by whoever owns the gateway connection.
#[derive(Debug, Default)]
pub struct EntityCache {
    roles: RwLock<HashMap<Snowflake, Role>>,
    users: RwLock<HashMap<Snowflake, User>>,
    channels: RwLock<HashMap<Snowflake, Channel>>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_role(&self, role: Role) {
        self.roles.write().insert(role.id, role);
    }

    pub fn insert_user(&self, user: User) {
        self.users.write().insert(user.id, user);
    }

    pub fn insert_channel(&self, channel: Channel) {
        self.channels.write().insert(channel.id, channel);
    }

    pub fn remove(&self, kind: EntityKind, id: Snowflake) -> bool {
        match kind {
            EntityKind::Role => self.roles.write().remove(&id).is_some(),
            EntityKind::User => self.users.write().remove(&id).is_some(),
            EntityKind::Channel => self.channels.write().remove(&id).is_some(),
        }
    }
}

impl EntityLookup for EntityCache {
    fn role(&self, id: Snowflake) -> Option<Role> {
        self.roles.read().get(&id).cloned()
    }

    fn user(&self, id: Snowflake) -> Option<User> {
        self.users.read().get(&id).cloned()
    }

    fn channel(&self, id: Snowflake) -> Option<Channel> {
        self.channels.read().get(&id).cloned()
    }
}
