use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::{Snowflake, User};

/// Outgoing response payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Only visible to the invoking user. Text messages cannot honor this.
    #[serde(default)]
    pub ephemeral: bool,
}

impl ReplyOptions {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ephemeral: false,
        }
    }

    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ephemeral: true,
        }
    }
}

impl From<&str> for ReplyOptions {
    fn from(content: &str) -> Self {
        Self::text(content)
    }
}

impl From<String> for ReplyOptions {
    fn from(content: String) -> Self {
        Self::text(content)
    }
}

/// Address of a message sent on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageHandle {
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationContext {
    pub user: User,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub created_at: DateTime<Utc>,
}

impl InvocationContext {
    pub fn new(user: User, channel_id: Snowflake, guild_id: Option<Snowflake>) -> Self {
        Self {
            user,
            channel_id,
            guild_id,
            created_at: Utc::now(),
        }
    }
}
