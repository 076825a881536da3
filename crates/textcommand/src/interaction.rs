//! One reply surface for text messages and native interactions.
//!
//! Command handlers talk to an [`Interaction`] and do not care whether the
//! command came in as a prefixed chat message or as a platform interaction.

pub mod message;
pub mod native;
pub mod reply;

use async_trait::async_trait;

use crate::error::BotResult;

pub use message::{MessageInteraction, MessageTransport};
pub use native::{InteractionApi, NativeInteraction};
pub use reply::{InvocationContext, MessageHandle, ReplyOptions};

#[async_trait]
pub trait Interaction: Send {
    /// Who invoked the command, and where.
    fn context(&self) -> &InvocationContext;

    fn replied(&self) -> bool;

    fn deferred(&self) -> bool;

    /// Send a response.
    async fn reply(&mut self, options: ReplyOptions) -> BotResult<()>;

    /// Send a placeholder response for work that will take a while.
    async fn defer_reply(&mut self, options: Option<ReplyOptions>) -> BotResult<()>;

    /// Change the most recent response. Does nothing if there is none.
    async fn edit_reply(&mut self, options: ReplyOptions) -> BotResult<()>;

    /// Send a further response after the first one.
    async fn follow_up(&mut self, options: ReplyOptions) -> BotResult<()>;

    /// Remove the most recent response. Does nothing if there is none.
    async fn delete_reply(&mut self) -> BotResult<()>;
}
