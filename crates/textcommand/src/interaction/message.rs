//! Interaction backed by an ordinary chat message.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BotResult;

use super::reply::{InvocationContext, MessageHandle, ReplyOptions};
use super::Interaction;

/// Message operations the chat client must provide.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    /// Send `options` as a reply to `target`, returning the new message.
    async fn send_reply(
        &self,
        target: MessageHandle,
        options: &ReplyOptions,
    ) -> BotResult<MessageHandle>;

    async fn edit_message(&self, handle: MessageHandle, options: &ReplyOptions) -> BotResult<()>;

    async fn delete_message(&self, handle: MessageHandle) -> BotResult<()>;
}

/// Answers a text command by replying to, editing, and deleting messages.
pub struct MessageInteraction {
    transport: Arc<dyn MessageTransport>,
    source: MessageHandle,
    context: InvocationContext,
    thinking_text: String,
    replied: bool,
    deferred: bool,
    last_message: Option<MessageHandle>,
}

impl MessageInteraction {
    /// Wrap the message at `source`. `thinking_text` is the placeholder used by deferred replies.
    pub fn new(
        transport: Arc<dyn MessageTransport>,
        source: MessageHandle,
        context: InvocationContext,
        thinking_text: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            source,
            context,
            thinking_text: thinking_text.into(),
            replied: false,
            deferred: false,
            last_message: None,
        }
    }

    pub fn source(&self) -> MessageHandle {
        self.source
    }

    pub fn last_message(&self) -> Option<MessageHandle> {
        self.last_message
    }
}

#[async_trait]
impl Interaction for MessageInteraction {
    fn context(&self) -> &InvocationContext {
        &self.context
    }

    fn replied(&self) -> bool {
        self.replied
    }

    fn deferred(&self) -> bool {
        self.deferred
    }

    async fn reply(&mut self, options: ReplyOptions) -> BotResult<()> {
        let sent = self.transport.send_reply(self.source, &options).await?;
        self.replied = true;
        self.last_message = Some(sent);
        Ok(())
    }

    async fn defer_reply(&mut self, options: Option<ReplyOptions>) -> BotResult<()> {
        let mut options = options.unwrap_or_default();
        if options.content.is_none() {
            options.content = Some(self.thinking_text.clone());
        }
        let sent = self.transport.send_reply(self.source, &options).await?;
        self.deferred = true;
        self.last_message = Some(sent);
        Ok(())
    }

    async fn edit_reply(&mut self, options: ReplyOptions) -> BotResult<()> {
        let Some(last) = self.last_message else {
            tracing::debug!("edit_reply with no outgoing message");
            return Ok(());
        };
        self.transport.edit_message(last, &options).await?;
        self.replied = true;
        Ok(())
    }

    async fn follow_up(&mut self, options: ReplyOptions) -> BotResult<()> {
        match self.last_message {
            Some(last) if self.deferred => {
                self.transport.edit_message(last, &options).await?;
            }
            Some(last) => {
                let sent = self.transport.send_reply(last, &options).await?;
                self.last_message = Some(sent);
            }
            None => {
                let sent = self.transport.send_reply(self.source, &options).await?;
                self.last_message = Some(sent);
            }
        }
        Ok(())
    }

    async fn delete_reply(&mut self) -> BotResult<()> {
        let Some(last) = self.last_message.take() else {
            tracing::debug!("delete_reply with no outgoing message");
            return Ok(());
        };
        self.transport.delete_message(last).await
    }
}
