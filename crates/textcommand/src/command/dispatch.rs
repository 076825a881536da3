use std::sync::Arc;

use crate::arguments::{resolve_arguments, TokenStream};
use crate::entity::EntityLookup;
use crate::error::BotResult;
use crate::interaction::{
    Interaction, InvocationContext, MessageHandle, MessageInteraction, MessageTransport,
    ReplyOptions,
};

use super::parser::parse_invocation;
use super::registry::CommandRegistry;

/// What happened to a message handed to the [`Dispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not a command invocation.
    Ignored,
    /// Prefixed, but no command has this name.
    UnknownCommand(String),
    /// The arguments did not parse; the user was told why.
    Rejected(String),
    /// The handler ran to completion.
    Completed(String),
}

/// Routes prefixed text messages to registered commands.
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
    lookup: Arc<dyn EntityLookup>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>, lookup: Arc<dyn EntityLookup>) -> Self {
        Self { registry, lookup }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Wrap an incoming text message, using the configured placeholder for deferred replies.
    pub fn message_interaction(
        &self,
        transport: Arc<dyn MessageTransport>,
        source: MessageHandle,
        context: InvocationContext,
        bot_name: &str,
    ) -> MessageInteraction {
        let thinking_text = self.registry.config().thinking_text(bot_name);
        MessageInteraction::new(transport, source, context, thinking_text)
    }

    /// Parse `content`, resolve its arguments, and run the matching command.
    ///
    /// Argument failures are answered through `interaction` and reported as
    /// [`DispatchOutcome::Rejected`]. Handler and transport errors propagate.
    pub async fn dispatch(
        &self,
        content: &str,
        interaction: &mut dyn Interaction,
    ) -> BotResult<DispatchOutcome> {
        let prefix = &self.registry.config().prefix;
        let Some(invocation) = parse_invocation(content, prefix) else {
            return Ok(DispatchOutcome::Ignored);
        };

        let Some(command) = self.registry.get(&invocation.name) else {
            tracing::debug!(name = %invocation.name, "unknown command");
            return Ok(DispatchOutcome::UnknownCommand(invocation.name));
        };

        tracing::info!(
            command = %command.name,
            user = interaction.context().user.id,
            channel = interaction.context().channel_id,
            "dispatching text command"
        );

        let tokens = TokenStream::from_body(invocation.body);
        let args = match resolve_arguments(&command.args, tokens, self.lookup.as_ref()) {
            Ok(args) => args,
            Err(failure) => {
                tracing::info!(command = %command.name, "argument parsing failed: {failure}");
                let message = failure.message().to_string();
                interaction.reply(ReplyOptions::text(message.clone())).await?;
                return Ok(DispatchOutcome::Rejected(message));
            }
        };

        if let Err(error) = command.handler().run(interaction, args).await {
            tracing::warn!(command = %command.name, "command failed: {error}");
            return Err(error);
        }

        Ok(DispatchOutcome::Completed(command.name.clone()))
    }
}
