//! Interaction backed by the platform's own command interactions.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BotResult;

use super::reply::{InvocationContext, ReplyOptions};
use super::Interaction;

/// Response endpoints of a single platform interaction.
#[async_trait]
pub trait InteractionApi: Send + Sync {
    async fn create_response(&self, options: &ReplyOptions) -> BotResult<()>;

    /// Acknowledge now, answer later. The platform shows its own loading state.
    async fn defer_response(&self, ephemeral: bool) -> BotResult<()>;

    async fn edit_original(&self, options: &ReplyOptions) -> BotResult<()>;

    async fn create_followup(&self, options: &ReplyOptions) -> BotResult<()>;

    async fn delete_original(&self) -> BotResult<()>;
}

pub struct NativeInteraction {
    api: Arc<dyn InteractionApi>,
    context: InvocationContext,
    replied: bool,
    deferred: bool,
}

impl NativeInteraction {
    pub fn new(api: Arc<dyn InteractionApi>, context: InvocationContext) -> Self {
        Self {
            api,
            context,
            replied: false,
            deferred: false,
        }
    }

    fn has_response(&self) -> bool {
        self.replied || self.deferred
    }
}

#[async_trait]
impl Interaction for NativeInteraction {
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
        self.api.create_response(&options).await?;
        self.replied = true;
        Ok(())
    }

    async fn defer_reply(&mut self, options: Option<ReplyOptions>) -> BotResult<()> {
        let ephemeral = options.is_some_and(|options| options.ephemeral);
        self.api.defer_response(ephemeral).await?;
        self.deferred = true;
        Ok(())
    }

    async fn edit_reply(&mut self, options: ReplyOptions) -> BotResult<()> {
        if !self.has_response() {
            tracing::debug!("edit_reply before any response");
            return Ok(());
        }
        self.api.edit_original(&options).await?;
        self.replied = true;
        Ok(())
    }

    async fn follow_up(&mut self, options: ReplyOptions) -> BotResult<()> {
        if !self.has_response() {
            return self.reply(options).await;
        }
        if self.deferred && !self.replied {
            self.api.edit_original(&options).await?;
            self.replied = true;
            return Ok(());
        }
        self.api.create_followup(&options).await
    }

    async fn delete_reply(&mut self) -> BotResult<()> {
        if !self.has_response() {
            tracing::debug!("delete_reply before any response");
            return Ok(());
        }
        self.api.delete_original().await?;
        self.replied = false;
        self.deferred = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::message::tests::context;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn record(&self, call: String) -> BotResult<()> {
            self.calls.lock().push(call);
            Ok(())
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }
    }

    fn text(options: &ReplyOptions) -> &str {
        options.content.as_deref().unwrap_or("")
    }

    #[async_trait]
    impl InteractionApi for RecordingApi {
        async fn create_response(&self, options: &ReplyOptions) -> BotResult<()> {
            self.record(format!("create:{}", text(options)))
        }

        async fn defer_response(&self, ephemeral: bool) -> BotResult<()> {
            self.record(format!("defer:{ephemeral}"))
        }

        async fn edit_original(&self, options: &ReplyOptions) -> BotResult<()> {
            self.record(format!("edit:{}", text(options)))
        }

        async fn create_followup(&self, options: &ReplyOptions) -> BotResult<()> {
            self.record(format!("followup:{}", text(options)))
        }

        async fn delete_original(&self) -> BotResult<()> {
            self.record("delete".to_string())
        }
    }

    fn interaction(api: &Arc<RecordingApi>) -> NativeInteraction {
        NativeInteraction::new(api.clone(), context())
    }

    #[tokio::test]
    async fn reply_then_follow_up_creates_followup() {
        let api = Arc::new(RecordingApi::default());
        let mut interaction = interaction(&api);

        interaction.reply("one".into()).await.expect("reply");
        interaction.follow_up("two".into()).await.expect("follow up");

        assert!(interaction.replied());
        assert_eq!(api.calls(), vec!["create:one", "followup:two"]);
    }

    #[tokio::test]
    async fn follow_up_after_defer_fills_the_placeholder() {
        let api = Arc::new(RecordingApi::default());
        let mut interaction = interaction(&api);

        interaction
            .defer_reply(Some(ReplyOptions::ephemeral("")))
            .await
            .expect("defer");
        interaction.follow_up("result".into()).await.expect("follow up");
        interaction.follow_up("more".into()).await.expect("second follow up");

        assert!(interaction.deferred());
        assert_eq!(
            api.calls(),
            vec!["defer:true", "edit:result", "followup:more"]
        );
    }

    #[tokio::test]
    async fn follow_up_without_response_replies() {
        let api = Arc::new(RecordingApi::default());
        let mut interaction = interaction(&api);

        interaction.follow_up("hello".into()).await.expect("follow up");

        assert!(interaction.replied());
        assert_eq!(api.calls(), vec!["create:hello"]);
    }

    #[tokio::test]
    async fn edit_and_delete_before_response_are_noops() {
        let api = Arc::new(RecordingApi::default());
        let mut interaction = interaction(&api);

        interaction.edit_reply("x".into()).await.expect("edit");
        interaction.delete_reply().await.expect("delete");

        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn delete_resets_response_state() {
        let api = Arc::new(RecordingApi::default());
        let mut interaction = interaction(&api);

        interaction.reply("bye".into()).await.expect("reply");
        interaction.delete_reply().await.expect("delete");

        assert!(!interaction.replied());
        assert_eq!(api.calls(), vec!["create:bye", "delete"]);
    }
}
