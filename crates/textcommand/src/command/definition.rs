use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::arguments::{ArgumentSchema, ResolvedArguments};
use crate::error::BotResult;
use crate::interaction::Interaction;

/// The body of a command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn run(
        &self,
        interaction: &mut dyn Interaction,
        args: ResolvedArguments,
    ) -> BotResult<()>;
}

/// A registered command: its names, help text, argument schema, and handler.
#[derive(Clone)]
pub struct Command {
    pub name: String,
    pub aliases: Vec<String>,
    pub description: Option<String>,
    pub usage: Option<String>,
    pub examples: Vec<String>,
    pub args: ArgumentSchema,
    handler: Arc<dyn CommandHandler>,
}

impl Command {
    pub fn new(name: impl Into<String>, handler: Arc<dyn CommandHandler>) -> Self {
        Self {
            name: name.into().to_lowercase(),
            aliases: Vec::new(),
            description: None,
            usage: None,
            examples: Vec::new(),
            args: ArgumentSchema::new(),
            handler,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = Some(usage.into());
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn args(mut self, args: ArgumentSchema) -> Self {
        self.args = args;
        self
    }

    /// Whether `name` is this command's name or one of its aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }

    pub fn handler(&self) -> Arc<dyn CommandHandler> {
        self.handler.clone()
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("description", &self.description)
            .field("usage", &self.usage)
            .field("examples", &self.examples)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::arguments::{ArgumentSpec, ArgumentType};

    pub(crate) struct Noop;

    #[async_trait]
    impl CommandHandler for Noop {
        async fn run(
            &self,
            _interaction: &mut dyn Interaction,
            _args: ResolvedArguments,
        ) -> BotResult<()> {
            Ok(())
        }
    }

    pub(crate) fn noop(name: &str) -> Command {
        Command::new(name, Arc::new(Noop))
    }

    #[test]
    fn matches_name_and_aliases_ignoring_case() {
        let command = noop("Remind").alias("rm").alias("later");
        assert_eq!(command.name, "remind");
        assert!(command.matches("REMIND"));
        assert!(command.matches("rm"));
        assert!(command.matches("Later"));
        assert!(!command.matches("remove"));
    }

    #[test]
    fn builder_sets_help_and_schema() {
        let command = noop("echo")
            .description("Repeat text")
            .usage("echo <text>")
            .example("echo hello")
            .args(ArgumentSchema::new().argument(
                "text",
                ArgumentSpec::new(ArgumentType::String, "what to say"),
            ));

        assert_eq!(command.description.as_deref(), Some("Repeat text"));
        assert_eq!(command.examples, vec!["echo hello"]);
        assert_eq!(command.args.len(), 1);
        assert!(format!("{command:?}").contains("echo"));
    }
}
