use std::collections::HashMap;
use std::sync::Arc;

use crate::config::BotConfig;

use super::category::Category;
use super::definition::Command;

/// Top-level commands plus categories, looked up by name or alias.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    config: BotConfig,
    commands: HashMap<String, Arc<Command>>,
    order: Vec<String>,
    categories: Vec<Category>,
}

impl CommandRegistry {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register a top-level command. Returns `false` if the config disables it.
    ///
    /// A later command with the same name replaces the earlier one.
    pub fn register(&mut self, command: Command) -> bool {
        if self.config.is_command_disabled(&command.name) {
            tracing::info!(command = %command.name, "command disabled, skipping");
            return false;
        }
        tracing::debug!(command = %command.name, "{}{} registered", self.config.prefix, command.name);
        let name = command.name.clone();
        if self.commands.insert(name.clone(), Arc::new(command)).is_none() {
            self.order.push(name);
        }
        true
    }

    /// Register a category. Returns `false` if the config disables it.
    ///
    /// Commands inside the category that the config disables are dropped.
    pub fn register_category(&mut self, mut category: Category) -> bool {
        if self.config.is_category_disabled(&category.name) {
            tracing::info!(category = %category.name, "category disabled, skipping");
            return false;
        }
        let config = &self.config;
        let disabled =
            category.remove_commands_where(|command| config.is_command_disabled(&command.name));
        for command in disabled {
            tracing::info!(
                category = %category.name,
                command = %command.name,
                "command disabled, skipping"
            );
        }
        tracing::debug!(
            category = %category.name,
            commands = category.commands().len(),
            "category {} registered",
            category.label
        );
        self.categories.push(category);
        true
    }

    /// Find a command: top-level by name, then top-level by alias, then each category in order.
    pub fn get(&self, name: &str) -> Option<Arc<Command>> {
        let name = name.to_lowercase();
        if let Some(command) = self.commands.get(&name) {
            return Some(command.clone());
        }
        if let Some(command) = self
            .order
            .iter()
            .filter_map(|key| self.commands.get(key))
            .find(|command| command.matches(&name))
        {
            return Some(command.clone());
        }
        self.categories
            .iter()
            .find_map(|category| category.get_command(&name))
    }

    /// Every command, top-level first in registration order, then by category.
    pub fn all_commands(&self) -> Vec<Arc<Command>> {
        let mut commands: Vec<Arc<Command>> = self
            .order
            .iter()
            .filter_map(|key| self.commands.get(key).cloned())
            .collect();
        for category in &self.categories {
            commands.extend(category.commands().iter().cloned());
        }
        commands
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.commands.len()
            + self
                .categories
                .iter()
                .map(|category| category.commands().len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::definition::tests::noop;

    fn names(commands: &[Arc<Command>]) -> Vec<&str> {
        commands.iter().map(|command| command.name.as_str()).collect()
    }

    #[test]
    fn top_level_before_categories() {
        let mut registry = CommandRegistry::new(BotConfig::default());
        registry.register_category(
            Category::new("mod", "Moderation").with_command(noop("ban").alias("b")),
        );
        registry.register(noop("ping").alias("b"));

        assert_eq!(registry.get("b").map(|c| c.name.clone()), Some("ping".to_string()));
        assert_eq!(registry.get("BAN").map(|c| c.name.clone()), Some("ban".to_string()));
        assert!(registry.get("kick").is_none());
        assert_eq!(names(&registry.all_commands()), vec!["ping", "ban"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn disabled_entries_are_skipped() {
        let mut config = BotConfig::default();
        config.disable.commands = vec!["ping".to_string()];
        config.disable.categories = vec!["fun".to_string()];
        let mut registry = CommandRegistry::new(config);

        assert!(!registry.register(noop("ping")));
        assert!(!registry.register_category(Category::new("fun", "Fun").with_command(noop("roll"))));
        assert!(registry.register(noop("help")));

        assert!(registry.get("ping").is_none());
        assert!(registry.get("roll").is_none());
        assert!(registry.categories().is_empty());
        assert_eq!(names(&registry.all_commands()), vec!["help"]);
    }

    #[test]
    fn disabled_commands_inside_categories_are_skipped() {
        let mut config = BotConfig::default();
        config.disable.commands = vec!["roll".to_string()];
        let mut registry = CommandRegistry::new(config);

        assert!(registry.register_category(
            Category::new("fun", "Fun")
                .with_command(noop("roll").alias("dice"))
                .with_command(noop("flip")),
        ));

        assert!(registry.get("roll").is_none());
        assert!(registry.get("dice").is_none());
        assert!(registry.get("flip").is_some());
        assert_eq!(names(&registry.all_commands()), vec!["flip"]);
    }

    #[test]
    fn re_registering_replaces() {
        let mut registry = CommandRegistry::new(BotConfig::default());
        registry.register(noop("ping"));
        registry.register(noop("ping").alias("p"));

        assert_eq!(registry.len(), 1);
        assert!(registry.get("p").is_some());
        assert!(!registry.is_empty());
    }
}
