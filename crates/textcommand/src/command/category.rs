use std::sync::Arc;

use super::definition::Command;

/// A named group of commands.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub label: String,
    pub description: Option<String>,
    pub emoji: Option<String>,
    commands: Vec<Arc<Command>>,
}

impl Category {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            description: None,
            emoji: None,
            commands: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn add_command(&mut self, command: Command) {
        self.commands.push(Arc::new(command));
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.add_command(command);
        self
    }

    /// Find a command by name first, then by alias.
    pub fn get_command(&self, name: &str) -> Option<Arc<Command>> {
        self.commands
            .iter()
            .find(|command| command.name.eq_ignore_ascii_case(name))
            .or_else(|| self.commands.iter().find(|command| command.matches(name)))
            .cloned()
    }

    pub fn commands(&self) -> &[Arc<Command>] {
        &self.commands
    }

    /// Remove the commands `predicate` selects, returning them.
    pub(crate) fn remove_commands_where<F>(&mut self, mut predicate: F) -> Vec<Arc<Command>>
    where
        F: FnMut(&Command) -> bool,
    {
        let (dropped, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.commands)
            .into_iter()
            .partition(|command| predicate(&**command));
        self.commands = kept;
        dropped
    }

    /// Help listing: a header line, then the command names.
    ///
    /// Empty categories produce an empty string unless `full` is set.
    pub fn help_text(&self, full: bool) -> String {
        if !full && self.commands.is_empty() {
            return String::new();
        }

        let mut header = String::new();
        if let Some(emoji) = &self.emoji {
            header.push_str(emoji);
            header.push(' ');
        }
        header.push_str(&format!("**{}**", self.label));
        if let Some(description) = &self.description {
            header.push_str(&format!(" - {description}"));
        }

        let names: Vec<&str> = self
            .commands
            .iter()
            .map(|command| command.name.as_str())
            .collect();
        let listing = if names.is_empty() {
            "No commands".to_string()
        } else {
            names.join(", ")
        };

        format!("{header}\n> {listing}")
    }
}
