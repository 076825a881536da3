use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{BotError, BotResult};

pub const BOT_CONFIG_FILENAME: &str = "bot.json";
pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_THINKING_MESSAGE: &str = "{bot} is thinking...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Text a message must start with to be read as a command.
    pub prefix: String,
    pub default_guild: Option<String>,
    pub strict: bool,
    pub disable: DisabledEntries,
    /// Placeholder for deferred text replies. `{bot}` is replaced with the bot's name.
    pub thinking_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisabledEntries {
    pub commands: Vec<String>,
    pub categories: Vec<String>,
    pub events: Vec<String>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            default_guild: None,
            strict: true,
            disable: DisabledEntries::default(),
            thinking_message: DEFAULT_THINKING_MESSAGE.to_string(),
        }
    }
}

impl BotConfig {
    /// Layer `overrides` on top of this config.
    ///
    /// Scalar fields are taken from `overrides`; disable lists are combined.
    pub fn merge(self, overrides: BotConfig) -> BotConfig {
        BotConfig {
            prefix: overrides.prefix,
            default_guild: overrides.default_guild.or(self.default_guild),
            strict: overrides.strict,
            disable: DisabledEntries {
                commands: union(self.disable.commands, overrides.disable.commands),
                categories: union(self.disable.categories, overrides.disable.categories),
                events: union(self.disable.events, overrides.disable.events),
            },
            thinking_message: overrides.thinking_message,
        }
    }

    pub fn is_command_disabled(&self, name: &str) -> bool {
        contains_ignore_case(&self.disable.commands, name)
    }

    pub fn is_category_disabled(&self, name: &str) -> bool {
        contains_ignore_case(&self.disable.categories, name)
    }

    pub fn thinking_text(&self, bot_name: &str) -> String {
        self.thinking_message.replace("{bot}", bot_name)
    }
}

fn union(mut base: Vec<String>, extra: Vec<String>) -> Vec<String> {
    for item in extra {
        if !base.contains(&item) {
            base.push(item);
        }
    }
    base
}

fn contains_ignore_case(list: &[String], name: &str) -> bool {
    list.iter().any(|entry| entry.eq_ignore_ascii_case(name))
}

pub fn load_or_create_bot_config(dir: &Path) -> BotResult<BotConfig> {
    std::fs::create_dir_all(dir).map_err(|error| {
        BotError::Config(format!(
            "failed to create config directory {}: {error}",
            dir.display()
        ))
    })?;

    let path = bot_config_path(dir);
    if !path.exists() {
        let config = BotConfig::default();
        write_bot_config(&path, &config)?;
        return Ok(config);
    }

    let data = std::fs::read_to_string(&path).map_err(|error| {
        BotError::Config(format!(
            "failed to read bot config {}: {error}",
            path.display()
        ))
    })?;
    serde_json::from_str(&data).map_err(|error| {
        BotError::Config(format!(
            "failed to parse bot config {}: {error}",
            path.display()
        ))
    })
}

pub fn bot_config_path(dir: &Path) -> PathBuf {
    dir.join(BOT_CONFIG_FILENAME)
}

fn write_bot_config(path: &Path, config: &BotConfig) -> BotResult<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| {
        BotError::Config(format!(
            "failed to serialize bot config {}: {error}",
            path.display()
        ))
    })?;
    std::fs::write(path, data).map_err(|error| {
        BotError::Config(format!(
            "failed to write bot config {}: {error}",
            path.display()
        ))
    })?;
    Ok(())
}
