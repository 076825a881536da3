use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared type of an argument slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ArgumentType {
    Boolean,
    Channel,
    Number,
    Role,
    String,
    User,
}

impl ArgumentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ArgumentType::Boolean => "BOOLEAN",
            ArgumentType::Channel => "CHANNEL",
            ArgumentType::Number => "NUMBER",
            ArgumentType::Role => "ROLE",
            ArgumentType::String => "STRING",
            ArgumentType::User => "USER",
        }
    }
}

impl fmt::Display for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An allowed literal value for a slot, with an optional display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub value: String,
}

impl Choice {
    pub fn labelled(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            value: value.into(),
        }
    }

    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

impl From<&str> for Choice {
    fn from(value: &str) -> Self {
        Self {
            label: None,
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentSpec {
    #[serde(rename = "type")]
    pub kind: ArgumentType,
    pub description: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl ArgumentSpec {
    pub fn new(kind: ArgumentType, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            optional: false,
            choices: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn with_choices<I, C>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Choice>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }
}

/// Ordered mapping from slot name to spec.
///
/// Declaration order is consumption order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentSchema {
    slots: Vec<(String, ArgumentSpec)>,
}

impl ArgumentSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a slot. Declaring an existing name replaces its spec and keeps its position.
    pub fn argument(mut self, name: impl Into<String>, spec: ArgumentSpec) -> Self {
        let name = name.into();
        match self.slots.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = spec,
            None => self.slots.push((name, spec)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentSpec> {
        self.slots
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, spec)| spec)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgumentSpec)> {
        self.slots.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
