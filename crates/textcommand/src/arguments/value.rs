use std::collections::HashMap;

use serde::Serialize;

use crate::entity::{Channel, Role, User};

/// A typed argument value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "UPPERCASE")]
pub enum ArgumentValue {
    Boolean(bool),
    Channel(Channel),
    Number(i64),
    Role(Role),
    String(String),
    User(User),
}

impl ArgumentValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArgumentValue::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            ArgumentValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_role(&self) -> Option<&Role> {
        match self {
            ArgumentValue::Role(role) => Some(role),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&User> {
        match self {
            ArgumentValue::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn as_channel(&self) -> Option<&Channel> {
        match self {
            ArgumentValue::Channel(channel) => Some(channel),
            _ => None,
        }
    }
}

/// Values keyed by slot name. Slots that matched nothing are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedArguments {
    values: HashMap<String, ArgumentValue>,
}

impl ResolvedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: &str, value: ArgumentValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(ArgumentValue::as_bool)
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(ArgumentValue::as_number)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ArgumentValue::as_str)
    }

    pub fn role(&self, name: &str) -> Option<&Role> {
        self.get(name).and_then(ArgumentValue::as_role)
    }

    pub fn user(&self, name: &str) -> Option<&User> {
        self.get(name).and_then(ArgumentValue::as_user)
    }

    pub fn channel(&self, name: &str) -> Option<&Channel> {
        self.get(name).and_then(ArgumentValue::as_channel)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
