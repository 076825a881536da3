use crate::arguments::ArgumentType;
use crate::entity::EntityKind;

/// A failure to turn user text into command arguments.
///
/// The message is meant to be shown to the invoking user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParsingFailure {
    message: String,
}

impl ParsingFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// A token was present but does not fit a required slot.
    pub fn invalid_value(token: &str, slot: &str, kind: ArgumentType) -> Self {
        Self::new(format!("Invalid value {token} for value `{slot}` of type {kind}"))
    }

    /// The input ran out before a required slot was filled.
    pub fn missing_value(slot: &str, kind: ArgumentType) -> Self {
        Self::new(format!("Missing value for value `{slot}` of type {kind}"))
    }

    pub fn not_found(kind: EntityKind) -> Self {
        Self::new(format!("{kind} not found"))
    }

    /// The token looked right but could not be converted.
    pub fn unresolvable(token: &str, slot: &str, kind: ArgumentType) -> Self {
        Self::new(format!(
            "Error resolving value {token} for value `{slot}` of type {kind}"
        ))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Why a single token could not be converted to a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The mention is well formed but the entity is not cached.
    #[error("{0} not found")]
    NotFound(EntityKind),
    /// The token cannot be read as the requested type.
    #[error("cannot read {token} as {kind}")]
    Malformed { token: String, kind: ArgumentType },
}

/// Unified error type for the textcommand crate.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error(transparent)]
    Parsing(#[from] ParsingFailure),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Handler error: {0}")]
    Handler(String),
}

/// Result type alias using [`BotError`].
pub type BotResult<T> = Result<T, BotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_names_token_slot_and_type() {
        let failure = ParsingFailure::invalid_value("abc", "count", ArgumentType::Number);
        assert_eq!(
            failure.to_string(),
            "Invalid value abc for value `count` of type NUMBER"
        );
    }

    #[test]
    fn not_found_names_entity_kind() {
        assert_eq!(
            ParsingFailure::not_found(EntityKind::Channel).message(),
            "Channel not found"
        );
    }

    #[test]
    fn resolve_error_messages() {
        assert_eq!(
            ResolveError::NotFound(EntityKind::Role).to_string(),
            "Role not found"
        );
        let malformed = ResolveError::Malformed {
            token: "abc".to_string(),
            kind: ArgumentType::Number,
        };
        assert_eq!(malformed.to_string(), "cannot read abc as NUMBER");
    }

    #[test]
    fn parsing_failure_converts_into_bot_error() {
        let error: BotError = ParsingFailure::new("nope").into();
        assert!(matches!(error, BotError::Parsing(_)));
        assert_eq!(error.to_string(), "nope");
    }
}
