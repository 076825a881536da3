//! The argument walker: one left-to-right pass over the schema.

use std::collections::VecDeque;

use crate::entity::EntityLookup;
use crate::error::{ParsingFailure, ResolveError};

use super::classify::classify;
use super::resolve::resolve_value;
use super::schema::{ArgumentSchema, ArgumentType};
use super::value::{ArgumentValue, ResolvedArguments};

/// Whitespace-delimited tokens of a command body, consumed front to back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: VecDeque<&'a str>,
}

impl<'a> TokenStream<'a> {
    /// Split a command body (command name already stripped) on runs of whitespace.
    pub fn from_body(body: &'a str) -> Self {
        Self {
            tokens: body.split_whitespace().collect(),
        }
    }

    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.front().copied()
    }

    pub fn shift(&mut self) -> Option<&'a str> {
        self.tokens.pop_front()
    }

    /// Consume every remaining token.
    pub fn take_rest(&mut self) -> Vec<&'a str> {
        self.tokens.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Resolve `tokens` against `schema`.
///
/// Slots are visited in declaration order and each token is consumed by at most
/// one slot. A non-string slot takes exactly one token whose inferred type
/// matches its own. A string slot takes the next token and every token after
/// it, whatever follows in the schema. When a slot cannot be filled, an
/// optional slot stops all further consumption (later slots stay unset, even
/// required ones) and a required slot fails the whole resolution.
pub fn resolve_arguments(
    schema: &ArgumentSchema,
    mut tokens: TokenStream<'_>,
    lookup: &dyn EntityLookup,
) -> Result<ResolvedArguments, ParsingFailure> {
    let mut resolved = ResolvedArguments::new();
    if schema.is_empty() {
        return Ok(resolved);
    }

    for (name, spec) in schema.iter() {
        let Some(token) = tokens.peek() else {
            if spec.optional {
                tracing::debug!(slot = name, "input exhausted at optional slot");
                break;
            }
            return Err(ParsingFailure::missing_value(name, spec.kind));
        };

        if spec.kind == ArgumentType::String {
            let text = tokens.take_rest().join(" ");
            resolved.insert(name, ArgumentValue::String(text));
            continue;
        }

        if classify(Some(token)) != Some(spec.kind) {
            if spec.optional {
                tracing::debug!(slot = name, token, "optional slot did not match, halting");
                break;
            }
            return Err(ParsingFailure::invalid_value(token, name, spec.kind));
        }

        tokens.shift();
        let value = resolve_value(lookup, token, spec.kind).map_err(|error| match error {
            ResolveError::NotFound(kind) => ParsingFailure::not_found(kind),
            ResolveError::Malformed { token, kind } => {
                ParsingFailure::unresolvable(&token, name, kind)
            }
        })?;
        resolved.insert(name, value);
    }

    if !tokens.is_empty() {
        tracing::debug!(leftover = tokens.len(), "ignoring tokens past the last slot");
    }

    Ok(resolved)
}
