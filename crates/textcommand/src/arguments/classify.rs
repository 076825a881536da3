//! Surface-form type inference for single tokens.

use std::sync::LazyLock;

use regex::Regex;

use super::schema::ArgumentType;

pub static ROLE_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@&([0-9]+)>").expect("role mention pattern"));
pub static USER_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<@!?([0-9]+)>").expect("user mention pattern"));
pub static CHANNEL_MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<#([0-9]+)>").expect("channel mention pattern"));
// Unanchored: any token containing a digit classifies as a number.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?[0-9]").expect("number pattern"));
static BOOLEAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:yes|no|oui|non|y|n|on|off)$").expect("boolean pattern")
});

/// Infer the most specific type a token could be.
///
/// `None` in means the stream is exhausted, and is the only way to get `None` out.
/// Rules are tried in order and the first match wins: role mention, user
/// mention, channel mention, number, boolean word, then string.
pub fn classify(token: Option<&str>) -> Option<ArgumentType> {
    let token = token?;
    let kind = if ROLE_MENTION.is_match(token) {
        ArgumentType::Role
    } else if USER_MENTION.is_match(token) {
        ArgumentType::User
    } else if CHANNEL_MENTION.is_match(token) {
        ArgumentType::Channel
    } else if NUMBER.is_match(token) {
        ArgumentType::Number
    } else if BOOLEAN.is_match(token) {
        ArgumentType::Boolean
    } else {
        ArgumentType::String
    };
    Some(kind)
}

/// Extract the digits of the first mention of the given pattern in `token`.
pub(crate) fn mention_digits<'a>(pattern: &Regex, token: &'a str) -> Option<&'a str> {
    pattern
        .captures(token)
        .and_then(|captures| captures.get(1))
        .map(|digits| digits.as_str())
}
