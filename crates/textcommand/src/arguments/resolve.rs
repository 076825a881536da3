//! Conversion of a classified token into a concrete value.

use crate::entity::{EntityKind, EntityLookup, Snowflake};
use crate::error::ResolveError;

use super::classify::{mention_digits, CHANNEL_MENTION, ROLE_MENTION, USER_MENTION};
use super::schema::ArgumentType;
use super::value::ArgumentValue;

/// Convert `token` to a value of type `kind`, looking mentions up in `lookup`.
pub fn resolve_value(
    lookup: &dyn EntityLookup,
    token: &str,
    kind: ArgumentType,
) -> Result<ArgumentValue, ResolveError> {
    match kind {
        ArgumentType::Boolean => Ok(ArgumentValue::Boolean(is_affirmative(token))),
        // Deliberate departure from a parseInt-style reader, which yields NaN here:
        // a number slot with no leading integer (e.g. "abc123") is an error instead.
        ArgumentType::Number => parse_leading_integer(token)
            .map(ArgumentValue::Number)
            .ok_or_else(|| malformed(token, kind)),
        ArgumentType::String => Ok(ArgumentValue::String(token.to_string())),
        ArgumentType::Role => {
            let id = mention_id(token, kind, EntityKind::Role)?;
            lookup
                .role(id)
                .map(ArgumentValue::Role)
                .ok_or(ResolveError::NotFound(EntityKind::Role))
        }
        ArgumentType::User => {
            let id = mention_id(token, kind, EntityKind::User)?;
            lookup
                .user(id)
                .map(ArgumentValue::User)
                .ok_or(ResolveError::NotFound(EntityKind::User))
        }
        ArgumentType::Channel => {
            let id = mention_id(token, kind, EntityKind::Channel)?;
            lookup
                .channel(id)
                .map(ArgumentValue::Channel)
                .ok_or(ResolveError::NotFound(EntityKind::Channel))
        }
    }
}

/// Anything starting with "y", plus "oui" and "on", is true. Everything else is false.
fn is_affirmative(token: &str) -> bool {
    let lowered = token.to_lowercase();
    lowered.starts_with('y') || lowered == "oui" || lowered == "on"
}

fn mention_id(
    token: &str,
    kind: ArgumentType,
    entity: EntityKind,
) -> Result<Snowflake, ResolveError> {
    let pattern = match entity {
        EntityKind::Role => &*ROLE_MENTION,
        EntityKind::User => &*USER_MENTION,
        EntityKind::Channel => &*CHANNEL_MENTION,
    };
    let digits = mention_digits(pattern, token).ok_or_else(|| malformed(token, kind))?;
    // Too many digits for a snowflake means no such entity can be cached.
    digits.parse().map_err(|_| ResolveError::NotFound(entity))
}

/// Read an optionally signed base-10 integer prefix, ignoring leading whitespace.
fn parse_leading_integer(token: &str) -> Option<i64> {
    let trimmed = token.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    if negative {
        format!("-{digits}").parse().ok()
    } else {
        digits.parse().ok()
    }
}

fn malformed(token: &str, kind: ArgumentType) -> ResolveError {
    ResolveError::Malformed {
        token: token.to_string(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Channel, EntityCache, Role, User};

    fn cache() -> EntityCache {
        let cache = EntityCache::new();
        cache.insert_role(Role {
            id: 10,
            name: "mods".to_string(),
        });
        cache.insert_user(User {
            id: 20,
            username: "ana".to_string(),
            bot: false,
        });
        cache.insert_channel(Channel {
            id: 30,
            name: "general".to_string(),
        });
        cache
    }

    #[test]
    fn booleans_are_permissive() {
        let cache = cache();
        for word in ["yes", "y", "Yeah", "oui", "ON"] {
            assert_eq!(
                resolve_value(&cache, word, ArgumentType::Boolean),
                Ok(ArgumentValue::Boolean(true)),
                "{word}"
            );
        }
        for word in ["no", "n", "off", "non", "whatever"] {
            assert_eq!(
                resolve_value(&cache, word, ArgumentType::Boolean),
                Ok(ArgumentValue::Boolean(false)),
                "{word}"
            );
        }
    }

    #[test]
    fn numbers_read_the_leading_integer() {
        let cache = cache();
        assert_eq!(
            resolve_value(&cache, "42", ArgumentType::Number),
            Ok(ArgumentValue::Number(42))
        );
        assert_eq!(
            resolve_value(&cache, "-17", ArgumentType::Number),
            Ok(ArgumentValue::Number(-17))
        );
        assert_eq!(
            resolve_value(&cache, "12abc", ArgumentType::Number),
            Ok(ArgumentValue::Number(12))
        );
    }

    #[test]
    fn numbers_without_a_leading_integer_are_malformed() {
        let cache = cache();
        assert!(matches!(
            resolve_value(&cache, "abc123", ArgumentType::Number),
            Err(ResolveError::Malformed { .. })
        ));
        assert!(matches!(
            resolve_value(&cache, "99999999999999999999", ArgumentType::Number),
            Err(ResolveError::Malformed { .. })
        ));
    }

    #[test]
    fn strings_are_verbatim() {
        assert_eq!(
            resolve_value(&cache(), "<b>", ArgumentType::String),
            Ok(ArgumentValue::String("<b>".to_string()))
        );
    }

    #[test]
    fn mentions_resolve_through_the_cache() {
        let cache = cache();
        let role = resolve_value(&cache, "<@&10>", ArgumentType::Role).expect("role");
        assert_eq!(role.as_role().map(|r| r.name.as_str()), Some("mods"));
        let user = resolve_value(&cache, "<@!20>", ArgumentType::User).expect("user");
        assert_eq!(user.as_user().map(|u| u.id), Some(20));
        let channel = resolve_value(&cache, "<#30>", ArgumentType::Channel).expect("channel");
        assert_eq!(channel.as_channel().map(|c| c.name.as_str()), Some("general"));
    }

    #[test]
    fn missing_entities_report_their_kind() {
        let cache = cache();
        assert_eq!(
            resolve_value(&cache, "<@&11>", ArgumentType::Role),
            Err(ResolveError::NotFound(EntityKind::Role))
        );
        assert_eq!(
            resolve_value(&cache, "<@21>", ArgumentType::User),
            Err(ResolveError::NotFound(EntityKind::User))
        );
        assert_eq!(
            resolve_value(&cache, "<#99999999999999999999999>", ArgumentType::Channel),
            Err(ResolveError::NotFound(EntityKind::Channel))
        );
    }
}
