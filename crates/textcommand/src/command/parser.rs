/// A prefixed message split into command name and argument body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    /// Command name or alias as typed, lowercased.
    pub name: String,
    /// Everything after the name, untouched.
    pub body: &'a str,
}

/// Split `content` into an invocation if it starts with `prefix` directly followed by a name.
pub fn parse_invocation<'a>(content: &'a str, prefix: &str) -> Option<Invocation<'a>> {
    let rest = content.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        return None;
    }

    let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (name, body) = rest.split_at(name_end);

    Some(Invocation {
        name: name.to_lowercase(),
        body,
    })
}
