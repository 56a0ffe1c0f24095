//! Placeholder micro-grammar for template slots.
//!
//! A slot is a string wrapped exactly in `{{` and `}}`. The inner text, trimmed,
//! is either a context key or a logic-block reference of the form `BLOCK:<name>`.

/// Opening delimiter of a placeholder slot.
pub const OPEN: &str = "{{";
/// Closing delimiter of a placeholder slot.
pub const CLOSE: &str = "}}";
/// Prefix marking a logic-block reference inside a slot.
pub const BLOCK_PREFIX: &str = "BLOCK:";
/// Prefix of the marker emitted for keys absent from the render context.
pub const MISSING_PREFIX: &str = "MISSING: ";

/// A parsed placeholder slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    /// Plain context lookup.
    Key(&'a str),
    /// Logic-block reference. `key` is the full trimmed slot text, used for the
    /// context fallback when no block named `name` exists.
    Block { name: &'a str, key: &'a str },
}

impl<'a> Placeholder<'a> {
    /// The trimmed slot text.
    pub fn key(&self) -> &'a str {
        match self {
            Placeholder::Key(key) => key,
            Placeholder::Block { key, .. } => key,
        }
    }
}

/// Parse a string as a placeholder slot.
///
/// Returns `None` for any string that is not wrapped in the delimiters. The
/// outer string is not trimmed; `" {{ name }}"` is a literal.
pub fn parse(text: &str) -> Option<Placeholder<'_>> {
    let inner = text.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
    Some(classify(inner.trim()))
}

/// Classify already-extracted slot text as a plain key or a block reference.
pub fn classify(key: &str) -> Placeholder<'_> {
    match key.strip_prefix(BLOCK_PREFIX) {
        // Only the segment up to the next colon names the block.
        Some(rest) => {
            let name = rest.split(':').next().unwrap_or_default();
            Placeholder::Block { name, key }
        }
        None => Placeholder::Key(key),
    }
}

/// Marker string for a key with no context value.
pub fn missing_marker(key: &str) -> String {
    format!("{MISSING_PREFIX}{key}")
}
