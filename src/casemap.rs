//! IRC case-mapping functions and case-insensitive identifiers.
//!
//! IRC uses a special case-insensitive comparison where some characters
//! are considered equivalent (e.g., `[` and `{`). This implements the
//! `rfc1459` case mapping which is the most common.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

/// Channel name prefixes recognized by [`Identifier::is_channel`].
pub const CHANNEL_PREFIXES: [char; 4] = ['#', '&', '+', '!'];

/// Fold one character with RFC 1459 case mapping.
///
/// In addition to ASCII lowercase conversion, this maps:
/// - `[` → `{`
/// - `]` → `}`
/// - `\` → `|`
/// - `~` → `^`
#[inline]
pub fn fold_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => c.to_ascii_lowercase(),
        _ => c,
    }
}

/// Convert a string to IRC lowercase using RFC 1459 case mapping.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Compare two strings using IRC case-insensitive comparison.
pub fn irc_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

/// A nickname or channel name that compares and hashes case-insensitively.
///
/// The original spelling is kept for display.
///
/// ```
/// use slirc_events::Identifier;
///
/// let nick = Identifier::new("Foo[away]");
/// assert_eq!(nick, "foo{AWAY}");
/// assert_eq!(nick.as_str(), "Foo[away]");
/// assert!(!nick.is_channel());
/// assert!(Identifier::new("#Sopel").is_channel());
/// ```
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The RFC 1459 lowercase form.
    pub fn lower(&self) -> String {
        irc_to_lower(&self.0)
    }

    /// True when the name starts with a channel prefix.
    pub fn is_channel(&self) -> bool {
        self.0.starts_with(CHANNEL_PREFIXES)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        irc_eq(&self.0, &other.0)
    }
}

impl Eq for Identifier {}

impl PartialEq<str> for Identifier {
    fn eq(&self, other: &str) -> bool {
        irc_eq(&self.0, other)
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        irc_eq(&self.0, other)
    }
}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.0.chars() {
            fold_char(c).hash(state);
        }
    }
}

impl Deref for Identifier {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Identifier(s.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Identifier(s)
    }
}
