//! IRCv3 message tags.

use std::collections::HashMap;

/// Tag key to optional value. A key sent without `=` maps to `None`.
pub type Tags = HashMap<String, Option<String>>;

/// Parse the raw tag segment (without the leading `@`).
///
/// Entries are split on `;` and each entry on its first `=`. Empty
/// entries are skipped and a repeated key keeps its last value.
pub fn parse_tags(raw: &str) -> Tags {
    raw.split(';')
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once('=') {
            Some((key, value)) => (key.to_owned(), Some(unescape_tag_value(value))),
            None => (entry.to_owned(), None),
        })
        .collect()
}

/// Unescape a tag value from wire format.
///
/// IRCv3 specifies these escape sequences:
/// - `\:` → `;` (semicolon)
/// - `\s` → ` ` (space)
/// - `\\` → `\` (backslash)
/// - `\r` → CR (carriage return)
/// - `\n` → LF (line feed)
pub fn unescape_tag_value(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut iter = value.chars();
    while let Some(c) = iter.next() {
        let r = if c == '\\' {
            match iter.next() {
                Some(':') => ';',
                Some('s') => ' ',
                Some('\\') => '\\',
                Some('r') => '\r',
                Some('n') => '\n',
                Some(c) => c,
                None => break,
            }
        } else {
            c
        };
        unescaped.push(r);
    }
    unescaped
}
