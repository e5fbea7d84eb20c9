//! Grammar-driven channel mode parsing.

use std::str::Chars;
use std::sync::Arc;

use tracing::trace;

use crate::error::{ModeParseError, Result};

use super::grammar::ModeGrammarConfig;
use super::types::{
    Direction, IgnoredMode, ModeCategory, ModeChange, ModeInfo, ModeParseResult, PrivilegeChange,
};

/// Iterator over the `(letter, direction)` pairs of a mode string.
///
/// Created by [`parse_modestring`].
#[derive(Clone, Debug)]
pub struct ModeTokens<'a> {
    chars: Chars<'a>,
    direction: Direction,
}

impl Iterator for ModeTokens<'_> {
    type Item = (char, Direction);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.chars.next()? {
                '+' => self.direction = Direction::Added,
                '-' => self.direction = Direction::Removed,
                letter => return Some((letter, self.direction)),
            }
        }
    }
}

/// Split a mode string like `+ov-b` into letters with their direction.
///
/// Letters before any sign are treated as added.
///
/// ```
/// use slirc_events::mode::{parse_modestring, Direction};
///
/// let tokens: Vec<_> = parse_modestring("a+b-c").collect();
/// assert_eq!(
///     tokens,
///     vec![('a', Direction::Added), ('b', Direction::Added), ('c', Direction::Removed)]
/// );
/// ```
pub fn parse_modestring(modestring: &str) -> ModeTokens<'_> {
    ModeTokens {
        chars: modestring.chars(),
        direction: Direction::Added,
    }
}

/// Parses mode strings against one network's [`ModeGrammarConfig`].
///
/// The parser holds its grammar behind an [`Arc`], so it is cheap to clone
/// and safe to share between threads.
#[derive(Clone, Debug, Default)]
pub struct ModeParser {
    grammar: Arc<ModeGrammarConfig>,
}

impl ModeParser {
    pub fn new(grammar: impl Into<Arc<ModeGrammarConfig>>) -> Self {
        Self {
            grammar: grammar.into(),
        }
    }

    /// The grammar this parser uses.
    pub fn grammar(&self) -> &ModeGrammarConfig {
        &self.grammar
    }

    /// Category of `letter`.
    ///
    /// Only the categories are consulted; privilege letters are unknown
    /// to this query.
    pub fn classify(&self, letter: char) -> Result<ModeCategory> {
        self.grammar
            .category_of(letter)
            .ok_or(ModeParseError::UnknownMode { letter })
    }

    /// Describe how `letter` behaves when applied in `direction`.
    pub fn describe(&self, letter: char, direction: Direction) -> Result<ModeInfo> {
        if let Some(category) = self.grammar.category_of(letter) {
            let policy = self
                .grammar
                .policy(category)
                .ok_or(ModeParseError::ImproperlyConfigured { category })?;
            return Ok(ModeInfo {
                category: Some(category),
                param_required: policy.requires_param(direction),
                is_privilege: false,
            });
        }

        if self.grammar.is_privilege(letter) {
            return Ok(ModeInfo {
                category: None,
                param_required: true,
                is_privilege: true,
            });
        }

        Err(ModeParseError::UnknownMode { letter })
    }

    /// Parse `modestring` and assign `params` to the letters that need them.
    ///
    /// Parameters are consumed left to right across the whole string,
    /// whatever the sign grouping. Unknown letters and letters whose
    /// parameter is missing end up in [`ModeParseResult::ignored`].
    ///
    /// Fails only when the grammar itself is broken
    /// ([`ModeParseError::ImproperlyConfigured`]).
    ///
    /// ```
    /// use slirc_events::mode::{Direction, ModeParser};
    ///
    /// let parser = ModeParser::default();
    /// let result = parser.parse("+ol-k", &["Foo", "10", "secret"]).unwrap();
    ///
    /// assert_eq!(result.privileges()[0].param, "Foo");
    /// assert_eq!(result.modes()[0].param.as_deref(), Some("10"));
    /// assert_eq!(result.modes()[1].direction, Direction::Removed);
    /// assert_eq!(result.modes()[1].param.as_deref(), Some("secret"));
    /// assert!(result.leftover_params().is_empty());
    /// ```
    pub fn parse<S: AsRef<str>>(&self, modestring: &str, params: &[S]) -> Result<ModeParseResult> {
        let mut modes = Vec::new();
        let mut ignored = Vec::new();
        let mut privileges = Vec::new();
        let mut cursor = 0;

        for (letter, direction) in parse_modestring(modestring) {
            let info = match self.describe(letter, direction) {
                Ok(info) => info,
                Err(ModeParseError::UnknownMode { .. }) => {
                    trace!(%letter, sign = %direction.sign(), "ignoring unknown mode");
                    ignored.push(IgnoredMode { letter, direction });
                    continue;
                }
                Err(err) => return Err(err),
            };

            let Some(category) = info.category else {
                match next_param(params, &mut cursor) {
                    Some(param) => privileges.push(PrivilegeChange {
                        letter,
                        direction,
                        param,
                    }),
                    None => {
                        trace!(%letter, sign = %direction.sign(), "privilege target missing");
                        ignored.push(IgnoredMode { letter, direction });
                    }
                }
                continue;
            };

            let param = if info.param_required {
                match next_param(params, &mut cursor) {
                    Some(param) => Some(param),
                    None => {
                        trace!(%letter, sign = %direction.sign(), "mode parameter missing");
                        ignored.push(IgnoredMode { letter, direction });
                        continue;
                    }
                }
            } else {
                None
            };

            modes.push(ModeChange {
                category,
                letter,
                direction,
                param,
            });
        }

        let leftover_params = params
            .get(cursor..)
            .unwrap_or_default()
            .iter()
            .map(|p| p.as_ref().to_owned())
            .collect();

        Ok(ModeParseResult::new(modes, ignored, privileges, leftover_params))
    }
}

/// Take the parameter under `cursor` and advance past it.
fn next_param<S: AsRef<str>>(params: &[S], cursor: &mut usize) -> Option<String> {
    let param = params.get(*cursor)?.as_ref().to_owned();
    *cursor += 1;
    Some(param)
}
