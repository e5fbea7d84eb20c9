//! Channel mode grammar: which letters exist, in which category, and when
//! they take a parameter.
//!
//! A grammar is built once per network from the server's advertised
//! `CHANMODES` and `PREFIX` values and never changes afterwards. When the
//! server advertises new values, build a fresh grammar and swap it in
//! (see [`Snapshot`](crate::snapshot::Snapshot)).
//!
//! # Example
//!
//! ```
//! use slirc_events::mode::{ModeCategory, ModeGrammarBuilder, ParamPolicy};
//!
//! let grammar = ModeGrammarBuilder::new()
//!     .category(ModeCategory::A, "beIq")
//!     .category(ModeCategory::B, "k")
//!     .category(ModeCategory::C, "lfj")
//!     .category(ModeCategory::D, "imnpst")
//!     .privileges("ov".chars())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(grammar.category_of('q'), Some(ModeCategory::A));
//! assert_eq!(grammar.policy(ModeCategory::C), Some(ParamPolicy::Added));
//! assert!(grammar.is_privilege('o'));
//! assert!(!grammar.is_privilege('h'));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{ModeParseError, Result};

use super::types::{ModeCategory, ParamPolicy};

/// Built-in category letters, used when no `CHANMODES` is supplied.
pub const DEFAULT_CHANMODES: [(ModeCategory, &str); 4] = [
    (ModeCategory::A, "beI"),
    (ModeCategory::B, "k"),
    (ModeCategory::C, "l"),
    (ModeCategory::D, "Oimnpsrt"),
];

/// Built-in parameter policies, used when none are supplied.
pub const DEFAULT_PARAM_POLICIES: [(ModeCategory, ParamPolicy); 4] = [
    (ModeCategory::A, ParamPolicy::Always),
    (ModeCategory::B, ParamPolicy::Always),
    (ModeCategory::C, ParamPolicy::Added),
    (ModeCategory::D, ParamPolicy::Never),
];

/// Built-in privilege letters, used when no `PREFIX` is supplied.
///
/// Voice, halfop, op, admin and owner, plus `y`/`Y` which some networks
/// use for oper-level ranks.
pub const DEFAULT_PRIVILEGES: &str = "vhoaqyY";

/// Immutable channel mode grammar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeGrammarConfig {
    letters: HashMap<char, ModeCategory>,
    policies: [Option<ParamPolicy>; 4],
    privileges: BTreeSet<char>,
}

impl ModeGrammarConfig {
    /// Start building a grammar. Unset parts fall back to the defaults.
    pub fn builder() -> ModeGrammarBuilder {
        ModeGrammarBuilder::new()
    }

    /// Category of `letter`, if any. Privilege letters have none.
    pub fn category_of(&self, letter: char) -> Option<ModeCategory> {
        self.letters.get(&letter).copied()
    }

    /// Parameter policy of `category`, if one was configured.
    pub fn policy(&self, category: ModeCategory) -> Option<ParamPolicy> {
        self.policies[category.index()]
    }

    /// Whether `letter` is a privilege (rank) mode.
    pub fn is_privilege(&self, letter: char) -> bool {
        self.privileges.contains(&letter)
    }

    /// The privilege letters.
    pub fn privileges(&self) -> &BTreeSet<char> {
        &self.privileges
    }

    /// Letters of `category`, sorted.
    pub fn letters(&self, category: ModeCategory) -> BTreeSet<char> {
        self.letters
            .iter()
            .filter(|(_, c)| **c == category)
            .map(|(l, _)| *l)
            .collect()
    }
}

impl Default for ModeGrammarConfig {
    fn default() -> Self {
        let mut letters = HashMap::new();
        for (category, chars) in DEFAULT_CHANMODES {
            for letter in chars.chars() {
                letters.insert(letter, category);
            }
        }
        let mut policies = [None; 4];
        for (category, policy) in DEFAULT_PARAM_POLICIES {
            policies[category.index()] = Some(policy);
        }
        Self {
            letters,
            policies,
            privileges: DEFAULT_PRIVILEGES.chars().collect(),
        }
    }
}

/// Builder for [`ModeGrammarConfig`].
///
/// Each part is either unset (`None`, meaning "use the built-in default")
/// or set, possibly to an empty collection. An empty privilege set
/// disables privilege recognition entirely; an empty policy map makes
/// every categorized letter fail with
/// [`ModeParseError::ImproperlyConfigured`] when described.
#[derive(Clone, Debug, Default)]
pub struct ModeGrammarBuilder {
    chanmodes: Option<BTreeMap<ModeCategory, String>>,
    param_policies: Option<BTreeMap<ModeCategory, ParamPolicy>>,
    privileges: Option<BTreeSet<char>>,
}

impl ModeGrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all category letters at once.
    pub fn chanmodes<I, S>(mut self, chanmodes: I) -> Self
    where
        I: IntoIterator<Item = (ModeCategory, S)>,
        S: Into<String>,
    {
        self.chanmodes = Some(
            chanmodes
                .into_iter()
                .map(|(c, letters)| (c, letters.into()))
                .collect(),
        );
        self
    }

    /// Set the letters of one category. The first call switches the
    /// builder away from the default categories.
    pub fn category(mut self, category: ModeCategory, letters: &str) -> Self {
        self.chanmodes
            .get_or_insert_with(BTreeMap::new)
            .insert(category, letters.to_owned());
        self
    }

    /// Replace all parameter policies at once.
    pub fn param_policies<I>(mut self, policies: I) -> Self
    where
        I: IntoIterator<Item = (ModeCategory, ParamPolicy)>,
    {
        self.param_policies = Some(policies.into_iter().collect());
        self
    }

    /// Set the policy of one category. The first call switches the builder
    /// away from the default policies.
    pub fn policy(mut self, category: ModeCategory, policy: ParamPolicy) -> Self {
        self.param_policies
            .get_or_insert_with(BTreeMap::new)
            .insert(category, policy);
        self
    }

    /// Replace the privilege letters.
    pub fn privileges<I>(mut self, letters: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.privileges = Some(letters.into_iter().collect());
        self
    }

    /// Disable privilege recognition.
    pub fn no_privileges(self) -> Self {
        self.privileges(std::iter::empty())
    }

    /// Validate and freeze the grammar.
    ///
    /// Fails with [`ModeParseError::DuplicateLetter`] when a letter is
    /// declared in two categories. Missing policies are not checked here.
    pub fn build(self) -> Result<ModeGrammarConfig> {
        let defaults = ModeGrammarConfig::default();

        let letters = match self.chanmodes {
            None => defaults.letters,
            Some(chanmodes) => {
                let mut letters: HashMap<char, ModeCategory> = HashMap::new();
                for (category, chars) in &chanmodes {
                    for letter in chars.chars() {
                        match letters.insert(letter, *category) {
                            Some(first) if first != *category => {
                                return Err(ModeParseError::DuplicateLetter {
                                    letter,
                                    first,
                                    second: *category,
                                });
                            }
                            _ => {}
                        }
                    }
                }
                letters
            }
        };

        let policies = match self.param_policies {
            None => defaults.policies,
            Some(map) => {
                let mut policies = [None; 4];
                for (category, policy) in map {
                    policies[category.index()] = Some(policy);
                }
                policies
            }
        };

        Ok(ModeGrammarConfig {
            letters,
            policies,
            privileges: self.privileges.unwrap_or(defaults.privileges),
        })
    }
}
