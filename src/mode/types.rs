//! Channel mode value types.
//!
//! Servers advertise four categories of channel modes in `CHANMODES`,
//! each with its own parameter cardinality. Privilege (rank) modes come
//! from `PREFIX` and always target a nickname.
//!
//! # Reference
//! - Modern IRC documentation: <https://modern.ircdocs.horse/#chanmodes-parameter>

use std::fmt;

/// One of the four `CHANMODES` categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeCategory {
    /// Type A: list modes (bans, exceptions).
    A,
    /// Type B: settings that always take a parameter (key).
    B,
    /// Type C: settings that take a parameter only when set (limit).
    C,
    /// Type D: boolean flags.
    D,
}

impl ModeCategory {
    /// All categories, in `CHANMODES` order.
    pub const ALL: [ModeCategory; 4] = [
        ModeCategory::A,
        ModeCategory::B,
        ModeCategory::C,
        ModeCategory::D,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            ModeCategory::A => 0,
            ModeCategory::B => 1,
            ModeCategory::C => 2,
            ModeCategory::D => 3,
        }
    }
}

impl fmt::Display for ModeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            ModeCategory::A => 'A',
            ModeCategory::B => 'B',
            ModeCategory::C => 'C',
            ModeCategory::D => 'D',
        };
        write!(f, "{}", c)
    }
}

/// When a mode letter consumes a positional parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamPolicy {
    /// Both when added and removed.
    Always,
    /// Only when added.
    Added,
    /// Only when removed.
    Removed,
    /// Never.
    Never,
}

impl ParamPolicy {
    /// Whether a letter under this policy needs a parameter in `direction`.
    pub fn requires_param(self, direction: Direction) -> bool {
        match self {
            ParamPolicy::Always => true,
            ParamPolicy::Added => direction.is_added(),
            ParamPolicy::Removed => !direction.is_added(),
            ParamPolicy::Never => false,
        }
    }
}

/// Whether a mode is being set or unset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// `+`
    Added,
    /// `-`
    Removed,
}

impl Direction {
    /// Returns true for [`Direction::Added`].
    #[inline]
    pub fn is_added(self) -> bool {
        matches!(self, Direction::Added)
    }

    /// The sign character for this direction.
    pub fn sign(self) -> char {
        match self {
            Direction::Added => '+',
            Direction::Removed => '-',
        }
    }
}

/// A resolved change to a categorized channel mode.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeChange {
    pub category: ModeCategory,
    pub letter: char,
    pub direction: Direction,
    pub param: Option<String>,
}

impl fmt::Display for ModeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.direction.sign(), self.letter)?;
        if let Some(param) = &self.param {
            write!(f, " {}", param)?;
        }
        Ok(())
    }
}

/// A change to a member's channel privilege (`+o nick`, `-v nick`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivilegeChange {
    pub letter: char,
    pub direction: Direction,
    /// Target nickname.
    pub param: String,
}

impl fmt::Display for PrivilegeChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.direction.sign(), self.letter, self.param)
    }
}

/// A mode letter that was skipped: unknown to the grammar, or missing the
/// parameter it needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IgnoredMode {
    pub letter: char,
    pub direction: Direction,
}

/// What the grammar says about one letter in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModeInfo {
    /// `None` for privilege letters.
    pub category: Option<ModeCategory>,
    pub param_required: bool,
    pub is_privilege: bool,
}

/// The outcome of parsing one mode string against its parameters.
///
/// Every sequence keeps the order in which letters appeared in the input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeParseResult {
    modes: Vec<ModeChange>,
    ignored: Vec<IgnoredMode>,
    privileges: Vec<PrivilegeChange>,
    leftover_params: Vec<String>,
}

impl ModeParseResult {
    pub(crate) fn new(
        modes: Vec<ModeChange>,
        ignored: Vec<IgnoredMode>,
        privileges: Vec<PrivilegeChange>,
        leftover_params: Vec<String>,
    ) -> Self {
        Self {
            modes,
            ignored,
            privileges,
            leftover_params,
        }
    }

    /// Categorized mode changes.
    pub fn modes(&self) -> &[ModeChange] {
        &self.modes
    }

    /// Letters that were unknown or lacked a parameter.
    pub fn ignored(&self) -> &[IgnoredMode] {
        &self.ignored
    }

    /// Privilege changes.
    pub fn privileges(&self) -> &[PrivilegeChange] {
        &self.privileges
    }

    /// Parameters no letter consumed.
    pub fn leftover_params(&self) -> &[String] {
        &self.leftover_params
    }

    /// Number of parameters consumed by modes and privileges.
    pub fn consumed_params(&self) -> usize {
        self.modes.iter().filter(|m| m.param.is_some()).count() + self.privileges.len()
    }

    /// True when nothing was recognized, ignored or left over.
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
            && self.ignored.is_empty()
            && self.privileges.is_empty()
            && self.leftover_params.is_empty()
    }
}
