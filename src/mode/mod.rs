//! Channel mode grammar and parsing.

mod grammar;
mod parse;
mod types;

pub use self::grammar::{
    ModeGrammarBuilder, ModeGrammarConfig, DEFAULT_CHANMODES, DEFAULT_PARAM_POLICIES,
    DEFAULT_PRIVILEGES,
};
pub use self::parse::{parse_modestring, ModeParser, ModeTokens};
pub use self::types::{
    Direction, IgnoredMode, ModeCategory, ModeChange, ModeInfo, ModeParseResult, ParamPolicy,
    PrivilegeChange,
};
