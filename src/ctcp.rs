//! CTCP (Client-to-Client Protocol) framing.
//!
//! CTCP queries and ACTIONs are embedded in message text, wrapped in the
//! `\x01` delimiter byte.
//!
//! # Reference
//! - CTCP specification: <https://modern.ircdocs.horse/ctcp.html>
//!
//! # Example
//!
//! ```
//! use slirc_events::ctcp::{CtcpFrame, CtcpKind};
//!
//! let frame = CtcpFrame::parse("\x01ACTION waves hello\x01").unwrap();
//! assert_eq!(frame.command, "ACTION");
//! assert_eq!(frame.params, "waves hello");
//! assert_eq!(frame.kind(), CtcpKind::Action);
//! ```

use std::fmt;

/// The CTCP delimiter character (`\x01`).
pub const CTCP_DELIM: char = '\x01';

/// Known CTCP command types.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CtcpKind {
    /// ACTION - describes an action performed by the user (`/me`).
    Action,
    /// VERSION - requests client version information.
    Version,
    /// PING - measures round-trip latency.
    Ping,
    /// TIME - requests local time from the client.
    Time,
    /// CLIENTINFO - requests list of supported CTCP commands.
    Clientinfo,
    /// SOURCE - requests source code location.
    Source,
    /// DCC - Direct Client-to-Client connection setup.
    Dcc,
    /// Unknown or custom CTCP command.
    Unknown(String),
}

impl CtcpKind {
    /// Parse a CTCP command name, ignoring ASCII case.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "ACTION" => Self::Action,
            "VERSION" => Self::Version,
            "PING" => Self::Ping,
            "TIME" => Self::Time,
            "CLIENTINFO" => Self::Clientinfo,
            "SOURCE" => Self::Source,
            "DCC" => Self::Dcc,
            _ => Self::Unknown(name.to_owned()),
        }
    }

    /// Returns the canonical uppercase name of this CTCP command.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Action => "ACTION",
            Self::Version => "VERSION",
            Self::Ping => "PING",
            Self::Time => "TIME",
            Self::Clientinfo => "CLIENTINFO",
            Self::Source => "SOURCE",
            Self::Dcc => "DCC",
            Self::Unknown(s) => s,
        }
    }
}

impl fmt::Display for CtcpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CTCP message found inside message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CtcpFrame<'a> {
    /// The command word, as sent.
    pub command: &'a str,
    /// Everything after the first space; empty when there is none.
    pub params: &'a str,
}

impl<'a> CtcpFrame<'a> {
    /// Unframe `text`.
    ///
    /// Returns `None` unless `text` both starts and ends with the delimiter
    /// and carries a non-empty command word. A frame without one
    /// (`"\x01\x01"`, `"\x01 x\x01"`) names no CTCP command to dispatch
    /// on, so it is left as ordinary text.
    pub fn parse(text: &'a str) -> Option<Self> {
        if text.len() < 2 {
            return None;
        }
        let inner = text.strip_prefix(CTCP_DELIM)?.strip_suffix(CTCP_DELIM)?;

        let (command, params) = inner.split_once(' ').unwrap_or((inner, ""));
        if command.is_empty() {
            return None;
        }

        Some(Self { command, params })
    }

    /// The typed command.
    pub fn kind(&self) -> CtcpKind {
        CtcpKind::parse(self.command)
    }
}

impl fmt::Display for CtcpFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CTCP_DELIM, self.command)?;
        if !self.params.is_empty() {
            write!(f, " {}", self.params)?;
        }
        write!(f, "{}", CTCP_DELIM)
    }
}
