//! # slirc-events
//!
//! Client-side IRC event parsing: raw lines become structured events,
//! and channel mode strings become ordered mode and privilege changes
//! according to the server's advertised `CHANMODES` and `PREFIX`.
//!
//! ## Features
//!
//! - Line parsing with IRCv3 tags, origins, CTCP framing and server-time
//! - Sender derivation relative to the client's own nickname
//! - Extended-join and `account-tag` account tracking
//! - Grammar-driven channel mode parsing (types A-D plus privileges)
//! - Event contexts resolving owner and admin access
//! - Lock-free snapshot swapping for per-network configuration

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Parsing lines
//!
//! ```rust
//! use slirc_events::ParsedLine;
//!
//! let raw = "@time=2023-01-01T12:00:00Z :Foo!foo@example.com PRIVMSG #rust :Hello!";
//! let line = ParsedLine::parse("MyBot", raw).expect("line has a command");
//!
//! assert_eq!(line.command, "PRIVMSG");
//! assert_eq!(line.text, "Hello!");
//! assert!(line.sender.as_ref().unwrap().is_channel());
//! ```
//!
//! ### Parsing mode changes
//!
//! ```rust
//! use slirc_events::mode::{ModeCategory, ModeParser};
//!
//! let parser = ModeParser::default();
//! let result = parser.parse("+o-b+Z", &["Foo", "*!*@spam"]).unwrap();
//!
//! assert_eq!(result.privileges()[0].param, "Foo");
//! assert_eq!(result.modes()[0].category, ModeCategory::A);
//! assert_eq!(result.ignored()[0].letter, 'Z');
//! ```

pub mod casemap;
pub mod ctcp;
pub mod error;
pub mod event;
pub mod ircv3;
pub mod message;
pub mod mode;
pub mod prefix;
pub mod snapshot;

pub use self::casemap::{irc_eq, irc_to_lower, Identifier};
pub use self::ctcp::{CtcpFrame, CtcpKind};
pub use self::error::{MessageParseError, ModeParseError};
pub use self::event::{AccessConfig, EventContext};
pub use self::message::{ParsedLine, Tags};
pub use self::mode::{ModeGrammarConfig, ModeParseResult, ModeParser};
pub use self::prefix::Hostmask;
pub use self::snapshot::Snapshot;
