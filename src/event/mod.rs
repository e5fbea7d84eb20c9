//! Event contexts handed to plugin dispatch.
//!
//! An [`EventContext`] combines a [`ParsedLine`](crate::ParsedLine), the
//! dispatcher's match result, and what the bot's access configuration
//! says about the line's origin.
//!
//! # Example
//!
//! ```
//! use slirc_events::event::{AccessConfig, EventContext};
//! use slirc_events::{ParsedLine, Snapshot};
//!
//! let access = Snapshot::new(AccessConfig {
//!     owner: Some("Foo".to_string()),
//!     ..AccessConfig::default()
//! });
//!
//! let line = ParsedLine::parse("Sopel", ":Foo!foo@example.com PRIVMSG Sopel :.reload").unwrap();
//! let ctx = EventContext::build_from(&access, line, ".reload");
//!
//! assert!(ctx.is_privmsg());
//! assert!(ctx.owner());
//! assert!(ctx.admin());
//! ```

mod access;
mod context;
mod mask;

pub use self::access::{AccessConfig, Origin};
pub use self::context::EventContext;
pub use self::mask::mask_matches;
