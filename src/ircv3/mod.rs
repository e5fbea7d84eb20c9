//! IRCv3 extensions used while parsing lines.

pub mod server_time;

pub use self::server_time::parse_server_time;

/// `account-tag`: the sender's services account.
pub const ACCOUNT_TAG: &str = "account";

/// `server-time`: when the server saw the message.
pub const TIME_TAG: &str = "time";

/// Draft `message-intent`: the intent of a message (e.g. `ACTION`).
pub const INTENT_TAG: &str = "intent";
