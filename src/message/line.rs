//! Parsed IRC lines as seen by the receiving client.

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::casemap::{irc_eq, Identifier};
use crate::ctcp::{CtcpFrame, CtcpKind};
use crate::error::MessageParseError;
use crate::ircv3::{parse_server_time, ACCOUNT_TAG, INTENT_TAG, TIME_TAG};
use crate::prefix::Hostmask;

use super::nom_parser::parse_line;
use super::tags::{parse_tags, Tags};

/// Commands whose first argument is not a target, so they have no sender.
const UNTARGETED_COMMANDS: &[&str] = &[
    "QUIT",
    "PING",
    "PONG",
    "ERROR",
    "NICK",
    "AWAY",
    "ACCOUNT",
    "CHGHOST",
    "SETNAME",
    "AUTHENTICATE",
    "CAP",
];

/// One received IRC line, split and interpreted.
///
/// # Example
///
/// ```
/// use slirc_events::ParsedLine;
///
/// let line = ParsedLine::parse("Sopel", ":Foo!foo@example.com PRIVMSG Sopel :\x01PING 42\x01").unwrap();
/// assert_eq!(line.command, "PRIVMSG");
/// assert_eq!(line.ctcp.as_deref(), Some("PING"));
/// assert_eq!(line.plain, "42");
/// // a message sent directly to us comes "from" its origin
/// assert_eq!(line.sender.as_ref().unwrap(), "Foo");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedLine {
    /// The line as received, without trailing CR/LF.
    pub raw: String,
    pub tags: Tags,
    /// `nick!user@host` or server name, when the line has an origin.
    pub hostmask: Option<String>,
    pub nick: Option<Identifier>,
    pub user: Option<String>,
    pub host: Option<String>,
    /// Command or numeric, case as received.
    pub command: String,
    /// Positional arguments. For CTCP messages the final argument holds the
    /// unframed payload.
    pub args: Vec<String>,
    /// Last argument as received, or the command when there are none.
    pub text: String,
    /// CTCP command word, when `text` is CTCP-framed.
    pub ctcp: Option<String>,
    /// Last argument with CTCP framing removed; empty when there are none.
    pub plain: String,
    /// The channel or nick this event concerns.
    pub sender: Option<Identifier>,
    /// Server time when tagged, otherwise when the line was received.
    pub time: DateTime<Utc>,
}

impl ParsedLine {
    /// Parse `raw`, received by the client currently using `own_nick`.
    pub fn parse(own_nick: &str, raw: &str) -> Result<Self, MessageParseError> {
        Self::parse_at(own_nick, raw, Utc::now())
    }

    /// Like [`parse`](Self::parse), with an explicit receive instant used
    /// when the line carries no usable `time` tag.
    pub fn parse_at(
        own_nick: &str,
        raw: &str,
        received: DateTime<Utc>,
    ) -> Result<Self, MessageParseError> {
        let raw = raw.trim_end_matches(['\r', '\n']);

        let (_, split) = parse_line(raw).map_err(|err| {
            trace!(line = raw, error = ?err, "line has no command");
            MessageParseError::EmptyLine
        })?;

        let mut tags = split.tags.map(parse_tags).unwrap_or_default();
        let origin = split.origin.map(Hostmask::parse);
        let command = split.command.to_owned();
        let mut args: Vec<String> = split.params.iter().map(|p| (*p).to_owned()).collect();

        let text = args.last().cloned().unwrap_or_else(|| command.clone());

        let mut ctcp = None;
        if let Some(frame) = CtcpFrame::parse(&text) {
            ctcp = Some(frame.command.to_owned());
            if let Some(last) = args.last_mut() {
                *last = frame.params.to_owned();
            }
        }
        let plain = args.last().cloned().unwrap_or_default();

        if command.eq_ignore_ascii_case("JOIN") && args.len() == 3 {
            let account = &args[1];
            if account != "*" && !tags.contains_key(ACCOUNT_TAG) {
                debug!(%account, "account from extended join");
                tags.insert(ACCOUNT_TAG.to_owned(), Some(account.clone()));
            }
        }

        let nick = origin.map(|o| Identifier::new(o.nick));
        let sender = derive_sender(own_nick, &command, &args, nick.as_ref());

        let time = match tags.get(TIME_TAG) {
            Some(Some(value)) => parse_server_time(value).unwrap_or_else(|| {
                debug!(time = %value, "malformed server-time tag, using receive time");
                received
            }),
            _ => received,
        };

        Ok(ParsedLine {
            raw: raw.to_owned(),
            tags,
            hostmask: origin.map(|o| o.raw.to_owned()),
            nick,
            user: origin.and_then(|o| o.user).map(str::to_owned),
            host: origin.and_then(|o| o.host).map(str::to_owned),
            command,
            args,
            text,
            ctcp,
            plain,
            sender,
            time,
        })
    }

    /// Value of tag `key`, if present with a value.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).and_then(|v| v.as_deref())
    }

    /// The sender's services account, from `account-tag` or extended join.
    pub fn account(&self) -> Option<&str> {
        self.tag(ACCOUNT_TAG)
    }

    /// The draft `intent` tag.
    pub fn intent(&self) -> Option<&str> {
        self.tag(INTENT_TAG)
    }

    /// The typed CTCP command, if any.
    pub fn ctcp_kind(&self) -> Option<CtcpKind> {
        self.ctcp.as_deref().map(CtcpKind::parse)
    }

    /// Whether the command is `name`, ignoring ASCII case.
    pub fn is_command(&self, name: &str) -> bool {
        self.command.eq_ignore_ascii_case(name)
    }
}

fn derive_sender(
    own_nick: &str,
    command: &str,
    args: &[String],
    origin_nick: Option<&Identifier>,
) -> Option<Identifier> {
    if UNTARGETED_COMMANDS
        .iter()
        .any(|c| command.eq_ignore_ascii_case(c))
    {
        return None;
    }

    let target = args.first()?;
    if irc_eq(target, own_nick) {
        origin_nick.cloned()
    } else {
        Some(Identifier::new(target.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn received() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 5, 1, 12, 0, 0).unwrap()
    }

    fn parse(raw: &str) -> ParsedLine {
        ParsedLine::parse_at("Sopel", raw, received()).unwrap()
    }

    #[test]
    fn test_channel_message() {
        let line = parse(":Foo!foo@example.com PRIVMSG #Sopel :Hello, world");
        assert!(line.tags.is_empty());
        assert_eq!(line.hostmask.as_deref(), Some("Foo!foo@example.com"));
        assert_eq!(line.raw, ":Foo!foo@example.com PRIVMSG #Sopel :Hello, world");
        assert_eq!(line.command, "PRIVMSG");
        assert_eq!(line.args, vec!["#Sopel", "Hello, world"]);
        assert_eq!(line.text, "Hello, world");
        assert_eq!(line.plain, "Hello, world");
        assert_eq!(line.ctcp, None);
        assert_eq!(line.nick.as_ref().unwrap(), "Foo");
        assert_eq!(line.user.as_deref(), Some("foo"));
        assert_eq!(line.host.as_deref(), Some("example.com"));
        assert_eq!(line.sender.as_ref().unwrap(), "#Sopel");
        assert_eq!(line.time, received());
    }

    #[test]
    fn test_private_message_sender_is_origin() {
        let line = parse(":Foo!foo@example.com PRIVMSG Sopel :Hello, world");
        assert_eq!(line.sender.as_ref().unwrap(), "Foo");

        // own nick comparison follows the IRC case mapping
        let line = parse(":Foo!foo@example.com PRIVMSG sOPEL :hi");
        assert_eq!(line.sender.as_ref().unwrap(), "Foo");
    }

    #[test]
    fn test_quit_has_no_sender() {
        let line = parse(":Foo!foo@example.com QUIT :quit message text");
        assert_eq!(line.args, vec!["quit message text"]);
        assert_eq!(line.text, "quit message text");
        assert_eq!(line.plain, "quit message text");
        assert_eq!(line.sender, None);
    }

    #[test]
    fn test_join_sender_is_channel() {
        let line = parse(":Foo!foo@example.com JOIN #Sopel");
        assert_eq!(line.args, vec!["#Sopel"]);
        assert_eq!(line.text, "#Sopel");
        assert_eq!(line.sender.as_ref().unwrap(), "#sopel");
        assert!(line.sender.as_ref().unwrap().is_channel());
        assert_eq!(line.account(), None);
    }

    #[test]
    fn test_extended_join_records_account() {
        let line = parse(":Foo!foo@example.com JOIN #Sopel bar :Real Name");
        assert_eq!(line.tags.len(), 1);
        assert_eq!(line.account(), Some("bar"));
        assert_eq!(line.args, vec!["#Sopel", "bar", "Real Name"]);
        assert_eq!(line.text, "Real Name");
        assert_eq!(line.sender.as_ref().unwrap(), "#Sopel");
    }

    #[test]
    fn test_extended_join_logged_out() {
        let line = parse(":Foo!foo@example.com JOIN #Sopel * :Real Name");
        assert_eq!(line.account(), None);
        assert!(line.tags.is_empty());
    }

    #[test]
    fn test_tags() {
        let line =
            parse("@foo=bar;baz;sopel.chat/special=value :Foo!foo@example.com PRIVMSG #Sopel :Hello, world");
        assert_eq!(line.tags.len(), 3);
        assert_eq!(line.tag("foo"), Some("bar"));
        assert_eq!(line.tags.get("baz"), Some(&None));
        assert_eq!(line.tag("sopel.chat/special"), Some("value"));
        assert_eq!(line.args, vec!["#Sopel", "Hello, world"]);
        assert_eq!(line.sender.as_ref().unwrap(), "#Sopel");
    }

    #[test]
    fn test_intent_is_not_ctcp() {
        let line = parse("@intent=ACTION :Foo!foo@example.com PRIVMSG #Sopel :Hello, world");
        assert_eq!(line.intent(), Some("ACTION"));
        assert_eq!(line.ctcp, None);
        assert_eq!(line.plain, "Hello, world");
    }

    #[test]
    fn test_bare_command() {
        let line = parse("PING");
        assert!(line.tags.is_empty());
        assert_eq!(line.hostmask, None);
        assert_eq!(line.nick, None);
        assert!(line.args.is_empty());
        assert_eq!(line.text, "PING");
        assert_eq!(line.plain, "");
        assert_eq!(line.ctcp, None);
        assert_eq!(line.command, "PING");
        assert_eq!(line.sender, None);
    }

    #[test]
    fn test_ctcp_without_params() {
        let line = parse(":Foo!foo@example.com PRIVMSG Sopel :\x01VERSION\x01");
        assert_eq!(line.ctcp.as_deref(), Some("VERSION"));
        assert_eq!(line.ctcp_kind(), Some(CtcpKind::Version));
        assert_eq!(line.args, vec!["Sopel", ""]);
        assert_eq!(line.text, "\x01VERSION\x01");
        assert_eq!(line.plain, "");
        assert_eq!(line.sender.as_ref().unwrap(), "Foo");
    }

    #[test]
    fn test_ctcp_with_params() {
        let line = parse(":Foo!foo@example.com PRIVMSG Sopel :\x01PING 1123321\x01");
        assert_eq!(line.ctcp.as_deref(), Some("PING"));
        assert_eq!(line.args, vec!["Sopel", "1123321"]);
        assert_eq!(line.text, "\x01PING 1123321\x01");
        assert_eq!(line.plain, "1123321");
    }

    #[test]
    fn test_ctcp_action_in_channel() {
        let line = parse(":Foo!foo@example.com PRIVMSG #Sopel :\x01ACTION Hello, world\x01");
        assert_eq!(line.ctcp_kind(), Some(CtcpKind::Action));
        assert_eq!(line.args, vec!["#Sopel", "Hello, world"]);
        assert_eq!(line.plain, "Hello, world");
        assert_eq!(line.sender.as_ref().unwrap(), "#Sopel");
    }

    #[test]
    fn test_unterminated_ctcp_is_plain_text() {
        let line = parse(":Foo!foo@example.com PRIVMSG #Sopel :\x01ACTION waves");
        assert_eq!(line.ctcp, None);
        assert_eq!(line.plain, "\x01ACTION waves");
    }

    #[test]
    fn test_server_time() {
        let line = parse("@time=2016-01-09T03:15:42.000Z :Foo!foo@example.com PRIVMSG #Sopel :Hello, world");
        assert_eq!(line.time, Utc.with_ymd_and_hms(2016, 1, 9, 3, 15, 42).unwrap());
    }

    #[test]
    fn test_malformed_server_time_falls_back() {
        let line = parse("@time=2016-01-09T04:20 :Foo!foo@example.com PRIVMSG #Sopel :Hello, world");
        assert_eq!(line.time, received());

        let line = parse("@time :Foo!foo@example.com PRIVMSG #Sopel :Hello, world");
        assert_eq!(line.time, received());
    }

    #[test]
    fn test_server_origin() {
        let line = parse(":irc.example.com 001 Sopel :Welcome to the network");
        assert_eq!(line.nick.as_ref().unwrap(), "irc.example.com");
        assert_eq!(line.user, None);
        assert_eq!(line.host, None);
        assert_eq!(line.command, "001");
        // numerics addressed to us come from the server
        assert_eq!(line.sender.as_ref().unwrap(), "irc.example.com");
    }

    #[test]
    fn test_crlf_is_stripped() {
        let line = parse("PING :irc.example.com\r\n");
        assert_eq!(line.raw, "PING :irc.example.com");
        assert_eq!(line.args, vec!["irc.example.com"]);
    }

    #[test]
    fn test_empty_line() {
        for raw in ["", "\r\n", "   ", "@a=b", ":Foo!foo@example.com", "@a=b :Foo!foo@example.com "] {
            assert_eq!(
                ParsedLine::parse("Sopel", raw),
                Err(MessageParseError::EmptyLine),
                "{:?}",
                raw
            );
        }
    }

    #[test]
    fn test_notice_and_mode_senders() {
        let line = parse(":Foo!foo@example.com NOTICE #Sopel :heads up");
        assert_eq!(line.sender.as_ref().unwrap(), "#Sopel");

        let line = parse(":Foo!foo@example.com MODE #Sopel +o Bar");
        assert_eq!(line.sender.as_ref().unwrap(), "#Sopel");
        assert_eq!(line.args, vec!["#Sopel", "+o", "Bar"]);

        let line = parse(":Foo!foo@example.com NICK :Foo_");
        assert_eq!(line.sender, None);
    }
}
