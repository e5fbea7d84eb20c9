//! Message origin (hostmask) parsing.
//!
//! The origin of a message is either a user's `nick!user@host` mask or a
//! server name. Components are borrowed from the raw line.

/// A borrowed, parsed message origin.
///
/// Parsing is lenient: missing separators leave the matching components
/// unset instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hostmask<'a> {
    /// Everything before `!` (or before `@` when there is no `!`).
    pub nick: &'a str,
    /// Username (ident), between `!` and `@`.
    pub user: Option<&'a str>,
    /// Hostname, after `@`.
    pub host: Option<&'a str>,
    /// Original raw origin string.
    pub raw: &'a str,
}

impl<'a> Hostmask<'a> {
    /// Split a hostmask into components without allocation.
    pub fn parse(s: &'a str) -> Self {
        let (before, host) = match s.find('@') {
            Some(at) => (&s[..at], Some(&s[at + 1..])),
            None => (s, None),
        };

        let (nick, user) = match before.find('!') {
            Some(bang) => (&before[..bang], Some(&before[bang + 1..])),
            None => (before, None),
        };

        Self {
            nick,
            user,
            host,
            raw: s,
        }
    }

    /// Whether this looks like a server name rather than a user mask.
    pub fn is_server(&self) -> bool {
        self.user.is_none() && self.host.is_none() && self.nick.contains('.')
    }

    /// `nick@host`, the form most admin masks are written against.
    pub fn nick_at_host(&self) -> Option<String> {
        self.host.map(|host| format!("{}@{}", self.nick, host))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_mask() {
        let mask = Hostmask::parse("Foo!foo@example.com");
        assert_eq!(mask.nick, "Foo");
        assert_eq!(mask.user, Some("foo"));
        assert_eq!(mask.host, Some("example.com"));
        assert!(!mask.is_server());
        assert_eq!(mask.nick_at_host().as_deref(), Some("Foo@example.com"));
    }

    #[test]
    fn test_server_name() {
        let mask = Hostmask::parse("irc.example.com");
        assert_eq!(mask.nick, "irc.example.com");
        assert_eq!(mask.user, None);
        assert_eq!(mask.host, None);
        assert!(mask.is_server());
    }

    #[test]
    fn test_missing_separators() {
        let mask = Hostmask::parse("Foo@example.com");
        assert_eq!(mask.nick, "Foo");
        assert_eq!(mask.user, None);
        assert_eq!(mask.host, Some("example.com"));

        let mask = Hostmask::parse("Foo!foo");
        assert_eq!(mask.nick, "Foo");
        assert_eq!(mask.user, Some("foo"));
        assert_eq!(mask.host, None);
        assert_eq!(mask.nick_at_host(), None);
    }

    #[test]
    fn test_bang_after_at_belongs_to_host() {
        let mask = Hostmask::parse("Foo@weird!host");
        assert_eq!(mask.nick, "Foo");
        assert_eq!(mask.user, None);
        assert_eq!(mask.host, Some("weird!host"));
    }
}
