//! Owner and admin resolution.

use tracing::trace;

use crate::casemap::irc_eq;

use super::mask::mask_matches;

/// Who owns and administers the bot.
///
/// Owner and admin entries are nicknames or wildcard masks, matched
/// against the nick, `nick@host` and the full hostmask of a message's
/// origin. Account entries are compared with the services account of the
/// origin, when one is known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AccessConfig {
    pub owner: Option<String>,
    pub owner_account: Option<String>,
    pub admins: Vec<String>,
    pub admin_accounts: Vec<String>,
}

/// The identity of a message's origin, as far as the line tells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Origin<'a> {
    pub nick: Option<&'a str>,
    pub host: Option<&'a str>,
    pub hostmask: Option<&'a str>,
    pub account: Option<&'a str>,
}

impl Origin<'_> {
    fn matches_mask(&self, mask: &str) -> bool {
        if mask.is_empty() {
            return false;
        }
        let Some(nick) = self.nick else {
            return false;
        };
        if mask_matches(mask, nick) {
            return true;
        }
        if let Some(host) = self.host {
            if mask_matches(mask, &format!("{}@{}", nick, host)) {
                return true;
            }
        }
        self.hostmask.is_some_and(|hm| mask_matches(mask, hm))
    }

    fn matches_account(&self, account: &str) -> bool {
        !account.is_empty() && self.account.is_some_and(|a| irc_eq(a, account))
    }
}

impl AccessConfig {
    /// True when `origin` is the configured owner.
    ///
    /// A configured `owner_account` takes precedence: the `owner` mask is
    /// then ignored, and only an origin logged in to that account is the
    /// owner.
    pub fn is_owner(&self, origin: &Origin<'_>) -> bool {
        match self.owner_account.as_deref() {
            Some(account) => origin.matches_account(account),
            None => self.owner.as_deref().is_some_and(|m| origin.matches_mask(m)),
        }
    }

    /// True when `origin` is the owner or any configured admin.
    pub fn is_admin(&self, origin: &Origin<'_>) -> bool {
        if self.is_owner(origin) {
            return true;
        }
        let admin = self.admins.iter().any(|m| origin.matches_mask(m))
            || self.admin_accounts.iter().any(|a| origin.matches_account(a));
        if admin {
            trace!(nick = ?origin.nick, "origin is an admin");
        }
        admin
    }
}
