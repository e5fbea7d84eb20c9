//! Event contexts: a parsed line plus what access configuration says
//! about its origin.

use std::sync::Arc;

use crate::message::ParsedLine;
use crate::snapshot::Snapshot;

use super::access::{AccessConfig, Origin};

/// A parsed line paired with the dispatcher's match result and the
/// resolved identity of its origin.
///
/// `M` is whatever the dispatch engine produced when it matched the line
/// (regex captures, a command name, ...); it is carried untouched.
#[derive(Clone, Debug)]
pub struct EventContext<M> {
    line: ParsedLine,
    matched: M,
    account: Option<String>,
    is_privmsg: bool,
    admin: bool,
    owner: bool,
}

impl<M> EventContext<M> {
    /// Resolve `line` against one access configuration.
    pub fn build(access: &AccessConfig, line: ParsedLine, matched: M) -> Self {
        let account = line.account().map(str::to_owned);

        let is_privmsg = line.is_command("PRIVMSG")
            && matches!((&line.sender, &line.nick), (Some(sender), Some(nick)) if sender == nick);

        let origin = Origin {
            nick: line.nick.as_deref(),
            host: line.host.as_deref(),
            hostmask: line.hostmask.as_deref(),
            account: account.as_deref(),
        };
        let owner = access.is_owner(&origin);
        let admin = access.is_admin(&origin);

        Self {
            line,
            matched,
            account,
            is_privmsg,
            admin,
            owner,
        }
    }

    /// Load the access configuration once and resolve `line` against it.
    pub fn build_from(access: &Snapshot<AccessConfig>, line: ParsedLine, matched: M) -> Self {
        let snapshot: Arc<AccessConfig> = access.load();
        Self::build(&snapshot, line, matched)
    }

    pub fn line(&self) -> &ParsedLine {
        &self.line
    }

    /// The dispatcher's match result.
    pub fn matched(&self) -> &M {
        &self.matched
    }

    /// The origin's services account, if known.
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// True for a `PRIVMSG` sent directly to us rather than to a channel.
    pub fn is_privmsg(&self) -> bool {
        self.is_privmsg
    }

    pub fn admin(&self) -> bool {
        self.admin
    }

    pub fn owner(&self) -> bool {
        self.owner
    }

    /// Give back the line and the match result.
    pub fn into_parts(self) -> (ParsedLine, M) {
        (self.line, self.matched)
    }
}
