//! Nom-based IRC line splitter.
//!
//! This module splits a raw line into its wire components without
//! allocating; interpretation (tags, hostmask, CTCP, sender) happens in
//! [`ParsedLine`](super::ParsedLine).

use nom::{
    bytes::complete::{take_until, take_while, take_while1},
    character::complete::{char, space0},
    combinator::{opt, verify},
    error::{context, VerboseError},
    sequence::preceded,
    IResult,
};

type ParseResult<I, O> = IResult<I, O, VerboseError<I>>;

/// Parse IRCv3 message tags (the part after `@` and before the first space).
fn parse_tags(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRCv3 message tags",
        preceded(char('@'), take_until(" ")),
    )(input)
}

/// Parse the origin (the part after `:` and before the first space).
fn parse_origin(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing message origin",
        preceded(char(':'), take_while(|c: char| c != ' ')),
    )(input)
}

/// Parse the command token, as received.
fn parse_command(input: &str) -> ParseResult<&str, &str> {
    context(
        "parsing IRC command",
        verify(take_while1(|c: char| c != ' '), |cmd: &str| {
            !cmd.starts_with([':', '@'])
        }),
    )(input)
}

/// Split a raw line into its components.
///
/// IRC line format:
/// ```text
/// [@tags] [:origin] <command> [params...] [:trailing]
/// ```
///
/// Runs of spaces between parameters are collapsed. A parameter starting
/// with `:` swallows the rest of the line, spaces included.
pub fn parse_line(input: &str) -> ParseResult<&str, RawLine<'_>> {
    let (input, tags) = context("parsing optional tags", opt(parse_tags))(input)?;
    let (input, _) = space0(input)?;

    let (input, origin) = context("parsing optional origin", opt(parse_origin))(input)?;
    let (input, _) = space0(input)?;

    let (mut rest, command) = context("parsing required command", parse_command)(input)?;

    let mut params: Vec<&str> = Vec::new();
    loop {
        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }
        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            rest = "";
            break;
        }
        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    Ok((
        rest,
        RawLine {
            tags,
            origin: origin.filter(|o| !o.is_empty()),
            command,
            params,
        },
    ))
}

/// A split IRC line with borrowed string slices.
#[derive(Debug, Clone, PartialEq)]
pub struct RawLine<'a> {
    /// Raw tags string (without the leading `@`), if present.
    pub tags: Option<&'a str>,
    /// Raw origin string (without the leading `:`), if present and non-empty.
    pub origin: Option<&'a str>,
    /// The command name.
    pub command: &'a str,
    /// Command parameters, including trailing.
    pub params: Vec<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(input: &str) -> RawLine<'_> {
        parse_line(input).unwrap().1
    }

    #[test]
    fn test_parse_simple_command() {
        let line = split("PING");
        assert_eq!(line.command, "PING");
        assert!(line.tags.is_none());
        assert!(line.origin.is_none());
        assert!(line.params.is_empty());
    }

    #[test]
    fn test_parse_with_origin_and_trailing() {
        let line = split(":nick!user@host PRIVMSG #channel :Hello, world!");
        assert_eq!(line.origin, Some("nick!user@host"));
        assert_eq!(line.command, "PRIVMSG");
        assert_eq!(line.params, vec!["#channel", "Hello, world!"]);
    }

    #[test]
    fn test_parse_with_tags() {
        let line = split("@time=2023-01-01T00:00:00Z :nick PRIVMSG #ch :Hi");
        assert_eq!(line.tags, Some("time=2023-01-01T00:00:00Z"));
        assert_eq!(line.origin, Some("nick"));
        assert_eq!(line.params, vec!["#ch", "Hi"]);
    }

    #[test]
    fn test_parse_collapses_spaces() {
        let line = split("MODE   #chan  +ov   a b");
        assert_eq!(line.params, vec!["#chan", "+ov", "a", "b"]);
    }

    #[test]
    fn test_parse_trailing_keeps_spaces() {
        let line = split("PRIVMSG #c :  two  spaces :colon");
        assert_eq!(line.params, vec!["#c", "  two  spaces :colon"]);
    }

    #[test]
    fn test_parse_empty_trailing() {
        let line = split("PRIVMSG #channel :");
        assert_eq!(line.params, vec!["#channel", ""]);
    }

    #[test]
    fn test_parse_preserves_command_case() {
        assert_eq!(split("privmsg #a :b").command, "privmsg");
        assert_eq!(split(":server 001 nick :Welcome").command, "001");
    }

    #[test]
    fn test_parse_empty_origin_is_dropped() {
        let line = split(": PING x");
        assert_eq!(line.origin, None);
        assert_eq!(line.command, "PING");
    }

    #[test]
    fn test_parse_without_command_fails() {
        assert!(parse_line("").is_err());
        assert!(parse_line("   ").is_err());
        assert!(parse_line(":nick!user@host").is_err());
        assert!(parse_line(":nick!user@host ").is_err());
        assert!(parse_line("@a=b").is_err());
        assert!(parse_line("@a=b :origin").is_err());
        assert!(parse_line(":").is_err());
    }
}
