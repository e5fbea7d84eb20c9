//! Wildcard hostmask matching.

use crate::casemap::fold_char;

/// Match `candidate` against a mask where `*` matches any run of
/// characters and `?` matches exactly one. Comparison uses the RFC 1459
/// case mapping.
///
/// ```
/// use slirc_events::event::mask_matches;
///
/// assert!(mask_matches("*!*@*.example.com", "Foo!foo@host.example.com"));
/// assert!(mask_matches("foo", "FOO"));
/// assert!(!mask_matches("foo?", "foo"));
/// ```
pub fn mask_matches(mask: &str, candidate: &str) -> bool {
    let mask: Vec<char> = mask.chars().map(fold_char).collect();
    let text: Vec<char> = candidate.chars().map(fold_char).collect();

    let (mut m, mut t) = (0, 0);
    // position of the last `*` in the mask, and where in the text it resumed
    let mut backtrack: Option<(usize, usize)> = None;

    while t < text.len() {
        match mask.get(m) {
            Some('*') => {
                backtrack = Some((m, t));
                m += 1;
            }
            Some(&c) if c == '?' || c == text[t] => {
                m += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, resume)) => {
                    m = star + 1;
                    t = resume + 1;
                    backtrack = Some((star, resume + 1));
                }
                None => return false,
            },
        }
    }

    mask[m..].iter().all(|&c| c == '*')
}
