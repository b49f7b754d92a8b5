//! Hostmask wildcard matching.
//!
//! Patterns and identities share the `nick!user@host` shape. Each of the three
//! segments is compared on its own with anchored glob rules: `*` matches any
//! run of characters (including none), `?` matches exactly one, everything
//! else matches itself.
//!
//! Matching is case-sensitive. Callers that want IRC casemapping fold both
//! sides first (see [`crate::config::CaseMapping`]).

/// Splits a hostmask into `(nick, user, host)`.
///
/// The nick ends at the first `!`, the user at the first `@` after it.
/// Returns `None` when either separator is missing.
pub fn split_hostmask(mask: &str) -> Option<(&str, &str, &str)> {
    let (nick, rest) = mask.split_once('!')?;
    let (user, host) = rest.split_once('@')?;
    Some((nick, user, host))
}

/// Returns true if `pattern` matches `identity` segment by segment.
///
/// A malformed pattern or identity never matches.
pub fn hostmask_match(pattern: &str, identity: &str) -> bool {
    let (Some(pattern), Some(identity)) = (split_hostmask(pattern), split_hostmask(identity)) else {
        return false;
    };

    glob_match(pattern.0, identity.0)
        && glob_match(pattern.1, identity.1)
        && glob_match(pattern.2, identity.2)
}

/// Anchored glob match of a single segment.
pub fn glob_match(pattern: &str, text: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    // row[j]: pattern[..i] matches text[..j]
    let mut row = vec![false; text.len() + 1];
    row[0] = true;

    for &p in &pattern {
        let mut next = vec![false; text.len() + 1];
        match p {
            '*' => {
                next[0] = row[0];
                for j in 1..=text.len() {
                    next[j] = row[j] || next[j - 1];
                }
            }
            '?' => {
                for j in 1..=text.len() {
                    next[j] = row[j - 1];
                }
            }
            c => {
                for j in 1..=text.len() {
                    next[j] = row[j - 1] && text[j - 1] == c;
                }
            }
        }
        row = next;
    }

    row[text.len()]
}
