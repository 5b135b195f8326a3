//! Line-oriented detection of `t!("...")` translation calls.

use regex::Regex;
use std::sync::LazyLock;

/// A non-word character, the `t!(` marker, then a double-quoted literal.
///
/// The literal stops at the first unescaped closing quote, so `\"` inside the
/// string does not end the match. Literals spanning several lines are not seen.
static TRANSLATE_CALL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\Wt!\(("(?:[^"\\]|\\.)*")"#).unwrap());

/// A translation call found on a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch<'a> {
    /// The quoted literal exactly as written, quotes included.
    pub token: &'a str,
    /// Byte offset of the opening quote within the line.
    pub column: usize,
}

/// Split `content` into lines, treating `\n`, `\r\n` and a lone `\r` as breaks.
///
/// A trailing break does not produce an extra empty line.
pub fn source_lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = content;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(i) => {
                let line = &rest[..i];
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// All translation calls on `line`, left to right.
pub fn find_calls(line: &str) -> impl Iterator<Item = LineMatch<'_>> {
    TRANSLATE_CALL_REGEX.captures_iter(line).filter_map(|caps| {
        caps.get(1).map(|m| LineMatch {
            token: m.as_str(),
            column: m.start(),
        })
    })
}
