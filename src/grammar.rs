//! The `:tag: argument` input grammar.
//!
//! An input line is a sequence of tags, each followed by free text:
//!
//! ```text
//! :id: 42 :title: The Left Hand of Darkness :date: 1969
//! ```
//!
//! A tag is a word of at least three characters that starts and ends with
//! `:` and has only lowercase ASCII letters in between. Everything up to the
//! next tag (or the end of the line) is the argument of the preceding tag.
//! One word of lookahead is all the parser needs, since [`is_tag`] never
//! matches an argument word.
//!
//! # Examples
//!
//! ```
//! use bookcat::grammar::{parse_line, RawTag};
//!
//! let tags = parse_line(":a: x y :b: z").unwrap();
//! assert_eq!(tags, vec![RawTag::new("a", "x y"), RawTag::new("b", "z")]);
//! ```

use crate::error::{CatalogError, Result};
use std::fmt;
use tracing::debug;

/// Check whether a word is a tag according to the grammar rules.
///
/// # Examples
///
/// ```
/// use bookcat::grammar::is_tag;
///
/// assert!(is_tag(":id:"));
/// assert!(!is_tag(":Id:"));
/// assert!(!is_tag("::"));
/// assert!(!is_tag(":ab1:"));
/// ```
#[must_use]
pub fn is_tag(word: &str) -> bool {
    let bytes = word.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    if bytes[0] != b':' || bytes[bytes.len() - 1] != b':' {
        return false;
    }
    bytes[1..bytes.len() - 1]
        .iter()
        .all(u8::is_ascii_lowercase)
}

/// Find the next whitespace-delimited word, returning its byte offset.
fn next_word(input: &str) -> Option<(usize, &str)> {
    let start = input.find(|c: char| !c.is_whitespace())?;
    let len = input[start..]
        .find(char::is_whitespace)
        .unwrap_or(input.len() - start);
    Some((start, &input[start..start + len]))
}

/// Parse the argument text that follows a tag word.
///
/// Words are accumulated, joined by single spaces, until the input runs out
/// or a word that [`is_tag`] accepts is reached. That tag word is not part
/// of the argument: the returned remainder starts exactly at it, so the next
/// parse step sees it first. The remainder is empty when the input is
/// exhausted.
///
/// # Examples
///
/// ```
/// use bookcat::grammar::parse_argument;
///
/// assert_eq!(parse_argument(" x  y :b: z"), ("x y".to_string(), ":b: z"));
/// assert_eq!(parse_argument(" :b: z"), (String::new(), ":b: z"));
/// assert_eq!(parse_argument(" Dune"), ("Dune".to_string(), ""));
/// ```
#[must_use]
pub fn parse_argument(input: &str) -> (String, &str) {
    let mut argument = String::new();
    let mut cursor = 0;

    while let Some((offset, word)) = next_word(&input[cursor..]) {
        let start = cursor + offset;
        if is_tag(word) {
            return (argument, &input[start..]);
        }
        if !argument.is_empty() {
            argument.push(' ');
        }
        argument.push_str(word);
        cursor = start + word.len();
    }

    (argument, "")
}

/// A tag name and its argument text, as read from the input.
///
/// This is the unvalidated state of a tag. [`RawTag::validate`] is the only
/// way to turn it into a usable [`Tag`](crate::tag::Tag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    /// Tag name without the surrounding colons
    pub name: String,
    /// Argument words joined by single spaces (may be empty)
    pub argument: String,
}

impl RawTag {
    /// Create a raw tag from a name (without colons) and argument text.
    #[must_use]
    pub fn new(name: impl Into<String>, argument: impl Into<String>) -> Self {
        RawTag {
            name: name.into(),
            argument: argument.into(),
        }
    }
}

impl fmt::Display for RawTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.argument.is_empty() {
            write!(f, ":{}:", self.name)
        } else {
            write!(f, ":{}: {}", self.name, self.argument)
        }
    }
}

/// Split an input line into its sequence of raw tags.
///
/// A blank line yields no tags.
///
/// # Errors
///
/// Returns [`CatalogError::Grammar`] if the line does not start with a tag.
pub fn parse_line(line: &str) -> Result<Vec<RawTag>> {
    let mut tags = Vec::new();
    let mut rest = line;

    while let Some((offset, word)) = next_word(rest) {
        if !is_tag(word) {
            return Err(CatalogError::Grammar(format!(
                "expected a tag like `:title:`, found `{word}`"
            )));
        }
        let (argument, remainder) = parse_argument(&rest[offset + word.len()..]);
        tags.push(RawTag::new(&word[1..word.len() - 1], argument));
        rest = remainder;
    }

    debug!(count = tags.len(), "parsed input line");
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_tag_accepts_lowercase_names() {
        assert!(is_tag(":id:"));
        assert!(is_tag(":a:"));
        assert!(is_tag(":publisher:"));
    }

    #[test]
    fn test_is_tag_rejects_malformed_words() {
        assert!(!is_tag(":Id:"));
        assert!(!is_tag("::"));
        assert!(!is_tag(":::"));
        assert!(!is_tag(":ab1:"));
        assert!(!is_tag("id:"));
        assert!(!is_tag(":id"));
        assert!(!is_tag(":my-tag:"));
        assert!(!is_tag(":é:"));
        assert!(!is_tag(""));
    }

    #[test]
    fn test_parse_argument_stops_at_next_tag() {
        let (argument, rest) = parse_argument(" x y :b: z");
        assert_eq!(argument, "x y");
        assert_eq!(rest, ":b: z");
    }

    #[test]
    fn test_parse_argument_empty_when_first_word_is_tag() {
        let (argument, rest) = parse_argument("   :b: z");
        assert_eq!(argument, "");
        assert_eq!(rest, ":b: z");
    }

    #[test]
    fn test_parse_argument_consumes_to_end() {
        let (argument, rest) = parse_argument("\tThe   Dispossessed \n");
        assert_eq!(argument, "The Dispossessed");
        assert_eq!(rest, "");
    }

    #[test]
    fn test_parse_argument_keeps_colon_words_that_are_not_tags() {
        let (argument, rest) = parse_argument(" Dune: Messiah :X: 10:30 :date: 1969");
        assert_eq!(argument, "Dune: Messiah :X: 10:30");
        assert_eq!(rest, ":date: 1969");
    }

    #[test]
    fn test_parse_line_splits_tags() {
        let tags = parse_line(":id: 42 :title: Dune").unwrap();
        assert_eq!(
            tags,
            vec![RawTag::new("id", "42"), RawTag::new("title", "Dune")]
        );
    }

    #[test]
    fn test_parse_line_blank() {
        assert!(parse_line("").unwrap().is_empty());
        assert!(parse_line("  \t ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_line_requires_leading_tag() {
        let err = parse_line("Dune :title: Dune").unwrap_err();
        assert!(matches!(err, CatalogError::Grammar(_)));
    }

    #[test]
    fn test_parse_line_adjacent_tags() {
        let tags = parse_line(":list::help:").unwrap_err();
        assert!(matches!(tags, CatalogError::Grammar(_)));

        let tags = parse_line(":add: :id: 1").unwrap();
        assert_eq!(tags, vec![RawTag::new("add", ""), RawTag::new("id", "1")]);
    }

    #[test]
    fn test_raw_tag_display() {
        assert_eq!(RawTag::new("title", "Dune").to_string(), ":title: Dune");
        assert_eq!(RawTag::new("list", "").to_string(), ":list:");
    }
}
