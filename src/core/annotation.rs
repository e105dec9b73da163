//! Checkbox annotation parsing.
//!
//! An annotation is a line-comment suffix of the form
//!
//! ```text
//! <prefix> = <value> <comment-token> [CB]: <candidate>|<candidate>|...
//! ```
//!
//! The marker (comment token, `[CB]:` tag and candidate list) is matched with
//! a regex; the assignment in front of it is split at the first `=`. Nothing
//! here is cached between calls: every query re-derives the annotation from
//! the current line text.

use std::{borrow::Cow, ops::Range, sync::LazyLock};

use regex::Regex;

/// Literal tag that follows the comment token.
pub const MARKER_TAG: &str = "[CB]:";

/// The `<prefix> = <value>` part in front of the marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Text from the start of the line through the `=` sign.
    pub prefix: String,
    /// Trimmed text between `=` and the marker. May be empty.
    pub value: String,
    /// Byte range of `value` within the line.
    pub value_range: Range<usize>,
}

/// Parsed checkbox/carousel annotation for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Comment token the line was parsed with.
    pub comment_token: String,
    /// Assignment in front of the marker, if the line has one.
    pub assignment: Option<Assignment>,
    /// Candidate values in source order. Never empty.
    pub candidates: Vec<String>,
    /// Raw text from the comment token through the end of the candidate list.
    pub marker_span: String,
    /// Byte range of `marker_span` within the line.
    pub marker_range: Range<usize>,
}

impl Annotation {
    /// The current value, if the line has an assignment.
    pub fn current_value(&self) -> Option<&str> {
        self.assignment.as_ref().map(|a| a.value.as_str())
    }

    /// Text through the `=` sign, if the line has an assignment.
    pub fn prefix(&self) -> Option<&str> {
        self.assignment.as_ref().map(|a| a.prefix.as_str())
    }

    /// Variable name: the prefix without its trailing `=` signs, trimmed.
    ///
    /// For `int retries = 3; // [CB]: 3|5` this is `int retries`.
    pub fn name(&self) -> Option<&str> {
        let prefix = self.prefix()?;
        let name = prefix.trim_end_matches('=').trim();
        if name.is_empty() { None } else { Some(name) }
    }

    /// Index of the current value among the candidates (first match).
    pub fn position(&self) -> Option<usize> {
        let value = self.current_value()?;
        self.candidates.iter().position(|c| c == value)
    }

    pub fn is_candidate(&self, value: &str) -> bool {
        self.candidates.iter().any(|c| c == value)
    }
}

/// Compiled marker regex for one comment token.
///
/// Build it once per document and reuse it for every line; [`parse`] does
/// this for a single line.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    comment_token: String,
    regex: Regex,
}

// Pre-compiled patterns for the two built-in tokens.
static HASH_MARKER: LazyLock<Option<MarkerPattern>> = LazyLock::new(|| MarkerPattern::new("#"));
static SLASH_MARKER: LazyLock<Option<MarkerPattern>> = LazyLock::new(|| MarkerPattern::new("//"));

impl MarkerPattern {
    /// Compile the pattern for `comment_token`. `None` for an empty token.
    pub fn new(comment_token: &str) -> Option<Self> {
        if comment_token.is_empty() {
            return None;
        }

        // Group 1: the `|`-separated list, running to the end of the line or
        // to the first empty segment.
        let pattern = format!(
            r"{}\s*{}\s*([^|\n]+(?:\|[^|\n]+)*)",
            regex::escape(comment_token),
            regex::escape(MARKER_TAG)
        );
        Regex::new(&pattern).ok().map(|regex| Self {
            comment_token: comment_token.to_string(),
            regex,
        })
    }

    /// Shared pattern for `#` and `//`, a fresh one for any other token.
    pub fn for_token(comment_token: &str) -> Option<Cow<'static, MarkerPattern>> {
        match comment_token {
            "#" => HASH_MARKER.as_ref().map(Cow::Borrowed),
            "//" => SLASH_MARKER.as_ref().map(Cow::Borrowed),
            _ => Self::new(comment_token).map(Cow::Owned),
        }
    }

    pub fn comment_token(&self) -> &str {
        &self.comment_token
    }

    /// Parse the annotation on `line`.
    pub fn parse(&self, line: &str) -> Option<Annotation> {
        let captures = self.regex.captures(line)?;
        let marker = captures.get(0)?;
        let list = captures.get(1)?;

        let candidates = split_candidates(list.as_str());
        if candidates.is_empty() {
            return None;
        }

        Some(Annotation {
            comment_token: self.comment_token.clone(),
            assignment: parse_assignment(&line[..marker.start()]),
            candidates,
            marker_span: marker.as_str().to_string(),
            marker_range: marker.range(),
        })
    }
}

/// Parse the annotation on `line`, using `comment_token` as the line-comment
/// marker.
///
/// Returns `None` when the line has no marker, when the candidate list has
/// no non-empty segment, or when `comment_token` is empty.
///
/// ```
/// use cbtoggle::core::parse;
///
/// let annotation = parse("debug = True # [CB]: False|True", "#").unwrap();
/// assert_eq!(annotation.current_value(), Some("True"));
/// assert_eq!(annotation.candidates, vec!["False", "True"]);
/// ```
pub fn parse(line: &str, comment_token: &str) -> Option<Annotation> {
    MarkerPattern::for_token(comment_token)?.parse(line)
}

/// Split a candidate list on `|`, trimming each segment. Segments that are
/// empty after trimming are dropped.
fn split_candidates(list: &str) -> Vec<String> {
    list.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Split the text in front of the marker at its first `=`. A run of `=`
/// (as in `==`) stays whole in the prefix.
fn parse_assignment(head: &str) -> Option<Assignment> {
    let eq = head.find('=')?;
    let operator_len = head[eq..].len() - head[eq..].trim_start_matches('=').len();
    let eq = eq + operator_len - 1;
    let rest = &head[eq + 1..];
    let value = rest.trim();
    let start = eq + 1 + (rest.len() - rest.trim_start().len());

    Some(Assignment {
        prefix: head[..=eq].to_string(),
        value: value.to_string(),
        value_range: start..start + value.len(),
    })
}
