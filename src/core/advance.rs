//! Value mutation: advancing an annotation to its next candidate, or setting
//! an explicit one, by rewriting the line text.

use std::borrow::Cow;

use super::annotation::{Annotation, parse};

/// Pick the value that follows `current` in `candidates`.
///
/// The successor of the last candidate, and of any value that is not a
/// candidate at all, is the first candidate. Returns `None` only for an empty
/// slice.
pub fn next_value<'a>(candidates: &'a [String], current: Option<&str>) -> Option<&'a str> {
    let index = current.and_then(|value| candidates.iter().position(|c| c == value));
    match index {
        Some(i) if i + 1 < candidates.len() => Some(&candidates[i + 1]),
        _ => candidates.first().map(String::as_str),
    }
}

impl Annotation {
    /// The value a toggle would move to.
    pub fn next_value(&self) -> Option<&str> {
        next_value(&self.candidates, self.current_value())
    }

    /// Rebuild `line` with `value` as the assigned value.
    ///
    /// Everything in front of the `=` and everything from the comment token
    /// onwards is kept byte-for-byte; the value is surrounded by single
    /// spaces. Returns `None` when the annotation has no assignment.
    pub fn rewrite(&self, line: &str, value: &str) -> Option<String> {
        let prefix = self.prefix()?;
        let tail = line.get(self.marker_range.end..).unwrap_or_default();
        Some(format!("{} {} {}{}", prefix, value, self.marker_span, tail))
    }
}

/// Advance the annotation on `line` to its next candidate.
///
/// Lines without an annotation, or whose annotation has no assignment, are
/// returned unchanged.
///
/// ```
/// use cbtoggle::core::advance;
///
/// assert_eq!(advance("x = 1 # [CB]: 1|0", "#"), "x = 0 # [CB]: 1|0");
/// assert_eq!(advance("plain = 42", "#"), "plain = 42");
/// ```
pub fn advance<'a>(line: &'a str, comment_token: &str) -> Cow<'a, str> {
    let rewritten = parse(line, comment_token).and_then(|annotation| {
        let next = annotation.next_value()?;
        annotation.rewrite(line, next)
    });

    match rewritten {
        Some(text) => Cow::Owned(text),
        None => Cow::Borrowed(line),
    }
}

/// Set the annotation on `line` to `value`.
///
/// The value is written as given, whether or not it is a candidate; callers
/// that want to restrict it should check [`Annotation::is_candidate`] first.
pub fn set_value<'a>(line: &'a str, comment_token: &str, value: &str) -> Cow<'a, str> {
    match parse(line, comment_token).and_then(|a| a.rewrite(line, value.trim())) {
        Some(text) => Cow::Owned(text),
        None => Cow::Borrowed(line),
    }
}
