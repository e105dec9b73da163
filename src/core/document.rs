//! Document access for whole-file operations.
//!
//! The core only needs a read-only view of a document: its language and its
//! lines. Mutations are expressed as a [`LineEdit`] that the owner of the
//! document applies.

use std::ops::Range;

use super::{
    annotation::{Annotation, MarkerPattern},
    comment_syntax::CommentSyntax,
};

/// Read-only view of a text document.
pub trait Document {
    /// Language identifier used to pick the comment token.
    fn language_id(&self) -> &str;

    fn line_count(&self) -> usize;

    /// Text of the line at `index` (0-based), without its line terminator.
    fn line(&self, index: usize) -> Option<&str>;
}

/// In-memory document backed by a string.
#[derive(Debug, Clone)]
pub struct TextDocument {
    language_id: String,
    text: String,
    /// Byte range of each line's content, excluding `\n` / `\r\n`.
    lines: Vec<Range<usize>>,
}

impl TextDocument {
    pub fn new(language_id: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = line_ranges(&text);
        Self {
            language_id: language_id.into(),
            text,
            lines,
        }
    }

    /// Full text with the line at `index` replaced by `replacement`.
    ///
    /// Line terminators and all other lines are kept byte-for-byte. Returns
    /// `None` if `index` is out of range.
    pub fn replace_line(&self, index: usize, replacement: &str) -> Option<String> {
        let range = self.lines.get(index)?;
        let mut text = String::with_capacity(self.text.len() + replacement.len());
        text.push_str(&self.text[..range.start]);
        text.push_str(replacement);
        text.push_str(&self.text[range.end..]);
        Some(text)
    }

    /// Apply an edit produced from this document.
    pub fn apply(&self, edit: &LineEdit) -> Option<String> {
        self.replace_line(edit.index, &edit.replacement)
    }
}

impl Document for TextDocument {
    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|range| &self.text[range.clone()])
    }
}

fn line_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for segment in text.split_inclusive('\n') {
        let content = segment
            .strip_suffix('\n')
            .map(|s| s.strip_suffix('\r').unwrap_or(s))
            .unwrap_or(segment);
        ranges.push(start..start + content.len());
        start += segment.len();
    }

    ranges
}

/// An annotation found while scanning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedLine {
    /// 0-based line index.
    pub index: usize,
    /// The line text the annotation was parsed from.
    pub text: String,
    pub annotation: Annotation,
}

impl AnnotatedLine {
    /// 1-based line number for display.
    pub fn line_number(&self) -> usize {
        self.index + 1
    }
}

/// Find every annotated line in `document`.
///
/// The marker pattern is compiled once for the whole document.
pub fn scan<D: Document + ?Sized>(document: &D, syntax: &CommentSyntax) -> Vec<AnnotatedLine> {
    let Some(pattern) = MarkerPattern::for_token(syntax.resolve(document.language_id())) else {
        return Vec::new();
    };

    (0..document.line_count())
        .filter_map(|index| {
            let text = document.line(index)?;
            pattern.parse(text).map(|annotation| AnnotatedLine {
                index,
                text: text.to_string(),
                annotation,
            })
        })
        .collect()
}

/// Replacement text for a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEdit {
    /// 0-based line index.
    pub index: usize,
    pub original: String,
    pub replacement: String,
}

impl LineEdit {
    pub fn line_number(&self) -> usize {
        self.index + 1
    }

    pub fn is_noop(&self) -> bool {
        self.original == self.replacement
    }
}

/// Edit that advances the annotation on line `index` to its next candidate.
///
/// `None` if the line does not exist or has no annotation with an
/// assignment.
pub fn toggle_line<D: Document + ?Sized>(
    document: &D,
    index: usize,
    syntax: &CommentSyntax,
) -> Option<LineEdit> {
    edit_line(document, index, syntax, |annotation| {
        annotation.next_value().map(String::from)
    })
}

/// Edit that sets the annotation on line `index` to `value`.
pub fn set_line<D: Document + ?Sized>(
    document: &D,
    index: usize,
    value: &str,
    syntax: &CommentSyntax,
) -> Option<LineEdit> {
    edit_line(document, index, syntax, |_| Some(value.trim().to_string()))
}

fn edit_line<D, F>(document: &D, index: usize, syntax: &CommentSyntax, pick: F) -> Option<LineEdit>
where
    D: Document + ?Sized,
    F: FnOnce(&Annotation) -> Option<String>,
{
    let text = document.line(index)?;
    let pattern = MarkerPattern::for_token(syntax.resolve(document.language_id()))?;
    let annotation = pattern.parse(text)?;
    let value = pick(&annotation)?;
    let replacement = annotation.rewrite(text, &value)?;

    Some(LineEdit {
        index,
        original: text.to_string(),
        replacement,
    })
}
