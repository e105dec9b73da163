//! Annotation engine.
//!
//! Everything in this module is pure and works on single lines or in-memory
//! documents; no function here performs I/O or fails.
//!
//! ## Module Structure
//!
//! - `comment_syntax`: language id → line-comment token
//! - `annotation`: parse a line into an [`Annotation`]
//! - `advance`: compute the rewritten line for a toggle or explicit value
//! - `validate`: check the current value against the candidates
//! - `render`: checkbox / carousel state for renderers
//! - `document`: read-only document view, scanning and line edits
//! - `filter`: variable-name search

pub mod advance;
pub mod annotation;
pub mod comment_syntax;
pub mod document;
pub mod filter;
pub mod render;
pub mod validate;

pub use advance::{advance, next_value, set_value};
pub use annotation::{Annotation, Assignment, MARKER_TAG, MarkerPattern, parse};
pub use comment_syntax::{
    CommentSyntax, DEFAULT_COMMENT_TOKEN, PLAIN_TEXT, language_for_path, resolve,
};
pub use document::{
    AnnotatedLine, Document, LineEdit, TextDocument, scan, set_line, toggle_line,
};
pub use filter::{NameFilter, looks_like_regex};
pub use render::{AnnotationKind, BinaryState, binary_state, carousel_index};
pub use validate::{Validation, validate};
