//! Rendering-state derivation.
//!
//! Pure functions that tell a renderer how to present an annotation: a
//! checked/unchecked box for two candidates, an ordinal for more.

use serde::Serialize;

use super::annotation::Annotation;

/// Shape of an annotation, by number of candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnnotationKind {
    /// One candidate: advancing is a no-op.
    Single,
    /// Two candidates, rendered as a checkbox.
    Binary,
    /// More than two candidates, rendered as a numbered carousel.
    Carousel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BinaryState {
    Checked,
    Unchecked,
}

impl Annotation {
    pub fn kind(&self) -> AnnotationKind {
        match self.candidates.len() {
            0 | 1 => AnnotationKind::Single,
            2 => AnnotationKind::Binary,
            _ => AnnotationKind::Carousel,
        }
    }
}

/// Checkbox state for binary annotations: checked iff the current value is
/// the first candidate. `None` for any other candidate count.
pub fn binary_state(annotation: &Annotation) -> Option<BinaryState> {
    if annotation.kind() != AnnotationKind::Binary {
        return None;
    }

    if annotation.current_value() == annotation.candidates.first().map(String::as_str) {
        Some(BinaryState::Checked)
    } else {
        Some(BinaryState::Unchecked)
    }
}

/// Position of the current value for carousel annotations. `None` for other
/// candidate counts or when the value is not a candidate.
pub fn carousel_index(annotation: &Annotation) -> Option<usize> {
    if annotation.kind() != AnnotationKind::Carousel {
        return None;
    }
    annotation.position()
}
