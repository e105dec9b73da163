//! Glyphs shown in front of annotations in listings.

use std::collections::HashMap;

use colored::{ColoredString, Colorize};

use crate::core::{Annotation, BinaryState, binary_state, carousel_index};

pub const CHECKED_GLYPH: &str = "\u{2611}"; // ☑
pub const UNCHECKED_GLYPH: &str = "\u{2610}"; // ☐

/// Circled numbers ① to ⑳ for carousel positions.
pub const CIRCLED_NUMBERS: [&str; 20] = [
    "①", "②", "③", "④", "⑤", "⑥", "⑦", "⑧", "⑨", "⑩", "⑪", "⑫", "⑬", "⑭", "⑮", "⑯", "⑰", "⑱",
    "⑲", "⑳",
];

/// Carousel positions beyond this many get no glyph.
pub const MAX_CAROUSEL_GLYPHS: usize = CIRCLED_NUMBERS.len();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphStyle {
    Checked,
    Unchecked,
    /// 0-based carousel position, below [`MAX_CAROUSEL_GLYPHS`].
    Ordinal(usize),
}

impl GlyphStyle {
    pub fn for_annotation(annotation: &Annotation) -> Option<Self> {
        if let Some(state) = binary_state(annotation) {
            return Some(match state {
                BinaryState::Checked => Self::Checked,
                BinaryState::Unchecked => Self::Unchecked,
            });
        }

        carousel_index(annotation)
            .filter(|&index| index < MAX_CAROUSEL_GLYPHS)
            .map(Self::Ordinal)
    }
}

/// Painted glyph for every style, built once per listing.
pub struct StyleRegistry {
    styles: HashMap<GlyphStyle, ColoredString>,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    pub fn new() -> Self {
        let mut styles = HashMap::new();
        styles.insert(GlyphStyle::Checked, CHECKED_GLYPH.green().bold());
        styles.insert(GlyphStyle::Unchecked, UNCHECKED_GLYPH.bright_black().bold());
        for (index, glyph) in CIRCLED_NUMBERS.iter().enumerate() {
            styles.insert(GlyphStyle::Ordinal(index), glyph.yellow().bold());
        }
        Self { styles }
    }

    pub fn get(&self, style: GlyphStyle) -> Option<&ColoredString> {
        self.styles.get(&style)
    }

    /// Glyph for an annotation, or `None` when it has no visual state
    /// (single candidate, unknown carousel value, or position past ⑳).
    pub fn glyph(&self, annotation: &Annotation) -> Option<&ColoredString> {
        GlyphStyle::for_annotation(annotation).and_then(|style| self.get(style))
    }
}
