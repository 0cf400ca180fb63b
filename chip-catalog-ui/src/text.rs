//! Text measurement.
//!
//! The layout pass has no font stack; it measures single-line runs through a
//! [`TextMeasurer`]. [`GlyphAdvanceMeasurer`] assumes every grapheme cluster
//! advances by a fixed fraction of the font size.

use unicode_segmentation::UnicodeSegmentation;

use crate::Dp;

/// Font size and line height of a text run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size.
    pub font_size: Dp,
    /// Line height.
    pub line_height: Dp,
}

impl TextStyle {
    /// Material "label large": 14dp on a 20dp line.
    pub const LABEL_LARGE: Self = Self {
        font_size: Dp(14.0),
        line_height: Dp(20.0),
    };
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::LABEL_LARGE
    }
}

/// Measures a single line of text.
pub trait TextMeasurer: Send + Sync {
    /// Returns the width and height of `text` rendered with `style`.
    fn measure(&self, text: &str, style: TextStyle) -> (Dp, Dp);
}

/// Measures text as `graphemes * font_size * advance`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphAdvanceMeasurer {
    /// Advance of one grapheme cluster, in ems.
    pub advance: f64,
}

impl Default for GlyphAdvanceMeasurer {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl TextMeasurer for GlyphAdvanceMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> (Dp, Dp) {
        let graphemes = text.graphemes(true).count() as f64;
        (
            Dp(graphemes * style.font_size.0 * self.advance),
            style.line_height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_counts_graphemes() {
        let measurer = GlyphAdvanceMeasurer::default();
        let (width, height) = measurer.measure("Chip 1", TextStyle::LABEL_LARGE);
        assert_eq!(width, Dp(42.0));
        assert_eq!(height, Dp(20.0));

        // One cluster despite two code points.
        let (accented, _) = measurer.measure("e\u{301}", TextStyle::LABEL_LARGE);
        assert_eq!(accented, Dp(7.0));
    }
}
