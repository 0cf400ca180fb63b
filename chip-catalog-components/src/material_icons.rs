//! Material icon names.
//!
//! ## Usage
//!
//! Use style modules (e.g. [`filled`]) and functions like `home_icon()` to
//! get an [`IconContent`] that can be passed to [`crate::icon::IconArgs`].

use crate::icon::IconContent;

/// Filled style glyphs.
pub mod filled {
    use super::IconContent;

    /// Gear glyph.
    pub fn settings_icon() -> IconContent {
        IconContent::named("settings")
    }

    /// Check mark glyph.
    pub fn done_icon() -> IconContent {
        IconContent::named("done")
    }

    /// House glyph.
    pub fn home_icon() -> IconContent {
        IconContent::named("home")
    }

    /// Person silhouette glyph.
    pub fn person_icon() -> IconContent {
        IconContent::named("person")
    }

    /// Sliders glyph.
    pub fn tune_icon() -> IconContent {
        IconContent::named("tune")
    }

    /// Downward caret glyph.
    pub fn arrow_drop_down_icon() -> IconContent {
        IconContent::named("arrow_drop_down")
    }
}

/// Glyphs that mirror in right-to-left layouts.
pub mod automirrored {
    /// Filled style.
    pub mod filled {
        use crate::icon::IconContent;

        /// Rightward caret glyph.
        pub fn arrow_right_icon() -> IconContent {
            IconContent::mirrored("arrow_right")
        }
    }
}
