//! Icons.
//!
//! ## Usage
//!
//! Decorate chips and menu rows with a glyph from [`crate::material_icons`].

use chip_catalog_ui::{
    ComputedData, Dp, LayoutOutput, LayoutSpec, MeasureInput, MeasurementError, Modifier,
    NodeSpec, Role, emit,
};
use derive_setters::Setters;

/// A named glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconContent {
    /// Material symbol name, e.g. `settings`.
    pub name: &'static str,
    /// Whether the glyph flips in right-to-left layouts.
    pub auto_mirrored: bool,
}

impl IconContent {
    /// A glyph that keeps its orientation in every layout direction.
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            auto_mirrored: false,
        }
    }

    /// A glyph that mirrors in right-to-left layouts.
    pub const fn mirrored(name: &'static str) -> Self {
        Self {
            name,
            auto_mirrored: true,
        }
    }
}

/// Default values for icons.
pub struct IconDefaults;

impl IconDefaults {
    /// Default icon size.
    pub const SIZE: Dp = Dp(24.0);
}

/// Arguments for the [`icon`] component.
#[derive(Clone, Debug, Setters)]
pub struct IconArgs {
    /// Glyph to draw.
    pub content: IconContent,
    /// Square size of the icon.
    pub size: Dp,
    /// Description announced for the icon; decorative icons leave it unset.
    #[setters(strip_option, into)]
    pub content_description: Option<String>,
    /// Modifier chain applied to the icon.
    pub modifier: Modifier,
}

impl From<IconContent> for IconArgs {
    fn from(content: IconContent) -> Self {
        Self {
            content,
            size: IconDefaults::SIZE,
            content_description: None,
            modifier: Modifier::new(),
        }
    }
}

struct IconLayout {
    size: Dp,
}

impl LayoutSpec for IconLayout {
    fn measure(
        &self,
        input: &MeasureInput<'_>,
        _output: &mut LayoutOutput,
    ) -> Result<ComputedData, MeasurementError> {
        let size = input.px(self.size);
        let constraint = input.parent_constraint();
        Ok(ComputedData {
            width: constraint.width.clamp(size),
            height: constraint.height.clamp(size),
        })
    }
}

/// # icon
///
/// Renders a square glyph.
pub fn icon(args: impl Into<IconArgs>) {
    let args: IconArgs = args.into();
    let mut spec = NodeSpec::new("icon", IconLayout { size: args.size })
        .role(Role::Image)
        .attribute("glyph", args.content.name)
        .attribute("size", args.size)
        .modifier(args.modifier);
    if args.content.auto_mirrored {
        spec = spec.attribute("mirrored", true);
    }
    if let Some(description) = args.content_description {
        spec = spec.label(description);
    }
    emit(spec, || {});
}
