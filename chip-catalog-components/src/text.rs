//! Single-line text.
//!
//! ## Usage
//!
//! Labels inside chips, menu items and section headings.

use chip_catalog_ui::{
    ComputedData, LayoutOutput, LayoutSpec, MeasureInput, MeasurementError, Modifier, NodeSpec,
    Role, TextStyle, emit,
};
use derive_setters::Setters;

/// Arguments for the [`text`] component.
#[derive(Clone, Debug, Default, Setters)]
pub struct TextArgs {
    /// The text to display.
    #[setters(into)]
    pub text: String,
    /// Font size and line height.
    pub style: TextStyle,
    /// Modifier chain applied to the text.
    pub modifier: Modifier,
}

impl From<&str> for TextArgs {
    fn from(text: &str) -> Self {
        TextArgs::default().text(text)
    }
}

impl From<String> for TextArgs {
    fn from(text: String) -> Self {
        TextArgs::default().text(text)
    }
}

struct TextLayout {
    text: String,
    style: TextStyle,
}

impl LayoutSpec for TextLayout {
    fn measure(
        &self,
        input: &MeasureInput<'_>,
        _output: &mut LayoutOutput,
    ) -> Result<ComputedData, MeasurementError> {
        let (width, height) = input.env().text_measurer.measure(&self.text, self.style);
        let constraint = input.parent_constraint();
        Ok(ComputedData {
            width: constraint.width.clamp(input.px(width)),
            height: constraint.height.clamp(input.px(height)),
        })
    }
}

/// # text
///
/// Renders a single line of text. Text longer than the available width is
/// clipped to it.
pub fn text(args: impl Into<TextArgs>) {
    let args: TextArgs = args.into();
    emit(
        NodeSpec::new(
            "text",
            TextLayout {
                text: args.text.clone(),
                style: args.style,
            },
        )
        .role(Role::Label)
        .label(args.text)
        .modifier(args.modifier),
        || {},
    );
}
