//! Material Design divider primitives.
//!
//! ## Usage
//!
//! Separate sections in lists, menus and chip groups.

use chip_catalog_ui::{
    ComputedData, Constraint, DimensionValue, Dp, LayoutOutput, LayoutSpec, MeasureInput,
    MeasurementError, NodeSpec, Px, Role, emit,
};
use derive_setters::Setters;

/// Default values for divider components.
pub struct DividerDefaults;

impl DividerDefaults {
    /// Default divider thickness.
    pub const THICKNESS: Dp = Dp(1.0);
}

/// Arguments for [`horizontal_divider`] and [`vertical_divider`].
#[derive(Clone, Debug, Setters)]
pub struct DividerArgs {
    /// Thickness of the divider line.
    ///
    /// Use `Dp::ZERO` to request a single physical pixel thickness.
    pub thickness: Dp,
}

impl Default for DividerArgs {
    fn default() -> Self {
        Self {
            thickness: DividerDefaults::THICKNESS,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Orientation {
    Horizontal,
    Vertical,
}

struct DividerLayout {
    orientation: Orientation,
    thickness: Dp,
}

impl DividerLayout {
    fn thickness_px(&self, input: &MeasureInput<'_>) -> Px {
        if self.thickness == Dp::ZERO {
            Px(1)
        } else {
            input.px(self.thickness)
        }
    }
}

/// Fills `dim`, keeping its bounds.
fn fill(dim: DimensionValue) -> DimensionValue {
    match dim {
        DimensionValue::Fixed(_) => dim,
        DimensionValue::Wrap { min, max } | DimensionValue::Fill { min, max } => {
            DimensionValue::Fill { min, max }
        }
    }
}

impl LayoutSpec for DividerLayout {
    fn measure(
        &self,
        input: &MeasureInput<'_>,
        _output: &mut LayoutOutput,
    ) -> Result<ComputedData, MeasurementError> {
        let thickness = self.thickness_px(input);
        let parent = input.parent_constraint();
        let effective = match self.orientation {
            Orientation::Horizontal => Constraint::new(fill(parent.width), parent.height),
            Orientation::Vertical => Constraint::new(parent.width, fill(parent.height)),
        };
        let (width, height) = match self.orientation {
            Orientation::Horizontal => (
                effective.width.resolve(Px::ZERO)?,
                effective.height.clamp(thickness),
            ),
            Orientation::Vertical => (
                effective.width.clamp(thickness),
                effective.height.resolve(Px::ZERO)?,
            ),
        };
        Ok(ComputedData { width, height })
    }
}

fn divider(orientation: Orientation, args: DividerArgs) {
    let name = match orientation {
        Orientation::Horizontal => "horizontal_divider",
        Orientation::Vertical => "vertical_divider",
    };
    emit(
        NodeSpec::new(
            name,
            DividerLayout {
                orientation,
                thickness: args.thickness,
            },
        )
        .role(Role::Separator)
        .attribute("thickness", args.thickness),
        || {},
    );
}

/// # horizontal_divider
///
/// Renders a horizontal line that fills the available width.
///
/// Fails to measure when the width is unbounded.
pub fn horizontal_divider(args: impl Into<DividerArgs>) {
    divider(Orientation::Horizontal, args.into());
}

/// # vertical_divider
///
/// Renders a vertical line that fills the available height.
///
/// Fails to measure when the height is unbounded; box it to a fixed height
/// inside rows.
pub fn vertical_divider(args: impl Into<DividerArgs>) {
    divider(Orientation::Vertical, args.into());
}
