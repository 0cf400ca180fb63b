//! Modifier chains for padding, sizing and scrolling.
//!
//! ## Usage
//!
//! Build a chain outer-to-inner and hand it to a component's args. The layout
//! pass applies the elements in the order they were added.
//!
//! ```
//! use chip_catalog_ui::{Dp, Modifier, ScrollAxis};
//!
//! let modifier = Modifier::new()
//!     .fill_max_width()
//!     .horizontal_scroll()
//!     .padding_horizontal(Dp(4.0));
//! assert_eq!(modifier.elements().len(), 3);
//! assert_eq!(modifier.scroll_axis(), Some(ScrollAxis::Horizontal));
//! ```

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::{Constraint, DimensionValue, Dp, Px};

/// Padding values for each edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Padding {
    /// Start edge.
    pub left: Dp,
    /// Top edge.
    pub top: Dp,
    /// End edge.
    pub right: Dp,
    /// Bottom edge.
    pub bottom: Dp,
}

impl Padding {
    /// Same padding on every edge.
    pub const fn all(value: Dp) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// Horizontal padding on both sides and vertical padding on both ends.
    pub const fn symmetric(horizontal: Dp, vertical: Dp) -> Self {
        Self {
            left: horizontal,
            top: vertical,
            right: horizontal,
            bottom: vertical,
        }
    }

    /// Explicit padding for each edge.
    pub const fn only(left: Dp, top: Dp, right: Dp, bottom: Dp) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub(crate) fn to_px(self, scale_factor: f64) -> PaddingPx {
        PaddingPx {
            left: self.left.to_px(scale_factor),
            top: self.top.to_px(scale_factor),
            right: self.right.to_px(scale_factor),
            bottom: self.bottom.to_px(scale_factor),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct PaddingPx {
    pub left: Px,
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
}

impl PaddingPx {
    pub fn horizontal(self) -> Px {
        self.left + self.right
    }

    pub fn vertical(self) -> Px {
        self.top + self.bottom
    }
}

/// A size request for one axis, expressed in dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SizeRequest {
    /// Exactly this size.
    Fixed(Dp),
    /// Fill the incoming upper bound.
    Fill,
    /// Wrap the content within optional bounds.
    Wrap {
        /// Lower bound.
        min: Option<Dp>,
        /// Upper bound.
        max: Option<Dp>,
    },
}

impl SizeRequest {
    pub(crate) fn to_dimension(self, scale_factor: f64) -> DimensionValue {
        match self {
            SizeRequest::Fixed(value) => DimensionValue::Fixed(value.to_px(scale_factor)),
            SizeRequest::Fill => DimensionValue::FILLED,
            SizeRequest::Wrap { min, max } => DimensionValue::Wrap {
                min: min.map(|v| v.to_px(scale_factor)),
                max: max.map(|v| v.to_px(scale_factor)),
            },
        }
    }
}

/// Scroll direction of a scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScrollAxis {
    /// Content may exceed the viewport width.
    Horizontal,
    /// Content may exceed the viewport height.
    Vertical,
}

/// One element of a [`Modifier`] chain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ModifierElement {
    /// Insets the content.
    Padding(Padding),
    /// Overrides the size on either axis.
    Size {
        /// Width request, if any.
        width: Option<SizeRequest>,
        /// Height request, if any.
        height: Option<SizeRequest>,
    },
    /// Lifts the bound on one axis and clips to the viewport.
    Scroll(ScrollAxis),
    /// Lifts the bound on one axis and reports the content's own size, even
    /// when it exceeds the incoming bound.
    Unbounded(ScrollAxis),
}

impl ModifierElement {
    pub(crate) fn apply_size(
        width: Option<SizeRequest>,
        height: Option<SizeRequest>,
        constraint: Constraint,
        scale_factor: f64,
    ) -> Constraint {
        let width = width.map_or(constraint.width, |request| {
            constraint
                .width
                .constrain(request.to_dimension(scale_factor))
        });
        let height = height.map_or(constraint.height, |request| {
            constraint
                .height
                .constrain(request.to_dimension(scale_factor))
        });
        Constraint::new(width, height)
    }
}

/// An ordered chain of layout modifiers.
#[derive(Clone, Default, PartialEq, Serialize)]
pub struct Modifier {
    elements: SmallVec<[ModifierElement; 4]>,
}

impl Modifier {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the elements, outermost first.
    pub fn elements(&self) -> &[ModifierElement] {
        &self.elements
    }

    /// Returns `true` if the chain has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Appends every element of `other` after this chain.
    pub fn then(mut self, other: Modifier) -> Self {
        self.elements.extend(other.elements);
        self
    }

    /// Appends a raw element.
    pub fn push(mut self, element: ModifierElement) -> Self {
        self.elements.push(element);
        self
    }

    /// Adds padding on every edge.
    pub fn padding(self, padding: Padding) -> Self {
        self.push(ModifierElement::Padding(padding))
    }

    /// Adds the same padding on every edge.
    pub fn padding_all(self, value: Dp) -> Self {
        self.padding(Padding::all(value))
    }

    /// Adds padding on the start and end edges.
    pub fn padding_horizontal(self, value: Dp) -> Self {
        self.padding(Padding::symmetric(value, Dp::ZERO))
    }

    /// Adds padding on the top and bottom edges.
    pub fn padding_vertical(self, value: Dp) -> Self {
        self.padding(Padding::symmetric(Dp::ZERO, value))
    }

    /// Requests an exact width.
    pub fn width(self, value: Dp) -> Self {
        self.constrain(Some(SizeRequest::Fixed(value)), None)
    }

    /// Requests an exact height.
    pub fn height(self, value: Dp) -> Self {
        self.constrain(None, Some(SizeRequest::Fixed(value)))
    }

    /// Requests an exact size.
    pub fn size(self, width: Dp, height: Dp) -> Self {
        self.constrain(
            Some(SizeRequest::Fixed(width)),
            Some(SizeRequest::Fixed(height)),
        )
    }

    /// Fills the available width.
    pub fn fill_max_width(self) -> Self {
        self.constrain(Some(SizeRequest::Fill), None)
    }

    /// Fills the available height.
    pub fn fill_max_height(self) -> Self {
        self.constrain(None, Some(SizeRequest::Fill))
    }

    /// Fills the available space on both axes.
    pub fn fill_max_size(self) -> Self {
        self.constrain(Some(SizeRequest::Fill), Some(SizeRequest::Fill))
    }

    /// Wraps the content within optional bounds on both axes.
    pub fn size_in(
        self,
        min_width: Option<Dp>,
        max_width: Option<Dp>,
        min_height: Option<Dp>,
        max_height: Option<Dp>,
    ) -> Self {
        self.constrain(
            Some(SizeRequest::Wrap {
                min: min_width,
                max: max_width,
            }),
            Some(SizeRequest::Wrap {
                min: min_height,
                max: max_height,
            }),
        )
    }

    /// Lets the height wrap the content, ignoring any minimum from the parent.
    pub fn wrap_content_height(self) -> Self {
        self.constrain(
            None,
            Some(SizeRequest::Wrap {
                min: Some(Dp::ZERO),
                max: None,
            }),
        )
    }

    /// Overrides either axis.
    pub fn constrain(self, width: Option<SizeRequest>, height: Option<SizeRequest>) -> Self {
        self.push(ModifierElement::Size { width, height })
    }

    /// Measures the content at its intrinsic width, overflowing the parent
    /// instead of being squeezed.
    pub fn wrap_content_width_unbounded(self) -> Self {
        self.push(ModifierElement::Unbounded(ScrollAxis::Horizontal))
    }

    /// Scrolls the content horizontally.
    pub fn horizontal_scroll(self) -> Self {
        self.push(ModifierElement::Scroll(ScrollAxis::Horizontal))
    }

    /// Scrolls the content vertically.
    pub fn vertical_scroll(self) -> Self {
        self.push(ModifierElement::Scroll(ScrollAxis::Vertical))
    }

    /// Returns the first scroll axis in the chain, if any.
    pub fn scroll_axis(&self) -> Option<ScrollAxis> {
        self.elements.iter().find_map(|element| match element {
            ModifierElement::Scroll(axis) => Some(*axis),
            _ => None,
        })
    }
}

impl fmt::Debug for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for element in &self.elements {
            if !first {
                f.write_str(".")?;
            }
            first = false;
            match element {
                ModifierElement::Padding(p) => write!(
                    f,
                    "padding({}, {}, {}, {})",
                    p.left.0, p.top.0, p.right.0, p.bottom.0
                )?,
                ModifierElement::Size { width, height } => {
                    write!(f, "size({}, {})", describe(*width), describe(*height))?
                }
                ModifierElement::Scroll(ScrollAxis::Horizontal) => f.write_str("horizontal_scroll")?,
                ModifierElement::Scroll(ScrollAxis::Vertical) => f.write_str("vertical_scroll")?,
                ModifierElement::Unbounded(ScrollAxis::Horizontal) => {
                    f.write_str("unbounded_width")?
                }
                ModifierElement::Unbounded(ScrollAxis::Vertical) => {
                    f.write_str("unbounded_height")?
                }
            }
        }
        Ok(())
    }
}

fn describe(request: Option<SizeRequest>) -> String {
    match request {
        None => "_".to_string(),
        Some(SizeRequest::Fixed(value)) => value.0.to_string(),
        Some(SizeRequest::Fill) => "fill".to_string(),
        Some(SizeRequest::Wrap { min, max }) => format!(
            "wrap[{}..{}]",
            min.map(|v| v.0.to_string()).unwrap_or_default(),
            max.map(|v| v.0.to_string()).unwrap_or_default()
        ),
    }
}
