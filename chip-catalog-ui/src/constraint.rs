//! # Layout constraints
//!
//! A [`Constraint`] pairs one [`DimensionValue`] per axis. Parents hand
//! constraints to children; children answer with a
//! [`ComputedData`](crate::ComputedData) that respects them.
//!
//! - `Fixed(px)`: exactly `px`.
//! - `Wrap { min, max }`: as small as the content, clamped to the bounds.
//! - `Fill { min, max }`: as large as `max` allows. Filling an unbounded axis
//!   is a [`MeasurementError`].

use serde::Serialize;

use crate::{MeasurementError, Px};

/// Defines how a single dimension is sized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DimensionValue {
    /// Exactly this size.
    Fixed(Px),
    /// Wrap the content, optionally bounded.
    Wrap {
        /// Lower bound.
        min: Option<Px>,
        /// Upper bound.
        max: Option<Px>,
    },
    /// Fill the available space, optionally bounded.
    Fill {
        /// Lower bound.
        min: Option<Px>,
        /// Upper bound. Required when the value is resolved.
        max: Option<Px>,
    },
}

impl DimensionValue {
    /// Zero-sized dimension.
    pub const ZERO: Self = DimensionValue::Fixed(Px(0));

    /// Fill with no bounds.
    pub const FILLED: Self = DimensionValue::Fill {
        min: None,
        max: None,
    };

    /// Wrap with no bounds.
    pub const WRAP: Self = DimensionValue::Wrap {
        min: None,
        max: None,
    };

    /// Returns the upper bound, if any.
    pub fn get_max(&self) -> Option<Px> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { max, .. } | DimensionValue::Fill { max, .. } => *max,
        }
    }

    /// Returns the lower bound, if any.
    pub fn get_min(&self) -> Option<Px> {
        match self {
            DimensionValue::Fixed(value) => Some(*value),
            DimensionValue::Wrap { min, .. } | DimensionValue::Fill { min, .. } => *min,
        }
    }

    /// Clamps `measure` into the bounds of this dimension without applying
    /// fill semantics.
    pub fn clamp(&self, measure: Px) -> Px {
        match self {
            DimensionValue::Fixed(value) => *value,
            DimensionValue::Wrap { min, max } | DimensionValue::Fill { min, max } => {
                let lower = min.unwrap_or(Px::ZERO).max(measure);
                max.map_or(lower, |max| lower.min(max))
            }
        }
    }

    /// Resolves the final size for a content measurement of `measure`.
    pub fn resolve(&self, measure: Px) -> Result<Px, MeasurementError> {
        match self {
            DimensionValue::Fixed(value) => Ok(*value),
            DimensionValue::Wrap { .. } => Ok(self.clamp(measure)),
            DimensionValue::Fill { min, max } => {
                let max = max.ok_or(MeasurementError::UnboundedFill)?;
                Ok(max.max(min.unwrap_or(Px::ZERO)))
            }
        }
    }

    /// Removes `amount` from every bound, never going below zero.
    pub fn shrink(&self, amount: Px) -> Self {
        let shrink = |value: Option<Px>| value.map(|v| v.shrink_by(amount));
        match *self {
            DimensionValue::Fixed(value) => DimensionValue::Fixed(value.shrink_by(amount)),
            DimensionValue::Wrap { min, max } => DimensionValue::Wrap {
                min: shrink(min),
                max: shrink(max),
            },
            DimensionValue::Fill { min, max } => DimensionValue::Fill {
                min: shrink(min),
                max: shrink(max),
            },
        }
    }

    /// Narrows this dimension by a requested one, as a size modifier does.
    ///
    /// The request keeps its kind but never escapes the incoming upper bound.
    pub fn constrain(&self, request: DimensionValue) -> Self {
        let outer_max = self.get_max();
        let cap = |value: Option<Px>| match (value, outer_max) {
            (Some(v), Some(limit)) => Some(v.min(limit)),
            (Some(v), None) => Some(v),
            (None, limit) => limit,
        };
        match request {
            DimensionValue::Fixed(value) => {
                DimensionValue::Fixed(outer_max.map_or(value, |limit| value.min(limit)))
            }
            DimensionValue::Wrap { min, max } => DimensionValue::Wrap {
                min: min.or(self.get_min()).map(|v| cap(Some(v)).unwrap_or(v)),
                max: cap(max),
            },
            DimensionValue::Fill { min, max } => DimensionValue::Fill {
                min: min.or(self.get_min()),
                max: cap(max),
            },
        }
    }
}

impl Default for DimensionValue {
    fn default() -> Self {
        DimensionValue::WRAP
    }
}

/// Width and height constraints for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Constraint {
    /// The width constraint.
    pub width: DimensionValue,
    /// The height constraint.
    pub height: DimensionValue,
}

impl Constraint {
    /// No preference on either axis.
    pub const NONE: Self = Self {
        width: DimensionValue::WRAP,
        height: DimensionValue::WRAP,
    };

    /// Creates a constraint.
    pub fn new(width: DimensionValue, height: DimensionValue) -> Self {
        Self { width, height }
    }

    /// A constraint that lets content grow up to `width` x `height`.
    pub fn bounded(width: Px, height: Px) -> Self {
        Self::new(
            DimensionValue::Wrap {
                min: None,
                max: Some(width),
            },
            DimensionValue::Wrap {
                min: None,
                max: Some(height),
            },
        )
    }

    /// Returns a copy with a different width.
    pub fn with_width(self, width: DimensionValue) -> Self {
        Self { width, ..self }
    }

    /// Returns a copy with a different height.
    pub fn with_height(self, height: DimensionValue) -> Self {
        Self { height, ..self }
    }

    /// Removes padding from both axes.
    pub fn shrink(self, horizontal: Px, vertical: Px) -> Self {
        Self::new(self.width.shrink(horizontal), self.height.shrink(vertical))
    }

    /// Relaxes both axes to wrap, keeping only the upper bounds.
    ///
    /// Layouts use this when measuring children that must not inherit a
    /// parent's fixed or fill request.
    pub fn loosen(self) -> Self {
        Self::new(
            DimensionValue::Wrap {
                min: None,
                max: self.width.get_max(),
            },
            DimensionValue::Wrap {
                min: None,
                max: self.height.get_max(),
            },
        )
    }
}

impl Default for Constraint {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_resolve_clamps_to_bounds() {
        let wrap = DimensionValue::Wrap {
            min: Some(Px(20)),
            max: Some(Px(80)),
        };
        assert_eq!(wrap.resolve(Px(5)), Ok(Px(20)));
        assert_eq!(wrap.resolve(Px(50)), Ok(Px(50)));
        assert_eq!(wrap.resolve(Px(500)), Ok(Px(80)));
    }

    #[test]
    fn test_fill_requires_upper_bound() {
        let bounded = DimensionValue::Fill {
            min: None,
            max: Some(Px(200)),
        };
        assert_eq!(bounded.resolve(Px(10)), Ok(Px(200)));
        assert_eq!(
            DimensionValue::FILLED.resolve(Px(10)),
            Err(MeasurementError::UnboundedFill)
        );
    }

    #[test]
    fn test_shrink_never_goes_negative() {
        let fixed = DimensionValue::Fixed(Px(6));
        assert_eq!(fixed.shrink(Px(8)), DimensionValue::Fixed(Px(0)));

        let wrap = DimensionValue::Wrap {
            min: Some(Px(10)),
            max: Some(Px(100)),
        };
        assert_eq!(
            wrap.shrink(Px(16)),
            DimensionValue::Wrap {
                min: Some(Px(0)),
                max: Some(Px(84))
            }
        );
    }

    #[test]
    fn test_constrain_caps_request_by_outer_bound() {
        let outer = DimensionValue::Wrap {
            min: None,
            max: Some(Px(100)),
        };
        assert_eq!(
            outer.constrain(DimensionValue::Fixed(Px(300))),
            DimensionValue::Fixed(Px(100))
        );
        assert_eq!(
            outer.constrain(DimensionValue::FILLED),
            DimensionValue::Fill {
                min: None,
                max: Some(Px(100))
            }
        );
        assert_eq!(
            DimensionValue::WRAP.constrain(DimensionValue::Wrap {
                min: Some(Px(32)),
                max: None
            }),
            DimensionValue::Wrap {
                min: Some(Px(32)),
                max: None
            }
        );
    }

    #[test]
    fn test_loosen_keeps_only_upper_bounds() {
        let constraint = Constraint::new(
            DimensionValue::Fixed(Px(40)),
            DimensionValue::Fill {
                min: Some(Px(10)),
                max: Some(Px(90)),
            },
        );
        assert_eq!(constraint.loosen(), Constraint::bounded(Px(40), Px(90)));
    }
}
