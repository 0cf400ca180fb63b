//! Physical pixel values produced by the layout pass.
//!
//! - [`Px`] is a single coordinate value and may be negative.
//! - [`PxPosition`] is a point; the origin is the top-left corner and y grows
//!   downward.
//! - [`PxSize`] is a width/height pair.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use serde::Serialize;

use crate::dp::Dp;

/// A physical pixel coordinate value.
///
/// ```
/// use chip_catalog_ui::Px;
///
/// let sum = Px(10) + Px(5);
/// assert_eq!(sum, Px(15));
/// assert_eq!(Px(i32::MAX).saturating_add(Px(1)), Px::MAX);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Serialize)]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The largest representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` from an `i32`.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Converts from dp with the given scale factor.
    pub fn from_dp(dp: Dp, scale_factor: f64) -> Self {
        dp.to_px(scale_factor)
    }

    /// Converts to dp with the given scale factor.
    pub fn to_dp(self, scale_factor: f64) -> Dp {
        Dp::from_px(self, scale_factor)
    }

    /// Converts a float, clamping to the `i32` range.
    pub fn saturating_from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32)
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Subtracts `rhs`, never going below zero.
    pub fn shrink_by(self, rhs: Self) -> Self {
        self.saturating_sub(rhs).max(Self::ZERO)
    }
}

impl Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self(self.0.saturating_mul(rhs))
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Px {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}px", self.0)
    }
}

/// A 2D position in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PxPosition {
    /// Horizontal coordinate.
    pub x: Px,
    /// Vertical coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a position.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns a position moved by `dx` and `dy`.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Add for PxPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size in physical pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PxSize {
    /// Horizontal extent.
    pub width: Px,
    /// Vertical extent.
    pub height: Px,
}

impl PxSize {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}
