//! # Density-Independent Pixels (Dp)
//!
//! Components describe their geometry in [`Dp`]. The layout pass converts to
//! physical [`Px`] with the scale factor carried by
//! [`LayoutEnv`](crate::LayoutEnv), so the same render tree can be laid out at
//! several densities.
//!
//! ```
//! use chip_catalog_ui::{Dp, Px};
//!
//! let chip_height = Dp(32.0);
//! assert_eq!(chip_height.to_px(1.0), Px(32));
//! assert_eq!(chip_height.to_px(2.0), Px(64));
//! ```

use serde::Serialize;

use crate::Px;

/// Density-independent pixels (dp) for UI scaling.
///
/// `Dp` does not implement arithmetic operators; operate on the inner value
/// when a derived measurement is needed.
///
/// ```
/// use chip_catalog_ui::Dp;
///
/// let padding = Dp(4.0);
/// let both_sides = Dp(padding.0 * 2.0);
/// assert_eq!(both_sides, Dp(8.0));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero dp.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new `Dp` value.
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Converts to physical pixels using `scale_factor`, rounding to the
    /// nearest pixel.
    pub fn to_px(self, scale_factor: f64) -> Px {
        Px::saturating_from_f64((self.0 * scale_factor).round())
    }

    /// Converts physical pixels back to dp using `scale_factor`.
    pub fn from_px(px: Px, scale_factor: f64) -> Self {
        if scale_factor == 0.0 {
            return Self::ZERO;
        }
        Self(f64::from(px.0) / scale_factor)
    }
}

impl From<f64> for Dp {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Dp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}dp", self.0)
    }
}
