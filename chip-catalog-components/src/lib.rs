//! Material components for the chip catalog.
//!
//! # Example
//!
//! ```
//! use chip_catalog_components::{
//!     chip::{ChipArgs, chip},
//!     material_icons::filled,
//!     row::{RowArgs, row},
//! };
//! use chip_catalog_ui::{Composition, Dp};
//!
//! let mut composition = Composition::new();
//! let tree = composition.render(|| {
//!     row(RowArgs::default().spacing(Dp(8.0)), |scope| {
//!         scope.child(|| {
//!             chip(
//!                 ChipArgs::assist("Assist Chip")
//!                     .leading_icon(filled::settings_icon())
//!                     .on_click(|| {}),
//!             )
//!         });
//!         scope.child(|| chip(ChipArgs::suggestion("Suggestion Chip").on_click(|| {})));
//!     });
//! });
//! assert_eq!(tree.nodes_named("chip").len(), 2);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod linear;

pub mod alignment;
pub mod boxed;
pub mod chip;
pub mod column;
pub mod divider;
pub mod flow_row;
pub mod icon;
pub mod material_icons;
pub mod menus;
pub mod row;
pub mod text;
