//! Headless declarative UI core for the chip catalog.
//!
//! Components are plain functions. When called inside
//! [`Composition::render`] they [`emit`] nodes into a [`RenderTree`], and may
//! [`remember`] state that survives across passes. The tree can then be laid
//! out with [`RenderTree::layout`] and activated with [`RenderTree::click`].
//!
//! ```
//! use chip_catalog_ui::{
//!     Composition, NodeSpec, Role, StackLayout, emit, remember,
//! };
//! use std::sync::Arc;
//!
//! fn toggle_button() {
//!     let on = remember(|| false);
//!     let handle = on.clone();
//!     emit(
//!         NodeSpec::new("toggle", StackLayout)
//!             .role(Role::Toggle)
//!             .label("Power")
//!             .selected(on.get())
//!             .on_click_shared(Arc::new(move || {
//!                 handle.toggle();
//!             })),
//!         || {},
//!     );
//! }
//!
//! let mut composition = Composition::new();
//! let tree = composition.render(toggle_button);
//! let power = tree.find_clickable("Power").unwrap();
//! tree.click(power).unwrap();
//!
//! let tree = composition.render(toggle_button);
//! let power = tree.find_by_label("Power").unwrap();
//! assert_eq!(tree.get(power).unwrap().semantics.selected, Some(true));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod constraint;
pub mod dp;
pub mod layout;
pub mod modifier;
pub mod node;
pub mod px;
pub mod runtime;
pub mod text;
pub mod tree;

pub use indextree::NodeId;

pub use crate::{
    constraint::{Constraint, DimensionValue},
    dp::Dp,
    layout::{
        ComputedData, LayoutEnv, LayoutOutput, LayoutResult, LayoutSpec, MeasureInput,
        MeasurementError, NodeLayout, ScrollExtent, StackLayout,
    },
    modifier::{Modifier, ModifierElement, Padding, ScrollAxis, SizeRequest},
    node::{Callback, NodeSpec, Overlay, RenderNode, Role, Semantics},
    px::{Px, PxPosition, PxSize},
    runtime::{Composition, State, emit, key, remember, remember_with_key},
    text::{GlyphAdvanceMeasurer, TextMeasurer, TextStyle},
    tree::{InteractionError, NodeDescription, RenderTree},
};
