//! A vertical layout component.
//!
//! ## Usage
//!
//! Stack sections of a screen or the rows of a menu.

use chip_catalog_ui::{Dp, Modifier, NodeSpec, emit};
use derive_setters::Setters;

use crate::{
    alignment::{CrossAxisAlignment, MainAxisAlignment},
    linear::{Axis, LinearLayout},
};

/// Arguments for the [`column`] component.
#[derive(Clone, Debug, Default, Setters)]
pub struct ColumnArgs {
    /// Modifier chain applied to the column.
    pub modifier: Modifier,
    /// Distribution of children along the column.
    pub main_axis_alignment: MainAxisAlignment,
    /// Horizontal placement of children.
    pub cross_axis_alignment: CrossAxisAlignment,
    /// Gap between consecutive children.
    pub spacing: Dp,
}

/// A scope for declaratively adding children to a [`column`].
pub struct ColumnScope<'a> {
    pub(crate) children: &'a mut Vec<Box<dyn FnOnce()>>,
}

impl ColumnScope<'_> {
    /// Adds a child component to the column.
    pub fn child<F>(&mut self, child: F)
    where
        F: FnOnce() + 'static,
    {
        self.children.push(Box::new(child));
    }
}

/// # column
///
/// Places children top to bottom.
pub fn column<F>(args: ColumnArgs, scope_config: F)
where
    F: FnOnce(&mut ColumnScope),
{
    let mut children = Vec::new();
    scope_config(&mut ColumnScope {
        children: &mut children,
    });

    let layout = LinearLayout {
        axis: Axis::Vertical,
        main_axis_alignment: args.main_axis_alignment,
        cross_axis_alignment: args.cross_axis_alignment,
        spacing: args.spacing,
    };
    emit(NodeSpec::new("column", layout).modifier(args.modifier), || {
        for child in children {
            child();
        }
    });
}
