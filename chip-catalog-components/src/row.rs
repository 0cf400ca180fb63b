//! A horizontal layout component.
//!
//! ## Usage
//!
//! Lay out chips side by side; add `horizontal_scroll` to the modifier when
//! the row may be wider than its container.

use chip_catalog_ui::{Dp, Modifier, NodeSpec, emit};
use derive_setters::Setters;

use crate::{
    alignment::{CrossAxisAlignment, MainAxisAlignment},
    linear::{Axis, LinearLayout},
};

/// Arguments for the [`row`] component.
#[derive(Clone, Debug, Default, Setters)]
pub struct RowArgs {
    /// Modifier chain applied to the row.
    pub modifier: Modifier,
    /// Distribution of children along the row.
    pub main_axis_alignment: MainAxisAlignment,
    /// Vertical placement of children.
    pub cross_axis_alignment: CrossAxisAlignment,
    /// Gap between consecutive children.
    pub spacing: Dp,
}

/// A scope for declaratively adding children to a [`row`].
pub struct RowScope<'a> {
    children: &'a mut Vec<Box<dyn FnOnce()>>,
}

impl RowScope<'_> {
    /// Adds a child component to the row.
    pub fn child<F>(&mut self, child: F)
    where
        F: FnOnce() + 'static,
    {
        self.children.push(Box::new(child));
    }
}

/// # row
///
/// Places children left to right on a single line.
///
/// ## Parameters
///
/// - `args` configures alignment and spacing; see [`RowArgs`].
/// - `scope_config` receives a [`RowScope`] for adding children.
pub fn row<F>(args: RowArgs, scope_config: F)
where
    F: FnOnce(&mut RowScope),
{
    let mut children = Vec::new();
    scope_config(&mut RowScope {
        children: &mut children,
    });

    let layout = LinearLayout {
        axis: Axis::Horizontal,
        main_axis_alignment: args.main_axis_alignment,
        cross_axis_alignment: args.cross_axis_alignment,
        spacing: args.spacing,
    };
    emit(NodeSpec::new("row", layout).modifier(args.modifier), || {
        for child in children {
            child();
        }
    });
}

#[cfg(test)]
mod tests {
    use chip_catalog_ui::{Composition, Constraint, LayoutEnv, Px, PxPosition};

    use super::*;
    use crate::text::text;

    #[test]
    fn test_row_places_children_with_spacing() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            row(
                RowArgs::default()
                    .spacing(Dp(8.0))
                    .cross_axis_alignment(CrossAxisAlignment::Center),
                |scope| {
                    scope.child(|| text("ab"));
                    scope.child(|| text("abcd"));
                },
            );
        });
        let layout = tree
            .layout(Constraint::bounded(Px(300), Px(300)), &LayoutEnv::default())
            .unwrap();

        let second = tree.find_by_label("abcd").unwrap();
        // "ab" is 14px wide, then an 8px gap.
        assert_eq!(
            layout.get(second).unwrap().position,
            PxPosition::new(Px(22), Px(0))
        );
        let row_id = tree.nodes_named("row")[0];
        assert_eq!(layout.get(row_id).unwrap().size.width, Px(14 + 8 + 28));
    }

    #[test]
    fn test_horizontal_scroll_lifts_width_bound() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            row(
                RowArgs::default().modifier(Modifier::new().horizontal_scroll()),
                |scope| {
                    for _ in 0..10 {
                        scope.child(|| text("abcdefghij"));
                    }
                },
            );
        });
        let layout = tree
            .layout(Constraint::bounded(Px(100), Px(100)), &LayoutEnv::default())
            .unwrap();
        let row_layout = layout.get(tree.nodes_named("row")[0]).unwrap();
        let scroll = row_layout.scroll.unwrap();
        assert_eq!(row_layout.size.width, Px(100));
        assert_eq!(scroll.content.width, Px(700));
        assert!(scroll.overflows());
    }
}
