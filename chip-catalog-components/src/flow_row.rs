//! A flowing horizontal layout component.
//!
//! ## Usage
//!
//! Wrap chips or tags across multiple rows.

use chip_catalog_ui::{
    ComputedData, Constraint, DimensionValue, Dp, LayoutOutput, LayoutSpec, MeasureInput,
    MeasurementError, Modifier, NodeSpec, Px, PxPosition, emit,
};
use derive_setters::Setters;
use smallvec::SmallVec;
use tracing::trace;

use crate::alignment::{CrossAxisAlignment, MainAxisAlignment};

type Line = SmallVec<[usize; 8]>;

/// Arguments for the [`flow_row`] component.
#[derive(Clone, Debug, Setters)]
pub struct FlowRowArgs {
    /// Modifier chain applied to the flow row.
    pub modifier: Modifier,
    /// Alignment of items along the main axis within each row.
    pub main_axis_alignment: MainAxisAlignment,
    /// Alignment of items along the cross axis within each row.
    pub cross_axis_alignment: CrossAxisAlignment,
    /// Spacing between items within a row.
    pub item_spacing: Dp,
    /// Spacing between rows.
    pub line_spacing: Dp,
    /// Maximum number of items per row.
    pub max_items_per_line: usize,
    /// Maximum number of rows. Items past the last row are not placed.
    pub max_lines: usize,
}

impl Default for FlowRowArgs {
    fn default() -> Self {
        Self {
            modifier: Modifier::new(),
            main_axis_alignment: MainAxisAlignment::Start,
            cross_axis_alignment: CrossAxisAlignment::Start,
            item_spacing: Dp::ZERO,
            line_spacing: Dp::ZERO,
            max_items_per_line: usize::MAX,
            max_lines: usize::MAX,
        }
    }
}

/// A scope for declaratively adding children to a [`flow_row`].
pub struct FlowRowScope<'a> {
    children: &'a mut Vec<Box<dyn FnOnce()>>,
}

impl FlowRowScope<'_> {
    /// Adds a child component to the flow row.
    pub fn child<F>(&mut self, child: F)
    where
        F: FnOnce() + 'static,
    {
        self.children.push(Box::new(child));
    }
}

/// # flow_row
///
/// Wraps children into as many horizontal rows as the width requires.
///
/// ## Parameters
///
/// - `args` configures alignment, spacing and wrapping; see [`FlowRowArgs`].
/// - `scope_config` receives a [`FlowRowScope`] for adding children.
///
/// ## Examples
///
/// ```
/// use chip_catalog_components::flow_row::{FlowRowArgs, flow_row};
/// use chip_catalog_components::text::text;
/// use chip_catalog_ui::Composition;
///
/// let mut composition = Composition::new();
/// let tree = composition.render(|| {
///     flow_row(FlowRowArgs::default().max_lines(1), |scope| {
///         scope.child(|| text("First"));
///         scope.child(|| text("Second"));
///     });
/// });
/// assert_eq!(tree.nodes_named("text").len(), 2);
/// ```
pub fn flow_row<F>(args: FlowRowArgs, scope_config: F)
where
    F: FnOnce(&mut FlowRowScope),
{
    let mut children = Vec::new();
    scope_config(&mut FlowRowScope {
        children: &mut children,
    });

    let layout = FlowRowLayout {
        main_axis_alignment: args.main_axis_alignment,
        cross_axis_alignment: args.cross_axis_alignment,
        item_spacing: args.item_spacing,
        line_spacing: args.line_spacing,
        max_items_per_line: args.max_items_per_line,
        max_lines: args.max_lines,
    };
    let max_lines = if args.max_lines == usize::MAX {
        "unbounded".to_string()
    } else {
        args.max_lines.to_string()
    };
    emit(
        NodeSpec::new("flow_row", layout)
            .attribute("max_lines", max_lines)
            .modifier(args.modifier),
        || {
            for child in children {
                child();
            }
        },
    );
}

struct FlowRowLayout {
    main_axis_alignment: MainAxisAlignment,
    cross_axis_alignment: CrossAxisAlignment,
    item_spacing: Dp,
    line_spacing: Dp,
    max_items_per_line: usize,
    max_lines: usize,
}

impl LayoutSpec for FlowRowLayout {
    fn measure(
        &self,
        input: &MeasureInput<'_>,
        output: &mut LayoutOutput,
    ) -> Result<ComputedData, MeasurementError> {
        let flow_constraint = *input.parent_constraint();
        let item_spacing = input.px(self.item_spacing).max(Px::ZERO);
        let line_spacing = input.px(self.line_spacing).max(Px::ZERO);
        let max_width = flow_constraint.width.get_max();

        let child_constraint = Constraint::new(
            DimensionValue::Wrap {
                min: None,
                max: max_width,
            },
            DimensionValue::Wrap {
                min: None,
                max: flow_constraint.height.get_max(),
            },
        );
        let children_sizes = input
            .children_ids()
            .iter()
            .map(|&child| input.measure_child(child, child_constraint))
            .collect::<Result<Vec<_>, _>>()?;

        let lines = build_row_lines(
            &children_sizes,
            max_width,
            item_spacing,
            self.max_items_per_line,
            self.max_lines,
        );
        trace!(
            children = children_sizes.len(),
            lines = lines.len(),
            "flow row broke lines"
        );

        let line_metrics = compute_line_metrics(&lines, &children_sizes, item_spacing);
        let (content_width, content_height) = compute_content_size(&line_metrics, line_spacing);
        let final_width = flow_constraint.width.resolve(content_width)?;
        let final_height = flow_constraint.height.resolve(content_height)?;

        let mut current_y = Px::ZERO;
        for (line, metric) in lines.iter().zip(&line_metrics) {
            let (mut current_x, extra_gap) = self
                .main_axis_alignment
                .distribute(final_width - metric.main, line.len());
            for &index in line {
                let size = children_sizes[index];
                let y_offset = self.cross_axis_alignment.offset(metric.cross, size.height);
                output.place_child(
                    input.children_ids()[index],
                    PxPosition::new(current_x, current_y + y_offset),
                );
                current_x += size.width + item_spacing + extra_gap;
            }
            current_y += metric.cross + line_spacing;
        }

        Ok(ComputedData {
            width: final_width,
            height: final_height,
        })
    }
}

fn build_row_lines(
    children_sizes: &[ComputedData],
    max_width: Option<Px>,
    item_spacing: Px,
    max_items_per_line: usize,
    max_lines: usize,
) -> Vec<Line> {
    if max_items_per_line == 0 || max_lines == 0 {
        return Vec::new();
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut current_line = Line::new();
    let mut current_width = Px::ZERO;

    for (index, child_size) in children_sizes.iter().enumerate() {
        if !current_line.is_empty() {
            let proposed = current_width + item_spacing + child_size.width;
            let exceeds_width = max_width.is_some_and(|limit| proposed > limit);
            let exceeds_items = current_line.len() >= max_items_per_line;
            if exceeds_width || exceeds_items {
                lines.push(std::mem::take(&mut current_line));
                if lines.len() >= max_lines {
                    return lines;
                }
                current_width = Px::ZERO;
            }
        }

        current_width = if current_line.is_empty() {
            child_size.width
        } else {
            current_width + item_spacing + child_size.width
        };
        current_line.push(index);
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

#[derive(Clone, Copy)]
struct LineMetric {
    main: Px,
    cross: Px,
}

fn compute_line_metrics(
    lines: &[Line],
    children_sizes: &[ComputedData],
    item_spacing: Px,
) -> Vec<LineMetric> {
    lines
        .iter()
        .map(|line| {
            let mut main = Px::ZERO;
            let mut cross = Px::ZERO;
            for (pos, &index) in line.iter().enumerate() {
                let size = children_sizes[index];
                if pos > 0 {
                    main += item_spacing;
                }
                main += size.width;
                cross = cross.max(size.height);
            }
            LineMetric { main, cross }
        })
        .collect()
}

fn compute_content_size(line_metrics: &[LineMetric], line_spacing: Px) -> (Px, Px) {
    let mut width = Px::ZERO;
    let mut height = Px::ZERO;
    for (index, metric) in line_metrics.iter().enumerate() {
        if index > 0 {
            height += line_spacing;
        }
        width = width.max(metric.main);
        height += metric.cross;
    }
    (width, height)
}

#[cfg(test)]
mod tests {
    use chip_catalog_ui::{Composition, LayoutEnv};

    use super::*;
    use crate::text::text;

    fn sizes(widths: &[i32]) -> Vec<ComputedData> {
        widths
            .iter()
            .map(|&w| ComputedData {
                width: Px(w),
                height: Px(10),
            })
            .collect()
    }

    #[test]
    fn test_build_row_lines_wraps_by_width() {
        let lines = build_row_lines(&sizes(&[40, 40, 40, 40]), Some(Px(100)), Px(8), usize::MAX, usize::MAX);
        let lines: Vec<Vec<usize>> = lines.into_iter().map(|l| l.to_vec()).collect();
        assert_eq!(lines, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_build_row_lines_respects_max_lines() {
        let lines = build_row_lines(&sizes(&[60, 60, 60]), Some(Px(100)), Px(0), usize::MAX, 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].as_slice(), &[0]);
    }

    #[test]
    fn test_build_row_lines_unbounded_width_is_single_line() {
        let lines = build_row_lines(&sizes(&[500, 500, 500]), None, Px(8), usize::MAX, usize::MAX);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 3);
    }

    #[test]
    fn test_build_row_lines_keeps_oversized_child_alone() {
        let lines = build_row_lines(&sizes(&[150, 20]), Some(Px(100)), Px(0), usize::MAX, usize::MAX);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_build_row_lines_max_items_per_line() {
        let lines = build_row_lines(&sizes(&[1, 1, 1, 1, 1]), None, Px(0), 2, usize::MAX);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_items_past_last_line_are_not_placed() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            flow_row(
                FlowRowArgs::default().max_lines(1).item_spacing(Dp(8.0)),
                |scope| {
                    for label in ["aaaa", "bbbb", "cccc"] {
                        scope.child(move || text(label));
                    }
                },
            );
        });
        // Each label is 28px wide; two fit in 70px with an 8px gap.
        let layout = tree
            .layout(Constraint::bounded(Px(70), Px(200)), &LayoutEnv::default())
            .unwrap();
        assert!(layout.is_placed(tree.find_by_label("aaaa").unwrap()));
        assert!(layout.is_placed(tree.find_by_label("bbbb").unwrap()));
        assert!(!layout.is_placed(tree.find_by_label("cccc").unwrap()));
        let flow = layout.get(tree.nodes_named("flow_row")[0]).unwrap();
        assert_eq!(flow.size.height, Px(20));
    }

    #[test]
    fn test_wrapped_lines_stack_with_line_spacing() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            flow_row(FlowRowArgs::default().line_spacing(Dp(4.0)), |scope| {
                for label in ["aaaa", "bbbb", "cccc"] {
                    scope.child(move || text(label));
                }
            });
        });
        let layout = tree
            .layout(Constraint::bounded(Px(40), Px(200)), &LayoutEnv::default())
            .unwrap();
        let third = layout.get(tree.find_by_label("cccc").unwrap()).unwrap();
        assert_eq!(third.position, PxPosition::new(Px(0), Px(48)));
    }
}
