//! Layout pass over a [`RenderTree`].
//!
//! Every node carries a [`LayoutSpec`]. The pass measures a node by first
//! applying its modifier chain (outer to inner) and then asking the spec to
//! measure and place its children. Placements are relative to the node's
//! content origin; [`LayoutResult`] holds absolute positions.
//!
//! Overlay nodes (see [`Overlay`](crate::Overlay)) are skipped by their parent
//! and measured afterwards, anchored below the parent.

use std::{cell::RefCell, sync::Arc};

use indextree::NodeId;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    Constraint, DimensionValue, Dp, Px, PxPosition, PxSize, RenderNode, RenderTree, ScrollAxis,
    modifier::ModifierElement,
    text::{GlyphAdvanceMeasurer, TextMeasurer},
};

/// Errors raised while measuring a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeasurementError {
    /// A node asked to fill an axis that has no upper bound.
    #[error("cannot fill a dimension without an upper bound")]
    UnboundedFill,
    /// A node id does not belong to the tree being measured.
    #[error("node {0:?} is not part of this tree")]
    UnknownNode(NodeId),
    /// A layout policy rejected its input.
    #[error("layout of `{name}` failed: {reason}")]
    Failed {
        /// Component name of the failing node.
        name: &'static str,
        /// Description of the failure.
        reason: String,
    },
}

/// The size a node reports after measuring.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComputedData {
    /// Measured width.
    pub width: Px,
    /// Measured height.
    pub height: Px,
}

impl ComputedData {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Smallest size allowed by `constraint`.
    pub fn min_from_constraint(constraint: &Constraint) -> Self {
        Self {
            width: constraint.width.get_min().unwrap_or(Px::ZERO),
            height: constraint.height.get_min().unwrap_or(Px::ZERO),
        }
    }
}

impl From<ComputedData> for PxSize {
    fn from(data: ComputedData) -> Self {
        PxSize::new(data.width, data.height)
    }
}

/// Environment shared by one layout pass.
#[derive(Clone)]
pub struct LayoutEnv {
    /// Physical pixels per dp.
    pub scale_factor: f64,
    /// Measures text runs.
    pub text_measurer: Arc<dyn TextMeasurer>,
}

impl LayoutEnv {
    /// Creates an environment with the default text measurer.
    pub fn new(scale_factor: f64) -> Self {
        Self {
            scale_factor,
            text_measurer: Arc::new(GlyphAdvanceMeasurer::default()),
        }
    }

    /// Replaces the text measurer.
    pub fn with_text_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.text_measurer = measurer;
        self
    }

    /// Converts dp to px with this environment's scale factor.
    pub fn px(&self, dp: Dp) -> Px {
        dp.to_px(self.scale_factor)
    }
}

impl Default for LayoutEnv {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// A layout policy for one node.
pub trait LayoutSpec: Send + Sync {
    /// Measures the node's children, places them, and returns the content
    /// size.
    fn measure(
        &self,
        input: &MeasureInput<'_>,
        output: &mut LayoutOutput,
    ) -> Result<ComputedData, MeasurementError>;
}

/// Input handed to [`LayoutSpec::measure`].
pub struct MeasureInput<'a> {
    pass: &'a LayoutPass<'a>,
    node: &'a RenderNode,
    children: SmallVec<[NodeId; 8]>,
    constraint: Constraint,
}

impl<'a> MeasureInput<'a> {
    /// The constraint for the node's content, after its modifiers.
    pub fn parent_constraint(&self) -> &Constraint {
        &self.constraint
    }

    /// Children taking part in this node's layout, in emission order.
    pub fn children_ids(&self) -> &[NodeId] {
        &self.children
    }

    /// The node being measured.
    pub fn node(&self) -> &RenderNode {
        self.node
    }

    /// The environment of this pass.
    pub fn env(&self) -> &LayoutEnv {
        self.pass.env
    }

    /// Converts dp to px for this pass.
    pub fn px(&self, dp: Dp) -> Px {
        self.pass.env.px(dp)
    }

    /// Measures one child.
    pub fn measure_child(
        &self,
        child: NodeId,
        constraint: Constraint,
    ) -> Result<ComputedData, MeasurementError> {
        self.pass.measure_node(child, constraint)
    }

    /// Measures several children.
    pub fn measure_children(
        &self,
        children: Vec<(NodeId, Constraint)>,
    ) -> Result<FxHashMap<NodeId, ComputedData>, MeasurementError> {
        let mut results = FxHashMap::default();
        for (child, constraint) in children {
            results.insert(child, self.pass.measure_node(child, constraint)?);
        }
        Ok(results)
    }
}

/// Placements collected from [`LayoutSpec::measure`].
#[derive(Default)]
pub struct LayoutOutput {
    placements: Vec<(NodeId, PxPosition)>,
}

impl LayoutOutput {
    /// Places a measured child relative to the node's content origin.
    pub fn place_child(&mut self, child: NodeId, position: PxPosition) {
        self.placements.push((child, position));
    }
}

/// Places every child at the origin and wraps the largest one.
pub struct StackLayout;

impl LayoutSpec for StackLayout {
    fn measure(
        &self,
        input: &MeasureInput<'_>,
        output: &mut LayoutOutput,
    ) -> Result<ComputedData, MeasurementError> {
        let constraint = *input.parent_constraint();
        if input.children_ids().is_empty() {
            return Ok(ComputedData::min_from_constraint(&constraint));
        }

        let mut size = ComputedData::ZERO;
        for &child in input.children_ids() {
            let child_size = input.measure_child(child, constraint.loosen())?;
            output.place_child(child, PxPosition::ZERO);
            size.width = size.width.max(child_size.width);
            size.height = size.height.max(child_size.height);
        }
        Ok(size)
    }
}

/// Scroll extent recorded for a scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScrollExtent {
    /// Scrolling axis.
    pub axis: ScrollAxis,
    /// Visible size.
    pub viewport: PxSize,
    /// Full size of the scrolled content.
    pub content: PxSize,
}

impl ScrollExtent {
    /// Returns `true` if the content exceeds the viewport along the axis.
    pub fn overflows(&self) -> bool {
        match self.axis {
            ScrollAxis::Horizontal => self.content.width > self.viewport.width,
            ScrollAxis::Vertical => self.content.height > self.viewport.height,
        }
    }
}

/// Final geometry of one placed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeLayout {
    /// Absolute position of the node's top-left corner.
    pub position: PxPosition,
    /// Size of the node including its modifiers.
    pub size: PxSize,
    /// Scroll extent, for scroll containers.
    pub scroll: Option<ScrollExtent>,
}

/// Geometry of every placed node of a tree.
#[derive(Debug, Clone, Default)]
pub struct LayoutResult {
    nodes: FxHashMap<NodeId, NodeLayout>,
    size: PxSize,
}

impl LayoutResult {
    /// Geometry of `id`, if the node was placed.
    pub fn get(&self, id: NodeId) -> Option<&NodeLayout> {
        self.nodes.get(&id)
    }

    /// Returns `true` if `id` was placed.
    pub fn is_placed(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Size of the root.
    pub fn size(&self) -> PxSize {
        self.size
    }

    /// Number of placed nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if nothing was placed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

struct NodeRecord {
    size: PxSize,
    origin: PxPosition,
    placements: Vec<(NodeId, PxPosition)>,
    scroll: Option<ScrollExtent>,
}

struct Chain {
    size: ComputedData,
    origin: PxPosition,
    placements: Vec<(NodeId, PxPosition)>,
    scroll: Option<ScrollExtent>,
}

pub(crate) struct LayoutPass<'a> {
    tree: &'a RenderTree,
    env: &'a LayoutEnv,
    records: RefCell<FxHashMap<NodeId, NodeRecord>>,
}

impl<'a> LayoutPass<'a> {
    pub(crate) fn new(tree: &'a RenderTree, env: &'a LayoutEnv) -> Self {
        Self {
            tree,
            env,
            records: RefCell::new(FxHashMap::default()),
        }
    }

    fn measure_node(
        &self,
        id: NodeId,
        constraint: Constraint,
    ) -> Result<ComputedData, MeasurementError> {
        let node = self.tree.get(id).ok_or(MeasurementError::UnknownNode(id))?;
        let chain = self.measure_chain(id, node, node.modifier.elements(), constraint)?;
        self.records.borrow_mut().insert(
            id,
            NodeRecord {
                size: chain.size.into(),
                origin: chain.origin,
                placements: chain.placements,
                scroll: chain.scroll,
            },
        );
        Ok(chain.size)
    }

    fn measure_chain(
        &self,
        id: NodeId,
        node: &RenderNode,
        elements: &[ModifierElement],
        constraint: Constraint,
    ) -> Result<Chain, MeasurementError> {
        let scale = self.env.scale_factor;
        let Some((first, rest)) = elements.split_first() else {
            let children = self
                .tree
                .children(id)
                .filter(|child| self.tree.get(*child).is_some_and(|n| n.overlay.is_none()))
                .collect();
            let input = MeasureInput {
                pass: self,
                node,
                children,
                constraint,
            };
            let mut output = LayoutOutput::default();
            let size = node.layout.measure(&input, &mut output)?;
            return Ok(Chain {
                size,
                origin: PxPosition::ZERO,
                placements: output.placements,
                scroll: None,
            });
        };

        match *first {
            ModifierElement::Padding(padding) => {
                let padding = padding.to_px(scale);
                let inner = self.measure_chain(
                    id,
                    node,
                    rest,
                    constraint.shrink(padding.horizontal(), padding.vertical()),
                )?;
                Ok(Chain {
                    size: ComputedData {
                        width: inner.size.width + padding.horizontal(),
                        height: inner.size.height + padding.vertical(),
                    },
                    origin: inner.origin.offset(padding.left, padding.top),
                    ..inner
                })
            }
            ModifierElement::Size { width, height } => {
                let sized = ModifierElement::apply_size(width, height, constraint, scale);
                let inner = self.measure_chain(id, node, rest, sized)?;
                Ok(Chain {
                    size: ComputedData {
                        width: sized.width.resolve(inner.size.width)?,
                        height: sized.height.resolve(inner.size.height)?,
                    },
                    ..inner
                })
            }
            ModifierElement::Unbounded(axis) => {
                let content_constraint = match axis {
                    ScrollAxis::Horizontal => constraint.with_width(DimensionValue::WRAP),
                    ScrollAxis::Vertical => constraint.with_height(DimensionValue::WRAP),
                };
                self.measure_chain(id, node, rest, content_constraint)
            }
            ModifierElement::Scroll(axis) => {
                let content_constraint = match axis {
                    ScrollAxis::Horizontal => constraint.with_width(DimensionValue::WRAP),
                    ScrollAxis::Vertical => constraint.with_height(DimensionValue::WRAP),
                };
                let inner = self.measure_chain(id, node, rest, content_constraint)?;
                let viewport = match axis {
                    ScrollAxis::Horizontal => ComputedData {
                        width: constraint.width.resolve(inner.size.width)?,
                        height: inner.size.height,
                    },
                    ScrollAxis::Vertical => ComputedData {
                        width: inner.size.width,
                        height: constraint.height.resolve(inner.size.height)?,
                    },
                };
                Ok(Chain {
                    size: viewport,
                    scroll: Some(ScrollExtent {
                        axis,
                        viewport: viewport.into(),
                        content: inner.size.into(),
                    }),
                    ..inner
                })
            }
        }
    }

    pub(crate) fn run(self, constraint: Constraint) -> Result<LayoutResult, MeasurementError> {
        let root = self.tree.root();
        let size = self.measure_node(root, constraint)?;

        let mut result = LayoutResult {
            nodes: FxHashMap::default(),
            size: size.into(),
        };
        self.resolve(root, PxPosition::ZERO, &mut result);

        // Overlays never grow wider than the surface they float over.
        let viewport_width = constraint.width.get_max().unwrap_or(size.width);

        let overlays: Vec<NodeId> = self
            .tree
            .descendants()
            .filter(|id| self.tree.get(*id).is_some_and(|n| n.overlay.is_some()))
            .collect();
        for overlay_id in overlays {
            let Some(anchor) = self.tree.parent(overlay_id) else {
                continue;
            };
            let Some(anchor_layout) = result.get(anchor).copied() else {
                debug!(?overlay_id, "overlay anchor was not placed; skipping");
                continue;
            };
            let Some(overlay) = self.tree.get(overlay_id).and_then(|n| n.overlay) else {
                continue;
            };
            let max_width = self
                .env
                .px(overlay.max_width)
                .min(viewport_width)
                .max(Px::ZERO);
            let min_width = self.env.px(overlay.min_width).min(max_width);
            let constraint = Constraint::new(
                DimensionValue::Wrap {
                    min: Some(min_width),
                    max: Some(max_width),
                },
                DimensionValue::Wrap {
                    min: None,
                    max: Some(self.env.px(overlay.max_height)),
                },
            );
            self.measure_node(overlay_id, constraint)?;
            let position = anchor_layout.position.offset(
                Px::ZERO,
                anchor_layout.size.height + self.env.px(overlay.vertical_offset),
            );
            self.resolve(overlay_id, position, &mut result);
        }

        debug!(
            placed = result.len(),
            width = result.size.width.0,
            height = result.size.height.0,
            "layout pass finished"
        );
        Ok(result)
    }

    fn resolve(&self, id: NodeId, position: PxPosition, result: &mut LayoutResult) {
        let records = self.records.borrow();
        let Some(record) = records.get(&id) else {
            return;
        };
        result.nodes.insert(
            id,
            NodeLayout {
                position,
                size: record.size,
                scroll: record.scroll,
            },
        );
        let content_origin = position + record.origin;
        let placements = record.placements.clone();
        drop(records);
        for (child, relative) in placements {
            self.resolve(child, content_origin + relative, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Composition, Modifier, NodeSpec, Overlay, emit};

    fn anchored_menu() {
        emit(
            NodeSpec::new("anchor", StackLayout).modifier(Modifier::new().size(Dp(50.0), Dp(20.0))),
            || {
                emit(
                    NodeSpec::new("menu", StackLayout).overlay(Overlay {
                        min_width: Dp(112.0),
                        max_width: Dp(280.0),
                        max_height: Dp(320.0),
                        vertical_offset: Dp(4.0),
                    }),
                    || {},
                );
            },
        );
    }

    #[test]
    fn test_overlay_width_is_capped_by_viewport() {
        let mut composition = Composition::new();
        let tree = composition.render(anchored_menu);
        let menu = tree.nodes_named("menu")[0];

        let narrow = tree
            .layout(Constraint::bounded(Px(100), Px(400)), &LayoutEnv::default())
            .unwrap();
        let layout = narrow.get(menu).unwrap();
        assert_eq!(layout.size.width, Px(100));
        assert_eq!(layout.position, PxPosition::new(Px(0), Px(24)));

        let wide = tree
            .layout(Constraint::bounded(Px(360), Px(400)), &LayoutEnv::default())
            .unwrap();
        assert_eq!(wide.get(menu).unwrap().size.width, Px(112));
    }

    #[test]
    fn test_unbounded_width_keeps_intrinsic_size() {
        let mut composition = Composition::new();
        let tree = composition.render(|| {
            emit(
                NodeSpec::new("squeezed", StackLayout).modifier(Modifier::new().width(Dp(150.0))),
                || {},
            );
            emit(
                NodeSpec::new("intrinsic", StackLayout).modifier(
                    Modifier::new()
                        .wrap_content_width_unbounded()
                        .width(Dp(150.0)),
                ),
                || {},
            );
        });
        let layout = tree
            .layout(Constraint::bounded(Px(100), Px(100)), &LayoutEnv::default())
            .unwrap();
        let squeezed = layout.get(tree.nodes_named("squeezed")[0]).unwrap();
        let intrinsic = layout.get(tree.nodes_named("intrinsic")[0]).unwrap();
        assert_eq!(squeezed.size.width, Px(100));
        assert_eq!(intrinsic.size.width, Px(150));
        assert_eq!(
            tree.get(tree.nodes_named("intrinsic")[0])
                .unwrap()
                .modifier
                .to_string(),
            "unbounded_width.size(150, _)"
        );
    }
}
