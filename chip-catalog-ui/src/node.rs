//! Nodes of a [`RenderTree`](crate::RenderTree).
//!
//! A node is a render description: what a component wants on screen, how it
//! lays out its children, and which handlers it exposes. Components build
//! nodes through [`NodeSpec`] and [`emit`](crate::emit).

use std::{fmt, sync::Arc};

use serde::Serialize;

use crate::{Dp, LayoutSpec, Modifier};

/// A shared activation handler.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Accessibility role of a node.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Role {
    /// A node without a specific role.
    #[default]
    Generic,
    /// An activatable control.
    Button,
    /// A control with an on/off selection.
    Toggle,
    /// Static text.
    Label,
    /// A decorative or informative glyph.
    Image,
    /// A divider line.
    Separator,
    /// A floating list of actions.
    Menu,
    /// One row of a [`Role::Menu`].
    MenuItem,
}

/// Accessibility-facing state of a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Semantics {
    /// Role of the node.
    pub role: Role,
    /// Label announced for the node.
    pub label: Option<String>,
    /// Selection state, for toggleable nodes.
    pub selected: Option<bool>,
    /// Whether the node currently shows its expanded content.
    pub expanded: Option<bool>,
    /// Whether the node accepts activation.
    pub enabled: bool,
}

impl Default for Semantics {
    fn default() -> Self {
        Self {
            role: Role::Generic,
            label: None,
            selected: None,
            expanded: None,
            enabled: true,
        }
    }
}

/// Placement request for a floating node.
///
/// Overlay nodes take no space in their parent. After the main pass they are
/// measured within these bounds and anchored below the parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlay {
    /// Minimum width.
    pub min_width: Dp,
    /// Maximum width.
    pub max_width: Dp,
    /// Maximum height; taller content scrolls.
    pub max_height: Dp,
    /// Gap between the anchor's bottom edge and the overlay.
    pub vertical_offset: Dp,
}

/// A node in the render tree.
pub struct RenderNode {
    /// Name of the component that emitted the node.
    pub name: &'static str,
    /// Accessibility-facing state.
    pub semantics: Semantics,
    /// Modifier chain applied around the node's own layout.
    pub modifier: Modifier,
    /// Descriptive styling attributes, in insertion order.
    pub attributes: Vec<(&'static str, String)>,
    /// Overlay placement, for floating nodes.
    pub overlay: Option<Overlay>,
    pub(crate) layout: Arc<dyn LayoutSpec>,
    pub(crate) on_click: Option<Callback>,
    pub(crate) on_dismiss_request: Option<Callback>,
}

impl RenderNode {
    /// Returns the value of a descriptive attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the node has a click handler.
    pub fn is_clickable(&self) -> bool {
        self.on_click.is_some()
    }

    /// Returns `true` if the node has a dismiss-request handler.
    pub fn is_dismissible(&self) -> bool {
        self.on_dismiss_request.is_some()
    }

    /// Returns the announced label, if any.
    pub fn label(&self) -> Option<&str> {
        self.semantics.label.as_deref()
    }
}

impl fmt::Debug for RenderNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderNode")
            .field("name", &self.name)
            .field("semantics", &self.semantics)
            .field("modifier", &self.modifier)
            .field("attributes", &self.attributes)
            .field("overlay", &self.overlay)
            .field("clickable", &self.is_clickable())
            .field("dismissible", &self.is_dismissible())
            .finish()
    }
}

/// Builder for a node, passed to [`emit`](crate::emit).
pub struct NodeSpec {
    pub(crate) node: RenderNode,
}

impl NodeSpec {
    /// Starts a node for component `name` laid out by `layout`.
    pub fn new(name: &'static str, layout: impl LayoutSpec + 'static) -> Self {
        Self::with_shared_layout(name, Arc::new(layout))
    }

    /// Starts a node with an already shared layout policy.
    pub fn with_shared_layout(name: &'static str, layout: Arc<dyn LayoutSpec>) -> Self {
        Self {
            node: RenderNode {
                name,
                semantics: Semantics::default(),
                modifier: Modifier::new(),
                attributes: Vec::new(),
                overlay: None,
                layout,
                on_click: None,
                on_dismiss_request: None,
            },
        }
    }

    /// Sets the modifier chain.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.node.modifier = modifier;
        self
    }

    /// Sets the role.
    pub fn role(mut self, role: Role) -> Self {
        self.node.semantics.role = role;
        self
    }

    /// Sets the announced label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.node.semantics.label = Some(label.into());
        self
    }

    /// Sets the selection state.
    pub fn selected(mut self, selected: bool) -> Self {
        self.node.semantics.selected = Some(selected);
        self
    }

    /// Sets the expansion state.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.node.semantics.expanded = Some(expanded);
        self
    }

    /// Sets whether the node accepts activation.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.node.semantics.enabled = enabled;
        self
    }

    /// Adds a descriptive attribute.
    pub fn attribute(mut self, key: &'static str, value: impl ToString) -> Self {
        self.node.attributes.push((key, value.to_string()));
        self
    }

    /// Marks the node as floating.
    pub fn overlay(mut self, overlay: Overlay) -> Self {
        self.node.overlay = Some(overlay);
        self
    }

    /// Sets the click handler.
    pub fn on_click_shared(mut self, on_click: Callback) -> Self {
        self.node.on_click = Some(on_click);
        self
    }

    /// Sets the dismiss-request handler.
    pub fn on_dismiss_request_shared(mut self, on_dismiss: Callback) -> Self {
        self.node.on_dismiss_request = Some(on_dismiss);
        self
    }
}
