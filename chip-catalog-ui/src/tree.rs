//! The render tree produced by a [`Composition`](crate::Composition) pass.
//!
//! A tree is a plain description: it can be queried, laid out, dumped as
//! text, serialized, and used to deliver activations back to the handlers
//! that components registered.

use std::fmt;

use indextree::{Arena, NodeId};
use serde::Serialize;
use tracing::debug;

use crate::{
    Constraint, LayoutEnv, MeasurementError, Overlay, RenderNode, Semantics,
    layout::{LayoutPass, LayoutResult},
};

/// Errors raised when delivering an activation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InteractionError {
    /// The node id does not belong to this tree.
    #[error("node {0:?} is not part of this tree")]
    UnknownNode(NodeId),
    /// The node has no click handler.
    #[error("`{name}` does not accept clicks")]
    NotClickable {
        /// Component name of the node.
        name: &'static str,
    },
    /// The node is disabled.
    #[error("`{name}` is disabled")]
    Disabled {
        /// Component name of the node.
        name: &'static str,
    },
    /// The node has no dismiss-request handler.
    #[error("`{name}` cannot be dismissed")]
    NotDismissible {
        /// Component name of the node.
        name: &'static str,
    },
}

/// A rendered tree of [`RenderNode`]s.
pub struct RenderTree {
    arena: Arena<RenderNode>,
    root: NodeId,
}

impl RenderTree {
    pub(crate) fn new(arena: Arena<RenderNode>, root: NodeId) -> Self {
        Self { arena, root }
    }

    /// The implicit root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the node for `id`.
    pub fn get(&self, id: NodeId) -> Option<&RenderNode> {
        self.arena.get(id).map(|node| node.get())
    }

    /// Number of nodes, including the root.
    pub fn len(&self) -> usize {
        self.descendants().count()
    }

    /// Returns `true` if only the root exists.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Children of `id` in emission order.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        id.children(&self.arena)
    }

    /// Parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|node| node.parent())
    }

    /// All nodes in depth-first emission order, root first.
    pub fn descendants(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.root.descendants(&self.arena)
    }

    /// Nodes emitted by component `name`, in emission order.
    pub fn nodes_named(&self, name: &str) -> Vec<NodeId> {
        self.descendants()
            .filter(|id| self.get(*id).is_some_and(|node| node.name == name))
            .collect()
    }

    /// Nodes named `name` below `ancestor`, excluding `ancestor` itself.
    pub fn nodes_named_under(&self, ancestor: NodeId, name: &str) -> Vec<NodeId> {
        ancestor
            .descendants(&self.arena)
            .skip(1)
            .filter(|id| self.get(*id).is_some_and(|node| node.name == name))
            .collect()
    }

    /// First node whose announced label is `label`.
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.descendants()
            .find(|id| self.get(*id).and_then(RenderNode::label) == Some(label))
    }

    /// First clickable node whose announced label is `label`.
    pub fn find_clickable(&self, label: &str) -> Option<NodeId> {
        self.descendants().find(|id| {
            self.get(*id)
                .is_some_and(|node| node.is_clickable() && node.label() == Some(label))
        })
    }

    /// Delivers one click to `id`.
    pub fn click(&self, id: NodeId) -> Result<(), InteractionError> {
        let node = self.get(id).ok_or(InteractionError::UnknownNode(id))?;
        let handler = node
            .on_click
            .as_ref()
            .ok_or(InteractionError::NotClickable { name: node.name })?;
        if !node.semantics.enabled {
            return Err(InteractionError::Disabled { name: node.name });
        }
        debug!(node = node.name, label = ?node.label(), "delivering click");
        handler();
        Ok(())
    }

    /// Delivers a dismiss request to `id`, as a floating surface does on an
    /// outside click.
    pub fn dismiss(&self, id: NodeId) -> Result<(), InteractionError> {
        let node = self.get(id).ok_or(InteractionError::UnknownNode(id))?;
        let handler = node
            .on_dismiss_request
            .as_ref()
            .ok_or(InteractionError::NotDismissible { name: node.name })?;
        debug!(node = node.name, "delivering dismiss request");
        handler();
        Ok(())
    }

    /// Lays out the tree within `constraint`.
    pub fn layout(
        &self,
        constraint: Constraint,
        env: &LayoutEnv,
    ) -> Result<LayoutResult, MeasurementError> {
        LayoutPass::new(self, env).run(constraint)
    }

    /// Returns a serializable description of the whole tree.
    pub fn describe(&self) -> NodeDescription {
        self.describe_node(self.root)
    }

    fn describe_node(&self, id: NodeId) -> NodeDescription {
        let children = self.children(id).map(|c| self.describe_node(c)).collect();
        match self.get(id) {
            Some(node) => NodeDescription {
                name: node.name,
                semantics: node.semantics.clone(),
                attributes: node
                    .attributes
                    .iter()
                    .map(|(k, v)| (*k, v.clone()))
                    .collect(),
                modifier: (!node.modifier.is_empty()).then(|| node.modifier.to_string()),
                clickable: node.is_clickable(),
                overlay: node.overlay,
                children,
            },
            None => NodeDescription {
                name: "<removed>",
                semantics: Semantics::default(),
                attributes: Vec::new(),
                modifier: None,
                clickable: false,
                overlay: None,
                children,
            },
        }
    }

    fn write_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let Some(node) = self.get(id) else {
            return Ok(());
        };
        write!(f, "{:indent$}{}", "", node.name, indent = depth * 2)?;
        if let Some(label) = node.label() {
            write!(f, " {label:?}")?;
        }
        if node.semantics.selected == Some(true) {
            f.write_str(" [selected]")?;
        }
        if node.semantics.expanded == Some(true) {
            f.write_str(" [expanded]")?;
        }
        if !node.semantics.enabled {
            f.write_str(" [disabled]")?;
        }
        if !node.attributes.is_empty() {
            let attributes: Vec<String> = node
                .attributes
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            write!(f, " {{{}}}", attributes.join(", "))?;
        }
        if node.is_clickable() {
            f.write_str(" <clickable>")?;
        }
        if node.overlay.is_some() {
            f.write_str(" (overlay)")?;
        }
        if !node.modifier.is_empty() {
            write!(f, " ~{}", node.modifier)?;
        }
        writeln!(f)?;
        for child in self.children(id) {
            self.write_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for RenderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.children(self.root) {
            self.write_node(f, child, 0)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RenderTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderTree")
            .field("nodes", &self.len())
            .finish()
    }
}

/// Serializable snapshot of a node and its subtree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeDescription {
    /// Component name.
    pub name: &'static str,
    /// Accessibility-facing state.
    pub semantics: Semantics,
    /// Descriptive attributes.
    pub attributes: Vec<(&'static str, String)>,
    /// Modifier chain, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<String>,
    /// Whether the node accepts clicks.
    pub clickable: bool,
    /// Overlay placement, for floating nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Overlay>,
    /// Children in emission order.
    pub children: Vec<NodeDescription>,
}
