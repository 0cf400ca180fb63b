//! Headless preview of a sample.
//!
//! A [`PreviewSession`] keeps the sample's composition alive so remembered
//! state survives interactions. Every interaction re-renders the sample.

use chip_catalog_ui::{
    Composition, InteractionError, LayoutResult, MeasurementError, NodeDescription, NodeLayout,
    RenderTree,
};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    catalog::{CatalogError, SampleInfo, find_sample},
    config::PreviewConfig,
};

/// Errors raised while previewing a sample.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The sample could not be resolved.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    /// An activation could not be delivered.
    #[error(transparent)]
    Interaction(#[from] InteractionError),
    /// The sample could not be laid out.
    #[error(transparent)]
    Measurement(#[from] MeasurementError),
    /// No clickable node carries the label.
    #[error("no clickable node labelled {label:?}")]
    UnknownLabel {
        /// The requested label.
        label: String,
    },
}

/// A rendered sample together with its composition.
pub struct PreviewSession {
    sample: &'static SampleInfo,
    config: PreviewConfig,
    composition: Composition,
    tree: RenderTree,
}

impl PreviewSession {
    /// Renders `sample` for the first time.
    pub fn new(sample: &'static SampleInfo, config: PreviewConfig) -> Self {
        let mut composition = Composition::new();
        let tree = composition.render(sample.content);
        info!(sample = sample.name, nodes = tree.len(), "rendered sample");
        Self {
            sample,
            config,
            composition,
            tree,
        }
    }

    /// Resolves a sample by name and renders it.
    pub fn open(name: &str, config: PreviewConfig) -> Result<Self, PreviewError> {
        Ok(Self::new(find_sample(name)?, config))
    }

    /// The previewed sample.
    pub fn sample(&self) -> &'static SampleInfo {
        self.sample
    }

    /// The configuration used for layout.
    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    /// The latest render tree.
    pub fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Renders the sample again and returns the new tree.
    pub fn render(&mut self) -> &RenderTree {
        self.tree = self.composition.render(self.sample.content);
        &self.tree
    }

    /// Clicks the first clickable node labelled `label`, then re-renders.
    pub fn click_label(&mut self, label: &str) -> Result<&RenderTree, PreviewError> {
        let id = self
            .tree
            .find_clickable(label)
            .ok_or_else(|| PreviewError::UnknownLabel {
                label: label.to_string(),
            })?;
        debug!(sample = self.sample.name, label, "clicking");
        self.tree.click(id)?;
        Ok(self.render())
    }

    /// Sends a dismiss request to every dismissible node, then re-renders.
    ///
    /// Returns the number of requests delivered.
    pub fn dismiss_overlays(&mut self) -> Result<usize, PreviewError> {
        let targets: Vec<_> = self
            .tree
            .descendants()
            .filter(|id| self.tree.get(*id).is_some_and(|node| node.is_dismissible()))
            .collect();
        for id in &targets {
            self.tree.dismiss(*id)?;
        }
        debug!(
            sample = self.sample.name,
            dismissed = targets.len(),
            "dismissed overlays"
        );
        self.render();
        Ok(targets.len())
    }

    /// Lays out the latest tree on the configured viewport.
    pub fn layout(&self) -> Result<LayoutResult, PreviewError> {
        Ok(self
            .tree
            .layout(self.config.constraint(), &self.config.layout_env())?)
    }

    /// Text dump of the tree followed by the geometry of every placed node.
    pub fn dump(&self) -> Result<String, PreviewError> {
        let layout = self.layout()?;
        let mut out = format!("# {} ({})\n{}", self.sample.title, self.sample.name, self.tree);
        out.push_str("\n# layout\n");
        for placed in self.placed_nodes(&layout) {
            let NodeLayout { position, size, .. } = placed.layout;
            out.push_str(&format!(
                "{} ({}, {}) {}x{}",
                placed.name, position.x.0, position.y.0, size.width.0, size.height.0
            ));
            if let Some(label) = &placed.label {
                out.push_str(&format!(" {label:?}"));
            }
            if let Some(scroll) = placed.layout.scroll {
                out.push_str(&format!(
                    " scroll {:?} content {}x{}",
                    scroll.axis, scroll.content.width.0, scroll.content.height.0
                ));
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Serializable description of the tree and its layout.
    pub fn snapshot(&self) -> Result<PreviewSnapshot, PreviewError> {
        let layout = self.layout()?;
        Ok(PreviewSnapshot {
            sample: self.sample,
            config: self.config,
            tree: self.tree.describe(),
            layout: self.placed_nodes(&layout),
        })
    }

    fn placed_nodes(&self, layout: &LayoutResult) -> Vec<PlacedNode> {
        self.tree
            .descendants()
            .filter(|id| *id != self.tree.root())
            .filter_map(|id| {
                let node = self.tree.get(id)?;
                let placed = layout.get(id)?;
                Some(PlacedNode {
                    name: node.name,
                    label: node.label().map(str::to_string),
                    layout: *placed,
                })
            })
            .collect()
    }
}

/// Geometry of one placed node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    /// Component name.
    pub name: &'static str,
    /// Accessibility label, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Position, size and scroll extent.
    #[serde(flatten)]
    pub layout: NodeLayout,
}

/// Everything the CLI prints for `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewSnapshot {
    /// The previewed sample.
    pub sample: &'static SampleInfo,
    /// Configuration used for layout.
    pub config: PreviewConfig,
    /// The render tree.
    pub tree: NodeDescription,
    /// Placed nodes in tree order.
    pub layout: Vec<PlacedNode>,
}
