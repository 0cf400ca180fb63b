//! Preview configuration.
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! file is a valid configuration:
//!
//! ```toml
//! scale_factor = 2.0
//! glyph_advance = 0.5
//!
//! [viewport]
//! width = 360.0
//! height = 640.0
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chip_catalog_ui::{Constraint, Dp, GlyphAdvanceMeasurer, LayoutEnv};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors raised while loading a preview configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}", path.display())]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field holds an unusable value.
    #[error("invalid `{field}`: {reason}")]
    Invalid {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// Size of the preview surface, in dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Viewport {
    /// Available width.
    pub width: f64,
    /// Available height.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 360.0,
            height: 640.0,
        }
    }
}

/// How samples are laid out for preview.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewConfig {
    /// Preview surface.
    pub viewport: Viewport,
    /// Physical pixels per dp.
    pub scale_factor: f64,
    /// Advance of one grapheme, in ems.
    pub glyph_advance: f64,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            scale_factor: 1.0,
            glyph_advance: 0.5,
        }
    }
}

impl PreviewConfig {
    /// Reads and validates the configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(path = %path.display(), ?config, "loaded preview config");
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable for layout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("viewport.width", self.viewport.width)?;
        positive("viewport.height", self.viewport.height)?;
        positive("scale_factor", self.scale_factor)?;
        positive("glyph_advance", self.glyph_advance)?;
        Ok(())
    }

    /// Overrides the viewport width.
    pub fn with_width(mut self, width: f64) -> Result<Self, ConfigError> {
        self.viewport.width = width;
        self.validate()?;
        Ok(self)
    }

    /// The root constraint of the preview surface.
    pub fn constraint(&self) -> Constraint {
        Constraint::bounded(
            Dp(self.viewport.width).to_px(self.scale_factor),
            Dp(self.viewport.height).to_px(self.scale_factor),
        )
    }

    /// The layout environment for this configuration.
    pub fn layout_env(&self) -> LayoutEnv {
        LayoutEnv::new(self.scale_factor).with_text_measurer(Arc::new(GlyphAdvanceMeasurer {
            advance: self.glyph_advance,
        }))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}
