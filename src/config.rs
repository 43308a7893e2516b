//! Construction options shared by feature visualizers.
//!
//! Options are plain strings so they can come from a YAML file (with the
//! `config` feature) or be set in code. They are validated when a visualizer
//! is built from them, not here.

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use crate::error::{Error, Result};
use crate::features::DEFAULT_DISCRETE_THRESHOLD;

fn default_width() -> u32 {
    crate::canvas::DEFAULT_WIDTH
}
fn default_height() -> u32 {
    crate::canvas::DEFAULT_HEIGHT
}
fn default_target_type() -> String {
    "auto".to_string()
}
fn default_discrete_threshold() -> usize {
    DEFAULT_DISCRETE_THRESHOLD
}

/// Options recognized by data visualizers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualizerConfig {
    /// Canvas width in pixels.
    #[cfg_attr(feature = "config", serde(default = "default_width"))]
    pub width: u32,

    /// Canvas height in pixels.
    #[cfg_attr(feature = "config", serde(default = "default_height"))]
    pub height: u32,

    /// Figure title.
    #[cfg_attr(feature = "config", serde(default))]
    pub title: Option<String>,

    /// Where `show` writes the figure as PNG.
    #[cfg_attr(feature = "config", serde(default))]
    pub outpath: Option<String>,

    /// Explicit feature names; derived from the data when unset.
    #[cfg_attr(feature = "config", serde(default))]
    pub features: Option<Vec<String>>,

    /// Explicit class labels; derived from the target when unset.
    #[cfg_attr(feature = "config", serde(default))]
    pub classes: Option<Vec<String>>,

    /// Explicit per-class colors (hex codes or single-letter codes).
    #[cfg_attr(feature = "config", serde(default))]
    pub color: Option<Vec<String>>,

    /// Named colormap for classes or continuous values.
    #[cfg_attr(feature = "config", serde(default))]
    pub colormap: Option<String>,

    /// One of `auto`, `single`, `discrete`, `continuous`.
    #[cfg_attr(feature = "config", serde(default = "default_target_type"))]
    pub target_type: String,

    /// Distinct-value count at which an `auto` target becomes continuous.
    #[cfg_attr(feature = "config", serde(default = "default_discrete_threshold"))]
    pub discrete_threshold: usize,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: None,
            outpath: None,
            features: None,
            classes: None,
            color: None,
            colormap: None,
            target_type: default_target_type(),
            discrete_threshold: default_discrete_threshold(),
        }
    }
}

impl VisualizerConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target type tag.
    #[must_use]
    pub fn target_type(mut self, target_type: impl Into<String>) -> Self {
        self.target_type = target_type.into();
        self
    }

    /// Set explicit class labels.
    #[must_use]
    pub fn classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    /// Set explicit feature names.
    #[must_use]
    pub fn features<S: Into<String>>(mut self, features: impl IntoIterator<Item = S>) -> Self {
        self.features = Some(features.into_iter().map(Into::into).collect());
        self
    }

    /// Set explicit colors.
    #[must_use]
    pub fn color<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.color = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Set the colormap name.
    #[must_use]
    pub fn colormap(mut self, colormap: impl Into<String>) -> Self {
        self.colormap = Some(colormap.into());
        self
    }

    /// Set the figure title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the PNG output path.
    #[must_use]
    pub fn outpath(mut self, outpath: impl Into<String>) -> Self {
        self.outpath = Some(outpath.into());
        self
    }

    /// Set the canvas size.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the auto-detection threshold.
    #[must_use]
    pub fn discrete_threshold(mut self, threshold: usize) -> Self {
        self.discrete_threshold = threshold;
        self
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[cfg(feature = "config")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    #[cfg(feature = "config")]
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse { line, message: e.to_string() }
        })
    }
}
