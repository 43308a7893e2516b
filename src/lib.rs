//! # Trueno-Viz Features
//!
//! Feature visualizers for data science pipelines, built on the
//! [trueno](https://crates.io/crates/trueno) core library.
//!
//! A feature visualizer plots properties of a dataset's features or instances
//! while behaving like an identity transformer, so it can sit anywhere in a
//! fit/transform pipeline. Before drawing, every fit:
//!
//! 1. resolves feature labels (column names, or column positions);
//! 2. classifies the target as single, discrete or continuous;
//! 3. derives a color assignment (one color, one color per class, or a
//!    color scale over the target range).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trueno_viz_features::prelude::*;
//!
//! let x = Matrix::from_rows(&[vec![5.1, 3.5], vec![7.0, 3.2], vec![6.3, 3.3]])?;
//! let y = Target::from(vec!["setosa", "versicolor", "virginica"]);
//!
//! let config = VisualizerConfig::new().colormap("viridis").outpath("iris.png");
//! let mut viz = ScatterVisualizer::new(&config)?;
//! viz.fit(&x, Some(&y))?.show()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `config`: YAML loading of [`config::VisualizerConfig`] (serde)

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code (Cloudflare incident 2025-11-18)
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and color parsing.
pub mod color;

/// Scale functions for data-to-visual mappings.
pub mod scale;

/// Named colormaps and color resolution.
pub mod palette;

/// Drawing surface with PNG output.
pub mod canvas;

/// Input data: feature matrices, data frames and target vectors.
pub mod data;

// ============================================================================
// Visualization Modules
// ============================================================================

/// Construction options.
pub mod config;

/// Drawing lifecycle shared by all visualizers.
pub mod visualizer;

/// Feature visualizers: pipeline contract, feature names, target colors.
pub mod features;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for feature visualizer operations.
pub mod error;

pub use error::{Error, Result, Warning};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use trueno_viz_features::prelude::*;
/// ```
pub mod prelude {
    pub use batuta_common::display::WithDimensions;
    pub use crate::canvas::Canvas;
    pub use crate::color::{Hsla, Rgba};
    pub use crate::config::VisualizerConfig;
    pub use crate::data::{DataFrame, Instances, Matrix, Target};
    pub use crate::error::{Error, Result, Warning};
    pub use crate::features::{
        ClassColors, DataVisualizer, FeatureLabel, FeatureNamed, FeatureVisualizer, ScatterOptions,
        ScatterVisualizer, TargetColored, TargetColors, TargetState, TargetType,
    };
    pub use crate::palette::Colormap;
    pub use crate::scale::{ColorScale, LinearScale, Scale};
    pub use crate::visualizer::Visualizer;
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
