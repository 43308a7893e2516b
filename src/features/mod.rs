//! Feature visualizers: the layer between raw data and concrete plots.
//!
//! A feature visualizer acts as an identity transformer in a data pipeline,
//! resolves the labels of the features it plots, classifies the target vector
//! as single, discrete or continuous, and derives a color assignment for it
//! before handing off to its `draw` hook.
//!
//! # Example
//!
//! ```rust,ignore
//! use trueno_viz_features::prelude::*;
//!
//! let config = VisualizerConfig::new().classes(["setosa", "versicolor"]);
//! let mut viz = ScatterVisualizer::new(&config)?;
//! viz.fit(&x, Some(&y))?.show()?;
//! ```

mod base;
mod colors;
mod names;
mod scatter;
mod state;
mod target;

pub use base::{DataVisualizer, FeatureNamed, FeatureVisualizer, TargetColored};
pub use colors::{ClassColors, TargetColors, DEFAULT_SINGLE_COLOR};
pub use names::{feature_labels, FeatureLabel};
pub use scatter::{ScatterOptions, ScatterVisualizer};
pub use state::TargetState;
pub use target::{determine_target_type, TargetType, DEFAULT_DISCRETE_THRESHOLD};
