//! Two-feature scatter plot colored by target.
//!
//! Performance target: 10K points < 5ms

use batuta_common::display::WithDimensions;

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::config::VisualizerConfig;
use crate::data::{Instances, Target};
use crate::error::{Error, Result};
use crate::scale::{LinearScale, Scale};
use crate::visualizer::Visualizer;

use super::base::{DataVisualizer, FeatureNamed, FeatureVisualizer, TargetColored};
use super::colors::{ClassColors, TargetColors, DEFAULT_SINGLE_COLOR};
use super::names::FeatureLabel;
use super::state::TargetState;

/// Draw options for [`ScatterVisualizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScatterOptions {
    /// Point opacity in `0.0..=1.0`.
    pub alpha: f32,
    /// Point diameter in pixels.
    pub point_size: f32,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self { alpha: 1.0, point_size: 3.0 }
    }
}

impl ScatterOptions {
    /// Set the alpha transparency (0.0 - 1.0).
    #[must_use]
    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the point size in pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }
}

/// Scatter plot of two features of `X`.
#[derive(Debug, Clone)]
pub struct ScatterVisualizer {
    canvas: Canvas,
    features: Option<Vec<FeatureLabel>>,
    target: TargetState,
    x_index: usize,
    y_index: usize,
    points_drawn: usize,
}

impl ScatterVisualizer {
    /// Build from configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an invalid target type, color or
    /// colormap, and [`Error::InvalidDimensions`] for a zero-sized canvas.
    pub fn new(config: &VisualizerConfig) -> Result<Self> {
        let mut canvas = Canvas::new(config.width, config.height)?;
        if let Some(title) = &config.title {
            canvas = canvas.with_title(title.as_str());
        }
        if let Some(outpath) = &config.outpath {
            canvas = canvas.with_outpath(outpath.as_str());
        }

        let features = config
            .features
            .as_ref()
            .map(|names| names.iter().cloned().map(FeatureLabel::Name).collect());

        Ok(Self {
            canvas,
            features,
            target: TargetState::from_config(config)?,
            x_index: 0,
            y_index: 1,
            points_drawn: 0,
        })
    }

    /// Build around an existing canvas and target state.
    #[must_use]
    pub fn with_canvas(canvas: Canvas, target: TargetState) -> Self {
        Self { canvas, features: None, target, x_index: 0, y_index: 1, points_drawn: 0 }
    }

    /// Choose the columns plotted on the x and y axes.
    #[must_use]
    pub fn columns(mut self, x_index: usize, y_index: usize) -> Self {
        self.x_index = x_index;
        self.y_index = y_index;
        self
    }

    /// Set explicit feature labels.
    #[must_use]
    pub fn with_features<L: Into<FeatureLabel>>(mut self, labels: impl IntoIterator<Item = L>) -> Self {
        self.features = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Columns plotted on the x and y axes.
    #[must_use]
    pub fn column_indices(&self) -> (usize, usize) {
        (self.x_index, self.y_index)
    }

    /// Labels of the two plotted features, once resolved.
    #[must_use]
    pub fn axis_labels(&self) -> Option<(&FeatureLabel, &FeatureLabel)> {
        let features = self.features.as_ref()?;
        Some((features.get(self.x_index)?, features.get(self.y_index)?))
    }

    /// Number of points rendered by the last draw.
    #[must_use]
    pub fn points_drawn(&self) -> usize {
        self.points_drawn
    }

    fn validate<X: Instances + ?Sized>(&self, x: &X, y: Option<&Target>) -> Result<()> {
        let (n_instances, n_features) = x.shape();
        if n_features < 2 {
            return Err(Error::NotEnoughFeatures { required: 2, actual: n_features });
        }
        for index in [self.x_index, self.y_index] {
            if index >= n_features {
                return Err(Error::FeatureIndex { index, n_features });
            }
        }
        if n_instances == 0 {
            return Err(Error::EmptyData);
        }
        if let Some(y) = y {
            if y.len() != n_instances {
                return Err(Error::DataLengthMismatch { x_len: n_instances, y_len: y.len() });
            }
        }
        Ok(())
    }
}

/// Per-point color lookup built once per draw.
enum PointColors<'a> {
    Single(Rgba),
    Discrete { colors: &'a ClassColors, labels: Vec<Option<String>>, distinct: Vec<String> },
    Continuous { colors: &'a TargetColors, values: Vec<f32> },
}

impl PointColors<'_> {
    fn at(&self, row: usize) -> Option<Rgba> {
        match self {
            PointColors::Single(color) => Some(*color),
            PointColors::Discrete { colors, labels, distinct } => {
                let label = labels.get(row)?.as_deref()?;
                colors.get(label).or_else(|| {
                    let rank = distinct.iter().position(|d| d == label)?;
                    colors.get_index(rank)
                })
            }
            PointColors::Continuous { colors, values } => colors.for_value(*values.get(row)?),
        }
    }
}

impl Visualizer for ScatterVisualizer {
    fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    fn finalize(&mut self) -> Result<()> {
        let (x_min, x_max, y_min, y_max) = self.canvas.plot_area();
        let (left, right) = (x_min as u32, x_max as u32);
        let (top, bottom) = (y_min as u32, y_max as u32);

        self.canvas.hline(left, right, bottom, Rgba::BLACK);
        self.canvas.vline(left, top, bottom, Rgba::BLACK);
        Ok(())
    }
}

impl FeatureVisualizer for ScatterVisualizer {
    type Options = ScatterOptions;

    fn fit_with<X: Instances + ?Sized>(
        &mut self,
        x: &X,
        y: Option<&Target>,
        options: &ScatterOptions,
    ) -> Result<&mut Self> {
        self.fit_data(x, y, options)
    }
}

impl FeatureNamed for ScatterVisualizer {
    fn features(&self) -> Option<&[FeatureLabel]> {
        self.features.as_deref()
    }

    fn features_mut(&mut self) -> &mut Option<Vec<FeatureLabel>> {
        &mut self.features
    }
}

impl TargetColored for ScatterVisualizer {
    fn target_state(&self) -> &TargetState {
        &self.target
    }

    fn target_state_mut(&mut self) -> &mut TargetState {
        &mut self.target
    }
}

impl DataVisualizer for ScatterVisualizer {
    fn draw<X: Instances + ?Sized>(
        &mut self,
        x: &X,
        y: Option<&Target>,
        options: &ScatterOptions,
    ) -> Result<()> {
        self.validate(x, y)?;

        let n_features = x.n_features();
        let xs = x.column(self.x_index).ok_or(Error::FeatureIndex { index: self.x_index, n_features })?;
        let ys = x.column(self.y_index).ok_or(Error::FeatureIndex { index: self.y_index, n_features })?;

        let (x_min, x_max, y_min, y_max) = self.canvas.plot_area();
        let x_scale = LinearScale::from_data(&xs, (x_min, x_max))?;
        let y_scale = LinearScale::from_data(&ys, (y_max, y_min))?;

        let assignment = self.target.colors().ok_or_else(|| {
            Error::Configuration("draw called before target colors were resolved".to_string())
        })?;
        let lookup = match (assignment, y) {
            (TargetColors::Discrete(colors), Some(y)) => PointColors::Discrete {
                colors,
                labels: (0..y.len()).map(|row| y.label(row)).collect(),
                distinct: y.distinct(),
            },
            (TargetColors::Continuous(_), Some(y)) => {
                PointColors::Continuous { colors: assignment, values: y.to_f32()? }
            }
            (TargetColors::Single(color), _) => PointColors::Single(*color),
            (_, None) => PointColors::Single(DEFAULT_SINGLE_COLOR),
        };

        let alpha = (options.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        let radius = options.point_size / 2.0;

        let mut points = Vec::with_capacity(xs.len());
        for (row, (&vx, &vy)) in xs.iter().zip(&ys).enumerate() {
            if !vx.is_finite() || !vy.is_finite() {
                continue;
            }
            let Some(color) = lookup.at(row) else {
                tracing::debug!(row, "no color for point; skipped");
                continue;
            };
            points.push((x_scale.scale(vx), y_scale.scale(vy), color.with_alpha(alpha)));
        }

        self.canvas.clear(self.canvas.background());
        for &(px, py, color) in &points {
            self.canvas.fill_circle(px, py, radius, color);
        }

        self.points_drawn = points.len();
        tracing::debug!(points = self.points_drawn, "scatter drawn");
        Ok(())
    }
}

impl WithDimensions for ScatterVisualizer {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
    }
}
