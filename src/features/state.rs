//! Target resolution state carried by every data visualizer.

use crate::color::{parse_colors, Rgba};
use crate::config::VisualizerConfig;
use crate::data::Target;
use crate::error::{Error, Result, Warning};
use crate::palette::{color_scale, resolve_colors, Colormap};

use super::colors::{ClassColors, TargetColors, DEFAULT_SINGLE_COLOR};
use super::target::{determine_target_type, TargetType, DEFAULT_DISCRETE_THRESHOLD};

/// Target type, classes and color assignment of a data visualizer.
///
/// Hints and the requested type are fixed at construction. `classes` is
/// filled on the first discrete fit and then kept; the resolved type, colors,
/// range and warnings are recomputed on every fit.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetState {
    requested: TargetType,
    discrete_threshold: usize,
    colors_hint: Option<Vec<Rgba>>,
    colormap: Option<Colormap>,
    classes: Option<Vec<String>>,
    resolved: Option<TargetType>,
    colors: Option<TargetColors>,
    range: Option<(f64, f64)>,
    warnings: Vec<Warning>,
}

impl Default for TargetState {
    fn default() -> Self {
        Self::new(TargetType::Auto)
    }
}

impl TargetState {
    /// Create state for a requested target type with no hints.
    #[must_use]
    pub fn new(requested: TargetType) -> Self {
        Self {
            requested,
            discrete_threshold: DEFAULT_DISCRETE_THRESHOLD,
            colors_hint: None,
            colormap: None,
            classes: None,
            resolved: None,
            colors: None,
            range: None,
            warnings: Vec::new(),
        }
    }

    /// Create state from a target type tag (`"auto"`, `"single"`, ...).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownTargetType`] for any other tag.
    pub fn parse(target_type: &str) -> Result<Self> {
        Ok(Self::new(target_type.parse()?))
    }

    /// Build from configuration, validating every option up front.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an unknown target type or colormap,
    /// and [`Error::InvalidColor`] for a color that does not parse.
    pub fn from_config(config: &VisualizerConfig) -> Result<Self> {
        let mut state = Self::parse(&config.target_type)?;
        state.discrete_threshold = config.discrete_threshold;
        state.classes = config.classes.clone();
        state.colors_hint = config.color.as_deref().map(parse_colors).transpose()?;
        state.colormap = config.colormap.as_deref().map(str::parse::<Colormap>).transpose()?;
        Ok(state)
    }

    /// Set explicit class labels.
    #[must_use]
    pub fn with_classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        self.classes = Some(classes.into_iter().map(Into::into).collect());
        self
    }

    /// Set explicit per-class colors.
    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Rgba>) -> Self {
        self.colors_hint = Some(colors);
        self
    }

    /// Set the colormap hint.
    #[must_use]
    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = Some(colormap);
        self
    }

    /// Set the auto-detection threshold.
    #[must_use]
    pub fn with_discrete_threshold(mut self, threshold: usize) -> Self {
        self.discrete_threshold = threshold;
        self
    }

    /// Requested target type.
    #[must_use]
    pub fn requested(&self) -> TargetType {
        self.requested
    }

    /// Target type resolved by the last fit.
    #[must_use]
    pub fn resolved(&self) -> Option<TargetType> {
        self.resolved
    }

    /// Class labels, supplied or derived.
    #[must_use]
    pub fn classes(&self) -> Option<&[String]> {
        self.classes.as_deref()
    }

    /// Color assignment from the last fit.
    #[must_use]
    pub fn colors(&self) -> Option<&TargetColors> {
        self.colors.as_ref()
    }

    /// `(min, max)` of the target from the last continuous fit.
    #[must_use]
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Colormap hint.
    #[must_use]
    pub fn colormap(&self) -> Option<Colormap> {
        self.colormap
    }

    /// Explicit color hint.
    #[must_use]
    pub fn colors_hint(&self) -> Option<&[Rgba]> {
        self.colors_hint.as_deref()
    }

    /// Auto-detection threshold.
    #[must_use]
    pub fn discrete_threshold(&self) -> usize {
        self.discrete_threshold
    }

    /// Warnings raised by the last fit.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Forget derived classes so the next discrete fit derives them again.
    pub fn reset_classes(&mut self) {
        self.classes = None;
    }

    /// Classify `y` and compute the matching color assignment.
    ///
    /// Nothing is updated unless the whole resolution succeeds, so a failed
    /// fit leaves the previous type, colors, range and warnings in place.
    ///
    /// # Errors
    ///
    /// Configuration errors if the type cannot be resolved, and data errors
    /// for a continuous target that is empty or not numeric.
    pub fn resolve(&mut self, y: Option<&Target>) -> Result<()> {
        let resolved = determine_target_type(self.requested, y, self.discrete_threshold)?;
        let mut warnings = Vec::new();
        let mut classes = None;
        let mut range = None;

        let colors = match (resolved, y) {
            (TargetType::Single, _) => TargetColors::Single(DEFAULT_SINGLE_COLOR),
            (TargetType::Discrete, Some(y)) => {
                let (derived, map) = self.discrete_colors(y, &mut warnings)?;
                classes = Some(derived);
                TargetColors::Discrete(map)
            }
            (TargetType::Continuous, Some(y)) => {
                let (extent, scale) = self.continuous_colors(y)?;
                range = Some(extent);
                TargetColors::Continuous(scale)
            }
            (TargetType::Discrete | TargetType::Continuous, None) | (TargetType::Auto, _) => {
                return Err(Error::UnresolvedTargetType { requested: self.requested, resolved });
            }
        };

        tracing::debug!(target_type = %resolved, "resolved target colors");

        if classes.is_some() {
            self.classes = classes;
        }
        self.resolved = Some(resolved);
        self.colors = Some(colors);
        self.range = range;
        self.warnings = warnings;
        Ok(())
    }

    fn discrete_colors(&self, y: &Target, warnings: &mut Vec<Warning>) -> Result<(Vec<String>, ClassColors)> {
        let distinct = y.distinct();
        let classes = self.classes.clone().unwrap_or_else(|| distinct.clone());

        if classes.len() != distinct.len() {
            let warning = Warning::ClassCountMismatch { classes: classes.len(), distinct: distinct.len() };
            tracing::warn!("{warning}");
            warnings.push(warning);
        }
        if self.colormap.is_some() && self.colors_hint.is_some() {
            warnings.push(Warning::ColorsOverrideColormap);
        }

        let colors = resolve_colors(classes.len(), self.colormap, self.colors_hint.as_deref())?;
        let map = ClassColors::zip(&classes, &colors);
        Ok((classes, map))
    }

    fn continuous_colors(&self, y: &Target) -> Result<((f64, f64), crate::scale::ColorScale)> {
        let (min, max) = y.value_range()?.ok_or(Error::EmptyData)?;
        let scale = color_scale(self.colormap, (min as f32, max as f32))?;
        Ok(((min, max), scale))
    }
}
