//! Capability traits of the feature-visualizer layer.
//!
//! A concrete visualizer implements [`Visualizer`] for its canvas, then opts
//! into each capability:
//!
//! - [`FeatureVisualizer`]: pipeline contract (`fit`, identity `transform`);
//! - [`FeatureNamed`]: lazily resolved feature labels;
//! - [`TargetColored`]: target type and color assignment;
//! - [`DataVisualizer`]: the fit protocol tying the three together around a
//!   `draw` hook.

use crate::data::{Instances, Target};
use crate::error::Result;
use crate::visualizer::Visualizer;

use super::colors::TargetColors;
use super::names::{feature_labels, FeatureLabel};
use super::state::TargetState;
use super::target::TargetType;

/// A visualizer that can sit in a data pipeline as a no-op transformer.
pub trait FeatureVisualizer: Visualizer {
    /// Options forwarded untouched to drawing.
    type Options: Default;

    /// Fit to `x` (and optional target `y`) with explicit draw options.
    ///
    /// # Errors
    ///
    /// Returns whatever fitting or drawing fails with.
    fn fit_with<X: Instances + ?Sized>(
        &mut self,
        x: &X,
        y: Option<&Target>,
        options: &Self::Options,
    ) -> Result<&mut Self>;

    /// Fit with default draw options.
    ///
    /// # Errors
    ///
    /// See [`FeatureVisualizer::fit_with`].
    fn fit<X: Instances + ?Sized>(&mut self, x: &X, y: Option<&Target>) -> Result<&mut Self> {
        self.fit_with(x, y, &Self::Options::default())
    }

    /// Return the input unchanged.
    fn transform<X>(&self, x: X) -> X {
        x
    }

    /// Fit, then transform.
    ///
    /// # Errors
    ///
    /// See [`FeatureVisualizer::fit_with`].
    fn fit_transform<X: Instances>(
        &mut self,
        x: X,
        y: Option<&Target>,
        options: &Self::Options,
    ) -> Result<X> {
        self.fit_with(&x, y, options)?;
        Ok(self.transform(x))
    }

    /// Fit, transform, then show the figure.
    ///
    /// # Errors
    ///
    /// Fails if fitting fails or if [`Visualizer::show`] fails.
    fn fit_transform_show<X: Instances>(
        &mut self,
        x: X,
        y: Option<&Target>,
        options: &Self::Options,
    ) -> Result<X> {
        let x = self.fit_transform(x, y, options)?;
        self.show()?;
        Ok(x)
    }
}

/// A visualizer that labels the features it plots.
pub trait FeatureNamed {
    /// Resolved (or user-supplied) feature labels.
    fn features(&self) -> Option<&[FeatureLabel]>;

    /// Storage for the feature labels.
    fn features_mut(&mut self) -> &mut Option<Vec<FeatureLabel>>;

    /// Derive feature labels from `x` unless they are already set.
    fn resolve_features<X: Instances + ?Sized>(&mut self, x: &X) {
        let slot = self.features_mut();
        if slot.is_none() {
            *slot = Some(feature_labels(x));
        }
    }

    /// Forget the labels so the next fit derives them again.
    fn reset_features(&mut self) {
        *self.features_mut() = None;
    }
}

/// A visualizer that colors instances by their target value.
pub trait TargetColored {
    /// Target resolution state.
    fn target_state(&self) -> &TargetState;

    /// Mutable target resolution state.
    fn target_state_mut(&mut self) -> &mut TargetState;

    /// Resolve the target type and colors for `y`.
    ///
    /// # Errors
    ///
    /// See [`TargetState::resolve`].
    fn resolve_target_colors(&mut self, y: Option<&Target>) -> Result<()> {
        self.target_state_mut().resolve(y)
    }

    /// Target type resolved by the last fit.
    fn target_type(&self) -> Option<TargetType> {
        self.target_state().resolved()
    }

    /// Class labels.
    fn classes(&self) -> Option<&[String]> {
        self.target_state().classes()
    }

    /// Color assignment from the last fit.
    fn target_colors(&self) -> Option<&TargetColors> {
        self.target_state().colors()
    }

    /// Target `(min, max)` from the last continuous fit.
    fn range(&self) -> Option<(f64, f64)> {
        self.target_state().range()
    }
}

/// A feature visualizer whose fit resolves features and target colors, then
/// draws.
pub trait DataVisualizer: FeatureVisualizer + FeatureNamed + TargetColored {
    /// Render the fitted data onto the canvas.
    ///
    /// # Errors
    ///
    /// Implementations fail on data they cannot plot.
    fn draw<X: Instances + ?Sized>(
        &mut self,
        x: &X,
        y: Option<&Target>,
        options: &Self::Options,
    ) -> Result<()>;

    /// The shared fit protocol; [`FeatureVisualizer::fit_with`]
    /// implementations delegate here.
    ///
    /// # Errors
    ///
    /// Fails if the target cannot be resolved or if drawing fails. Feature
    /// resolution never fails.
    fn fit_data<X: Instances + ?Sized>(
        &mut self,
        x: &X,
        y: Option<&Target>,
        options: &Self::Options,
    ) -> Result<&mut Self> {
        self.resolve_features(x);
        self.resolve_target_colors(y)?;
        self.draw(x, y, options)?;
        Ok(self)
    }
}
