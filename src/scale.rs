//! Scale functions for data-to-visual mappings.
//!
//! Scales transform data values to visual properties (position, color).
//! Based on the Grammar of Graphics [Wilkinson 2005].

use crate::color::Rgba;
use crate::error::{Error, Result};

/// Give a zero-width domain a usable extent.
///
/// The half-width grows with the magnitude of the value so that widening
/// still separates the bounds where `0.5` is below one ULP (e.g. `1e8`).
/// Non-degenerate domains are returned unchanged.
#[must_use]
pub fn widen_domain(min: f32, max: f32) -> (f32, f32) {
    if min != max {
        return (min, max);
    }
    let half = (min.abs() * f32::EPSILON * 4.0).max(0.5);
    ((min - half).max(f32::MIN), (max + half).min(f32::MAX))
}

fn check_domain(domain: (f32, f32)) -> Result<()> {
    if !domain.0.is_finite() || !domain.1.is_finite() {
        return Err(Error::ScaleDomain(format!("non-finite domain ({}, {})", domain.0, domain.1)));
    }
    if domain.0 == domain.1 {
        return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
    }
    Ok(())
}

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if domain_min equals domain_max or either is not finite.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        check_domain(domain)?;

        Ok(Self { domain_min: domain.0, domain_max: domain.1, range_min: range.0, range_max: range.1 })
    }

    /// Create a scale from the extent of the finite values in `data`.
    ///
    /// A constant column gets a widened domain centred on its value (see
    /// [`widen_domain`]) so that every point lands in the middle of the range.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] for empty data and [`Error::ScaleDomain`]
    /// when no value is finite.
    pub fn from_data(data: &[f32], range: (f32, f32)) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }

        let (min, max) = data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

        if min > max {
            return Err(Error::ScaleDomain("no finite values to scale".to_string()));
        }
        Self::new(widen_domain(min, max), range)
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Color scale for mapping values to colors.
///
/// Colors are evenly spaced stops across the domain; values between stops are
/// linearly interpolated and values outside the domain are clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    colors: Vec<Rgba>,
    domain_min: f32,
    domain_max: f32,
}

impl ColorScale {
    /// Create a new color scale.
    ///
    /// # Errors
    ///
    /// Returns an error if colors is empty or domain is invalid.
    pub fn new(colors: Vec<Rgba>, domain: (f32, f32)) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::ScaleDomain("Color scale requires at least one color".to_string()));
        }
        check_domain(domain)?;

        Ok(Self { colors, domain_min: domain.0, domain_max: domain.1 })
    }

    /// Color stops of this scale, low to high.
    #[must_use]
    pub fn stops(&self) -> &[Rgba] {
        &self.colors
    }

    /// Map a normalized position in `[0, 1]` to a color, ignoring the domain.
    #[must_use]
    pub fn at(&self, t: f32) -> Rgba {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        if self.colors.len() == 1 {
            return self.colors[0];
        }

        let segment_count = self.colors.len() - 1;
        let segment = ((t * segment_count as f32).floor() as usize).min(segment_count - 1);
        let local_t = t * segment_count as f32 - segment as f32;

        self.colors[segment].lerp(self.colors[segment + 1], local_t)
    }
}

impl Scale<f32, Rgba> for ColorScale {
    fn scale(&self, value: f32) -> Rgba {
        self.at((value - self.domain_min) / (self.domain_max - self.domain_min))
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (Rgba, Rgba) {
        (*self.colors.first().unwrap_or(&Rgba::BLACK), *self.colors.last().unwrap_or(&Rgba::WHITE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("operation should succeed");
        assert!((scale.scale(0.0) - 0.0).abs() < 0.001);
        assert!((scale.scale(50.0) - 0.5).abs() < 0.001);
        assert!((scale.scale(100.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // Screen y grows downwards
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("operation should succeed");
        assert!((scale.scale(10.0) - 0.0).abs() < 0.001);
        assert!((scale.scale(0.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_equal_domain_error() {
        assert!(LinearScale::new((5.0, 5.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_linear_scale_from_data() {
        let scale = LinearScale::from_data(&[0.0, 50.0, 100.0], (0.0, 1.0))
            .expect("operation should succeed");
        assert!((scale.scale(50.0) - 0.5).abs() < 0.001);
        assert!(matches!(LinearScale::from_data(&[], (0.0, 1.0)), Err(Error::EmptyData)));
    }

    #[test]
    fn test_linear_scale_from_data_ignores_non_finite() {
        let scale = LinearScale::from_data(&[0.0, f32::NAN, 10.0, f32::INFINITY], (0.0, 1.0))
            .expect("finite extent exists");
        assert_eq!(scale.domain(), (0.0, 10.0));
        assert!(matches!(
            LinearScale::from_data(&[f32::NAN, f32::INFINITY], (0.0, 1.0)),
            Err(Error::ScaleDomain(_))
        ));
    }

    #[test]
    fn test_linear_scale_from_large_constant_data() {
        let scale = LinearScale::from_data(&[1.0e8, 1.0e8], (0.0, 10.0))
            .expect("constant data at large magnitude still scales");
        assert!((scale.scale(1.0e8) - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_linear_scale_tiny_extent() {
        let scale = LinearScale::from_data(&[1.0e-9, 2.0e-9], (0.0, 1.0)).expect("tiny extent is not degenerate");
        assert!((scale.scale(2.0e-9) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_widen_domain() {
        assert_eq!(widen_domain(1.0, 2.0), (1.0, 2.0));
        assert_eq!(widen_domain(5.0, 5.0), (4.5, 5.5));

        let (lo, hi) = widen_domain(1.0e8, 1.0e8);
        assert!(lo < 1.0e8 && hi > 1.0e8);

        let (lo, hi) = widen_domain(f32::MAX, f32::MAX);
        assert!(lo < hi && hi.is_finite());
    }

    #[test]
    fn test_linear_scale_from_constant_data_centres() {
        let scale = LinearScale::from_data(&[5.0, 5.0, 5.0], (0.0, 10.0))
            .expect("constant data still scales");
        assert!((scale.scale(5.0) - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_color_scale_interpolates() {
        let scale = ColorScale::new(vec![Rgba::BLACK, Rgba::WHITE], (0.0, 1.0))
            .expect("color scale creation should succeed");
        let mid = scale.scale(0.5);
        assert!(mid.r > 100 && mid.r < 150);
    }

    #[test]
    fn test_color_scale_clamping() {
        let scale = ColorScale::new(vec![Rgba::BLACK, Rgba::WHITE], (0.0, 1.0))
            .expect("color scale creation should succeed");
        assert_eq!(scale.scale(-1.0), Rgba::BLACK);
        assert_eq!(scale.scale(2.0), Rgba::WHITE);
        assert_eq!(scale.at(f32::NAN), Rgba::BLACK);
    }

    #[test]
    fn test_color_scale_single_color() {
        let scale = ColorScale::new(vec![Rgba::RED], (0.0, 1.0))
            .expect("color scale creation should succeed");
        assert_eq!(scale.scale(0.5), Rgba::RED);
    }

    #[test]
    fn test_color_scale_domain_range() {
        let scale = ColorScale::new(vec![Rgba::BLACK, Rgba::WHITE], (0.0, 10.0))
            .expect("color scale creation should succeed");
        assert_eq!(scale.domain(), (0.0, 10.0));
        assert_eq!(scale.range(), (Rgba::BLACK, Rgba::WHITE));
        assert_eq!(scale.stops().len(), 2);
    }

    #[test]
    fn test_color_scale_endpoints_hit_stops() {
        let scale = ColorScale::new(vec![Rgba::RED, Rgba::GREEN, Rgba::BLUE], (1.0, 9.0))
            .expect("operation should succeed");
        assert_eq!(scale.scale(1.0), Rgba::RED);
        assert_eq!(scale.scale(5.0), Rgba::GREEN);
        assert_eq!(scale.scale(9.0), Rgba::BLUE);
    }

    #[test]
    fn test_color_scale_invalid() {
        assert!(ColorScale::new(vec![], (0.0, 1.0)).is_err());
        assert!(ColorScale::new(vec![Rgba::RED, Rgba::BLUE], (5.0, 5.0)).is_err());
        assert!(ColorScale::new(vec![Rgba::RED, Rgba::BLUE], (0.0, f32::INFINITY)).is_err());
    }
}
