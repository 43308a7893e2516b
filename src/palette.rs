//! Named colormaps and color resolution for class and value coloring.
//!
//! Two entry points feed the target colorizer:
//!
//! - [`resolve_colors`] turns a count plus optional colormap/color hints into
//!   exactly that many colors (discrete targets).
//! - [`color_scale`] turns a colormap hint into a continuous
//!   [`ColorScale`] over a value range (continuous targets).
//!
//! # References
//!
//! - van der Walt, S., & Smith, N. (2015). "A Better Default Colormap for Matplotlib." SciPy.
//! - Wong, B. (2011). "Points of view: Color blindness." *Nature Methods*, 8(6), 441.

use std::fmt;
use std::str::FromStr;

use crate::color::{Hsla, Rgba};
use crate::error::{Error, Result};
use crate::scale::{widen_domain, ColorScale};

/// Default qualitative color cycle used when no hint is given.
///
/// Colorblind-safe hues after Wong (2011).
pub const DEFAULT_CYCLE: [Rgba; 6] = [
    Rgba::new(0, 114, 178, 255),   // Blue
    Rgba::new(0, 158, 115, 255),   // Green
    Rgba::new(213, 94, 0, 255),    // Vermillion
    Rgba::new(204, 121, 167, 255), // Reddish purple
    Rgba::new(240, 228, 66, 255),  // Yellow
    Rgba::new(86, 180, 233, 255),  // Sky blue
];

/// Named colormap usable for both discrete sampling and continuous scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Colormap {
    /// Viridis (perceptually uniform, colorblind-safe).
    #[default]
    Viridis,
    /// Magma (perceptually uniform).
    Magma,
    /// Sequential blues.
    Blues,
    /// Diverging red-blue.
    RedBlue,
    /// Heat (black-red-yellow-white).
    Heat,
    /// Greyscale.
    Greyscale,
    /// Full hue wheel.
    Hsv,
}

impl Colormap {
    /// All named colormaps.
    pub const ALL: [Colormap; 7] = [
        Colormap::Viridis,
        Colormap::Magma,
        Colormap::Blues,
        Colormap::RedBlue,
        Colormap::Heat,
        Colormap::Greyscale,
        Colormap::Hsv,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Colormap::Viridis => "viridis",
            Colormap::Magma => "magma",
            Colormap::Blues => "blues",
            Colormap::RedBlue => "rdbu",
            Colormap::Heat => "heat",
            Colormap::Greyscale => "greys",
            Colormap::Hsv => "hsv",
        }
    }

    /// Color stops of the colormap, low to high.
    #[must_use]
    pub fn stops(self) -> Vec<Rgba> {
        match self {
            Colormap::Viridis => vec![
                Rgba::rgb(68, 1, 84),
                Rgba::rgb(59, 82, 139),
                Rgba::rgb(33, 145, 140),
                Rgba::rgb(94, 201, 98),
                Rgba::rgb(253, 231, 37),
            ],
            Colormap::Magma => vec![
                Rgba::rgb(0, 0, 4),
                Rgba::rgb(81, 18, 124),
                Rgba::rgb(183, 55, 121),
                Rgba::rgb(252, 137, 97),
                Rgba::rgb(252, 253, 191),
            ],
            Colormap::Blues => vec![
                Rgba::rgb(247, 251, 255),
                Rgba::rgb(198, 219, 239),
                Rgba::rgb(107, 174, 214),
                Rgba::rgb(33, 113, 181),
                Rgba::rgb(8, 48, 107),
            ],
            Colormap::RedBlue => vec![
                Rgba::rgb(178, 24, 43),
                Rgba::rgb(239, 138, 98),
                Rgba::rgb(247, 247, 247),
                Rgba::rgb(103, 169, 207),
                Rgba::rgb(33, 102, 172),
            ],
            Colormap::Heat => vec![
                Rgba::rgb(0, 0, 0),
                Rgba::rgb(128, 0, 0),
                Rgba::rgb(255, 0, 0),
                Rgba::rgb(255, 128, 0),
                Rgba::rgb(255, 255, 0),
                Rgba::rgb(255, 255, 255),
            ],
            Colormap::Greyscale => vec![Rgba::BLACK, Rgba::WHITE],
            // Seven stops around the wheel, closing back on red
            Colormap::Hsv => (0..=6).map(|i| Hsla::hsl(i as f32 * 60.0, 1.0, 0.5).to_rgba()).collect(),
        }
    }

    /// Sample `n` colors at evenly spaced positions in `[0, 1]`.
    ///
    /// Positions follow `linspace(0, 1, n)`: both ends are included and a
    /// single sample sits on the first stop.
    #[must_use]
    pub fn sample(self, n: usize) -> Vec<Rgba> {
        let stops = self.stops();
        // Stops are never empty, so the unit-domain scale always builds
        let Ok(scale) = ColorScale::new(stops, (0.0, 1.0)) else {
            return Vec::new();
        };

        match n {
            0 => Vec::new(),
            1 => vec![scale.at(0.0)],
            _ => (0..n).map(|i| scale.at(i as f32 / (n - 1) as f32)).collect(),
        }
    }
}

impl FromStr for Colormap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "viridis" => Ok(Colormap::Viridis),
            "magma" => Ok(Colormap::Magma),
            "blues" => Ok(Colormap::Blues),
            "rdbu" | "redblue" | "red_blue" => Ok(Colormap::RedBlue),
            "heat" | "hot" => Ok(Colormap::Heat),
            "greys" | "grays" | "greyscale" | "grayscale" => Ok(Colormap::Greyscale),
            "hsv" | "rainbow" => Ok(Colormap::Hsv),
            _ => Err(Error::Configuration(format!("unknown colormap '{s}'"))),
        }
    }
}

impl fmt::Display for Colormap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve exactly `n_colors` colors from the styling hints.
///
/// - explicit `colors` win; if a colormap was also given it is ignored and a
///   warning is logged,
/// - otherwise the colormap is sampled evenly,
/// - otherwise the [`DEFAULT_CYCLE`] is used.
///
/// The chosen list is then repeated or truncated to `n_colors`.
///
/// # Errors
///
/// Returns [`Error::InvalidColor`] when an explicit empty color list has to
/// produce at least one color.
pub fn resolve_colors(
    n_colors: usize,
    colormap: Option<Colormap>,
    colors: Option<&[Rgba]>,
) -> Result<Vec<Rgba>> {
    let base: Vec<Rgba> = match (colormap, colors) {
        (cmap, Some(colors)) => {
            if cmap.is_some() {
                tracing::warn!("both colormap and colors specified; using colors");
            }
            colors.to_vec()
        }
        (Some(cmap), None) => cmap.sample(n_colors),
        (None, None) => DEFAULT_CYCLE.to_vec(),
    };

    if base.is_empty() {
        if n_colors == 0 {
            return Ok(Vec::new());
        }
        return Err(Error::InvalidColor(format!(
            "cannot resolve {n_colors} colors from an empty color list"
        )));
    }

    Ok(base.iter().copied().cycle().take(n_colors).collect())
}

/// Build a continuous color scale over `domain` from a colormap hint.
///
/// Falls back to [`Colormap::Viridis`]. A degenerate domain (`min == max`) is
/// widened with [`widen_domain`] so every value maps to the middle.
///
/// # Errors
///
/// Returns [`Error::ScaleDomain`] if the domain is not finite.
pub fn color_scale(colormap: Option<Colormap>, domain: (f32, f32)) -> Result<ColorScale> {
    let (min, max) = domain;
    if !min.is_finite() || !max.is_finite() {
        return Err(Error::ScaleDomain(format!("non-finite color domain ({min}, {max})")));
    }

    ColorScale::new(colormap.unwrap_or_default().stops(), widen_domain(min, max))
}
