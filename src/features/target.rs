//! Target type classification.

use std::fmt;
use std::str::FromStr;

use crate::data::Target;
use crate::error::{Error, Result};

/// Distinct-value count at which an `auto` target becomes continuous.
///
/// A heuristic, not a statistical test; override it per visualizer through
/// `VisualizerConfig::discrete_threshold`.
pub const DEFAULT_DISCRETE_THRESHOLD: usize = 10;

/// How the target vector is interpreted for coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum TargetType {
    /// Decide from the data. Never a resolved state.
    #[default]
    Auto,
    /// No target: one color for every instance.
    Single,
    /// Class membership: one color per class.
    Discrete,
    /// Real-valued target: colors from a continuous scale.
    Continuous,
}

impl TargetType {
    /// Lowercase tag as accepted by [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TargetType::Auto => "auto",
            TargetType::Single => "single",
            TargetType::Discrete => "discrete",
            TargetType::Continuous => "continuous",
        }
    }

    /// Whether this is a terminal (resolved) state.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, TargetType::Auto)
    }
}

impl FromStr for TargetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "auto" => Ok(TargetType::Auto),
            "single" => Ok(TargetType::Single),
            "discrete" => Ok(TargetType::Discrete),
            "continuous" => Ok(TargetType::Continuous),
            other => Err(Error::UnknownTargetType(other.to_string())),
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the target type for one fit.
///
/// 1. no target → [`TargetType::Single`], whatever was requested;
/// 2. `Auto` → `Discrete` below `threshold` distinct values, else `Continuous`;
/// 3. an explicit request is returned as is, without looking at the data.
///
/// # Errors
///
/// Returns [`Error::UnresolvedTargetType`] if the result is still `Auto`.
pub fn determine_target_type(
    requested: TargetType,
    y: Option<&Target>,
    threshold: usize,
) -> Result<TargetType> {
    let resolved = match (y, requested) {
        (None, _) => TargetType::Single,
        (Some(y), TargetType::Auto) => {
            let distinct = y.distinct_count();
            tracing::debug!(distinct, threshold, "inferring target type from distinct values");
            if distinct < threshold {
                TargetType::Discrete
            } else {
                TargetType::Continuous
            }
        }
        (Some(_), explicit) => explicit,
    };

    if !resolved.is_resolved() {
        return Err(Error::UnresolvedTargetType { requested, resolved });
    }
    Ok(resolved)
}
