//! Error and warning types for feature visualizer operations.

use std::io;
use thiserror::Error;

use crate::features::TargetType;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring, fitting or rendering a visualizer.
#[derive(Error, Debug)]
pub enum Error {
    /// Target type string is not one of `auto`, `single`, `discrete`, `continuous`.
    #[error("Configuration error: unknown target color type '{0}'")]
    UnknownTargetType(String),

    /// Target type determination ended in a non-terminal state.
    #[error("Configuration error: could not determine target color type from target='{requested}' to '{resolved}'")]
    UnresolvedTargetType {
        /// Requested target type.
        requested: TargetType,
        /// Type the determination produced.
        resolved: TargetType,
    },

    /// Any other invalid construction option.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Configuration file could not be parsed.
    #[cfg(feature = "config")]
    #[error("Config parse error at line {line}: {message}")]
    ConfigParse {
        /// Line of the offending entry (0 when unknown).
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Invalid dimensions for the drawing surface.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Number of instances and number of target values differ.
    #[error("Data length mismatch: X has {x_len} instances, y has {y_len} values")]
    DataLengthMismatch {
        /// Number of rows in X.
        x_len: usize,
        /// Number of target values.
        y_len: usize,
    },

    /// Empty data provided where non-empty is required.
    #[error("Empty data provided")]
    EmptyData,

    /// A visualizer needs more columns than the input has.
    #[error("Not enough features: need {required}, got {actual}")]
    NotEnoughFeatures {
        /// Columns the visualizer needs.
        required: usize,
        /// Columns in the input.
        actual: usize,
    },

    /// A selected feature does not exist in the input.
    #[error("Feature index {index} out of bounds for {n_features} features")]
    FeatureIndex {
        /// Requested column.
        index: usize,
        /// Columns in the input.
        n_features: usize,
    },

    /// Target values cannot be read as numbers.
    #[error("Target is not numeric: '{0}'")]
    NonNumericTarget(String),

    /// Scale domain error (e.g., empty color list).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),
}

impl Error {
    /// Returns true for errors caused by invalid visualizer configuration.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownTargetType(_)
                | Error::UnresolvedTargetType { .. }
                | Error::Configuration(_)
        )
    }
}

/// Non-fatal conditions reported during fit.
///
/// Warnings never interrupt fitting. They are logged through `tracing` and
/// kept on the visualizer until the next fit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The supplied class list does not cover the distinct target values.
    #[error("Number of unique target is not equal to classes: {classes} classes, {distinct} unique values")]
    ClassCountMismatch {
        /// Length of the class list in use.
        classes: usize,
        /// Distinct values found in the target.
        distinct: usize,
    },

    /// Both explicit colors and a colormap were supplied.
    #[error("both colormap and colors specified; using colors")]
    ColorsOverrideColormap,
}
