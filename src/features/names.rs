//! Feature labels used for plot annotation.

use std::fmt;

use crate::data::Instances;

/// Label of one feature column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureLabel {
    /// Named column.
    Name(String),
    /// Unnamed column, by position.
    Position(usize),
}

impl fmt::Display for FeatureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureLabel::Name(name) => f.write_str(name),
            FeatureLabel::Position(index) => write!(f, "{index}"),
        }
    }
}

impl From<&str> for FeatureLabel {
    fn from(name: &str) -> Self {
        FeatureLabel::Name(name.to_string())
    }
}

impl From<String> for FeatureLabel {
    fn from(name: String) -> Self {
        FeatureLabel::Name(name)
    }
}

impl From<usize> for FeatureLabel {
    fn from(index: usize) -> Self {
        FeatureLabel::Position(index)
    }
}

/// Derive feature labels from the structure of `x`: its column names when it
/// has them, otherwise the positions `0..n_features`.
#[must_use]
pub fn feature_labels<X: Instances + ?Sized>(x: &X) -> Vec<FeatureLabel> {
    match x.column_names() {
        Some(names) => names.into_iter().map(FeatureLabel::Name).collect(),
        None => (0..x.n_features()).map(FeatureLabel::Position).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{DataFrame, Matrix};

    #[test]
    fn test_labels_from_named_columns() {
        let df = DataFrame::new()
            .with_column("age", &[1.0])
            .unwrap()
            .with_column("income", &[2.0])
            .unwrap();
        assert_eq!(feature_labels(&df), vec![FeatureLabel::from("age"), FeatureLabel::from("income")]);
    }

    #[test]
    fn test_labels_from_positions() {
        let m = Matrix::new(vec![0.0; 8], 2, 4).unwrap();
        let labels = feature_labels(&m);
        assert_eq!(labels, (0..4).map(FeatureLabel::Position).collect::<Vec<_>>());
    }

    #[test]
    fn test_display() {
        assert_eq!(FeatureLabel::from("age").to_string(), "age");
        assert_eq!(FeatureLabel::from(3_usize).to_string(), "3");
    }
}
