//! Instance matrices and target vectors accepted by visualizers.
//!
//! `X` is anything implementing [`Instances`]: a positional [`Matrix`] or a
//! [`DataFrame`] with named, ordered columns. `y` is a [`Target`].

use std::collections::BTreeSet;
use std::fmt;

use trueno::Vector;

use crate::error::{Error, Result};

/// Read access to an instance matrix (`n_instances` rows × `n_features` columns).
pub trait Instances {
    /// Number of rows.
    fn n_instances(&self) -> usize;

    /// Number of columns.
    fn n_features(&self) -> usize;

    /// Column names in order, for tabular input with named columns.
    fn column_names(&self) -> Option<Vec<String>> {
        None
    }

    /// Value at `(row, col)`, or `None` when out of bounds.
    fn value(&self, row: usize, col: usize) -> Option<f32>;

    /// Whether the input carries named columns.
    fn is_dataframe(&self) -> bool {
        self.column_names().is_some()
    }

    /// `(rows, cols)`.
    fn shape(&self) -> (usize, usize) {
        (self.n_instances(), self.n_features())
    }

    /// Copy one column out.
    fn column(&self, col: usize) -> Option<Vec<f32>> {
        if col >= self.n_features() {
            return None;
        }
        (0..self.n_instances()).map(|row| self.value(row, col)).collect()
    }
}

impl<T: Instances + ?Sized> Instances for &T {
    fn n_instances(&self) -> usize {
        (**self).n_instances()
    }

    fn n_features(&self) -> usize {
        (**self).n_features()
    }

    fn column_names(&self) -> Option<Vec<String>> {
        (**self).column_names()
    }

    fn value(&self, row: usize, col: usize) -> Option<f32> {
        (**self).value(row, col)
    }
}

/// Row-major numeric matrix without column names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Create from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if `data.len() != rows * cols`.
    pub fn new(data: Vec<f32>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::DataLengthMismatch { x_len: rows * cols, y_len: data.len() });
        }
        Ok(Self { data, rows, cols })
    }

    /// Create from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if rows have different lengths.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(Error::DataLengthMismatch { x_len: cols, y_len: bad.len() });
        }
        Ok(Self { data: rows.iter().flatten().copied().collect(), rows: rows.len(), cols })
    }

    /// Row-major values.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl Instances for Matrix {
    fn n_instances(&self) -> usize {
        self.rows
    }

    fn n_features(&self) -> usize {
        self.cols
    }

    fn value(&self, row: usize, col: usize) -> Option<f32> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col).copied()
    }
}

/// Columnar numeric table with ordered, named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataFrame {
    columns: Vec<(String, Vec<f32>)>,
    n_rows: usize,
}

impl DataFrame {
    /// Create a new empty data frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, replacing any existing column of the same name in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] if the column length differs from
    /// the columns already present.
    pub fn add_column(&mut self, name: &str, data: &[f32]) -> Result<()> {
        if !self.columns.is_empty() && data.len() != self.n_rows {
            return Err(Error::DataLengthMismatch { x_len: self.n_rows, y_len: data.len() });
        }
        self.n_rows = data.len();

        match self.columns.iter_mut().find(|(n, _)| n == name) {
            Some((_, values)) => *values = data.to_vec(),
            None => self.columns.push((name.to_string(), data.to_vec())),
        }
        Ok(())
    }

    /// Builder-style [`DataFrame::add_column`].
    ///
    /// # Errors
    ///
    /// See [`DataFrame::add_column`].
    pub fn with_column(mut self, name: &str, data: &[f32]) -> Result<Self> {
        self.add_column(name, data)?;
        Ok(self)
    }

    /// Get a column by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[f32]> {
        self.columns.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_slice())
    }

    /// Check if a column exists.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl Instances for DataFrame {
    fn n_instances(&self) -> usize {
        self.n_rows
    }

    fn n_features(&self) -> usize {
        self.columns.len()
    }

    fn column_names(&self) -> Option<Vec<String>> {
        Some(self.columns.iter().map(|(n, _)| n.clone()).collect())
    }

    fn value(&self, row: usize, col: usize) -> Option<f32> {
        self.columns.get(col).and_then(|(_, v)| v.get(row)).copied()
    }
}

/// Target (label) vector, one value per instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// Text labels.
    Labels(Vec<String>),
    /// Integer labels or counts.
    Integers(Vec<i64>),
    /// Real values.
    Reals(Vec<f32>),
}

impl Target {
    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Target::Labels(v) => v.len(),
            Target::Integers(v) => v.len(),
            Target::Reals(v) => v.len(),
        }
    }

    /// Whether the target has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stringified value at `row`.
    #[must_use]
    pub fn label(&self, row: usize) -> Option<String> {
        match self {
            Target::Labels(v) => v.get(row).cloned(),
            Target::Integers(v) => v.get(row).map(ToString::to_string),
            Target::Reals(v) => v.get(row).map(|&x| real_label(x)),
        }
    }

    /// Distinct values, sorted ascending, stringified.
    ///
    /// Integers sort numerically, reals by IEEE total order, labels
    /// lexicographically. Reals keep a decimal point (`1.0` becomes `"1.0"`)
    /// and `-0.0` counts as `0.0`.
    #[must_use]
    pub fn distinct(&self) -> Vec<String> {
        match self {
            Target::Labels(v) => {
                v.iter().collect::<BTreeSet<_>>().into_iter().cloned().collect()
            }
            Target::Integers(v) => {
                v.iter().collect::<BTreeSet<_>>().into_iter().map(ToString::to_string).collect()
            }
            Target::Reals(v) => {
                let mut sorted: Vec<f32> = v.iter().map(|&x| unsigned_zero(x)).collect();
                sorted.sort_by(f32::total_cmp);
                sorted.dedup_by(|a, b| a.total_cmp(b).is_eq());
                sorted.into_iter().map(real_label).collect()
            }
        }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn distinct_count(&self) -> usize {
        self.distinct().len()
    }

    /// `(min, max)` in the target's own numeric type, widened to `f64`.
    ///
    /// Integers are compared as `i64` and reals with trueno's SIMD
    /// reductions. Returns `None` for an empty target.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonNumericTarget`] for the first label that does not
    /// parse as a number.
    pub fn value_range(&self) -> Result<Option<(f64, f64)>> {
        match self {
            Target::Integers(v) => {
                Ok(v.iter().min().zip(v.iter().max()).map(|(&lo, &hi)| (lo as f64, hi as f64)))
            }
            Target::Reals(v) if v.is_empty() => Ok(None),
            Target::Reals(v) => {
                let vector = Vector::from_vec(v.clone());
                let min = vector.min().unwrap_or_else(|_| v.iter().copied().fold(f32::INFINITY, f32::min));
                let max = vector.max().unwrap_or_else(|_| v.iter().copied().fold(f32::NEG_INFINITY, f32::max));
                Ok(Some((f64::from(min), f64::from(max))))
            }
            Target::Labels(v) => {
                let mut range: Option<(f64, f64)> = None;
                for s in v {
                    let x = s.trim().parse::<f64>().map_err(|_| Error::NonNumericTarget(s.clone()))?;
                    range = Some(range.map_or((x, x), |(lo, hi)| (lo.min(x), hi.max(x))));
                }
                Ok(range)
            }
        }
    }

    /// Coerce to `f32` values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonNumericTarget`] for the first label that does not
    /// parse as a number.
    pub fn to_f32(&self) -> Result<Vec<f32>> {
        match self {
            Target::Reals(v) => Ok(v.clone()),
            Target::Integers(v) => Ok(v.iter().map(|&x| x as f32).collect()),
            Target::Labels(v) => v
                .iter()
                .map(|s| s.trim().parse::<f32>().map_err(|_| Error::NonNumericTarget(s.clone())))
                .collect(),
        }
    }
}

fn unsigned_zero(x: f32) -> f32 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

fn real_label(x: f32) -> String {
    format!("{:?}", unsigned_zero(x))
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Target::Labels(_) => "labels",
            Target::Integers(_) => "integers",
            Target::Reals(_) => "reals",
        };
        write!(f, "{} {kind}", self.len())
    }
}

impl From<Vec<String>> for Target {
    fn from(v: Vec<String>) -> Self {
        Target::Labels(v)
    }
}

impl From<Vec<&str>> for Target {
    fn from(v: Vec<&str>) -> Self {
        Target::Labels(v.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<i64>> for Target {
    fn from(v: Vec<i64>) -> Self {
        Target::Integers(v)
    }
}

impl From<Vec<f32>> for Target {
    fn from(v: Vec<f32>) -> Self {
        Target::Reals(v)
    }
}

impl From<&[f32]> for Target {
    fn from(v: &[f32]) -> Self {
        Target::Reals(v.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_shape_and_values() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.value(1, 2), Some(6.0));
        assert_eq!(m.value(2, 0), None);
        assert_eq!(m.column(1), Some(vec![2.0, 5.0]));
        assert!(!m.is_dataframe());
        assert!(m.column_names().is_none());
    }

    #[test]
    fn test_matrix_bad_length() {
        assert!(Matrix::new(vec![1.0, 2.0, 3.0], 2, 2).is_err());
        assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn test_matrix_from_rows() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_dataframe_keeps_column_order() {
        let df = DataFrame::new()
            .with_column("age", &[30.0, 40.0])
            .unwrap()
            .with_column("income", &[1.0, 2.0])
            .unwrap();
        assert!(df.is_dataframe());
        assert_eq!(df.column_names(), Some(vec!["age".to_string(), "income".to_string()]));
        assert_eq!(df.value(1, 1), Some(2.0));
        assert_eq!(df.shape(), (2, 2));
    }

    #[test]
    fn test_dataframe_replace_and_mismatch() {
        let mut df = DataFrame::new();
        df.add_column("a", &[1.0, 2.0]).unwrap();
        df.add_column("a", &[3.0, 4.0]).unwrap();
        assert_eq!(df.n_features(), 1);
        assert_eq!(df.get("a"), Some(&[3.0, 4.0][..]));
        assert!(df.add_column("b", &[1.0]).is_err());
        assert!(df.has_column("a"));
        assert!(!df.has_column("b"));
    }

    #[test]
    fn test_reference_is_instances() {
        let m = Matrix::new(vec![1.0, 2.0], 1, 2).unwrap();
        let r = &m;
        assert_eq!(Instances::shape(&r), (1, 2));
    }

    #[test]
    fn test_target_distinct_sorted() {
        let y = Target::from(vec![3_i64, 1, 2, 3, 1]);
        assert_eq!(y.distinct(), vec!["1", "2", "3"]);
        assert_eq!(y.distinct_count(), 3);

        let y = Target::from(vec!["b", "a", "b"]);
        assert_eq!(y.distinct(), vec!["a", "b"]);
    }

    #[test]
    fn test_target_distinct_reals_keep_decimal_point() {
        let y = Target::from(vec![2.0_f32, 1.0, 2.0, 0.5]);
        assert_eq!(y.distinct(), vec!["0.5", "1.0", "2.0"]);
        assert_eq!(y.label(0), Some("2.0".to_string()));
    }

    #[test]
    fn test_target_integers_sort_numerically() {
        let y = Target::from(vec![10_i64, 9, -1]);
        assert_eq!(y.distinct(), vec!["-1", "9", "10"]);
    }

    #[test]
    fn test_target_signed_zero_is_one_class() {
        let y = Target::from(vec![0.0_f32, -0.0, 1.0, -0.0]);
        assert_eq!(y.distinct(), vec!["0.0", "1.0"]);
        assert_eq!(y.distinct_count(), 2);
        assert_eq!(y.label(1), Some("0.0".to_string()));
        assert_eq!(Target::from(vec![-0.5_f32]).label(0), Some("-0.5".to_string()));
    }

    #[test]
    fn test_target_value_range_native_types() {
        let big = Target::from(vec![16_777_217_i64, 16_777_219, 5]);
        assert_eq!(big.value_range().unwrap(), Some((5.0, 16_777_219.0)));

        let extreme = Target::from(vec![i64::MIN, 0, i64::MAX]);
        assert_eq!(extreme.value_range().unwrap(), Some((i64::MIN as f64, i64::MAX as f64)));

        let reals = Target::from(vec![3.0_f32, -2.0, 7.5]);
        assert_eq!(reals.value_range().unwrap(), Some((-2.0, 7.5)));

        let labels = Target::from(vec!["10", " 2.5 ", "-1"]);
        assert_eq!(labels.value_range().unwrap(), Some((-1.0, 10.0)));

        assert_eq!(Target::Integers(vec![]).value_range().unwrap(), None);
        assert_eq!(Target::Reals(vec![]).value_range().unwrap(), None);
        assert!(matches!(
            Target::from(vec!["1", "cat"]).value_range(),
            Err(Error::NonNumericTarget(s)) if s == "cat"
        ));
    }

    #[test]
    fn test_target_to_f32() {
        assert_eq!(Target::from(vec![1_i64, 5]).to_f32().unwrap(), vec![1.0, 5.0]);
        assert_eq!(Target::from(vec!["1.5", " 2 "]).to_f32().unwrap(), vec![1.5, 2.0]);
        assert!(matches!(
            Target::from(vec!["cat"]).to_f32(),
            Err(Error::NonNumericTarget(s)) if s == "cat"
        ));
    }

    #[test]
    fn test_target_len_and_display() {
        let y = Target::from(vec![1.0_f32, 2.0]);
        assert_eq!(y.len(), 2);
        assert!(!y.is_empty());
        assert_eq!(y.to_string(), "2 reals");
        assert!(Target::Labels(vec![]).is_empty());
    }
}
