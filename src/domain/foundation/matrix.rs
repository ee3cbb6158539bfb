//! Dense row-major matrix of finite reals.
//!
//! Every reduction names its axis: `column_max` reduces down each column and
//! yields one value per criterion.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::ValidationError;

/// Immutable row-major matrix with a fixed column count.
///
/// Serializes as a list of rows (`[[1.0, 2.0], [3.0, 4.0]]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from rows, rejecting ragged rows and non-finite values.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * cols);

        for (r, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(ValidationError::ragged_rows(r, cols, row.len()));
            }
            for (c, value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(ValidationError::non_finite(r, c));
                }
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Builds a single-row matrix.
    pub fn from_row(row: Vec<f64>) -> Result<Self, ValidationError> {
        Self::from_rows(vec![row])
    }

    /// Stacks matrices vertically. All parts must share the column count.
    pub fn vstack(parts: &[&Matrix]) -> Result<Self, ValidationError> {
        let cols = parts.first().map(|m| m.cols).unwrap_or(0);
        let mut data = Vec::new();
        let mut rows = 0;

        for part in parts {
            if part.cols != cols {
                return Err(ValidationError::ragged_rows(rows, cols, part.cols));
            }
            data.extend_from_slice(&part.data);
            rows += part.rows;
        }

        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Value at (row, column).
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        assert!(column < self.cols, "column {} out of bounds", column);
        self.data[row * self.cols + column]
    }

    /// Borrow a single row.
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Copy of a single column.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows().map(|row| row[index]).collect()
    }

    /// Column-wise maximum. Empty matrices yield `-inf` per column.
    pub fn column_max(&self) -> Vec<f64> {
        self.column_fold(f64::NEG_INFINITY, f64::max)
    }

    /// Column-wise minimum. Empty matrices yield `+inf` per column.
    pub fn column_min(&self) -> Vec<f64> {
        self.column_fold(f64::INFINITY, f64::min)
    }

    /// Column-wise arithmetic mean. Empty matrices yield zeros.
    pub fn column_mean(&self) -> Vec<f64> {
        if self.rows == 0 {
            return vec![0.0; self.cols];
        }
        let sums = self.column_fold(0.0, |acc, v| acc + v);
        sums.into_iter().map(|s| s / self.rows as f64).collect()
    }

    /// Largest value anywhere in the matrix.
    pub fn max_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::max)
    }

    /// Copy of the rows in `range` as a new matrix.
    pub fn slice_rows(&self, range: Range<usize>) -> Matrix {
        let start = range.start.min(self.rows);
        let end = range.end.min(self.rows).max(start);
        Matrix {
            rows: end - start,
            cols: self.cols,
            data: self.data[start * self.cols..end * self.cols].to_vec(),
        }
    }

    /// Applies `f(column, value)` to every cell, producing a new matrix.
    pub fn map_cells(&self, f: impl Fn(usize, f64) -> f64) -> Matrix {
        let cols = self.cols;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &v)| f(i % cols, v))
            .collect();
        Matrix {
            rows: self.rows,
            cols,
            data,
        }
    }

    /// Clones out the rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }

    fn column_fold(&self, init: f64, f: impl Fn(f64, f64) -> f64) -> Vec<f64> {
        let mut acc = vec![init; self.cols];
        for row in self.rows() {
            for (slot, &value) in acc.iter_mut().zip(row) {
                *slot = f(*slot, value);
            }
        }
        acc
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = ValidationError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

/// Euclidean (L2) distance between two equally long vectors.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(vec![
            vec![5.0, 2.0, 10.0],
            vec![3.0, 8.0, 5.0],
            vec![9.0, 4.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn from_rows_records_shape() {
        let m = sample();
        assert_eq!(m.row_count(), 3);
        assert_eq!(m.column_count(), 3);
        assert_eq!(m.get(1, 2), 5.0);
        assert_eq!(m.row(2), &[9.0, 4.0, 1.0]);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let result = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]);
        assert_eq!(result, Err(ValidationError::ragged_rows(1, 2, 1)));
    }

    #[test]
    fn from_rows_rejects_nan() {
        let result = Matrix::from_rows(vec![vec![1.0, f64::NAN]]);
        assert_eq!(result, Err(ValidationError::non_finite(0, 1)));
    }

    #[test]
    fn from_rows_accepts_empty() {
        let m = Matrix::from_rows(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.column_count(), 0);
    }

    #[test]
    fn column_reductions_run_down_columns() {
        let m = sample();
        assert_eq!(m.column_max(), vec![9.0, 8.0, 10.0]);
        assert_eq!(m.column_min(), vec![3.0, 2.0, 1.0]);
        assert_eq!(m.column_mean(), vec![17.0 / 3.0, 14.0 / 3.0, 16.0 / 3.0]);
        assert_eq!(m.column(1), vec![2.0, 8.0, 4.0]);
    }

    #[test]
    fn vstack_appends_rows_in_order() {
        let a = sample();
        let b = Matrix::from_row(vec![7.0, 5.0, 3.0]).unwrap();
        let stacked = Matrix::vstack(&[&a, &b]).unwrap();
        assert_eq!(stacked.row_count(), 4);
        assert_eq!(stacked.row(3), &[7.0, 5.0, 3.0]);
    }

    #[test]
    fn vstack_rejects_mismatched_columns() {
        let a = sample();
        let b = Matrix::from_row(vec![1.0, 2.0]).unwrap();
        assert!(Matrix::vstack(&[&a, &b]).is_err());
    }

    #[test]
    fn slice_rows_clamps_to_bounds() {
        let m = sample();
        assert_eq!(m.slice_rows(1..3).to_rows(), vec![vec![3.0, 8.0, 5.0], vec![9.0, 4.0, 1.0]]);
        assert_eq!(m.slice_rows(2..10).row_count(), 1);
        assert!(m.slice_rows(5..10).is_empty());
    }

    #[test]
    fn map_cells_passes_column_index() {
        let m = sample();
        let scaled = m.map_cells(|c, v| if c == 0 { v * 2.0 } else { v });
        assert_eq!(scaled.column(0), vec![10.0, 6.0, 18.0]);
        assert_eq!(scaled.column(1), m.column(1));
    }

    #[test]
    fn max_value_scans_all_cells() {
        assert_eq!(sample().max_value(), Some(10.0));
        assert_eq!(Matrix::from_rows(Vec::new()).unwrap().max_value(), None);
    }

    #[test]
    fn euclidean_distance_is_l2_norm() {
        assert!((euclidean_distance(&[0.0, 0.0], &[3.0, 4.0]) - 5.0).abs() < 1e-12);
        assert_eq!(euclidean_distance(&[1.0, 2.0], &[1.0, 2.0]), 0.0);
    }

    #[test]
    fn serializes_as_nested_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");
    }

    #[test]
    fn deserialization_validates_shape() {
        let ok: Matrix = serde_json::from_str("[[1, 2], [3, 4]]").unwrap();
        assert_eq!(ok.column_count(), 2);
        assert!(serde_json::from_str::<Matrix>("[[1, 2], [3]]").is_err());
    }
}
