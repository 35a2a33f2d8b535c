//! Result matrices produced by the comparison engine.

use crate::embeddings::Metric;
use serde::Serialize;
use std::ops::Index;

/// N×N scores for one metric. Row and column `i` correspond to input vector `i`.
///
/// The matrix is not assumed symmetric; every off-diagonal cell is computed on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultMatrix {
    metric: Metric,
    matrix: Vec<Vec<f32>>,
}

impl ResultMatrix {
    pub(crate) fn from_rows(metric: Metric, matrix: Vec<Vec<f32>>) -> Self {
        debug_assert!(matrix.iter().all(|row| row.len() == matrix.len()));
        Self { metric, matrix }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Number of rows (equal to the number of columns).
    pub fn size(&self) -> usize {
        self.matrix.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        self.matrix.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f32]> {
        self.matrix.get(row).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.matrix
    }

    pub fn diagonal(&self) -> impl Iterator<Item = f32> + '_ {
        self.matrix.iter().enumerate().map(|(i, row)| row[i])
    }

    /// True when `m[i][j]` and `m[j][i]` differ by at most `tolerance` for every pair.
    pub fn is_symmetric(&self, tolerance: f32) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| (self.matrix[i][j] - self.matrix[j][i]).abs() <= tolerance))
    }
}

impl Index<(usize, usize)> for ResultMatrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        &self.matrix[row][col]
    }
}

/// One matrix per requested metric, in request order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    results: Vec<ResultMatrix>,
}

impl ComparisonResult {
    pub(crate) fn new(results: Vec<ResultMatrix>) -> Self {
        Self { results }
    }

    pub fn matrices(&self) -> &[ResultMatrix] {
        &self.results
    }

    pub fn get(&self, metric: Metric) -> Option<&ResultMatrix> {
        self.results.iter().find(|m| m.metric == metric)
    }

    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.results.iter().map(|m| m.metric)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultMatrix> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a ComparisonResult {
    type Item = &'a ResultMatrix;
    type IntoIter = std::slice::Iter<'a, ResultMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl IntoIterator for ComparisonResult {
    type Item = ResultMatrix;
    type IntoIter = std::vec::IntoIter<ResultMatrix>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResultMatrix {
        ResultMatrix::from_rows(
            Metric::Manhattan,
            vec![vec![0.0, 2.0, 0.0], vec![2.0, 0.0, 2.0], vec![0.0, 2.0, 0.0]],
        )
    }

    #[test]
    fn test_accessors() {
        let m = sample();
        assert_eq!(m.size(), 3);
        assert_eq!(m.get(0, 1), Some(2.0));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m[(1, 2)], 2.0);
        assert_eq!(m.row(2), Some(&[0.0, 2.0, 0.0][..]));
        assert_eq!(m.diagonal().collect::<Vec<_>>(), vec![0.0, 0.0, 0.0]);
        assert!(m.is_symmetric(0.0));
    }

    #[test]
    fn test_asymmetric_detected() {
        let m = ResultMatrix::from_rows(Metric::Cosine, vec![vec![1.0, 0.5], vec![0.4, 1.0]]);
        assert!(!m.is_symmetric(1e-6));
        assert!(m.is_symmetric(0.2));
    }

    #[test]
    fn test_serializes_as_metric_and_rows() {
        let result = ComparisonResult::new(vec![sample()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["results"][0]["metric"], "manhattan");
        assert_eq!(json["results"][0]["matrix"][0][1], 2.0);
    }
}
