//! Matrix fill: one N×N matrix per metric, constant diagonal, every off-diagonal cell computed.

use super::matrix::{ComparisonResult, ResultMatrix};
use super::request::ComparisonRequest;
use crate::embeddings::{Metric, Vector};
use crate::Result;
use tracing::debug;

/// Compare every ordered pair of `vectors` under each of `metrics`.
///
/// Preconditions are checked before any matrix is allocated; on failure nothing is computed.
pub fn compare(vectors: &[Vector], metrics: &[Metric]) -> Result<ComparisonResult> {
    ComparisonRequest::new(vectors, metrics)?.execute()
}

/// Like [`compare`], with metrics given by identifier.
pub fn compare_by_name<S: AsRef<str>>(vectors: &[Vector], metrics: &[S]) -> Result<ComparisonResult> {
    ComparisonRequest::from_names(vectors, metrics)?.execute()
}

impl ComparisonRequest<'_> {
    pub fn execute(&self) -> Result<ComparisonResult> {
        debug!(
            vectors = self.len(),
            dims = self.dimensions(),
            metrics = self.metrics().len(),
            "comparing embeddings"
        );
        let matrices = self
            .metrics()
            .iter()
            .map(|&metric| fill(metric, self.vectors()))
            .collect::<Result<Vec<_>>>()?;
        Ok(ComparisonResult::new(matrices))
    }
}

fn fill(metric: Metric, vectors: &[Vector]) -> Result<ResultMatrix> {
    let n = vectors.len();
    let mut rows = Vec::with_capacity(n);
    for (i, a) in vectors.iter().enumerate() {
        let mut row = Vec::with_capacity(n);
        for (j, b) in vectors.iter().enumerate() {
            // The diagonal is the self-comparison constant, never a computed score.
            let value = if i == j {
                metric.self_score()
            } else {
                metric.score(a, b)?
            };
            row.push(value);
        }
        rows.push(row);
    }
    debug!(metric = %metric, size = n, "matrix filled");
    Ok(ResultMatrix::from_rows(metric, rows))
}
