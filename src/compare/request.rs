//! Request validation for the comparison engine.

use crate::embeddings::{parse_metrics, Metric, Vector};
use crate::{Error, Result};

/// A validated comparison request: N ≥ 1 vectors of one dimensionality and a
/// non-empty, duplicate-free list of metrics in request order.
#[derive(Debug, Clone)]
pub struct ComparisonRequest<'a> {
    vectors: &'a [Vector],
    metrics: Vec<Metric>,
}

impl<'a> ComparisonRequest<'a> {
    /// Build a request from typed metrics.
    ///
    /// Checks, in order: at least one vector, matching dimensionality, at least one metric.
    pub fn new(vectors: &'a [Vector], metrics: &[Metric]) -> Result<Self> {
        validate_vectors(vectors)?;
        if metrics.is_empty() {
            return Err(Error::NoMetricsSelected);
        }
        let mut unique = Vec::with_capacity(metrics.len());
        for &metric in metrics {
            if !unique.contains(&metric) {
                unique.push(metric);
            }
        }
        Ok(Self {
            vectors,
            metrics: unique,
        })
    }

    /// Build a request from metric identifiers such as `"cosine"` or `"dot_product"`.
    ///
    /// Unrecognized identifiers fail with [`Error::UnknownMetric`] after the vector checks.
    pub fn from_names<S: AsRef<str>>(vectors: &'a [Vector], names: &[S]) -> Result<Self> {
        validate_vectors(vectors)?;
        let metrics = parse_metrics(names)?;
        Ok(Self { vectors, metrics })
    }

    pub fn vectors(&self) -> &'a [Vector] {
        self.vectors
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    /// Number of vectors, i.e. the side length of every result matrix.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.vectors[0].len()
    }
}

fn validate_vectors(vectors: &[Vector]) -> Result<()> {
    let first = vectors.first().ok_or(Error::EmptyInput)?;
    let expected = first.len();
    if let Some((index, v)) = vectors
        .iter()
        .enumerate()
        .find(|(_, v)| v.len() != expected)
    {
        return Err(Error::DimensionMismatch {
            index,
            expected,
            actual: v.len(),
        });
    }
    Ok(())
}
