//! The closed set of comparison metrics.
//!
//! ```rust
//! use embedding_compare::embeddings::Metric;
//!
//! let metric: Metric = "dot_product".parse().unwrap();
//! assert_eq!(metric, Metric::DotProduct);
//! assert_eq!(metric.self_score(), 1.0);
//! assert!("jaccard".parse::<Metric>().is_err());
//! ```

use super::vectors::{cosine_similarity, dot_product, euclidean_distance, manhattan_distance};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Cosine,
    #[serde(alias = "dotProduct")]
    DotProduct,
    Euclidean,
    Manhattan,
}

impl Metric {
    /// All recognized metrics, in canonical order.
    pub const ALL: [Metric; 4] = [
        Metric::Cosine,
        Metric::DotProduct,
        Metric::Euclidean,
        Metric::Manhattan,
    ];

    /// Canonical identifier (e.g. `"dot_product"`).
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cosine => "cosine",
            Self::DotProduct => "dot_product",
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }

    /// Higher scores mean more alike for similarity metrics; lower for distances.
    #[inline]
    pub fn is_similarity(&self) -> bool {
        matches!(self, Self::Cosine | Self::DotProduct)
    }

    /// Constant placed on the diagonal of a result matrix.
    ///
    /// This is the self-comparison policy, not a computed score: `1` for similarity
    /// metrics, `0` for distances.
    #[inline]
    pub fn self_score(&self) -> f32 {
        if self.is_similarity() {
            1.0
        } else {
            0.0
        }
    }

    /// Apply the metric to an ordered pair of vectors.
    pub fn score(&self, a: &[f32], b: &[f32]) -> Result<f32> {
        match self {
            Self::Cosine => cosine_similarity(a, b),
            Self::DotProduct => dot_product(a, b),
            Self::Euclidean => euclidean_distance(a, b),
            Self::Manhattan => manhattan_distance(a, b),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = Error;

    /// Accepts the canonical identifiers plus the `dotProduct` / `dot-product` spellings.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "cosine" => Ok(Self::Cosine),
            "dot_product" | "dotProduct" | "dot-product" => Ok(Self::DotProduct),
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            other => Err(Error::unknown_metric(other)),
        }
    }
}

/// Parse a list of identifiers, keeping request order and dropping repeats.
pub fn parse_metrics<S: AsRef<str>>(names: &[S]) -> Result<Vec<Metric>> {
    if names.is_empty() {
        return Err(Error::NoMetricsSelected);
    }
    let mut metrics = Vec::with_capacity(names.len());
    for name in names {
        let metric: Metric = name.as_ref().parse()?;
        if !metrics.contains(&metric) {
            metrics.push(metric);
        }
    }
    Ok(metrics)
}
