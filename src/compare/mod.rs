//! Pairwise comparison of embeddings.
//!
//! Given N vectors and M metrics, [`compare`] produces M square matrices of side N.
//!
//! ## Self-comparison policy
//!
//! Diagonal cells are constants chosen by the metric, not computed scores:
//!
//! | Metric | Diagonal |
//! |--------|----------|
//! | `cosine` | 1 |
//! | `dot_product` | 1 |
//! | `euclidean` | 0 |
//! | `manhattan` | 0 |
//!
//! ## Preconditions
//!
//! Checked in this order, before anything is computed:
//! [`Error::EmptyInput`](crate::Error::EmptyInput),
//! [`Error::DimensionMismatch`](crate::Error::DimensionMismatch),
//! [`Error::NoMetricsSelected`](crate::Error::NoMetricsSelected),
//! [`Error::UnknownMetric`](crate::Error::UnknownMetric).
//!
//! ```rust
//! use embedding_compare::compare::compare;
//! use embedding_compare::embeddings::Metric;
//!
//! let vectors = vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0]];
//! let result = compare(&vectors, &[Metric::Cosine, Metric::Manhattan]).unwrap();
//!
//! let cosine = result.get(Metric::Cosine).unwrap();
//! assert_eq!(cosine[(0, 1)], 0.0);
//! assert_eq!(cosine[(0, 2)], 1.0);
//!
//! let manhattan = result.get(Metric::Manhattan).unwrap();
//! assert_eq!(manhattan[(0, 1)], 2.0);
//! assert!(manhattan.diagonal().all(|v| v == 0.0));
//! ```

mod engine;
mod matrix;
mod request;

pub use engine::{compare, compare_by_name};
pub use matrix::{ComparisonResult, ResultMatrix};
pub use request::ComparisonRequest;
