//! Property-based tests for comparison matrices.
//!
//! For arbitrary same-dimension inputs, every matrix is square, carries the
//! self-comparison constant on its diagonal and is symmetric off the diagonal.

use embedding_compare::compare;
use embedding_compare::embeddings::{cosine_similarity, Metric};
use proptest::prelude::*;

/// 1..6 vectors sharing one dimensionality in 1..24.
fn arb_vectors() -> impl Strategy<Value = Vec<Vec<f32>>> {
    (1usize..24).prop_flat_map(|dims| {
        proptest::collection::vec(proptest::collection::vec(-100.0f32..100.0, dims), 1..6)
    })
}

fn arb_metrics() -> impl Strategy<Value = Vec<Metric>> {
    proptest::sample::subsequence(Metric::ALL.to_vec(), 1..=4).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 200,
        ..ProptestConfig::default()
    })]

    #[test]
    fn matrices_are_square_with_policy_diagonal(vectors in arb_vectors(), metrics in arb_metrics()) {
        let result = compare(&vectors, &metrics).unwrap();
        prop_assert_eq!(result.len(), metrics.len());
        for matrix in &result {
            prop_assert_eq!(matrix.size(), vectors.len());
            for row in matrix.rows() {
                prop_assert_eq!(row.len(), vectors.len());
            }
            for value in matrix.diagonal() {
                prop_assert_eq!(value, matrix.metric().self_score());
            }
        }
    }

    #[test]
    fn builtin_metrics_are_symmetric(vectors in arb_vectors()) {
        let result = compare(&vectors, &Metric::ALL).unwrap();
        for matrix in &result {
            let n = matrix.size();
            for i in 0..n {
                for j in 0..n {
                    let (a, b) = (matrix[(i, j)], matrix[(j, i)]);
                    let tol = 1e-4 * a.abs().max(b.abs()).max(1.0);
                    prop_assert!((a - b).abs() <= tol, "{} [{}][{}]={} vs {}", matrix.metric(), i, j, a, b);
                }
            }
        }
    }

    #[test]
    fn metric_order_is_request_order(vectors in arb_vectors(), metrics in arb_metrics()) {
        let result = compare(&vectors, &metrics).unwrap();
        prop_assert_eq!(result.metrics().collect::<Vec<_>>(), metrics);
    }

    #[test]
    fn distances_are_non_negative(vectors in arb_vectors()) {
        let result = compare(&vectors, &[Metric::Euclidean, Metric::Manhattan]).unwrap();
        for matrix in &result {
            for row in matrix.rows() {
                prop_assert!(row.iter().all(|v| *v >= 0.0));
            }
        }
    }

    #[test]
    fn cosine_is_bounded(vectors in arb_vectors()) {
        let result = compare(&vectors, &[Metric::Cosine]).unwrap();
        for row in result.matrices()[0].rows() {
            prop_assert!(row.iter().all(|v| (-1.0f32 - 1e-4..=1.0f32 + 1e-4).contains(v)));
        }
    }

    #[test]
    fn zero_vector_cosine_is_zero(v in proptest::collection::vec(-100.0f32..100.0, 1..32)) {
        let zeros = vec![0.0f32; v.len()];
        prop_assert_eq!(cosine_similarity(&zeros, &v).unwrap(), 0.0);
    }
}
