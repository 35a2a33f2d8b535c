//! Vector operations for embeddings.
//!
//! Every pairwise function requires operands of equal length. A mismatch is reported as
//! [`Error::DimensionMismatch`] with `index` 1 (the second operand) rather than truncating.
//! Inputs are not scrubbed for NaN or infinities; degenerate inputs may yield NaN.

use crate::{Error, Result};

pub type Vector = Vec<f32>;

fn check_dims(a: &[f32], b: &[f32]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            index: 1,
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

pub fn dot_product(a: &[f32], b: &[f32]) -> Result<f32> {
    check_dims(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

pub fn magnitude(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine of the angle between `a` and `b`.
///
/// Returns exactly `0.0` when either vector has zero magnitude instead of the
/// mathematically undefined NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    let dot = dot_product(a, b)?;
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);
    if mag_a == 0.0 || mag_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (mag_a * mag_b))
}

pub fn euclidean_distance(a: &[f32], b: &[f32]) -> Result<f32> {
    check_dims(a, b)?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f32>()
        .sqrt())
}

pub fn manhattan_distance(a: &[f32], b: &[f32]) -> Result<f32> {
    check_dims(a, b)?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
}
