//! Embedding acquisition and vector metrics.
//!
//! This module provides:
//! - Embedding client for fetching one vector per text from a provider
//! - The closed [`Metric`] set and the pure metric functions behind it
//! - Wire types and the known model catalog

mod client;
mod metric;
mod types;
mod vectors;

pub use client::{EmbeddingClient, EmbeddingClientBuilder};
pub use metric::{parse_metrics, Metric};
pub use types::{
    EmbeddingData, EmbeddingModel, EmbeddingRequest, EmbeddingResponse, EmbeddingUsage,
    ProviderErrorBody, ProviderErrorDetail, DEFAULT_MODEL,
};
pub use vectors::{
    cosine_similarity, dot_product, euclidean_distance, magnitude, manhattan_distance, Vector,
};
