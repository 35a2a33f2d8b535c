//! # embedding-compare
//!
//! Fetch embeddings for several pieces of text and compare every pair of them under
//! one or more similarity/distance metrics, producing one square matrix per metric.
//!
//! ## Overview
//!
//! The comparison engine in [`compare`] is pure and synchronous: it takes vectors that
//! are already resident and returns matrices. Obtaining the vectors is the job of
//! [`embeddings::EmbeddingClient`], which calls an OpenAI-compatible `/v1/embeddings`
//! endpoint once per text. [`playground::Playground`] wires the two together.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use embedding_compare::embeddings::{EmbeddingClient, Metric};
//! use embedding_compare::playground::Playground;
//!
//! #[tokio::main]
//! async fn main() -> embedding_compare::Result<()> {
//!     let client = EmbeddingClient::builder()
//!         .model("text-embedding-3-small")
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let playground = Playground::new(client);
//!     let comparison = playground
//!         .compare_texts(&["a cat", "a kitten", "a truck"], &[Metric::Cosine])
//!         .await?;
//!
//!     for matrix in &comparison.result {
//!         println!("{}: {:?}", matrix.metric(), matrix.rows());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`compare`] | Comparison engine, requests and result matrices |
//! | [`embeddings`] | Metric library, provider client and wire types |
//! | [`playground`] | Text-level orchestration |
//! | [`config`] | Layered configuration (defaults, YAML, environment) |
//! | [`error`] | Error taxonomy |

pub mod compare;
pub mod config;
pub mod embeddings;
pub mod playground;

pub use compare::{compare, compare_by_name, ComparisonRequest, ComparisonResult, ResultMatrix};
pub use config::PlaygroundConfig;
pub use embeddings::{Metric, Vector};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
