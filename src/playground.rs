//! Text-level comparison: fetch embeddings for a set of texts, then compare them.

use crate::compare::{ComparisonRequest, ComparisonResult};
use crate::embeddings::{parse_metrics, EmbeddingClient, Metric};
use crate::{Error, Result};
use serde::Serialize;
use tracing::info;

/// Texts, the model that embedded them, and the per-metric matrices.
#[derive(Debug, Clone, Serialize)]
pub struct TextComparison {
    pub texts: Vec<String>,
    pub model: String,
    pub result: ComparisonResult,
}

pub struct Playground {
    client: EmbeddingClient,
}

impl Playground {
    pub fn new(client: EmbeddingClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &EmbeddingClient {
        &self.client
    }

    /// Embed `texts` and compare them under `metrics`.
    ///
    /// Inputs are checked before any provider call, in the same order the
    /// engine uses: at least one text, every text filled, at least one metric.
    pub async fn compare_texts<S: AsRef<str>>(
        &self,
        texts: &[S],
        metrics: &[Metric],
    ) -> Result<TextComparison> {
        Self::check_texts(texts)?;
        if metrics.is_empty() {
            return Err(Error::NoMetricsSelected);
        }
        let vectors = self.client.embed_all(texts).await?;
        let result = ComparisonRequest::new(&vectors, metrics)?.execute()?;
        info!(
            texts = texts.len(),
            metrics = result.len(),
            model = self.client.model(),
            "comparison complete"
        );
        Ok(TextComparison {
            texts: texts.iter().map(|t| t.as_ref().to_string()).collect(),
            model: self.client.model().to_string(),
            result,
        })
    }

    /// Like [`compare_texts`](Self::compare_texts), with metrics given by identifier.
    pub async fn compare_text_names<S: AsRef<str>, M: AsRef<str>>(
        &self,
        texts: &[S],
        metrics: &[M],
    ) -> Result<TextComparison> {
        Self::check_texts(texts)?;
        let metrics = parse_metrics(metrics)?;
        self.compare_texts(texts, &metrics).await
    }

    fn check_texts<S: AsRef<str>>(texts: &[S]) -> Result<()> {
        if texts.is_empty() {
            return Err(Error::EmptyInput);
        }
        EmbeddingClient::check_texts(texts)
    }
}
