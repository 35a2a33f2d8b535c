//! Embedding client for fetching one vector per input text.

use super::types::{EmbeddingRequest, EmbeddingResponse, ProviderErrorBody, DEFAULT_MODEL};
use super::vectors::Vector;
use crate::config::PlaygroundConfig;
use crate::{Error, ErrorContext, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::time::Duration;
use tracing::{debug, info, warn};

const FALLBACK_API_MESSAGE: &str = "Failed to get embeddings from provider.";

pub struct EmbeddingClient {
    http_client: reqwest::Client,
    model: String,
    base_url: String,
    api_key: String,
    dimensions: Option<usize>,
    max_concurrency: usize,
}

impl EmbeddingClient {
    pub fn builder() -> EmbeddingClientBuilder {
        EmbeddingClientBuilder::new()
    }

    /// Fetch the embedding of a single text.
    pub async fn embed(&self, text: &str) -> Result<Vector> {
        let mut request = EmbeddingRequest::new(&self.model, text);
        if let Some(dims) = self.dimensions {
            request = request.with_dimensions(dims);
        }
        let response = self.execute(&request).await?;
        debug!(tokens = response.usage.total_tokens, "embedding usage");
        if response.data.len() != 1 {
            return Err(Error::parsing_with_context(
                format!("Expected 1 embedding, provider returned {}", response.data.len()),
                ErrorContext::new().with_source("embeddings"),
            ));
        }
        let first = response.data.into_iter().next().ok_or_else(|| {
            Error::parsing("Provider returned no embedding")
        })?;
        if first.embedding.is_empty() {
            return Err(Error::parsing_with_context(
                "Provider returned an empty embedding",
                ErrorContext::new().with_source("embeddings"),
            ));
        }
        Ok(first.embedding)
    }

    /// Fetch one embedding per text, concurrently, in input order.
    ///
    /// Every text must be non-blank; the first provider failure fails the whole call.
    pub async fn embed_all<S: AsRef<str>>(&self, texts: &[S]) -> Result<Vec<Vector>> {
        Self::check_texts(texts)?;

        info!(count = texts.len(), model = %self.model, "fetching embeddings");
        let vectors: Vec<Vector> = stream::iter(texts.iter().enumerate())
            .map(|(i, text)| async move {
                let vector = self.embed(text.as_ref()).await?;
                debug!(index = i, dims = vector.len(), "embedding received");
                Ok::<_, Error>(vector)
            })
            .buffered(self.max_concurrency)
            .try_collect()
            .await?;
        info!(count = vectors.len(), "embeddings ready");
        Ok(vectors)
    }

    /// Reject blank texts, naming the first offending index.
    pub fn check_texts<S: AsRef<str>>(texts: &[S]) -> Result<()> {
        match texts.iter().position(|t| t.as_ref().trim().is_empty()) {
            Some(i) => Err(Error::validation_with_context(
                "every text input must be filled",
                ErrorContext::new().with_field_path(format!("texts[{}]", i)),
            )),
            None => Ok(()),
        }
    }

    async fn execute(&self, request: &EmbeddingRequest) -> Result<EmbeddingResponse> {
        let endpoint = format!("{}/v1/embeddings", self.base_url);
        let response = self
            .http_client
            .post(&endpoint)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                Error::network_with_context(
                    format!("Embedding request failed: {}", e),
                    ErrorContext::new().with_source("embeddings"),
                )
            })?;
        let status = response.status();
        let body = response.text().await.map_err(|e| {
            Error::network_with_context(
                format!("Failed to read response: {}", e),
                ErrorContext::new().with_source("embeddings"),
            )
        })?;
        if !status.is_success() {
            let detail = serde_json::from_str::<ProviderErrorBody>(&body)
                .ok()
                .map(|b| b.error);
            let kind = detail.as_ref().and_then(|d| d.kind.clone());
            let message = detail
                .and_then(|d| d.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_API_MESSAGE.to_string());
            warn!(status = status.as_u16(), kind = ?kind, "embedding provider rejected request");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }
        serde_json::from_str(&body).map_err(|e| {
            Error::parsing_with_context(
                format!("Malformed embedding response: {}", e),
                ErrorContext::new().with_source("embeddings"),
            )
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

pub struct EmbeddingClientBuilder {
    model: Option<String>,
    api_key: Option<String>,
    base_url: Option<String>,
    dimensions: Option<usize>,
    max_concurrency: usize,
    timeout_secs: u64,
}

impl EmbeddingClientBuilder {
    pub fn new() -> Self {
        Self {
            model: None,
            api_key: None,
            base_url: None,
            dimensions: None,
            max_concurrency: 8,
            timeout_secs: 60,
        }
    }

    /// Seed every setting from a resolved configuration.
    pub fn from_config(config: &PlaygroundConfig) -> Self {
        let mut builder = Self::new()
            .model(&config.model)
            .base_url(&config.base_url)
            .max_concurrency(config.max_concurrency)
            .timeout_secs(config.timeout_secs);
        if let Some(key) = &config.api_key {
            builder = builder.api_key(key);
        }
        if let Some(dims) = config.dimensions {
            builder = builder.dimensions(dims);
        }
        builder
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
    pub fn max_concurrency(mut self, n: usize) -> Self {
        self.max_concurrency = n;
        self
    }
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<EmbeddingClient> {
        let model = self
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    "API key required",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_details("pass --api-key, set api_key in the config file or set OPENAI_API_KEY"),
                )
            })?;
        if self.max_concurrency == 0 {
            return Err(Error::configuration_with_context(
                "max_concurrency must be at least 1",
                ErrorContext::new().with_field_path("max_concurrency"),
            ));
        }
        let base_url = self
            .base_url
            .unwrap_or_else(|| "https://api.openai.com".to_string())
            .trim_end_matches('/')
            .to_string();
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(EmbeddingClient {
            http_client,
            model,
            base_url,
            api_key,
            dimensions: self.dimensions,
            max_concurrency: self.max_concurrency,
        })
    }
}

impl Default for EmbeddingClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults_model_and_trims_base_url() {
        let client = EmbeddingClient::builder()
            .api_key("sk-test")
            .base_url("http://localhost:9999/")
            .build()
            .unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[test]
    fn test_build_rejects_blank_key() {
        let err = EmbeddingClient::builder().api_key("   ").build();
        assert!(matches!(err, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_build_without_key_is_configuration_error() {
        let err = EmbeddingClient::builder().build();
        assert!(matches!(err, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_check_texts_names_first_blank() {
        assert!(EmbeddingClient::check_texts(&["a", "b"]).is_ok());
        match EmbeddingClient::check_texts(&["a", "", " "]) {
            Err(Error::Validation { context, .. }) => {
                assert_eq!(context.field_path.as_deref(), Some("texts[1]"));
            }
            other => panic!("expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_build_rejects_zero_concurrency() {
        let err = EmbeddingClient::builder()
            .api_key("sk-test")
            .max_concurrency(0)
            .build();
        assert!(matches!(err, Err(Error::Configuration { .. })));
    }
}
