//! Playground configuration.
//!
//! Settings are layered: defaults, then an optional YAML file, then environment
//! variables, then whatever the caller (usually the CLI) sets explicitly.
//!
//! ```yaml
//! model: text-embedding-3-large
//! metrics: [cosine, euclidean]
//! max_concurrency: 4
//! ```

use crate::embeddings::{parse_metrics, Metric, DEFAULT_MODEL};
use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_BASE_URL: &str = "EMBEDDING_BASE_URL";
pub const ENV_MODEL: &str = "EMBEDDING_MODEL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Provider credential. Passed through, never written back out.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub metrics: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
    pub timeout_secs: u64,
    pub max_concurrency: usize,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            model: DEFAULT_MODEL.to_string(),
            metrics: vec![Metric::Cosine.as_str().to_string()],
            dimensions: None,
            timeout_secs: 60,
            max_concurrency: 8,
        }
    }
}

impl PlaygroundConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config file");
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Defaults, overlaid with `path` if given, overlaid with the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Apply environment overrides using `lookup`; blank values are ignored.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = get(ENV_API_KEY) {
            self.api_key = Some(key);
        }
        if let Some(url) = get(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(model) = get(ENV_MODEL) {
            self.model = model;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::configuration_with_context(
                "model must not be empty",
                ErrorContext::new().with_field_path("model"),
            ));
        }
        if self.max_concurrency == 0 {
            return Err(Error::configuration_with_context(
                "max_concurrency must be at least 1",
                ErrorContext::new().with_field_path("max_concurrency"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(Error::configuration_with_context(
                "timeout_secs must be at least 1",
                ErrorContext::new().with_field_path("timeout_secs"),
            ));
        }
        self.resolved_metrics().map(|_| ())
    }

    pub fn resolved_metrics(&self) -> Result<Vec<Metric>> {
        parse_metrics(self.metrics.as_slice())
    }
}
