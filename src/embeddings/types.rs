//! Embedding types and data structures.

use serde::{Deserialize, Serialize};

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "text-embedding-3-small";

/// Request body for the `/v1/embeddings` endpoint. One text per request.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingRequest {
    pub model: String,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<usize>,
}

impl EmbeddingRequest {
    pub fn new(model: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            dimensions: None,
        }
    }

    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingData {
    pub embedding: Vec<f32>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct EmbeddingUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Successful response body from the provider.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbeddingResponse {
    pub data: Vec<EmbeddingData>,
    #[serde(default)]
    pub usage: EmbeddingUsage,
}

/// Error body returned by the provider, e.g. `{"error": {"message": "..."}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorBody {
    pub error: ProviderErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderErrorDetail {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// A known embedding model. Identifiers outside the catalog are still passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingModel {
    pub id: String,
    pub name: String,
    pub max_input_tokens: u32,
    pub dimensions: usize,
    pub provider: String,
}

impl EmbeddingModel {
    pub fn text_embedding_3_small() -> Self {
        Self {
            id: "text-embedding-3-small".into(),
            name: "Text Embedding 3 Small".into(),
            max_input_tokens: 8191,
            dimensions: 1536,
            provider: "openai".into(),
        }
    }

    pub fn text_embedding_3_large() -> Self {
        Self {
            id: "text-embedding-3-large".into(),
            name: "Text Embedding 3 Large".into(),
            max_input_tokens: 8191,
            dimensions: 3072,
            provider: "openai".into(),
        }
    }

    pub fn text_embedding_ada_002() -> Self {
        Self {
            id: "text-embedding-ada-002".into(),
            name: "Text Embedding Ada 002".into(),
            max_input_tokens: 8191,
            dimensions: 1536,
            provider: "openai".into(),
        }
    }

    pub fn catalog() -> Vec<Self> {
        vec![
            Self::text_embedding_3_small(),
            Self::text_embedding_3_large(),
            Self::text_embedding_ada_002(),
        ]
    }

    pub fn find(id: &str) -> Option<Self> {
        Self::catalog().into_iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_unset_dimensions() {
        let req = EmbeddingRequest::new("text-embedding-3-small", "hello");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "text-embedding-3-small");
        assert_eq!(json["input"], "hello");
        assert!(json.get("dimensions").is_none());

        let json = serde_json::to_value(req.with_dimensions(256)).unwrap();
        assert_eq!(json["dimensions"], 256);
    }

    #[test]
    fn test_response_parses_openai_shape() {
        let body = r#"{
            "object": "list",
            "data": [{"object": "embedding", "index": 0, "embedding": [0.25, -0.5, 1.0]}],
            "model": "text-embedding-3-small",
            "usage": {"prompt_tokens": 3, "total_tokens": 3}
        }"#;
        let resp: EmbeddingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].embedding, vec![0.25, -0.5, 1.0]);
        assert_eq!(resp.usage.total_tokens, 3);
    }

    #[test]
    fn test_response_rejects_non_numeric_component() {
        let body = r#"{"data": [{"index": 0, "embedding": [0.1, "x"]}]}"#;
        assert!(serde_json::from_str::<EmbeddingResponse>(body).is_err());
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(EmbeddingModel::catalog().len(), 3);
        assert_eq!(EmbeddingModel::find(DEFAULT_MODEL).unwrap().dimensions, 1536);
        assert_eq!(
            EmbeddingModel::find("text-embedding-3-large").unwrap().dimensions,
            3072
        );
        assert!(EmbeddingModel::find("my-local-model").is_none());
    }
}
