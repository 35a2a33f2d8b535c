use embedding_compare::embeddings::{EmbeddingClientBuilder, Metric};
use embedding_compare::{Error, PlaygroundConfig};
use std::path::PathBuf;

fn write_temp(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("embedding-compare-{}-{}.yaml", name, std::process::id()));
    std::fs::write(&path, content).expect("write temp config");
    path
}

#[test]
fn test_load_from_yaml_file() {
    let path = write_temp(
        "full",
        "model: text-embedding-3-large\nmetrics: [manhattan, cosine]\nmax_concurrency: 3\ndimensions: 256\n",
    );
    let config = PlaygroundConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.model, "text-embedding-3-large");
    assert_eq!(config.max_concurrency, 3);
    assert_eq!(config.dimensions, Some(256));
    assert_eq!(config.timeout_secs, 60);
    assert_eq!(
        config.resolved_metrics().unwrap(),
        vec![Metric::Manhattan, Metric::Cosine]
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_is_io_error() {
    let err = PlaygroundConfig::from_file("/nonexistent/embedding-compare.yaml").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_invalid_yaml_is_yaml_error() {
    let path = write_temp("invalid", "max_concurrency: [not, a, number]\n");
    let err = PlaygroundConfig::from_file(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, Error::Yaml(_)));
}

#[test]
fn test_empty_metric_list_rejected() {
    let config = PlaygroundConfig::from_yaml_str("metrics: []\n").unwrap();
    assert!(matches!(config.validate(), Err(Error::NoMetricsSelected)));
}

#[test]
fn test_client_builder_from_config() {
    let config = PlaygroundConfig {
        api_key: Some("sk-config".into()),
        base_url: "http://127.0.0.1:1/".into(),
        model: "text-embedding-ada-002".into(),
        ..Default::default()
    };
    let client = EmbeddingClientBuilder::from_config(&config).build().unwrap();
    assert_eq!(client.model(), "text-embedding-ada-002");
    assert_eq!(client.base_url(), "http://127.0.0.1:1");
}
