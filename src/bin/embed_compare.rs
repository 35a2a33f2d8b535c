//! embed-compare: embed several texts and print pairwise similarity matrices.
//!
//! Usage:
//!   embed-compare compare "first text" "second text" -m cosine,euclidean
//!   embed-compare compare --file texts.txt --json
//!   embed-compare compare --vectors vectors.json -m manhattan
//!   embed-compare models
//!   embed-compare metrics

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use embedding_compare::compare::{compare, ComparisonResult};
use embedding_compare::embeddings::{EmbeddingClientBuilder, EmbeddingModel, Metric, Vector};
use embedding_compare::playground::Playground;
use embedding_compare::PlaygroundConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "embed-compare",
    version,
    about = "Compare text embeddings under cosine, dot product, euclidean and manhattan metrics"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Embed texts (or load vectors) and print one matrix per metric
    Compare {
        /// Texts to compare
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,

        /// Read additional texts from a file, one per line
        #[arg(short = 'f', long = "file", value_name = "PATH")]
        file: Option<PathBuf>,

        /// Compare pre-computed vectors from a JSON file (`[[f32, ...], ...]`) without calling a provider
        #[arg(long = "vectors", value_name = "PATH", conflicts_with_all = ["texts", "file"])]
        vectors: Option<PathBuf>,

        /// Metrics to compute (comma-separated): cosine, dot_product, euclidean, manhattan
        #[arg(short = 'm', long = "metric", value_delimiter = ',')]
        metrics: Vec<String>,

        /// Embedding model identifier
        #[arg(long = "model")]
        model: Option<String>,

        /// Provider API key (defaults to OPENAI_API_KEY)
        #[arg(long = "api-key")]
        api_key: Option<String>,

        /// Provider base URL
        #[arg(long = "base-url")]
        base_url: Option<String>,

        /// YAML configuration file
        #[arg(short = 'c', long = "config", value_name = "PATH")]
        config: Option<PathBuf>,

        /// Print the result as JSON instead of tables
        #[arg(long = "json")]
        json: bool,
    },

    /// List known embedding models
    Models,

    /// List supported metrics
    Metrics,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "embedding_compare=debug,embed_compare=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Compare {
            texts,
            file,
            vectors,
            metrics,
            model,
            api_key,
            base_url,
            config,
            json,
        } => {
            let mut cfg = PlaygroundConfig::load(config.as_deref())?;
            if !metrics.is_empty() {
                cfg.metrics = metrics;
            }
            if let Some(model) = model {
                cfg.model = model;
            }
            if let Some(key) = api_key {
                cfg.api_key = Some(key);
            }
            if let Some(url) = base_url {
                cfg.base_url = url;
            }
            cfg.validate()?;
            let metrics = cfg.resolved_metrics()?;

            if let Some(path) = vectors {
                let (result, labels) = compare_vector_file(&path, &metrics)?;
                return print_result(&result, &labels, json);
            }

            let mut all_texts = texts;
            if let Some(path) = file {
                all_texts.extend(read_texts(&path)?);
            }
            if all_texts.is_empty() {
                bail!("no texts given: pass TEXT arguments or --file");
            }

            let client = EmbeddingClientBuilder::from_config(&cfg).build()?;
            let comparison = Playground::new(client)
                .compare_texts(&all_texts, &metrics)
                .await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
                return Ok(());
            }
            println!("Model: {}", comparison.model);
            for (i, text) in comparison.texts.iter().enumerate() {
                println!("  Text {}: {}", i + 1, text);
            }
            let labels = labels("Text", comparison.texts.len());
            print_result(&comparison.result, &labels, false)
        }
        Command::Models => {
            for model in EmbeddingModel::catalog() {
                println!("{:<26} {:>5} dims  {}", model.id, model.dimensions, model.name);
            }
            Ok(())
        }
        Command::Metrics => {
            for metric in Metric::ALL {
                println!("{:<12} {}", metric.as_str(), describe(metric));
            }
            Ok(())
        }
    }
}

fn labels(prefix: &str, n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("{} {}", prefix, i)).collect()
}

fn compare_vector_file(path: &Path, metrics: &[Metric]) -> anyhow::Result<(ComparisonResult, Vec<String>)> {
    let vectors = read_vectors(path)?;
    let result = compare(&vectors, metrics)?;
    Ok((result, labels("Vector", vectors.len())))
}

fn read_texts(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read texts from {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.trim().is_empty())
        .map(String::from)
        .collect())
}

fn read_vectors(path: &Path) -> anyhow::Result<Vec<Vector>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read vectors from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of numeric arrays", path.display()))
}

fn describe(metric: Metric) -> &'static str {
    match metric {
        Metric::Cosine => "Cosine of the angle between vectors; -1 (opposite) to 1 (identical). Higher is more similar.",
        Metric::DotProduct => "Sum of element-wise products; scale-dependent. Higher is more similar.",
        Metric::Euclidean => "Straight-line distance between vectors. Lower is more similar.",
        Metric::Manhattan => "Sum of absolute coordinate differences (L1). Lower is more similar.",
    }
}

fn print_result(result: &ComparisonResult, labels: &[String], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", render_tables(result, labels));
    }
    Ok(())
}

/// One table per metric; the diagonal is printed as `—` since it is fixed by policy.
fn render_tables(result: &ComparisonResult, labels: &[String]) -> String {
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0).max(8);
    let mut out = String::new();
    for matrix in result {
        out.push('\n');
        out.push_str(&format!("{}: {}\n", matrix.metric(), describe(matrix.metric())));
        out.push_str(&format!("{:<width$}", "", width = width));
        for label in labels {
            out.push_str(&format!("  {:>width$}", label, width = width));
        }
        out.push('\n');
        for (i, row) in matrix.rows().iter().enumerate() {
            let label = labels.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&format!("{:<width$}", label, width = width));
            for (j, value) in row.iter().enumerate() {
                let cell = if i == j {
                    "—".to_string()
                } else {
                    format!("{:.4}", value)
                };
                out.push_str(&format!("  {:>width$}", cell, width = width));
            }
            out.push('\n');
        }
    }
    out
}
