use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.max_concurrency", "texts[2]")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected value, provider status)
    pub details: Option<String>,
    /// Source of the error (e.g., "embeddings", "config_loader")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for embedding acquisition and comparison.
///
/// The first four variants are comparison preconditions; they are raised before any
/// result matrix is allocated.
#[derive(Debug, Error)]
pub enum Error {
    #[error("No vectors supplied: at least one vector is required for comparison")]
    EmptyInput,

    #[error("Dimension mismatch at input {index}: expected length {expected}, got {actual}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("No metrics selected: choose at least one of cosine, dot_product, euclidean, manhattan")]
    NoMetricsSelected,

    #[error("Unknown metric '{name}': expected one of cosine, dot_product, euclidean, manhattan")]
    UnknownMetric { name: String },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("Network error: {message}{}", format_context(.context))]
    Network {
        message: String,
        context: ErrorContext,
    },

    #[error("Provider error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Parsing error: {message}{}", format_context(.context))]
    Parsing {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::validation_with_context(msg, ErrorContext::new())
    }

    pub fn parsing(msg: impl Into<String>) -> Self {
        Self::parsing_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    pub fn network_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Network {
            message: msg.into(),
            context,
        }
    }

    pub fn parsing_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Parsing {
            message: msg.into(),
            context,
        }
    }

    pub fn unknown_metric(name: impl Into<String>) -> Self {
        Error::UnknownMetric { name: name.into() }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::Validation { context, .. }
            | Error::Network { context, .. }
            | Error::Parsing { context, .. } => Some(context),
            _ => None,
        }
    }

    /// True for the comparison preconditions checked before any computation.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput
                | Error::DimensionMismatch { .. }
                | Error::NoMetricsSelected
                | Error::UnknownMetric { .. }
        )
    }
}
