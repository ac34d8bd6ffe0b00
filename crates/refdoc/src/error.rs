//! CLI error types.

use refdoc_config::ConfigError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid symbol graph: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid document pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0} page(s) failed to generate")]
    PagesFailed(usize),
}
