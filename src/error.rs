use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the reranking evaluator
#[derive(Error, Debug)]
pub enum EvalError {
    /// Input file missing or unreadable
    #[error("Cannot read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed label row or score line
    #[error("Parse error in {} at line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Label and score files have different record counts
    #[error("Alignment error: {labels} labels but {scores} scores")]
    Alignment { labels: usize, scores: usize },

    /// Metric with an empty denominator
    #[error("Division by zero computing {metric}: no sentences matched")]
    DivisionByZero { metric: &'static str },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl EvalError {
    pub(crate) fn parse(path: impl Into<PathBuf>, line: u64, message: impl Into<String>) -> Self {
        EvalError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }
}

/// Convenient Result type using EvalError
pub type Result<T> = std::result::Result<T, EvalError>;
