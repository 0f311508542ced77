use crate::strip::rewriter::RangeError;
use crate::ts::TreeSitterError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemovalError {
    #[error("failed to parse {source_name} (line {line}, column {column}): {message}")]
    Parse {
        source_name: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("console removal failed for {source_name}")]
    Internal {
        source_name: String,
        #[source]
        source: InternalError,
    },
}

impl RemovalError {
    pub(crate) fn internal(source_name: &str, source: impl Into<InternalError>) -> Self {
        RemovalError::Internal {
            source_name: source_name.to_string(),
            source: source.into(),
        }
    }

    /// Name of the source the error was raised for.
    pub fn source_name(&self) -> &str {
        match self {
            RemovalError::Parse { source_name, .. }
            | RemovalError::Internal { source_name, .. } => source_name,
        }
    }
}

/// Faults that should not happen for a well-formed tree.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Parser(#[from] TreeSitterError),

    #[error(transparent)]
    Range(#[from] RangeError),
}
