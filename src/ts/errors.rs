use crate::ts::parser::Dialect;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeSitterError {
    #[error("failed to set {dialect:?} language for parser")]
    LanguageSet { dialect: Dialect },

    #[error("failed to parse source code")]
    ParseFailed,

    #[error("syntax error at line {line}, column {column}: {message}")]
    SyntaxError {
        line: usize,
        column: usize,
        message: String,
    },
}
