//! Tree-sitter integration for JavaScript and TypeScript sources.
//!
//! Grammars come from ast-grep-language; this module wraps parsing,
//! dialect selection and syntax-error discovery with precise byte spans
//! and line/column positions.

pub mod errors;
pub mod parser;
pub mod validator;

pub use errors::TreeSitterError;
pub use parser::{Dialect, ErrorNode, ParsedSource, ScriptParser};
pub use validator::validate_syntax;
