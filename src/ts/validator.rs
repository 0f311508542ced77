use crate::pool::with_parser;
use crate::ts::errors::TreeSitterError;
use crate::ts::parser::Dialect;

/// Validate that source code parses without syntax errors.
///
/// Returns the first ERROR or MISSING node as a [`TreeSitterError::SyntaxError`].
pub fn validate_syntax(source: &str, dialect: Dialect) -> Result<(), TreeSitterError> {
    let first_error = with_parser(dialect, |parser| -> Result<_, TreeSitterError> {
        let parsed = parser.parse_with_source(source)?;
        Ok(parsed.first_error())
    })??;

    match first_error {
        None => Ok(()),
        Some(error) => Err(error.into()),
    }
}
