//! Thread-local parser pooling.
//!
//! Each thread keeps one reusable [`ScriptParser`]. The first call on a
//! thread creates it; later calls retarget it to the requested dialect,
//! which only reloads the grammar when the dialect actually changes.

use crate::ts::{Dialect, ScriptParser, TreeSitterError};
use std::cell::RefCell;

thread_local! {
    static SCRIPT_PARSER: RefCell<Option<ScriptParser>> = const { RefCell::new(None) };
}

/// Execute function with the pooled parser, set to `dialect`.
///
/// # Example
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use code_squeezer::pool::with_parser;
/// use code_squeezer::ts::Dialect;
///
/// let has_errors = with_parser(Dialect::TypeScript, |parser| {
///     parser.parse_with_source("const a = 1;").map(|parsed| parsed.has_errors())
/// })??;
/// # Ok(())
/// # }
/// ```
pub fn with_parser<F, R>(dialect: Dialect, f: F) -> Result<R, TreeSitterError>
where
    F: FnOnce(&mut ScriptParser) -> R,
{
    SCRIPT_PARSER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let parser = match &mut *slot {
            Some(parser) => parser,
            empty => empty.insert(ScriptParser::new(dialect)?),
        };
        parser.set_dialect(dialect)?;
        Ok(f(parser))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_parser_across_dialects() {
        let js = with_parser(Dialect::JavaScript, |parser| parser.dialect()).unwrap();
        assert_eq!(js, Dialect::JavaScript);

        let ts = with_parser(Dialect::TypeScript, |parser| parser.dialect()).unwrap();
        assert_eq!(ts, Dialect::TypeScript);
    }
}
