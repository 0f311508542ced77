//! Console statement removal.
//!
//! The engine parses a source file, flags every statement of the form
//! `console.<method>(...);`, collects their byte spans and deletes them
//! from the text. Matching happens on syntax nodes only, so look-alikes in
//! strings, template literals and comments are never touched.
//!
//! # Example
//!
//! ```no_run
//! use code_squeezer::{ConsoleStripper, RemovalResult};
//!
//! let stripper = ConsoleStripper::default();
//! let source = "let x = 1;\nconsole.log(x);\n";
//!
//! match stripper.strip(source, "example.ts") {
//!     Ok(RemovalResult::Modified { text, .. }) => assert_eq!(text, "let x = 1;\n"),
//!     Ok(RemovalResult::Unchanged) => println!("nothing to remove"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod classifier;
pub mod collector;
pub mod errors;
pub mod rewriter;

pub use classifier::StatementClassifier;
pub use collector::collect_removal_ranges;
pub use errors::{InternalError, RemovalError};
pub use rewriter::{apply_removals, LineEnding, RangeError, RemovalRange};

use crate::config::RemovalOptions;
use crate::pool::with_parser;
use crate::ts::{validate_syntax, Dialect, TreeSitterError};
use tracing::debug;

/// Outcome of running the engine over one source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "RemovalResult says whether the source needs to be rewritten"]
pub enum RemovalResult {
    /// No logging statements were found; the input stands as is.
    Unchanged,
    /// At least one statement was removed.
    Modified {
        text: String,
        statements_removed: usize,
    },
}

impl RemovalResult {
    pub fn is_modified(&self) -> bool {
        matches!(self, RemovalResult::Modified { .. })
    }
}

/// Removes logging statements from JavaScript and TypeScript sources.
///
/// Holds only configuration; parsers come from the thread-local pool, so a
/// single stripper can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ConsoleStripper {
    options: RemovalOptions,
    dialect: Dialect,
}

impl ConsoleStripper {
    pub fn new(options: RemovalOptions) -> Self {
        Self {
            options,
            dialect: Dialect::default(),
        }
    }

    /// Use `dialect` for [`ConsoleStripper::strip`].
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn options(&self) -> &RemovalOptions {
        &self.options
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Remove logging statements using the configured dialect.
    ///
    /// `source_name` only appears in diagnostics.
    pub fn strip(&self, source: &str, source_name: &str) -> Result<RemovalResult, RemovalError> {
        self.strip_as(source, source_name, self.dialect)
    }

    /// Remove logging statements, parsing `source` as `dialect`.
    pub fn strip_as(
        &self,
        source: &str,
        source_name: &str,
        dialect: Dialect,
    ) -> Result<RemovalResult, RemovalError> {
        let ranges = self.find_removal_ranges(source, source_name, dialect)?;
        if ranges.is_empty() {
            debug!(source_name, "no logging statements found");
            return Ok(RemovalResult::Unchanged);
        }

        let text = apply_removals(source, &ranges)
            .map_err(|e| RemovalError::internal(source_name, e))?
            .into_owned();

        // Removing whole statements from an error-free tree must leave an
        // error-free tree.
        validate_syntax(&text, dialect).map_err(|e| RemovalError::internal(source_name, e))?;

        debug!(
            source_name,
            statements = ranges.len(),
            bytes_removed = source.len().saturating_sub(text.len()),
            "removed logging statements"
        );
        Ok(RemovalResult::Modified {
            text,
            statements_removed: ranges.len(),
        })
    }

    /// Parse `source` and return the spans of its logging statements.
    ///
    /// Fails with [`RemovalError::Parse`] when the tree has syntax errors.
    pub fn find_removal_ranges(
        &self,
        source: &str,
        source_name: &str,
        dialect: Dialect,
    ) -> Result<Vec<RemovalRange>, RemovalError> {
        let object_name = self.options.logging_object_name.as_str();

        let collected = with_parser(dialect, |parser| -> Result<_, TreeSitterError> {
            let parsed = parser.parse_with_source(source)?;
            if let Some(error) = parsed.first_error() {
                return Ok(Err(error));
            }
            let classifier = StatementClassifier::new(source, object_name);
            Ok(Ok(collect_removal_ranges(parsed.root_node(), &classifier)))
        })
        .and_then(|inner| inner)
        .map_err(|e| RemovalError::internal(source_name, e))?;

        collected.map_err(|error| RemovalError::Parse {
            source_name: source_name.to_string(),
            line: error.line,
            column: error.column,
            message: error.message,
        })
    }
}
