//! Code Squeezer: precise console statement removal for JavaScript and TypeScript
//!
//! Strips `console.*(...)` statements from source files before they are
//! pasted into an AI chat context, without touching anything else.
//!
//! # Architecture
//!
//! Removal works on byte spans acquired from a tree-sitter parse, never on
//! raw text patterns:
//!
//! 1. [`ts`] parses the source with the JavaScript, TypeScript or TSX
//!    grammar and refuses files with syntax errors.
//! 2. [`strip::StatementClassifier`] flags bare `console.<method>(...)`
//!    statements; [`strip::collect_removal_ranges`] gathers their spans.
//! 3. [`strip::apply_removals`] deletes the spans right to left and cleans
//!    up the whitespace they leave behind.
//!
//! [`file`] and [`batch`] wrap the engine for files on disk: unchanged
//! files are never rewritten and modified ones are written atomically.
//!
//! # Example
//!
//! ```no_run
//! use code_squeezer::{ConsoleStripper, RemovalResult};
//!
//! let stripper = ConsoleStripper::default();
//! let result = stripper.strip("debug();\nconsole.log('x');\n", "input.ts")?;
//! assert_eq!(
//!     result,
//!     RemovalResult::Modified {
//!         text: "debug();\n".to_string(),
//!         statements_removed: 1,
//!     }
//! );
//! # Ok::<(), code_squeezer::RemovalError>(())
//! ```

pub mod batch;
pub mod config;
pub mod file;
pub mod pool;
pub mod strip;
pub mod ts;

// Re-exports
pub use batch::{strip_files, BatchEntry, BatchReport};
pub use config::{load_from_path, load_from_str, ConfigError, RemovalOptions};
pub use file::{check_file, strip_file, FileError, FileOutcome, WriteMode};
pub use strip::{ConsoleStripper, RemovalError, RemovalRange, RemovalResult};
pub use ts::{Dialect, TreeSitterError};
