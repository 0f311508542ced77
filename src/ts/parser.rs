use crate::ts::errors::TreeSitterError;
use ast_grep_language::{LanguageExt, SupportLang};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Grammar used to parse a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Plain JavaScript, including JSX.
    JavaScript,
    #[default]
    TypeScript,
    /// TypeScript with JSX.
    Tsx,
}

impl Dialect {
    /// Map a file extension (without the dot, any case) to a dialect.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "jsx" | "mjs" | "cjs" => Some(Dialect::JavaScript),
            "ts" | "mts" | "cts" => Some(Dialect::TypeScript),
            "tsx" => Some(Dialect::Tsx),
            _ => None,
        }
    }

    /// Pick the dialect for a path from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    fn support_lang(self) -> SupportLang {
        match self {
            Dialect::JavaScript => SupportLang::JavaScript,
            Dialect::TypeScript => SupportLang::TypeScript,
            Dialect::Tsx => SupportLang::Tsx,
        }
    }
}

/// Tree-sitter parser wrapper for JavaScript and TypeScript sources.
pub struct ScriptParser {
    parser: Parser,
    dialect: Dialect,
}

impl ScriptParser {
    /// Create a parser for the given dialect.
    pub fn new(dialect: Dialect) -> Result<Self, TreeSitterError> {
        let mut parser = Parser::new();
        load_language(&mut parser, dialect)?;
        Ok(Self { parser, dialect })
    }

    /// Get the configured dialect.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Retarget the parser. A no-op when the dialect is already loaded.
    pub fn set_dialect(&mut self, dialect: Dialect) -> Result<(), TreeSitterError> {
        if self.dialect != dialect {
            load_language(&mut self.parser, dialect)?;
            self.dialect = dialect;
        }
        Ok(())
    }

    /// Parse source code into a tree-sitter Tree.
    pub fn parse(&mut self, source: &str) -> Result<Tree, TreeSitterError> {
        self.parser
            .parse(source, None)
            .ok_or(TreeSitterError::ParseFailed)
    }

    /// Parse source code and return the tree along with the source.
    pub fn parse_with_source<'a>(
        &mut self,
        source: &'a str,
    ) -> Result<ParsedSource<'a>, TreeSitterError> {
        let tree = self.parse(source)?;
        Ok(ParsedSource { source, tree })
    }
}

fn load_language(parser: &mut Parser, dialect: Dialect) -> Result<(), TreeSitterError> {
    let ts_lang = dialect.support_lang().get_ts_language();
    parser
        .set_language(&ts_lang)
        .map_err(|_| TreeSitterError::LanguageSet { dialect })
}

/// A parsed source file with its tree-sitter tree.
pub struct ParsedSource<'a> {
    pub source: &'a str,
    pub tree: Tree,
}

impl<'a> ParsedSource<'a> {
    /// Get the root node of the tree.
    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Check if the tree contains any ERROR or MISSING nodes.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Get all ERROR and MISSING nodes in document order.
    pub fn error_nodes(&self) -> Vec<ErrorNode> {
        let mut errors = Vec::new();
        if self.has_errors() {
            collect_error_nodes(self.tree.root_node(), self.source, &mut errors);
        }
        errors
    }

    /// The first syntax problem in the file, if any.
    pub fn first_error(&self) -> Option<ErrorNode> {
        self.error_nodes().into_iter().next()
    }

    /// Extract text for a node's byte range.
    pub fn node_text(&self, node: Node<'_>) -> &'a str {
        &self.source[node.byte_range()]
    }
}

/// Information about an ERROR or MISSING node in the parse tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNode {
    pub byte_start: usize,
    pub byte_end: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
    pub message: String,
}

impl From<ErrorNode> for TreeSitterError {
    fn from(error: ErrorNode) -> Self {
        TreeSitterError::SyntaxError {
            line: error.line,
            column: error.column,
            message: error.message,
        }
    }
}

const SNIPPET_CHARS: usize = 40;

fn collect_error_nodes(root: Node<'_>, source: &str, errors: &mut Vec<ErrorNode>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            errors.push(error_node(node, source));
            // Nested errors inside an ERROR node add nothing useful.
            continue;
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }
}

fn error_node(node: Node<'_>, source: &str) -> ErrorNode {
    let byte_start = node.start_byte();
    let line_start = source[..byte_start].rfind('\n').map_or(0, |pos| pos + 1);
    let column = source[line_start..byte_start].chars().count() + 1;

    let message = if node.is_missing() {
        format!("missing `{}`", node.kind())
    } else {
        let text = &source[node.byte_range()];
        let first_line = text.lines().next().unwrap_or("").trim();
        let snippet: String = first_line.chars().take(SNIPPET_CHARS).collect();
        if snippet.is_empty() {
            "unexpected syntax".to_string()
        } else {
            format!("unexpected `{snippet}`")
        }
    };

    ErrorNode {
        byte_start,
        byte_end: node.end_byte(),
        line: node.start_position().row + 1,
        column,
        message,
    }
}
