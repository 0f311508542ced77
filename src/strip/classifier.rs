use tree_sitter::Node;

/// Decides whether a node is a bare statement calling a method on the
/// logging object, e.g. `console.log(x);`.
#[derive(Debug, Clone, Copy)]
pub struct StatementClassifier<'a> {
    source: &'a str,
    object_name: &'a str,
}

impl<'a> StatementClassifier<'a> {
    pub fn new(source: &'a str, object_name: &'a str) -> Self {
        Self {
            source,
            object_name,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// True iff `node` is `<object>.<method>(...)` used as a whole statement.
    ///
    /// The method name is not inspected. Calls in value position, tagged
    /// templates and computed member access never qualify.
    pub fn is_logging_statement(&self, node: Node<'_>) -> bool {
        if node.kind() != "expression_statement" {
            return false;
        }
        statement_expression(node).is_some_and(|expr| self.is_logging_call(expr))
    }

    fn is_logging_call(&self, expr: Node<'_>) -> bool {
        if expr.kind() != "call_expression" {
            return false;
        }
        // `console.log`x`` parses as a call with a template argument
        let has_argument_list = expr
            .child_by_field_name("arguments")
            .is_some_and(|args| args.kind() == "arguments");
        if !has_argument_list {
            return false;
        }

        let Some(callee) = expr.child_by_field_name("function") else {
            return false;
        };
        if callee.kind() != "member_expression" {
            return false;
        }

        let property_ok = callee
            .child_by_field_name("property")
            .is_some_and(|prop| prop.kind() == "property_identifier");
        let object_ok = callee.child_by_field_name("object").is_some_and(|object| {
            object.kind() == "identifier" && &self.source[object.byte_range()] == self.object_name
        });

        property_ok && object_ok
    }
}

/// The expression child of an `expression_statement`, skipping comments.
fn statement_expression(statement: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = statement.walk();
    // Bound so the iterator borrowing `cursor` is dropped before `cursor`.
    let expr = statement
        .named_children(&mut cursor)
        .find(|child| !child.is_extra());
    expr
}
