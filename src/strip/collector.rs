use crate::strip::classifier::StatementClassifier;
use crate::strip::rewriter::RemovalRange;
use tree_sitter::Node;

/// Node kinds whose children are statement lists. Deleting a statement
/// from one of these leaves valid code behind.
const STATEMENT_LISTS: &[&str] = &["program", "statement_block", "switch_case", "switch_default"];

/// Collect the byte ranges of every logging statement under `root`.
///
/// Walks the tree depth-first in source order and never descends into a
/// flagged statement, so `console.log(console.log(x));` yields one range.
pub fn collect_removal_ranges(
    root: Node<'_>,
    classifier: &StatementClassifier<'_>,
) -> Vec<RemovalRange> {
    let mut ranges = Vec::new();
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if classifier.is_logging_statement(node) {
            ranges.push(removal_range(node, classifier));
            continue;
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    ranges
}

/// First characters that continue an unterminated previous line instead of
/// starting a new statement.
const CONTINUATION_STARTS: &[char] = &['(', '[', '`', '+', '-', '/'];

fn removal_range(statement: Node<'_>, classifier: &StatementClassifier<'_>) -> RemovalRange {
    let in_statement_list = statement
        .parent()
        .is_some_and(|parent| STATEMENT_LISTS.contains(&parent.kind()));

    if in_statement_list && !joins_neighbours(statement, classifier) {
        RemovalRange::delete(statement.start_byte(), statement.end_byte())
    } else {
        // Sole body of `if`/`for`/`while`/label, or an ASI join: keep `;`.
        RemovalRange::empty_statement(statement.start_byte(), statement.end_byte())
    }
}

/// Whether deleting `statement` would let ASI merge the surviving
/// statements around it, as in `a = b\n[1].map(f)`.
fn joins_neighbours(statement: Node<'_>, classifier: &StatementClassifier<'_>) -> bool {
    let source = classifier.source();
    let before = surviving_sibling(statement, classifier, |node| node.prev_named_sibling());
    let after = surviving_sibling(statement, classifier, |node| node.next_named_sibling());
    let (Some(before), Some(after)) = (before, after) else {
        return false;
    };

    let unterminated = !source[before.byte_range()].trim_end().ends_with(';');
    let continues = source[after.byte_range()]
        .trim_start()
        .starts_with(CONTINUATION_STARTS);
    unterminated && continues
}

/// Nearest sibling in one direction that is neither a comment nor another
/// logging statement.
fn surviving_sibling<'t>(
    statement: Node<'t>,
    classifier: &StatementClassifier<'_>,
    step: impl Fn(Node<'t>) -> Option<Node<'t>>,
) -> Option<Node<'t>> {
    let mut current = step(statement)?;
    while current.is_extra() || classifier.is_logging_statement(current) {
        current = step(current)?;
    }
    Some(current)
}
