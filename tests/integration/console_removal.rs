//! Fixture-driven tests of the removal engine.

use code_squeezer::{ConsoleStripper, Dialect, RemovalError, RemovalResult};

fn strip_as(source: &str, name: &str, dialect: Dialect) -> RemovalResult {
    ConsoleStripper::default()
        .strip_as(source, name, dialect)
        .unwrap()
}

fn expect_modified(result: RemovalResult) -> (String, usize) {
    match result {
        RemovalResult::Modified {
            text,
            statements_removed,
        } => (text, statements_removed),
        RemovalResult::Unchanged => panic!("expected logging statements to be removed"),
    }
}

#[test]
fn javascript_fixture() {
    let source = include_str!("../fixtures/with_consoles.js");
    let expected = include_str!("../fixtures/with_consoles.expected.js");

    let (text, removed) = expect_modified(strip_as(source, "with_consoles.js", Dialect::JavaScript));
    assert_eq!(text, expected);
    assert_eq!(removed, 8);
}

#[test]
fn typescript_fixture() {
    let source = include_str!("../fixtures/processing.ts");
    let expected = include_str!("../fixtures/processing.expected.ts");

    let (text, removed) = expect_modified(strip_as(source, "processing.ts", Dialect::TypeScript));
    assert_eq!(text, expected);
    assert_eq!(removed, 5);
}

#[test]
fn fixture_without_trailing_newline() {
    let source = include_str!("../fixtures/basic.ts");
    let (text, removed) = expect_modified(strip_as(source, "basic.ts", Dialect::TypeScript));

    assert_eq!(removed, 2);
    assert_eq!(
        text,
        "interface Greeter { name: string; }\n\
         function greetTs(person: Greeter): void {\n  \
         // Another comment\n\
         }\n\
         const userTs: Greeter = { name: \"TS Tester\" };\n\
         greetTs(userTs);"
    );
}

#[test]
fn tsx_fixture() {
    let source = include_str!("../fixtures/widget.tsx");
    let (text, removed) = expect_modified(strip_as(source, "widget.tsx", Dialect::Tsx));

    assert_eq!(removed, 1);
    assert!(!text.contains("console"));
    assert!(text.contains("return <button onClick={() => setCount(count + 1)}>{count}</button>;"));
}

#[test]
fn clean_fixture_is_unchanged() {
    let source = include_str!("../fixtures/no_consoles.js");
    assert_eq!(
        strip_as(source, "no_consoles.js", Dialect::JavaScript),
        RemovalResult::Unchanged
    );
}

#[test]
fn second_pass_finds_nothing() {
    let source = include_str!("../fixtures/with_consoles.js");
    let (once, _) = expect_modified(strip_as(source, "with_consoles.js", Dialect::JavaScript));
    assert_eq!(
        strip_as(&once, "with_consoles.js", Dialect::JavaScript),
        RemovalResult::Unchanged
    );
}

#[test]
fn nested_call_removed_whole() {
    let source = "before();\nconsole.log(console.log(x));\nafter();\n";
    let (text, removed) = expect_modified(strip_as(source, "nested.js", Dialect::JavaScript));
    assert_eq!(text, "before();\nafter();\n");
    assert_eq!(removed, 1);
}

#[test]
fn four_blank_lines_collapse_to_one() {
    let source = "first();\n\n\n\n\nconsole.log(1);\nsecond();\n";
    let (text, _) = expect_modified(strip_as(source, "gaps.js", Dialect::JavaScript));
    assert_eq!(text, "first();\n\nsecond();\n");
}

#[test]
fn indented_blank_lines_collapse_to_one() {
    let source = "class Queue {\n  push() {\n    this.size++;\n    \n    \n    \n    console.debug(this.size);\n    \n    return this;\n  }\n}\n";
    let (text, _) = expect_modified(strip_as(source, "queue.ts", Dialect::TypeScript));
    assert_eq!(
        text,
        "class Queue {\n  push() {\n    this.size++;\n\n    return this;\n  }\n}\n"
    );
}

#[test]
fn unterminated_line_is_not_joined_to_the_next() {
    let source = "const total = base\nconsole.log(total);\n(async () => run())()\n";
    let (text, removed) = expect_modified(strip_as(source, "asi.js", Dialect::JavaScript));
    assert_eq!(text, "const total = base\n;\n(async () => run())()\n");
    assert_eq!(removed, 1);
}

#[test]
fn crlf_source_keeps_crlf() {
    let source = "first();\r\nconsole.log(1);\r\n\r\n\r\n\r\nsecond();\r\n";
    let (text, _) = expect_modified(strip_as(source, "crlf.ts", Dialect::TypeScript));
    assert_eq!(text, "first();\r\n\r\nsecond();\r\n");
}

#[test]
fn syntax_error_is_not_a_no_op() {
    let err = ConsoleStripper::default()
        .strip("console.log(1);\nlet = ;\n", "broken.js")
        .unwrap_err();
    assert!(matches!(err, RemovalError::Parse { line: 2, .. }));
    assert!(err.to_string().starts_with("failed to parse broken.js (line 2"));
}
