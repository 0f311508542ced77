//! File-level behaviour: in-place rewrites, untouched clean files and
//! configuration loaded from disk.

use code_squeezer::{
    check_file, load_from_path, strip_file, strip_files, ConsoleStripper, FileOutcome, WriteMode,
};
use filetime::FileTime;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn unchanged_file_keeps_its_mtime() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "clean.js", include_str!("../fixtures/no_consoles.js"));
    let old = FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_mtime(&path, old).unwrap();

    let outcome = strip_file(&path, &ConsoleStripper::default()).unwrap();

    assert_eq!(outcome, FileOutcome::Unchanged { path: path.clone() });
    let meta = fs::metadata(&path).unwrap();
    assert_eq!(FileTime::from_last_modification_time(&meta), old);
}

#[test]
fn modified_file_is_rewritten() {
    let dir = TempDir::new().unwrap();
    let source = include_str!("../fixtures/processing.ts");
    let path = write(&dir, "processing.ts", source);

    let outcome = strip_file(&path, &ConsoleStripper::default()).unwrap();

    let expected = include_str!("../fixtures/processing.expected.ts");
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
    assert_eq!(
        outcome,
        FileOutcome::Modified {
            path: path.clone(),
            statements_removed: 5,
            bytes_before: source.len(),
            bytes_after: expected.len(),
        }
    );
    assert_eq!(outcome.bytes_removed(), source.len() - expected.len());
}

#[test]
fn check_reports_without_touching() {
    let dir = TempDir::new().unwrap();
    let source = include_str!("../fixtures/with_consoles.js");
    let path = write(&dir, "with_consoles.cjs", source);

    let outcome = check_file(&path, &ConsoleStripper::default()).unwrap();

    assert!(outcome.is_modified());
    assert_eq!(fs::read_to_string(&path).unwrap(), source);
}

#[test]
fn options_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "squeeze.toml", "loggingObjectName = \"logger\"\n");
    let path = write(
        &dir,
        "service.mts",
        "logger.debug(\"boot\");\nconsole.log(\"kept\");\nstart();\n",
    );

    let options = load_from_path(&config).unwrap();
    let stripper = ConsoleStripper::new(options);
    let outcome = strip_file(&path, &stripper).unwrap();

    assert!(outcome.is_modified());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "console.log(\"kept\");\nstart();\n"
    );
}

#[test]
fn batch_over_mixed_files() {
    let dir = TempDir::new().unwrap();
    let paths = vec![
        write(&dir, "a.js", include_str!("../fixtures/with_consoles.js")),
        write(&dir, "b.js", include_str!("../fixtures/no_consoles.js")),
        write(&dir, "c.ts", "function (\n"),
        write(&dir, "d.txt", "console.log(1);\n"),
        write(&dir, "e.tsx", include_str!("../fixtures/widget.tsx")),
    ];

    let report = strip_files(&paths, &ConsoleStripper::default(), WriteMode::Write);

    assert_eq!(report.entries.len(), paths.len());
    assert_eq!(report.modified().count(), 2);
    assert_eq!(report.unchanged().count(), 1);

    let failed: Vec<_> = report
        .failures()
        .map(|(path, _)| path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(failed, vec!["c.ts", "d.txt"]);

    assert_eq!(
        fs::read_to_string(&paths[0]).unwrap(),
        include_str!("../fixtures/with_consoles.expected.js")
    );
}
