//! Span deletion and whitespace cleanup.
//!
//! Ranges are applied right to left against the working text, so every
//! pending range (all strictly to the left) keeps its original offsets.
//! After deletion the document is normalized: whitespace-only lines become
//! empty, long runs of line breaks then collapse to one blank line, the
//! document is trimmed and the original trailing line break is restored.

use std::borrow::Cow;
use thiserror::Error;

/// One statement to remove, as a half-open byte range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalRange {
    pub start: usize,
    pub end: usize,
    /// Replace with `;` instead of deleting. Used for the sole body of a
    /// control-flow construct, and where deleting would let automatic
    /// semicolon insertion join the neighbouring statements.
    pub keep_empty_statement: bool,
}

impl RemovalRange {
    pub fn delete(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            keep_empty_statement: false,
        }
    }

    pub fn empty_statement(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            keep_empty_statement: true,
        }
    }

}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("invalid removal range [{start}, {end}) in text of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    #[error("removal range [{start}, {end}) splits a UTF-8 character")]
    NotCharBoundary { start: usize, end: usize },

    #[error("removal ranges [{first_start}, {first_end}) and [{second_start}, {second_end}) overlap")]
    Overlap {
        first_start: usize,
        first_end: usize,
        second_start: usize,
        second_end: usize,
    },
}

/// Line-ending convention of a file, taken from its first line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn detect(text: &str) -> Self {
        match text.find('\n') {
            Some(pos) if text[..pos].ends_with('\r') => LineEnding::Crlf,
            _ => LineEnding::Lf,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Remove `ranges` from `original` and clean up the result.
///
/// With no ranges the input is returned borrowed and untouched, which is
/// how callers detect "nothing changed".
pub fn apply_removals<'a>(
    original: &'a str,
    ranges: &[RemovalRange],
) -> Result<Cow<'a, str>, RangeError> {
    if ranges.is_empty() {
        return Ok(Cow::Borrowed(original));
    }

    let mut sorted = ranges.to_vec();
    sorted.sort_by(|a, b| b.start.cmp(&a.start));
    validate(original, &sorted)?;

    let mut text = original.to_string();
    for range in &sorted {
        if range.keep_empty_statement {
            text.replace_range(range.start..range.end, ";");
        } else {
            let (start, end) = widen(&text, range.start, range.end);
            text.replace_range(start..end, "");
        }
    }

    // Blank first: an indented blank line would otherwise split a run.
    let ending = LineEnding::detect(original);
    let blanked = blank_whitespace_lines(&text);
    let mut result = collapse_line_breaks(&blanked, ending).trim().to_string();

    if let Some(trailing) = trailing_line_break(original) {
        if !result.ends_with('\n') {
            result.push_str(trailing);
        }
    }

    Ok(Cow::Owned(result))
}

/// Assumes `sorted` is ordered by descending start.
fn validate(text: &str, sorted: &[RemovalRange]) -> Result<(), RangeError> {
    for range in sorted {
        if range.start > range.end || range.end > text.len() {
            return Err(RangeError::OutOfBounds {
                start: range.start,
                end: range.end,
                len: text.len(),
            });
        }
        if !text.is_char_boundary(range.start) || !text.is_char_boundary(range.end) {
            return Err(RangeError::NotCharBoundary {
                start: range.start,
                end: range.end,
            });
        }
    }

    for window in sorted.windows(2) {
        let (later, earlier) = (&window[0], &window[1]);
        if earlier.end > later.start {
            return Err(RangeError::Overlap {
                first_start: earlier.start,
                first_end: earlier.end,
                second_start: later.start,
                second_end: later.end,
            });
        }
    }

    Ok(())
}

fn is_horizontal(c: char) -> bool {
    c != '\n' && c != '\r' && c.is_whitespace()
}

/// Grow `[start, end)` over the whitespace that would be left dangling.
///
/// A statement alone on its line takes its indentation and line break with
/// it. Otherwise only the blanks separating it from its neighbours go.
fn widen(text: &str, start: usize, end: usize) -> (usize, usize) {
    let before = &text[..start];
    let line_start = before.rfind('\n').map_or(0, |pos| pos + 1);
    let blank_before = before[line_start..].chars().all(is_horizontal);

    let after = &text[end..];
    let rest = after.trim_start_matches(is_horizontal);
    let ws_after = after.len() - rest.len();
    let line_break = if rest.starts_with("\r\n") {
        2
    } else if rest.starts_with('\n') {
        1
    } else {
        0
    };
    let at_line_end = line_break > 0 || rest.is_empty();

    match (blank_before, at_line_end) {
        (true, true) => (line_start, end + ws_after + line_break),
        (false, true) => {
            let ws_before = before.len() - before.trim_end_matches(is_horizontal).len();
            (start - ws_before, end + ws_after)
        }
        (_, false) => (start, end + ws_after),
    }
}

/// Byte length and count of the line breaks at the start of `bytes`.
fn line_break_run(bytes: &[u8]) -> (usize, usize) {
    let (mut len, mut count) = (0, 0);
    loop {
        match &bytes[len..] {
            [b'\r', b'\n', ..] => len += 2,
            [b'\n', ..] => len += 1,
            _ => return (len, count),
        }
        count += 1;
    }
}

/// Replace every run of three or more line breaks with exactly two.
fn collapse_line_breaks(text: &str, ending: LineEnding) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        let (len, count) = line_break_run(&bytes[i..]);
        if count == 0 {
            i += 1;
            continue;
        }
        if count >= 3 {
            out.push_str(&text[copied..i]);
            out.push_str(ending.as_str());
            out.push_str(ending.as_str());
            copied = i + len;
        }
        i += len;
    }

    out.push_str(&text[copied..]);
    out
}

/// Empty out lines made only of horizontal whitespace.
fn blank_whitespace_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.split_inclusive('\n') {
        let content = line
            .strip_suffix("\r\n")
            .or_else(|| line.strip_suffix('\n'))
            .unwrap_or(line);
        if !content.is_empty() && content.chars().all(is_horizontal) {
            out.push_str(&line[content.len()..]);
        } else {
            out.push_str(line);
        }
    }
    out
}

fn trailing_line_break(original: &str) -> Option<&'static str> {
    if original.trim().is_empty() {
        None
    } else if original.ends_with("\r\n") {
        Some("\r\n")
    } else if original.ends_with('\n') {
        Some("\n")
    } else {
        None
    }
}
