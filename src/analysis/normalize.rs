//! Range normalization from analyzer coordinates to editor coordinates.
//!
//! The analyzer reports 1-indexed, possibly multi-line ranges; the editor
//! protocol wants 0-indexed, single-line spans. `line_spans` validates a
//! source range against the document snapshot and yields one editor range
//! per touched line: the first line starts at the range's start column,
//! interior lines run from column 0 to end-of-line, and the terminal line
//! ends at the range's end column.

use crate::error::{BridgeError, BridgeResult};
use crate::text::{EditorPosition, EditorRange, SourceRange, utf16_len};

/// Validate a source range against the snapshot and return the per-line
/// editor ranges, lazily, in ascending line order.
///
/// A range spanning `k` lines yields exactly `k` editor ranges; a zero-length
/// range yields one zero-length span (some editors render zero-width
/// markers, so it must not be dropped).
///
/// Validation failures are [`BridgeError::MalformedRange`]: they indicate the
/// analyzer and the editor disagree about the document snapshot, and the
/// whole request must fail rather than emit tokens at wrong offsets.
pub fn line_spans<'a>(range: SourceRange, lines: &'a [&'a str]) -> BridgeResult<LineSpans<'a>> {
    if range.start.line == 0 || range.start.column == 0 || range.end.column == 0 {
        return Err(BridgeError::malformed_range(format!(
            "positions are 1-indexed, got ({},{})-({},{})",
            range.start.line, range.start.column, range.end.line, range.end.column
        )));
    }
    if (range.end.line, range.end.column) < (range.start.line, range.start.column) {
        return Err(BridgeError::malformed_range(format!(
            "end ({},{}) precedes start ({},{})",
            range.end.line, range.end.column, range.start.line, range.start.column
        )));
    }
    if range.end.line as usize > lines.len() {
        return Err(BridgeError::malformed_range(format!(
            "line {} is beyond the document snapshot ({} lines)",
            range.end.line,
            lines.len()
        )));
    }
    // Columns beyond the snapshot's line length mean the analyzer saw a
    // different document than the editor; tokens at wrong offsets are worse
    // than a failed request.
    let first_line = lines[range.start.line as usize - 1];
    if range.start.column - 1 > utf16_len(first_line) {
        return Err(BridgeError::malformed_range(format!(
            "column {} exceeds line {} length {}; snapshot mismatch between analyzer and editor",
            range.start.column,
            range.start.line,
            utf16_len(first_line)
        )));
    }
    let terminal_line = lines[range.end.line as usize - 1];
    if range.end.column - 1 > utf16_len(terminal_line) {
        return Err(BridgeError::malformed_range(format!(
            "column {} exceeds line {} length {}; snapshot mismatch between analyzer and editor",
            range.end.column,
            range.end.line,
            utf16_len(terminal_line)
        )));
    }

    Ok(LineSpans {
        range,
        lines,
        next_line: range.start.line,
    })
}

/// Iterator over the single-line editor ranges of one source range.
/// Constructed by [`line_spans`] after validation.
#[derive(Debug)]
pub struct LineSpans<'a> {
    range: SourceRange,
    lines: &'a [&'a str],
    next_line: u32,
}

impl Iterator for LineSpans<'_> {
    type Item = EditorRange;

    fn next(&mut self) -> Option<EditorRange> {
        if self.next_line > self.range.end.line {
            return None;
        }
        let source_line = self.next_line;
        self.next_line += 1;

        let line = source_line - 1;
        let start_character = if source_line == self.range.start.line {
            self.range.start.column - 1
        } else {
            0
        };
        let end_character = if source_line == self.range.end.line {
            self.range.end.column - 1
        } else {
            // Interior lines of a multi-line token extend to end-of-line.
            utf16_len(self.lines[line as usize])
        };

        Some(EditorRange {
            start: EditorPosition {
                line,
                character: start_character,
            },
            end: EditorPosition {
                line,
                character: end_character,
            },
        })
    }
}
