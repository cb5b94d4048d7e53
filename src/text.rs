//! Positions, ranges, and document line handling.
//!
//! Two coordinate systems meet here: the external analyzer reports 1-indexed
//! line/column positions, while the editor protocol consumes 0-indexed
//! line/character pairs. Columns and line lengths are counted in UTF-16 code
//! units throughout, matching the editor protocol; the analyzer is expected
//! to count the same way.

use serde::Deserialize;

/// A 1-indexed position as emitted by the external analyzer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

/// A source span in analyzer coordinates. May cover multiple lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SourceRange {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceRange {
    pub fn new(start: (u32, u32), end: (u32, u32)) -> Self {
        SourceRange {
            start: SourcePosition {
                line: start.0,
                column: start.1,
            },
            end: SourcePosition {
                line: end.0,
                column: end.1,
            },
        }
    }
}

/// A 0-indexed position in editor coordinates (character in UTF-16 units).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct EditorPosition {
    pub line: u32,
    pub character: u32,
}

/// An editor-side span, guaranteed by the normalizer to lie on a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditorRange {
    pub start: EditorPosition,
    pub end: EditorPosition,
}

impl EditorRange {
    /// Length of the span in UTF-16 code units.
    pub fn length(&self) -> u32 {
        self.end.character - self.start.character
    }
}

/// Split a document snapshot into lines, tolerating both `\n` and `\r\n`
/// endings. The trailing fragment after the last newline is a line too,
/// so a snapshot always has at least one (possibly empty) line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Length of a line in UTF-16 code units.
pub fn utf16_len(line: &str) -> u32 {
    line.chars().map(|ch| ch.len_utf16() as u32).sum()
}
