//! Source positions for tokens and error reports.
//!
//! Offsets are byte offsets into the UTF-8 source text.

use std::fmt;

/// A byte offset into source text.
pub type TextPos = u32;

/// A span given by a start offset and a length.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextSpan {
    pub start: TextPos,
    pub length: TextPos,
}

impl TextSpan {
    #[inline]
    pub fn new(start: TextPos, length: TextPos) -> Self {
        Self { start, length }
    }

    /// The end offset of this span (exclusive).
    #[inline]
    pub fn end(&self) -> TextPos {
        self.start + self.length
    }
}

impl fmt::Debug for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end())
    }
}

impl fmt::Display for TextSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// A range given by start and end offsets. Tokens carry one of these.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextRange {
    /// Start offset (inclusive).
    pub pos: TextPos,
    /// End offset (exclusive).
    pub end: TextPos,
}

impl TextRange {
    #[inline]
    pub fn new(pos: TextPos, end: TextPos) -> Self {
        Self { pos, end }
    }
}

impl fmt::Debug for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.pos, self.end)
    }
}

/// A 1-based line and column, as shown to users.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LineAndColumn {
    pub line: u32,
    /// Column counted in characters, not bytes.
    pub column: u32,
}

impl fmt::Display for LineAndColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Maps byte offsets to line/column positions.
#[derive(Debug, Clone)]
pub struct LineMap<'s> {
    text: &'s str,
    line_starts: Vec<TextPos>,
}

impl<'s> LineMap<'s> {
    pub fn new(text: &'s str) -> Self {
        let mut line_starts = vec![0u32];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| (i + 1) as TextPos),
        );
        Self { text, line_starts }
    }

    /// The 0-based line containing `pos`.
    pub fn line_of(&self, pos: TextPos) -> usize {
        match self.line_starts.binary_search(&pos) {
            Ok(line) => line,
            Err(line) => line - 1,
        }
    }

    /// The 1-based line and column of `pos`. Offsets past the end clamp to it.
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        let pos = pos.min(self.text.len() as TextPos);
        let line = self.line_of(pos);
        let start = self.line_starts[line] as usize;
        let column = self
            .text
            .get(start..pos as usize)
            .map_or(pos as usize - start, |prefix| prefix.chars().count());
        LineAndColumn {
            line: line as u32 + 1,
            column: column as u32 + 1,
        }
    }
}
