//! Source location ranges.
//!
//! This module provides [`SourceRange`], a half-open byte interval over a
//! source buffer, used both for offense highlighting and for edit boundaries.

/// A half-open byte interval `[start, end)` over a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceRange {
    /// Starting byte offset (inclusive).
    pub start: usize,
    /// Ending byte offset (exclusive).
    pub end: usize,
}

impl SourceRange {
    /// Create a new range. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {} exceeds end {}", start, end);
        Self { start, end }
    }

    /// Length of the range in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range is zero-width.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The smallest range containing both `self` and `other`.
    pub fn join(&self, other: SourceRange) -> SourceRange {
        SourceRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Extend this range forward so it ends where `sibling` ends.
    pub fn extend_to(&self, sibling: SourceRange) -> SourceRange {
        SourceRange {
            start: self.start,
            end: self.end.max(sibling.end),
        }
    }

    /// Zero-width range at the start offset.
    pub fn collapse_to_start(&self) -> SourceRange {
        SourceRange {
            start: self.start,
            end: self.start,
        }
    }

    /// Zero-width range at the end offset.
    pub fn collapse_to_end(&self) -> SourceRange {
        SourceRange {
            start: self.end,
            end: self.end,
        }
    }

    /// Whether the byte offset falls inside this range.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Whether two ranges share at least one byte.
    ///
    /// Touching ranges (`self.end == other.start`) do not overlap.
    pub fn overlaps(&self, other: SourceRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// 1-based line and column of a byte offset, for display.
///
/// Offsets past the end of the buffer are clamped; columns count characters,
/// not bytes.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let clamped = offset.min(source.len());
    let prefix = &source[..clamped];
    let line = prefix.bytes().filter(|&b| b == b'\n').count() + 1;
    let col = match prefix.rfind('\n') {
        Some(newline) => prefix[newline + 1..].chars().count() + 1,
        None => prefix.chars().count() + 1,
    };
    (line, col)
}
