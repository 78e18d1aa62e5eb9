//! Source span and position types for locating code regions.
//!
//! [`Span`] and [`LineCol`] follow Tree-sitter conventions (zero-based rows
//! and byte columns). [`SourceLocation`] is the one-based form reported to
//! the host linting engine.

use serde::{Deserialize, Serialize};

/// A line and column position within a source file.
///
/// Both fields are zero-indexed to match Tree-sitter conventions.
///
/// # Example
///
/// ```
/// use shellfacts_core::LineCol;
///
/// let pos = LineCol::new(10, 4);
/// assert_eq!(pos.line(), 10);
/// assert_eq!(pos.column(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCol {
    /// Zero-indexed line number.
    pub line: u32,
    /// Zero-indexed column number (byte offset within the line).
    pub column: u32,
}

impl LineCol {
    /// Creates a new line/column position.
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the zero-indexed line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }

    /// Returns the zero-indexed column number.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// A byte and line/column span in a UTF-8 source.
///
/// The byte range is half-open: `start_byte` is inclusive and `end_byte` is
/// exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start_byte: u32,
    /// End byte offset (exclusive).
    pub end_byte: u32,
    /// Start position as line and column.
    pub start: LineCol,
    /// End position as line and column.
    pub end: LineCol,
}

impl Span {
    /// Creates a new span from byte offsets and line/column positions.
    #[must_use]
    pub const fn new(start_byte: u32, end_byte: u32, start: LineCol, end: LineCol) -> Self {
        Self {
            start_byte,
            end_byte,
            start,
            end,
        }
    }

    /// Returns the inclusive start byte offset.
    #[must_use]
    pub const fn start_byte(&self) -> u32 {
        self.start_byte
    }

    /// Returns the exclusive end byte offset.
    #[must_use]
    pub const fn end_byte(&self) -> u32 {
        self.end_byte
    }

    /// Returns the start line/column position.
    #[must_use]
    pub const fn start(&self) -> &LineCol {
        &self.start
    }

    /// Returns the end line/column position.
    #[must_use]
    pub const fn end(&self) -> &LineCol {
        &self.end
    }
}

/// A one-based source location, as reported to the linting engine.
///
/// # Example
///
/// ```
/// use shellfacts_core::{LineCol, SourceLocation, Span};
///
/// let span = Span::new(0, 21, LineCol::new(0, 0), LineCol::new(0, 21));
/// let location = SourceLocation::from_span(&span);
/// assert_eq!((location.line, location.column), (1, 1));
/// assert_eq!((location.end_line, location.end_column), (1, 22));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    /// One-based start line.
    pub line: u32,
    /// One-based start column.
    pub column: u32,
    /// One-based end line.
    pub end_line: u32,
    /// One-based end column.
    pub end_column: u32,
}

impl SourceLocation {
    /// Location used when no syntax node was available. All fields are zero,
    /// which no real one-based location can produce.
    pub const UNKNOWN: Self = Self {
        line: 0,
        column: 0,
        end_line: 0,
        end_column: 0,
    };

    /// Converts a zero-based span into one-based start and end coordinates.
    #[must_use]
    pub const fn from_span(span: &Span) -> Self {
        Self {
            line: span.start.line.saturating_add(1),
            column: span.start.column.saturating_add(1),
            end_line: span.end.line.saturating_add(1),
            end_column: span.end.column.saturating_add(1),
        }
    }

    /// Returns `true` when this is [`SourceLocation::UNKNOWN`].
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        self.line == 0 && self.column == 0 && self.end_line == 0 && self.end_column == 0
    }
}

impl From<&Span> for SourceLocation {
    fn from(span: &Span) -> Self {
        Self::from_span(span)
    }
}
