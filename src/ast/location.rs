//! AST foundation types: source locations and names.

use std::fmt;

use smol_str::SmolStr;

/// A source location span in line/column form.
///
/// Lines and columns are 1-based; `line_end`/`column_end` point one past the
/// last character of the spanned region. This is the canonical position type
/// attached to every AST node and carried on every diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    /// Starting line (1-based).
    pub line: usize,
    /// Starting column (1-based).
    pub column: usize,
    /// Ending line (1-based).
    pub line_end: usize,
    /// Ending column (1-based, exclusive).
    pub column_end: usize,
}

impl Location {
    /// Creates a new location span.
    pub fn new(line: usize, column: usize, line_end: usize, column_end: usize) -> Self {
        Self {
            line,
            column,
            line_end,
            column_end,
        }
    }

    /// Whether the span covers a single line.
    pub fn is_single_line(&self) -> bool {
        self.line == self.line_end
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An identifier node with its own source location.
///
/// Name locations are what diagnostics point at when the defect concerns the
/// identifier itself rather than the definition it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    /// The identifier text.
    pub value: SmolStr,
    /// Where the identifier appears in source.
    pub location: Location,
}

impl Name {
    /// Creates a new name node.
    pub fn new(value: impl Into<SmolStr>, location: Location) -> Self {
        Self {
            value: value.into(),
            location,
        }
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
