//! Diagnostic model for validation errors, warnings, and notes.
//!
//! Validation rules accumulate [`Diag`] values; nothing in this crate is
//! reported by panicking or by returning `Err`. Each diagnostic carries a
//! message and an ordered list of source locations. The ordering is part of
//! the contract: for duplicate-name diagnostics the previously seen
//! occurrence comes first and the newly offending occurrence last.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, Report, Severity};

use crate::ast::Location;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagSeverity {
    /// A defect that makes the document semantically invalid.
    Error,
    /// A warning about potentially problematic constructs.
    Warning,
    /// An informational note or advice.
    Note,
}

impl fmt::Display for DiagSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagSeverity::Error => write!(f, "error"),
            DiagSeverity::Warning => write!(f, "warning"),
            DiagSeverity::Note => write!(f, "note"),
        }
    }
}

/// A structured diagnostic message.
///
/// This is the value returned by validation. It captures the message text
/// and the source locations of the offending node(s), and can be rendered
/// into a rich miette report against the original source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    /// The severity level of this diagnostic.
    pub severity: DiagSeverity,
    /// The main diagnostic message.
    pub message: String,
    /// Source locations of the offending node(s), existing occurrence first.
    pub locations: Vec<Location>,
}

impl Diag {
    /// Creates a new diagnostic with the given severity and message.
    pub fn new(severity: DiagSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            locations: Vec::new(),
        }
    }

    /// Creates a new error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(DiagSeverity::Error, message)
    }

    /// Creates a new warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(DiagSeverity::Warning, message)
    }

    /// Appends a source location.
    pub fn with_location(mut self, location: Location) -> Self {
        self.locations.push(location);
        self
    }

    /// Appends several source locations in order.
    pub fn with_locations(mut self, locations: impl IntoIterator<Item = Location>) -> Self {
        self.locations.extend(locations);
        self
    }
}

/// A wrapper around source text for diagnostic rendering.
///
/// Locations are line/column based; rendering against miette needs byte
/// offsets, which this type computes and clamps to the source bounds.
#[derive(Debug, Clone)]
pub struct SourceFile {
    content: String,
    name: Option<String>,
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Creates a new source file from the given content.
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let line_starts = compute_line_starts(&content);
        Self {
            content,
            name: None,
            line_starts,
        }
    }

    /// Creates a new source file with a name.
    pub fn with_name(content: impl Into<String>, name: impl Into<String>) -> Self {
        let mut file = Self::new(content);
        file.name = Some(name.into());
        file
    }

    /// Returns the source content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the source file name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Byte offset of a 1-based line/column position, clamped to the source.
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        let line_index = line.saturating_sub(1).min(self.line_starts.len() - 1);
        let line_start = self.line_starts[line_index];
        let line_end = self
            .line_starts
            .get(line_index + 1)
            .copied()
            .unwrap_or(self.content.len());
        (line_start + column.saturating_sub(1)).min(line_end)
    }

    /// Converts a location to a clamped byte range within this source.
    pub fn byte_range(&self, location: &Location) -> (usize, usize) {
        let start = self.offset_of(location.line, location.column);
        let end = self
            .offset_of(location.line_end, location.column_end)
            .max(start);
        (start, end)
    }
}

fn compute_line_starts(content: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (index, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(index + 1);
        }
    }
    starts
}

/// Converts validation diagnostics to miette Reports with source context.
pub fn convert_diagnostics_to_reports(diagnostics: &[Diag], source: &SourceFile) -> Vec<Report> {
    diagnostics
        .iter()
        .map(|diag| convert_diag_to_report(diag, source))
        .collect()
}

/// Converts a single diagnostic to a miette Report.
///
/// The last location (the newly offending occurrence) becomes the primary
/// label; earlier locations become secondary "first defined here" labels.
pub fn convert_diag_to_report(diag: &Diag, source: &SourceFile) -> Report {
    let diagnostic = build_diagnostic(diag, source);

    let mut report = Report::new(diagnostic);
    if let Some(name) = source.name() {
        report =
            report.with_source_code(miette::NamedSource::new(name, source.content().to_string()));
    } else {
        report = report.with_source_code(source.content().to_string());
    }

    report
}

fn build_diagnostic(diag: &Diag, source: &SourceFile) -> BuiltDiagnostic {
    let mut labels = Vec::new();
    let primary_index = diag.locations.len().saturating_sub(1);
    for (index, location) in diag.locations.iter().enumerate() {
        let (start, end) = source.byte_range(location);
        let span = (start, end - start);
        let labeled_span = if index == primary_index {
            LabeledSpan::new_primary_with_span(None, span)
        } else {
            LabeledSpan::new_with_span(Some("first defined here".to_string()), span)
        };
        labels.push(labeled_span);
    }

    BuiltDiagnostic {
        message: diag.message.clone(),
        severity: match diag.severity {
            DiagSeverity::Error => Severity::Error,
            DiagSeverity::Warning => Severity::Warning,
            DiagSeverity::Note => Severity::Advice,
        },
        labels,
    }
}

/// The final diagnostic type that implements miette's Diagnostic trait.
#[derive(Debug)]
struct BuiltDiagnostic {
    message: String,
    severity: Severity,
    labels: Vec<LabeledSpan>,
}

impl fmt::Display for BuiltDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for BuiltDiagnostic {}

impl Diagnostic for BuiltDiagnostic {
    fn severity(&self) -> Option<Severity> {
        Some(self.severity)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        if self.labels.is_empty() {
            None
        } else {
            Some(Box::new(self.labels.clone().into_iter()))
        }
    }
}
