//! Shared state for one validation pass.
//!
//! All rules in a pass append into one [`DiagnosticSink`], so the reported
//! order is exactly call order: rule-configuration order at each node,
//! interleaved with document order across nodes.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ast::Document;
use crate::diag::Diag;
use crate::schema::Schema;

/// A cloneable handle to the pass's diagnostic list.
///
/// Validation is single-threaded; the handle exists so every rule can hold
/// its own reference to the one shared list.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    diagnostics: Rc<RefCell<Vec<Diag>>>,
}

impl DiagnosticSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a diagnostic.
    pub fn push(&self, diagnostic: Diag) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns the number of diagnostics collected so far.
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if no diagnostics have been collected.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Drains the collected diagnostics, leaving the sink empty.
    pub fn take(&self) -> Vec<Diag> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}

/// Context threaded through one validation pass.
pub struct ValidationContext<'a> {
    document: &'a Document,
    schema: Option<&'a dyn Schema>,
    sink: DiagnosticSink,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context for validating `document`, optionally against an
    /// existing schema.
    pub fn new(document: &'a Document, schema: Option<&'a dyn Schema>) -> Self {
        Self {
            document,
            schema,
            sink: DiagnosticSink::new(),
        }
    }

    /// The document under validation.
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// The schema being extended, if any.
    pub fn schema(&self) -> Option<&'a dyn Schema> {
        self.schema
    }

    /// A handle to the shared diagnostic sink.
    pub fn sink(&self) -> DiagnosticSink {
        self.sink.clone()
    }

    /// Appends a diagnostic.
    pub fn report_error(&self, diagnostic: Diag) {
        self.sink.push(diagnostic);
    }

    /// Drains the diagnostics collected during the pass.
    pub fn take_errors(&self) -> Vec<Diag> {
        self.sink.take()
    }
}
