//! Each field supplied at most once per input object value.

use std::collections::HashMap;
use std::mem;

use smol_str::SmolStr;

use crate::ast::{Control, Location, NodeRef, ObjectField, ObjectValue, Visitor};
use crate::diag::Diag;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Rejects duplicate field names inside one input object literal. Object
/// values nest, so the known set is saved and restored around each level.
pub struct UniqueInputFieldNames {
    sink: DiagnosticSink,
    known_stack: Vec<HashMap<SmolStr, Location>>,
    known: HashMap<SmolStr, Location>,
}

impl UniqueInputFieldNames {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        Self {
            sink: context.sink(),
            known_stack: Vec::new(),
            known: HashMap::new(),
        }
    }
}

impl<'a> Visitor<'a> for UniqueInputFieldNames {
    fn enter_object_value(&mut self, _node: &'a ObjectValue, _ancestors: &[NodeRef<'a>]) -> Control {
        self.known_stack.push(mem::take(&mut self.known));
        Control::Continue
    }

    fn leave_object_value(&mut self, _node: &'a ObjectValue, _ancestors: &[NodeRef<'a>]) {
        self.known = self.known_stack.pop().unwrap_or_default();
    }

    fn enter_object_field(&mut self, node: &'a ObjectField, _ancestors: &[NodeRef<'a>]) -> Control {
        let field_name = node.name.as_str();
        if let Some(&previous) = self.known.get(field_name) {
            self.sink.push(
                Diag::error(format!(
                    "There can be only one input field named < {field_name} >.",
                ))
                .with_location(previous)
                .with_location(node.name.location),
            );
        } else {
            self.known.insert(node.name.value.clone(), node.name.location);
        }
        Control::Continue
    }
}
