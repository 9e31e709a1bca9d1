//! Each argument supplied at most once per field or directive usage.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{Argument, Control, Directive, Field, Location, NodeRef, Visitor};
use crate::diag::Diag;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Rejects duplicate argument names within one field selection or one
/// directive usage. The known set resets on each new carrier.
pub struct UniqueArgumentNames {
    sink: DiagnosticSink,
    known: HashMap<SmolStr, Location>,
}

impl UniqueArgumentNames {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        Self {
            sink: context.sink(),
            known: HashMap::new(),
        }
    }
}

impl<'a> Visitor<'a> for UniqueArgumentNames {
    fn enter_field(&mut self, _node: &'a Field, _ancestors: &[NodeRef<'a>]) -> Control {
        self.known.clear();
        Control::Continue
    }

    fn enter_directive(&mut self, _node: &'a Directive, _ancestors: &[NodeRef<'a>]) -> Control {
        self.known.clear();
        Control::Continue
    }

    fn enter_argument(&mut self, node: &'a Argument, _ancestors: &[NodeRef<'a>]) -> Control {
        let argument_name = node.name.as_str();
        if let Some(&previous) = self.known.get(argument_name) {
            self.sink.push(
                Diag::error(format!(
                    "There can be only one argument named < {argument_name} >.",
                ))
                .with_location(previous)
                .with_location(node.name.location),
            );
        } else {
            self.known.insert(node.name.value.clone(), node.name.location);
        }
        Control::Skip
    }
}
