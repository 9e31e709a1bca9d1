//! Each directive used at most once per location.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{Control, Directive, Location, NodeRef, Visitor};
use crate::diag::Diag;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Rejects repeated application of one directive to one construct. The
/// walker delivers a construct's directives consecutively, so tracking the
/// current carrier node by identity is enough to scope the bookkeeping.
pub struct UniqueDirectivesPerLocation {
    sink: DiagnosticSink,
    current_carrier: Option<*const ()>,
    seen: HashMap<SmolStr, Location>,
}

impl UniqueDirectivesPerLocation {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        Self {
            sink: context.sink(),
            current_carrier: None,
            seen: HashMap::new(),
        }
    }
}

impl<'a> Visitor<'a> for UniqueDirectivesPerLocation {
    fn enter_directive(&mut self, node: &'a Directive, ancestors: &[NodeRef<'a>]) -> Control {
        let carrier = ancestors.last().map(NodeRef::as_ptr);
        if carrier != self.current_carrier {
            self.current_carrier = carrier;
            self.seen.clear();
        }

        let directive_name = node.name.as_str();
        if let Some(&previous) = self.seen.get(directive_name) {
            self.sink.push(
                Diag::error(format!(
                    "The directive < @{directive_name} > can only be used once at this location.",
                ))
                .with_location(previous)
                .with_location(node.location),
            );
        } else {
            self.seen.insert(node.name.value.clone(), node.location);
        }
        Control::Continue
    }
}
