//! Each directive defined at most once.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{Control, DirectiveDefinition, Location, NodeRef, Visitor};
use crate::diag::Diag;
use crate::schema::Schema;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Rejects duplicate directive definitions. A name the base schema already
/// binds gets the redefinition wording instead.
pub struct UniqueDirectiveNames<'a> {
    sink: DiagnosticSink,
    schema: Option<&'a dyn Schema>,
    known: HashMap<SmolStr, Location>,
}

impl<'a> UniqueDirectiveNames<'a> {
    pub fn new(context: &ValidationContext<'a>) -> Self {
        Self {
            sink: context.sink(),
            schema: context.schema(),
            known: HashMap::new(),
        }
    }
}

impl<'a> Visitor<'a> for UniqueDirectiveNames<'a> {
    fn enter_directive_definition(
        &mut self,
        node: &'a DirectiveDefinition,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        let directive_name = node.name.as_str();

        if self
            .schema
            .is_some_and(|schema| schema.has_directive(directive_name))
        {
            self.sink.push(
                Diag::error(format!(
                    "Directive < {directive_name} > already exists in the schema. It cannot be redefined.",
                ))
                .with_location(node.name.location),
            );
            return Control::Ok;
        }

        if let Some(&previous) = self.known.get(directive_name) {
            self.sink.push(
                Diag::error(format!(
                    "There can be only one directive named < {directive_name} >.",
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
