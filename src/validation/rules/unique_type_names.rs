//! Each type name defined at most once.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{Control, Location, NodeRef, TypeDefinition, Visitor};
use crate::diag::Diag;
use crate::schema::Schema;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Rejects duplicate type definitions. A name the base schema already binds
/// gets the redefinition wording and suppresses the in-document duplicate
/// bookkeeping for that definition.
pub struct UniqueTypeNames<'a> {
    sink: DiagnosticSink,
    schema: Option<&'a dyn Schema>,
    known: HashMap<SmolStr, Location>,
}

impl<'a> UniqueTypeNames<'a> {
    pub fn new(context: &ValidationContext<'a>) -> Self {
        Self {
            sink: context.sink(),
            schema: context.schema(),
            known: HashMap::new(),
        }
    }
}

impl<'a> Visitor<'a> for UniqueTypeNames<'a> {
    fn enter_type_definition(
        &mut self,
        node: &'a TypeDefinition,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        let type_name = node.name.as_str();

        if self.schema.is_some_and(|schema| schema.has_type(type_name)) {
            self.sink.push(
                Diag::error(format!(
                    "Type < {type_name} > already exists in the schema. It cannot also be defined in this type definition.",
                ))
                .with_location(node.name.location),
            );
            return Control::Ok;
        }

        if let Some(&previous) = self.known.get(type_name) {
            self.sink.push(
                Diag::error(format!("There can be only one type named < {type_name} >."))
                    .with_location(previous)
                    .with_location(node.name.location),
            );
        } else {
            self.known.insert(node.name.value.clone(), node.name.location);
        }
        Control::Skip
    }
}
