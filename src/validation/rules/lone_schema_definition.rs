//! At most one schema definition per document.

use crate::ast::{Control, NodeRef, SchemaDefinition, Visitor};
use crate::diag::Diag;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Rejects surplus schema definitions: only one may appear in a document,
/// and none at all when the schema being extended already binds a root
/// operation type.
pub struct LoneSchemaDefinition {
    sink: DiagnosticSink,
    schema_already_rooted: bool,
    definitions_seen: usize,
}

impl LoneSchemaDefinition {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        let schema_already_rooted = context.schema().is_some_and(|schema| {
            schema.query_type().is_some()
                || schema.mutation_type().is_some()
                || schema.subscription_type().is_some()
        });
        Self {
            sink: context.sink(),
            schema_already_rooted,
            definitions_seen: 0,
        }
    }
}

impl<'a> Visitor<'a> for LoneSchemaDefinition {
    fn enter_schema_definition(
        &mut self,
        node: &'a SchemaDefinition,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        if self.schema_already_rooted {
            self.sink.push(
                Diag::error("Cannot define a new schema within a schema extension.")
                    .with_location(node.location),
            );
            return Control::Continue;
        }

        if self.definitions_seen > 0 {
            self.sink.push(
                Diag::error("Must provide only one schema definition.")
                    .with_location(node.location),
            );
        }
        self.definitions_seen += 1;
        Control::Continue
    }
}
