//! Each root operation role bound at most once.

use std::collections::HashMap;

use crate::ast::{
    Control, Location, NodeRef, OperationKind, OperationTypeDefinition, SchemaDefinition,
    SchemaExtension, Visitor,
};
use crate::diag::Diag;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Rejects duplicate `query`/`mutation`/`subscription` bindings across the
/// document's schema definition and extensions. Roles the base schema has
/// already bound cannot be rebound at all.
pub struct UniqueOperationTypes {
    sink: DiagnosticSink,
    defined: HashMap<OperationKind, Location>,
    existing_query: bool,
    existing_mutation: bool,
    existing_subscription: bool,
}

impl UniqueOperationTypes {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        let schema = context.schema();
        Self {
            sink: context.sink(),
            defined: HashMap::new(),
            existing_query: schema.is_some_and(|s| s.query_type().is_some()),
            existing_mutation: schema.is_some_and(|s| s.mutation_type().is_some()),
            existing_subscription: schema.is_some_and(|s| s.subscription_type().is_some()),
        }
    }

    fn is_bound_in_schema(&self, operation: OperationKind) -> bool {
        match operation {
            OperationKind::Query => self.existing_query,
            OperationKind::Mutation => self.existing_mutation,
            OperationKind::Subscription => self.existing_subscription,
        }
    }

    fn check_operation_types(&mut self, operation_types: &[OperationTypeDefinition]) -> Control {
        for operation_type in operation_types {
            let operation = operation_type.operation;
            if self.is_bound_in_schema(operation) {
                self.sink.push(
                    Diag::error(format!(
                        "Type for < {operation} > already defined in the schema. It cannot be redefined.",
                    ))
                    .with_location(operation_type.location),
                );
            } else if let Some(&previous) = self.defined.get(&operation) {
                self.sink.push(
                    Diag::error(format!(
                        "There can be only one < {operation} > type in schema.",
                    ))
                    .with_location(previous)
                    .with_location(operation_type.location),
                );
            } else {
                self.defined.insert(operation, operation_type.location);
            }
        }
        Control::Skip
    }
}

impl<'a> Visitor<'a> for UniqueOperationTypes {
    fn enter_schema_definition(
        &mut self,
        node: &'a SchemaDefinition,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        self.check_operation_types(&node.operation_types)
    }

    fn enter_schema_extension(
        &mut self,
        node: &'a SchemaExtension,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        self.check_operation_types(&node.operation_types)
    }
}
