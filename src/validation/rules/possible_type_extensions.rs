//! Extensions must target a defined type of the matching kind.

use smol_str::SmolStr;

use crate::ast::{Control, Definition, Location, NodeRef, TypeExtension, TypeTag, Visitor};
use crate::diag::Diag;
use crate::schema::Schema;
use crate::suggest::{did_you_mean, suggestion_list};
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Reports type extensions whose target is undefined (with suggestions) or
/// defined as a different kind than the extension claims. Document
/// definitions take precedence over same-named base-schema types.
pub struct PossibleTypeExtensions<'a> {
    sink: DiagnosticSink,
    schema: Option<&'a dyn Schema>,
    /// Document type definitions in source order: name, kind, full span.
    defined_types: Vec<(SmolStr, TypeTag, Location)>,
}

impl<'a> PossibleTypeExtensions<'a> {
    pub fn new(context: &ValidationContext<'a>) -> Self {
        let defined_types = context
            .document()
            .definitions
            .iter()
            .filter_map(|definition| match definition {
                Definition::Type(type_definition) => Some((
                    type_definition.name.value.clone(),
                    type_definition.kind.tag(),
                    type_definition.location,
                )),
                _ => None,
            })
            .collect();
        Self {
            sink: context.sink(),
            schema: context.schema(),
            defined_types,
        }
    }

    fn find_defined(&self, type_name: &str) -> Option<(TypeTag, Location)> {
        self.defined_types
            .iter()
            .find(|(name, _, _)| name == type_name)
            .map(|&(_, tag, location)| (tag, location))
    }
}

impl<'a> Visitor<'a> for PossibleTypeExtensions<'a> {
    fn enter_type_extension(
        &mut self,
        node: &'a TypeExtension,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        let type_name = node.name.as_str();

        if let Some((expected, definition_location)) = self.find_defined(type_name) {
            if node.kind.tag() != expected {
                self.sink.push(
                    Diag::error(format!(
                        "Cannot extend non-{} type < {type_name} >.",
                        expected.kind_name()
                    ))
                    .with_location(definition_location)
                    .with_location(node.location),
                );
            }
        } else if let Some(existing) = self
            .schema
            .and_then(|schema| schema.find_type(type_name))
        {
            if node.kind.tag() != existing.kind {
                self.sink.push(
                    Diag::error(format!(
                        "Cannot extend non-{} type < {type_name} >.",
                        existing.kind.kind_name()
                    ))
                    .with_location(node.location),
                );
            }
        } else {
            let mut candidates: Vec<SmolStr> = self
                .defined_types
                .iter()
                .map(|(name, _, _)| name.clone())
                .collect();
            if let Some(schema) = self.schema {
                candidates.extend(schema.type_names());
            }
            let suggestions = suggestion_list(type_name, candidates.iter());

            self.sink.push(
                Diag::error(format!(
                    "Cannot extend type < {type_name} > because it is not defined.{}",
                    did_you_mean(&suggestions)
                ))
                .with_location(node.name.location),
            );
        }
        Control::Continue
    }
}
