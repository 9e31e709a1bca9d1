//! Each field defined at most once per type.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{
    Control, Location, Name, NodeRef, TypeDefinition, TypeExtension, TypeKind, TypeTag, Visitor,
};
use crate::diag::Diag;
use crate::schema::{Schema, SchemaType};
use crate::validation::context::{DiagnosticSink, ValidationContext};

fn has_schema_field(existing: Option<&SchemaType>, field_name: &str) -> bool {
    existing.is_some_and(|existing| {
        matches!(
            existing.kind,
            TypeTag::Object | TypeTag::Interface | TypeTag::InputObject
        ) && existing.has_field(field_name)
    })
}

/// Rejects duplicate field definitions on object, interface, and input
/// object types, tracked per type name so fields spread across a definition
/// and its extensions are still caught. Fields the base schema's type
/// already carries get the redefinition wording.
pub struct UniqueFieldDefinitionNames<'a> {
    sink: DiagnosticSink,
    schema: Option<&'a dyn Schema>,
    known: HashMap<SmolStr, HashMap<SmolStr, Location>>,
}

impl<'a> UniqueFieldDefinitionNames<'a> {
    pub fn new(context: &ValidationContext<'a>) -> Self {
        Self {
            sink: context.sink(),
            schema: context.schema(),
            known: HashMap::new(),
        }
    }

    fn check_field_uniqueness(&mut self, type_name: &Name, kind: &TypeKind) -> Control {
        let field_names: Vec<&Name> = match kind {
            TypeKind::Object(object) => object.fields.iter().map(|field| &field.name).collect(),
            TypeKind::Interface(interface) => {
                interface.fields.iter().map(|field| &field.name).collect()
            }
            TypeKind::InputObject(input_object) => {
                input_object.fields.iter().map(|field| &field.name).collect()
            }
            _ => return Control::Continue,
        };

        let existing = self
            .schema
            .and_then(|schema| schema.find_type(type_name.as_str()));

        let seen = self.known.entry(type_name.value.clone()).or_default();
        for field_name in field_names {
            if has_schema_field(existing, field_name.as_str()) {
                self.sink.push(
                    Diag::error(format!(
                        "Field < {type_name}.{field_name} > already exists in the schema. It cannot also be defined in this type extension.",
                    ))
                    .with_location(field_name.location),
                );
            } else if let Some(&previous) = seen.get(field_name.as_str()) {
                self.sink.push(
                    Diag::error(format!(
                        "Field < {type_name}.{field_name} > can only be defined once.",
                    ))
                    .with_location(previous)
                    .with_location(field_name.location),
                );
            } else {
                seen.insert(field_name.value.clone(), field_name.location);
            }
        }
        Control::Skip
    }
}

impl<'a> Visitor<'a> for UniqueFieldDefinitionNames<'a> {
    fn enter_type_definition(
        &mut self,
        node: &'a TypeDefinition,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        self.check_field_uniqueness(&node.name, &node.kind)
    }

    fn enter_type_extension(
        &mut self,
        node: &'a TypeExtension,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        self.check_field_uniqueness(&node.name, &node.kind)
    }
}
