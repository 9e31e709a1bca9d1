//! Each enum value defined at most once per enum type.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{
    Control, Location, Name, NodeRef, TypeDefinition, TypeExtension, TypeKind, TypeTag, Visitor,
};
use crate::diag::Diag;
use crate::schema::Schema;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Rejects duplicate enum values, tracked per enum type name so values
/// spread across a definition and its extensions are still caught. Values
/// the base schema's enum already carries get the redefinition wording.
pub struct UniqueEnumValueNames<'a> {
    sink: DiagnosticSink,
    schema: Option<&'a dyn Schema>,
    known: HashMap<SmolStr, HashMap<SmolStr, Location>>,
}

impl<'a> UniqueEnumValueNames<'a> {
    pub fn new(context: &ValidationContext<'a>) -> Self {
        Self {
            sink: context.sink(),
            schema: context.schema(),
            known: HashMap::new(),
        }
    }

    fn check_value_uniqueness(&mut self, type_name: &Name, kind: &'_ TypeKind) -> Control {
        let TypeKind::Enum(enum_type) = kind else {
            return Control::Continue;
        };

        let existing_enum = self
            .schema
            .and_then(|schema| schema.find_type(type_name.as_str()))
            .filter(|existing| existing.kind == TypeTag::Enum);

        let seen = self.known.entry(type_name.value.clone()).or_default();
        for value_definition in &enum_type.values {
            let value_name = value_definition.name.as_str();
            if existing_enum.is_some_and(|existing| existing.has_value(value_name)) {
                self.sink.push(
                    Diag::error(format!(
                        "Enum value < {type_name}.{value_name} > already exists in the schema. It cannot also be defined in this type extension.",
                    ))
                    .with_location(value_definition.name.location),
                );
            } else if let Some(&previous) = seen.get(value_name) {
                self.sink.push(
                    Diag::error(format!(
                        "Enum value < {type_name}.{value_name} > can only be defined once.",
                    ))
                    .with_location(previous)
                    .with_location(value_definition.name.location),
                );
            } else {
                seen.insert(
                    value_definition.name.value.clone(),
                    value_definition.name.location,
                );
            }
        }
        Control::Skip
    }
}

impl<'a> Visitor<'a> for UniqueEnumValueNames<'a> {
    fn enter_type_definition(
        &mut self,
        node: &'a TypeDefinition,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        self.check_value_uniqueness(&node.name, &node.kind)
    }

    fn enter_type_extension(
        &mut self,
        node: &'a TypeExtension,
        _ancestors: &[NodeRef<'a>],
    ) -> Control {
        self.check_value_uniqueness(&node.name, &node.kind)
    }
}
