//! Common test utilities
//!
//! Shared AST builders and assertion helpers used across the validation
//! test modules. Documents are built directly as AST values; each builder
//! takes explicit spans only where a test asserts on them, and the span of
//! a name node defaults to the width of the identifier.

use sdl_validator::Diag;
use sdl_validator::ast::{
    Argument, Definition, Directive, DirectiveDefinition, DirectiveLocation,
    DirectiveLocationNode, Document, EnumType, EnumValueDefinition, FieldDefinition,
    InputObjectType, InputValueDefinition, InterfaceType, Location, Name, NamedType, ObjectType,
    OperationKind, OperationTypeDefinition, SchemaDefinition, SchemaExtension, TypeDefinition,
    TypeExtension, TypeKind, TypeReference, UnionType, Value,
};

// ============================================================================
// Spans and names
// ============================================================================

/// A single-line span.
pub fn span(line: usize, column: usize, column_end: usize) -> Location {
    Location::new(line, column, line, column_end)
}

/// A span for nodes whose position no test asserts on.
pub fn anywhere() -> Location {
    Location::new(1, 1, 1, 1)
}

/// A name starting at (line, column), spanning the identifier's width.
pub fn name_at(value: &str, line: usize, column: usize) -> Name {
    Name::new(value, span(line, column, column + value.len()))
}

pub fn named_type_at(value: &str, line: usize, column: usize) -> NamedType {
    NamedType::new(name_at(value, line, column))
}

pub fn type_ref_at(value: &str, line: usize, column: usize) -> TypeReference {
    TypeReference::Named(named_type_at(value, line, column))
}

pub fn non_null(inner: TypeReference) -> TypeReference {
    let location = inner.location();
    TypeReference::NonNull(Box::new(inner), location)
}

// ============================================================================
// Documents and definitions
// ============================================================================

pub fn document(definitions: Vec<Definition>) -> Document {
    Document {
        definitions,
        location: anywhere(),
    }
}

pub fn scalar_def(name: Name) -> Definition {
    type_def(name, TypeKind::Scalar)
}

pub fn scalar_ext(name: Name) -> Definition {
    type_ext(name, TypeKind::Scalar)
}

pub fn enum_def(name: Name, values: Vec<EnumValueDefinition>) -> Definition {
    type_def(name, TypeKind::Enum(EnumType { values }))
}

pub fn enum_ext(name: Name, values: Vec<EnumValueDefinition>) -> Definition {
    type_ext(name, TypeKind::Enum(EnumType { values }))
}

pub fn enum_value(name: Name) -> EnumValueDefinition {
    EnumValueDefinition {
        location: name.location,
        name,
        directives: vec![],
    }
}

pub fn object_def(name: Name, fields: Vec<FieldDefinition>) -> Definition {
    object_def_implements(name, vec![], fields)
}

pub fn object_def_implements(
    name: Name,
    implements: Vec<NamedType>,
    fields: Vec<FieldDefinition>,
) -> Definition {
    type_def(name, TypeKind::Object(ObjectType { implements, fields }))
}

pub fn object_ext(name: Name, fields: Vec<FieldDefinition>) -> Definition {
    type_ext(
        name,
        TypeKind::Object(ObjectType {
            implements: vec![],
            fields,
        }),
    )
}

pub fn interface_def(name: Name, fields: Vec<FieldDefinition>) -> Definition {
    type_def(
        name,
        TypeKind::Interface(InterfaceType {
            implements: vec![],
            fields,
        }),
    )
}

pub fn union_def(name: Name, members: Vec<NamedType>) -> Definition {
    type_def(name, TypeKind::Union(UnionType { members }))
}

pub fn input_object_def(name: Name, fields: Vec<InputValueDefinition>) -> Definition {
    type_def(name, TypeKind::InputObject(InputObjectType { fields }))
}

pub fn input_object_ext(name: Name, fields: Vec<InputValueDefinition>) -> Definition {
    type_ext(name, TypeKind::InputObject(InputObjectType { fields }))
}

pub fn type_def(name: Name, kind: TypeKind) -> Definition {
    Definition::Type(Box::new(TypeDefinition {
        location: name.location,
        name,
        kind,
        directives: vec![],
    }))
}

pub fn type_ext(name: Name, kind: TypeKind) -> Definition {
    Definition::TypeExtension(Box::new(TypeExtension {
        location: name.location,
        name,
        kind,
        directives: vec![],
    }))
}

pub fn field_def(name: Name, ty: TypeReference) -> FieldDefinition {
    FieldDefinition {
        location: name.location,
        name,
        arguments: vec![],
        ty,
        directives: vec![],
    }
}

pub fn field_def_with_directives(
    name: Name,
    ty: TypeReference,
    directives: Vec<Directive>,
) -> FieldDefinition {
    FieldDefinition {
        location: name.location,
        name,
        arguments: vec![],
        ty,
        directives,
    }
}

pub fn input_value(name: Name, ty: TypeReference) -> InputValueDefinition {
    InputValueDefinition {
        location: name.location,
        name,
        ty,
        default_value: None,
        directives: vec![],
    }
}

pub fn directive_def(
    name: Name,
    arguments: Vec<InputValueDefinition>,
    locations: Vec<DirectiveLocation>,
) -> Definition {
    Definition::Directive(Box::new(DirectiveDefinition {
        location: name.location,
        name,
        arguments,
        locations: locations
            .into_iter()
            .map(|value| DirectiveLocationNode {
                value,
                location: anywhere(),
            })
            .collect(),
    }))
}

pub fn schema_def(operation_types: Vec<OperationTypeDefinition>, location: Location) -> Definition {
    Definition::Schema(Box::new(SchemaDefinition {
        directives: vec![],
        operation_types,
        location,
    }))
}

pub fn schema_ext(operation_types: Vec<OperationTypeDefinition>, location: Location) -> Definition {
    Definition::SchemaExtension(Box::new(SchemaExtension {
        directives: vec![],
        operation_types,
        location,
    }))
}

pub fn operation_type(
    operation: OperationKind,
    ty: NamedType,
    location: Location,
) -> OperationTypeDefinition {
    OperationTypeDefinition {
        operation,
        ty,
        location,
    }
}

pub fn directive(name: Name, arguments: Vec<Argument>, location: Location) -> Directive {
    Directive {
        name,
        arguments,
        location,
    }
}

pub fn argument(name: Name, value: Value, location: Location) -> Argument {
    Argument {
        name,
        value,
        location,
    }
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Format diagnostics for display in assertion messages.
pub fn format_diagnostics(diagnostics: &[Diag]) -> String {
    diagnostics
        .iter()
        .map(|diag| format!("{diag:?}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Assert that validation produced no diagnostics.
pub fn assert_no_validation_errors(diagnostics: &[Diag]) {
    assert!(
        diagnostics.is_empty(),
        "expected no diagnostics, got:\n{}",
        format_diagnostics(diagnostics)
    );
}

/// Assert the exact diagnostic messages and their location lists, in order.
pub fn assert_errors(diagnostics: &[Diag], expected: &[(&str, Vec<Location>)]) {
    let actual: Vec<(&str, Vec<Location>)> = diagnostics
        .iter()
        .map(|diag| (diag.message.as_str(), diag.locations.clone()))
        .collect();
    let expected: Vec<(&str, Vec<Location>)> = expected
        .iter()
        .map(|(message, locations)| (*message, locations.clone()))
        .collect();
    assert_eq!(
        actual,
        expected,
        "diagnostics:\n{}",
        format_diagnostics(diagnostics)
    );
}

/// Assert the exact diagnostic messages in order, ignoring locations.
pub fn assert_messages(diagnostics: &[Diag], expected: &[&str]) {
    let actual: Vec<&str> = diagnostics.iter().map(|diag| diag.message.as_str()).collect();
    assert_eq!(
        actual,
        expected,
        "diagnostics:\n{}",
        format_diagnostics(diagnostics)
    );
}
