//! AST node types for SDL documents.
//!
//! The node inventory covers the full type-system language: schema
//! definitions and extensions, the six type definition kinds and their
//! extensions, directive definitions, and the value/argument nodes shared
//! with the executable language.

use std::fmt;

use crate::ast::executable::{FragmentDefinition, OperationDefinition};
use crate::ast::location::{Location, Name};
use crate::ast::types::{NamedType, TypeReference, Value};

/// Root AST node: an ordered sequence of top-level definitions.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub location: Location,
}

/// A top-level definition in a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// Executable operation (query/mutation/subscription).
    Operation(Box<OperationDefinition>),
    /// Executable fragment definition.
    Fragment(Box<FragmentDefinition>),
    /// `schema { query: ... }`
    Schema(Box<SchemaDefinition>),
    /// `extend schema { ... }`
    SchemaExtension(Box<SchemaExtension>),
    /// One of the six type definition kinds.
    Type(Box<TypeDefinition>),
    /// One of the six type extension kinds.
    TypeExtension(Box<TypeExtension>),
    /// `directive @name(...) on ...`
    Directive(Box<DirectiveDefinition>),
}

/// A schema definition block binding root operation types.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub location: Location,
}

/// A schema extension block.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaExtension {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub location: Location,
}

/// A single `query: TypeName` binding inside a schema block.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationTypeDefinition {
    pub operation: OperationKind,
    pub ty: NamedType,
    pub location: Location,
}

/// The three root operation roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The lowercase keyword form used in schema blocks and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// The executable directive location for operations of this kind.
    pub fn directive_location(self) -> DirectiveLocation {
        match self {
            OperationKind::Query => DirectiveLocation::Query,
            OperationKind::Mutation => DirectiveLocation::Mutation,
            OperationKind::Subscription => DirectiveLocation::Subscription,
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type definition of any kind, sharing the common name/directives shape.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDefinition {
    pub name: Name,
    pub kind: TypeKind,
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// A type extension; structurally identical to a definition.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeExtension {
    pub name: Name,
    pub kind: TypeKind,
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// Kind-specific payload of a type definition or extension.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Scalar,
    Object(ObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    InputObject(InputObjectType),
}

impl TypeKind {
    /// The field-less discriminant of this kind.
    pub fn tag(&self) -> TypeTag {
        match self {
            TypeKind::Scalar => TypeTag::Scalar,
            TypeKind::Object(_) => TypeTag::Object,
            TypeKind::Interface(_) => TypeTag::Interface,
            TypeKind::Union(_) => TypeTag::Union,
            TypeKind::Enum(_) => TypeTag::Enum,
            TypeKind::InputObject(_) => TypeTag::InputObject,
        }
    }
}

/// Field-less discriminant for the six type kinds.
///
/// Shared between AST nodes and the schema snapshot interface so extension
/// kind matching works across both representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Scalar,
    Object,
    Interface,
    Union,
    Enum,
    InputObject,
}

impl TypeTag {
    /// The human-readable kind name used in extension diagnostics.
    pub fn kind_name(self) -> &'static str {
        match self {
            TypeTag::Scalar => "scalar",
            TypeTag::Object => "object",
            TypeTag::Interface => "interface",
            TypeTag::Union => "union",
            TypeTag::Enum => "enum",
            TypeTag::InputObject => "input object",
        }
    }

    /// The SDL directive location for definitions/extensions of this kind.
    pub fn directive_location(self) -> DirectiveLocation {
        match self {
            TypeTag::Scalar => DirectiveLocation::Scalar,
            TypeTag::Object => DirectiveLocation::Object,
            TypeTag::Interface => DirectiveLocation::Interface,
            TypeTag::Union => DirectiveLocation::Union,
            TypeTag::Enum => DirectiveLocation::Enum,
            TypeTag::InputObject => DirectiveLocation::InputObject,
        }
    }
}

/// Payload of an object type definition or extension.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub implements: Vec<NamedType>,
    pub fields: Vec<FieldDefinition>,
}

/// Payload of an interface type definition or extension.
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    pub implements: Vec<NamedType>,
    pub fields: Vec<FieldDefinition>,
}

/// Payload of a union type definition or extension.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub members: Vec<NamedType>,
}

/// Payload of an enum type definition or extension.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub values: Vec<EnumValueDefinition>,
}

/// Payload of an input object type definition or extension.
#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    pub fields: Vec<InputValueDefinition>,
}

/// An output field declaration on an object or interface type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub ty: TypeReference,
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// An input value declaration: a field argument, a directive argument, or
/// an input object field, depending on where it is embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueDefinition {
    pub name: Name,
    pub ty: TypeReference,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub location: Location,
}

impl InputValueDefinition {
    /// Whether a value for this input must be provided: non-null typed with
    /// no declared default.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && self.default_value.is_none()
    }
}

/// A value declaration inside an enum type.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValueDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// A directive definition (`directive @name(args) on LOCATIONS`).
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub locations: Vec<DirectiveLocationNode>,
    pub location: Location,
}

/// One permitted-location tag in a directive definition.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveLocationNode {
    pub value: DirectiveLocation,
    pub location: Location,
}

/// A directive usage attached to some construct.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub location: Location,
}

/// A named argument supplied to a directive usage or field selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub location: Location,
}

/// The closed enumeration of places a directive may be attached.
///
/// The variant names and their `Display` forms are a wire contract with the
/// directive-definition language; do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// The upper-snake wire name of this location.
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

impl fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
