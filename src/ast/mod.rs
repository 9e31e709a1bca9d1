//! AST foundation types, node structures, and traversal.

mod document;
mod executable;
mod location;
mod types;
pub mod visit;

pub use document::{
    Argument, Definition, Directive, DirectiveDefinition, DirectiveLocation,
    DirectiveLocationNode, Document, EnumType, EnumValueDefinition, FieldDefinition,
    InputObjectType, InputValueDefinition, InterfaceType, ObjectType, OperationKind,
    OperationTypeDefinition, SchemaDefinition, SchemaExtension, TypeDefinition, TypeExtension,
    TypeKind, TypeTag, UnionType,
};
pub use executable::{
    Field, FragmentDefinition, FragmentSpread, InlineFragment, OperationDefinition, Selection,
    VariableDefinition,
};
pub use location::{Location, Name};
pub use types::{ListValue, NamedType, ObjectField, ObjectValue, TypeReference, Value};
pub use visit::{walk, Control, NodeRef, Visitor};
