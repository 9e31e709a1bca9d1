//! Executable-language AST nodes.
//!
//! Only the shape the validator needs: operation and fragment definitions
//! carry directives whose permitted locations depend on these node kinds.

use crate::ast::document::{Argument, Directive, OperationKind};
use crate::ast::location::{Location, Name};
use crate::ast::types::{NamedType, TypeReference, Value};

/// An operation definition (query/mutation/subscription).
#[derive(Debug, Clone, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationKind,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: Location,
}

/// A variable declaration on an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDefinition {
    pub variable: Name,
    pub ty: TypeReference,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// One entry of a selection set.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Field(Box<Field>),
    FragmentSpread(FragmentSpread),
    InlineFragment(Box<InlineFragment>),
}

/// A field selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: Location,
}

/// A named fragment spread (`...FragmentName`).
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentSpread {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub location: Location,
}

/// An inline fragment (`... on Type { ... }`).
#[derive(Debug, Clone, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: Location,
}

/// A named fragment definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: Vec<Selection>,
    pub location: Location,
}
