//! Type references and input value literals.

use std::fmt;

use smol_str::SmolStr;

use crate::ast::location::{Location, Name};

/// A reference to a named type (e.g. `User` in `field: User`).
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub location: Location,
}

impl NamedType {
    /// Creates a named-type reference whose span equals its name span.
    pub fn new(name: Name) -> Self {
        let location = name.location;
        Self { name, location }
    }
}

/// A type reference as written in source: named, list-wrapped, or non-null.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeReference {
    Named(NamedType),
    List(Box<TypeReference>, Location),
    NonNull(Box<TypeReference>, Location),
}

impl TypeReference {
    /// The innermost named type of this reference.
    pub fn innermost(&self) -> &NamedType {
        match self {
            TypeReference::Named(named) => named,
            TypeReference::List(inner, _) | TypeReference::NonNull(inner, _) => inner.innermost(),
        }
    }

    /// Whether the outermost wrapper is non-null.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeReference::NonNull(..))
    }

    /// The source span of this reference.
    pub fn location(&self) -> Location {
        match self {
            TypeReference::Named(named) => named.location,
            TypeReference::List(_, location) | TypeReference::NonNull(_, location) => *location,
        }
    }
}

impl fmt::Display for TypeReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeReference::Named(named) => f.write_str(named.name.as_str()),
            TypeReference::List(inner, _) => write!(f, "[{inner}]"),
            TypeReference::NonNull(inner, _) => write!(f, "{inner}!"),
        }
    }
}

/// An input value literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A variable usage (`$name`).
    Variable(Name, Location),
    Int(i64, Location),
    Float(f64, Location),
    String(SmolStr, Location),
    Boolean(bool, Location),
    Null(Location),
    /// An enum value literal (bare identifier).
    Enum(Name, Location),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    /// The source span of this value.
    pub fn location(&self) -> Location {
        match self {
            Value::Variable(_, location)
            | Value::Int(_, location)
            | Value::Float(_, location)
            | Value::String(_, location)
            | Value::Boolean(_, location)
            | Value::Null(location)
            | Value::Enum(_, location) => *location,
            Value::List(list) => list.location,
            Value::Object(object) => object.location,
        }
    }
}

/// A list value literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub location: Location,
}

/// An input object value literal (`{ a: 1, b: 2 }`).
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub location: Location,
}

/// A single field of an input object value literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub location: Location,
}
