//! Schema trait for schema-aware validation.
//!
//! Validation works without a schema, but several rules get stronger when
//! one is supplied: types and directives the schema already knows count as
//! known names, collide with document redefinitions, and constrain the
//! possible type extensions.

use smol_str::SmolStr;

use crate::ast::{DirectiveLocation, TypeTag};

/// A type known to the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaType {
    /// The type name.
    pub name: SmolStr,

    /// Which kind of type this is (object, interface, enum, ...).
    pub kind: TypeTag,

    /// Field names defined on this type (object/interface/input object).
    pub fields: Vec<SmolStr>,

    /// Value names defined on this type (enum only).
    pub enum_values: Vec<SmolStr>,
}

impl SchemaType {
    /// Returns true if this type defines a field with the given name.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field == name)
    }

    /// Returns true if this enum defines a value with the given name.
    pub fn has_value(&self, name: &str) -> bool {
        self.enum_values.iter().any(|value| value == name)
    }
}

/// A type expression on a schema argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaTypeRef {
    Named(SmolStr),
    List(Box<SchemaTypeRef>),
    NonNull(Box<SchemaTypeRef>),
}

impl SchemaTypeRef {
    /// Returns true for the non-null wrapper at the top level.
    pub fn is_non_null(&self) -> bool {
        matches!(self, SchemaTypeRef::NonNull(_))
    }
}

impl std::fmt::Display for SchemaTypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaTypeRef::Named(name) => write!(f, "{}", name),
            SchemaTypeRef::List(inner) => write!(f, "[{}]", inner),
            SchemaTypeRef::NonNull(inner) => write!(f, "{}!", inner),
        }
    }
}

/// An argument declared on a schema directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaArgument {
    /// The argument name.
    pub name: SmolStr,

    /// The argument's declared type.
    pub ty: SchemaTypeRef,

    /// Whether the declaration carries a default value.
    pub has_default: bool,
}

impl SchemaArgument {
    /// A required argument is non-null with no default value.
    pub fn is_required(&self) -> bool {
        self.ty.is_non_null() && !self.has_default
    }
}

/// A directive known to the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDirective {
    /// The directive name, without the leading `@`.
    pub name: SmolStr,

    /// The locations where this directive may appear.
    pub locations: Vec<DirectiveLocation>,

    /// The directive's declared arguments.
    pub arguments: Vec<SchemaArgument>,
}

impl SchemaDirective {
    /// Returns true if the directive is allowed at the given location.
    pub fn allows(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    /// Looks up a declared argument by name.
    pub fn find_argument(&self, name: &str) -> Option<&SchemaArgument> {
        self.arguments.iter().find(|argument| argument.name == name)
    }
}

/// Trait for schema access during validation.
///
/// Implement this to layer an existing schema underneath a document: names
/// the schema knows are treated as already defined, so redefining them in
/// the document is reported and extending them is permitted.
pub trait Schema {
    /// Looks up a type by name.
    fn find_type(&self, name: &str) -> Option<&SchemaType>;

    /// All type names the schema knows, in declaration order.
    fn type_names(&self) -> Vec<SmolStr>;

    /// Looks up a directive definition by name (without the `@`).
    fn find_directive(&self, name: &str) -> Option<&SchemaDirective>;

    /// All directive definitions the schema knows, in declaration order.
    fn directive_definitions(&self) -> Vec<&SchemaDirective>;

    /// Returns true if the schema defines a type with this name.
    fn has_type(&self, name: &str) -> bool {
        self.find_type(name).is_some()
    }

    /// Returns true if the schema defines a directive with this name.
    fn has_directive(&self, name: &str) -> bool {
        self.find_directive(name).is_some()
    }

    /// The schema's configured query root type name, if any.
    fn query_type(&self) -> Option<SmolStr> {
        None
    }

    /// The schema's configured mutation root type name, if any.
    fn mutation_type(&self) -> Option<SmolStr> {
        None
    }

    /// The schema's configured subscription root type name, if any.
    fn subscription_type(&self) -> Option<SmolStr> {
        None
    }
}

/// Mock schema implementation for testing.
///
/// A simple in-memory schema used in tests for schema-aware validation.
#[derive(Debug, Clone, Default)]
pub struct MockSchema {
    /// Types in the schema.
    pub types: Vec<SchemaType>,

    /// Directive definitions in the schema.
    pub directives: Vec<SchemaDirective>,

    /// Root operation type names, if configured.
    pub query_root: Option<SmolStr>,
    pub mutation_root: Option<SmolStr>,
    pub subscription_root: Option<SmolStr>,
}

impl MockSchema {
    /// Creates a new empty mock schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type with the given kind and no members.
    pub fn add_type(&mut self, name: impl Into<SmolStr>, kind: TypeTag) {
        self.types.push(SchemaType {
            name: name.into(),
            kind,
            fields: Vec::new(),
            enum_values: Vec::new(),
        });
    }

    /// Adds an object type with the given field names.
    pub fn add_object_type<I, S>(&mut self, name: impl Into<SmolStr>, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.types.push(SchemaType {
            name: name.into(),
            kind: TypeTag::Object,
            fields: fields.into_iter().map(Into::into).collect(),
            enum_values: Vec::new(),
        });
    }

    /// Adds an enum type with the given value names.
    pub fn add_enum_type<I, S>(&mut self, name: impl Into<SmolStr>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.types.push(SchemaType {
            name: name.into(),
            kind: TypeTag::Enum,
            fields: Vec::new(),
            enum_values: values.into_iter().map(Into::into).collect(),
        });
    }

    /// Adds a directive definition.
    pub fn add_directive(
        &mut self,
        name: impl Into<SmolStr>,
        locations: Vec<DirectiveLocation>,
        arguments: Vec<SchemaArgument>,
    ) {
        self.directives.push(SchemaDirective {
            name: name.into(),
            locations,
            arguments,
        });
    }

    /// Creates a test schema resembling a minimal executable schema:
    /// built-in scalars, a Query root, and the `skip`/`include`/`deprecated`
    /// directives.
    pub fn example() -> Self {
        let mut schema = Self::new();

        schema.add_type("String", TypeTag::Scalar);
        schema.add_type("Int", TypeTag::Scalar);
        schema.add_type("Float", TypeTag::Scalar);
        schema.add_type("Boolean", TypeTag::Scalar);
        schema.add_type("ID", TypeTag::Scalar);

        schema.add_object_type("Query", ["hello"]);
        schema.query_root = Some(SmolStr::new("Query"));

        let condition = SchemaArgument {
            name: SmolStr::new("if"),
            ty: SchemaTypeRef::NonNull(Box::new(SchemaTypeRef::Named(SmolStr::new("Boolean")))),
            has_default: false,
        };
        let executable_locations = vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
            DirectiveLocation::InlineFragment,
        ];
        schema.add_directive("skip", executable_locations.clone(), vec![condition.clone()]);
        schema.add_directive("include", executable_locations, vec![condition]);

        schema.add_directive(
            "deprecated",
            vec![
                DirectiveLocation::FieldDefinition,
                DirectiveLocation::EnumValue,
            ],
            vec![SchemaArgument {
                name: SmolStr::new("reason"),
                ty: SchemaTypeRef::Named(SmolStr::new("String")),
                has_default: true,
            }],
        );

        schema
    }
}

impl Schema for MockSchema {
    fn find_type(&self, name: &str) -> Option<&SchemaType> {
        self.types.iter().find(|ty| ty.name == name)
    }

    fn type_names(&self) -> Vec<SmolStr> {
        self.types.iter().map(|ty| ty.name.clone()).collect()
    }

    fn find_directive(&self, name: &str) -> Option<&SchemaDirective> {
        self.directives.iter().find(|directive| directive.name == name)
    }

    fn directive_definitions(&self) -> Vec<&SchemaDirective> {
        self.directives.iter().collect()
    }

    fn query_type(&self) -> Option<SmolStr> {
        self.query_root.clone()
    }

    fn mutation_type(&self) -> Option<SmolStr> {
        self.mutation_root.clone()
    }

    fn subscription_type(&self) -> Option<SmolStr> {
        self.subscription_root.clone()
    }
}
