//! The SDL rule catalog.
//!
//! Every rule is an independent visitor constructed from the validation
//! context. Rules precompute their name tables up front (the document and
//! schema are immutable for the pass), register interest in the node kinds
//! they care about, and push diagnostics into the shared sink.

mod known_argument_names;
mod known_directives;
mod known_type_names;
mod lone_schema_definition;
mod possible_type_extensions;
mod provided_required_arguments;
mod unique_argument_names;
mod unique_directive_names;
mod unique_directives_per_location;
mod unique_enum_value_names;
mod unique_field_definition_names;
mod unique_input_field_names;
mod unique_operation_types;
mod unique_type_names;

pub use known_argument_names::KnownArgumentNames;
pub use known_directives::KnownDirectives;
pub use known_type_names::KnownTypeNames;
pub use lone_schema_definition::LoneSchemaDefinition;
pub use possible_type_extensions::PossibleTypeExtensions;
pub use provided_required_arguments::ProvidedRequiredArguments;
pub use unique_argument_names::UniqueArgumentNames;
pub use unique_directive_names::UniqueDirectiveNames;
pub use unique_directives_per_location::UniqueDirectivesPerLocation;
pub use unique_enum_value_names::UniqueEnumValueNames;
pub use unique_field_definition_names::UniqueFieldDefinitionNames;
pub use unique_input_field_names::UniqueInputFieldNames;
pub use unique_operation_types::UniqueOperationTypes;
pub use unique_type_names::UniqueTypeNames;
