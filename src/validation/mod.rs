//! Semantic validation of SDL documents.
//!
//! One pre-order traversal drives every configured rule through the
//! [`ParallelVisitor`] combinator. Diagnostics come back in a fully
//! deterministic order: rule-configuration order at each node, document
//! source order across nodes.

mod context;
mod multi;
pub mod rules;

pub use context::{DiagnosticSink, ValidationContext};
pub use multi::ParallelVisitor;

use crate::ast::{walk, Document, Visitor};
use crate::diag::Diag;
use crate::schema::Schema;

/// The closed catalog of SDL validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdlRule {
    LoneSchemaDefinition,
    UniqueOperationTypes,
    UniqueTypeNames,
    UniqueEnumValueNames,
    UniqueFieldDefinitionNames,
    UniqueDirectiveNames,
    KnownTypeNames,
    KnownDirectives,
    UniqueDirectivesPerLocation,
    PossibleTypeExtensions,
    KnownArgumentNames,
    UniqueArgumentNames,
    UniqueInputFieldNames,
    ProvidedRequiredArguments,
}

impl SdlRule {
    fn instantiate<'a>(self, context: &ValidationContext<'a>) -> Box<dyn Visitor<'a> + 'a> {
        match self {
            SdlRule::LoneSchemaDefinition => Box::new(rules::LoneSchemaDefinition::new(context)),
            SdlRule::UniqueOperationTypes => Box::new(rules::UniqueOperationTypes::new(context)),
            SdlRule::UniqueTypeNames => Box::new(rules::UniqueTypeNames::new(context)),
            SdlRule::UniqueEnumValueNames => Box::new(rules::UniqueEnumValueNames::new(context)),
            SdlRule::UniqueFieldDefinitionNames => {
                Box::new(rules::UniqueFieldDefinitionNames::new(context))
            }
            SdlRule::UniqueDirectiveNames => Box::new(rules::UniqueDirectiveNames::new(context)),
            SdlRule::KnownTypeNames => Box::new(rules::KnownTypeNames::new(context)),
            SdlRule::KnownDirectives => Box::new(rules::KnownDirectives::new(context)),
            SdlRule::UniqueDirectivesPerLocation => {
                Box::new(rules::UniqueDirectivesPerLocation::new(context))
            }
            SdlRule::PossibleTypeExtensions => {
                Box::new(rules::PossibleTypeExtensions::new(context))
            }
            SdlRule::KnownArgumentNames => Box::new(rules::KnownArgumentNames::new(context)),
            SdlRule::UniqueArgumentNames => Box::new(rules::UniqueArgumentNames::new(context)),
            SdlRule::UniqueInputFieldNames => Box::new(rules::UniqueInputFieldNames::new(context)),
            SdlRule::ProvidedRequiredArguments => {
                Box::new(rules::ProvidedRequiredArguments::new(context))
            }
        }
    }
}

/// The default rule set, in the order rules observe each node.
pub const SPECIFIED_SDL_RULES: &[SdlRule] = &[
    SdlRule::LoneSchemaDefinition,
    SdlRule::UniqueOperationTypes,
    SdlRule::UniqueTypeNames,
    SdlRule::UniqueEnumValueNames,
    SdlRule::UniqueFieldDefinitionNames,
    SdlRule::UniqueDirectiveNames,
    SdlRule::KnownTypeNames,
    SdlRule::KnownDirectives,
    SdlRule::UniqueDirectivesPerLocation,
    SdlRule::PossibleTypeExtensions,
    SdlRule::KnownArgumentNames,
    SdlRule::UniqueArgumentNames,
    SdlRule::UniqueInputFieldNames,
    SdlRule::ProvidedRequiredArguments,
];

/// Configurable SDL validator.
///
/// Wraps a rule list and an optional base schema to validate documents
/// against; [`validate_sdl`] covers the common single-shot case.
pub struct SdlValidator<'a> {
    schema: Option<&'a dyn Schema>,
    rules: Vec<SdlRule>,
}

impl<'a> SdlValidator<'a> {
    /// Creates a validator with the full default rule set and no schema.
    pub fn new() -> Self {
        Self {
            schema: None,
            rules: SPECIFIED_SDL_RULES.to_vec(),
        }
    }

    /// Validates documents as extensions of the given schema.
    pub fn with_schema(mut self, schema: &'a dyn Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Replaces the rule set, keeping the given order.
    pub fn with_rules(mut self, rules: impl Into<Vec<SdlRule>>) -> Self {
        self.rules = rules.into();
        self
    }

    /// Runs all configured rules over `document` in one traversal.
    pub fn validate(&self, document: &Document) -> Vec<Diag> {
        let context = ValidationContext::new(document, self.schema);
        let visitors = self
            .rules
            .iter()
            .map(|rule| rule.instantiate(&context))
            .collect();
        let mut combined = ParallelVisitor::new(visitors);
        walk(document, &mut combined);
        context.take_errors()
    }
}

impl Default for SdlValidator<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates an SDL document with the default rules.
pub fn validate_sdl(document: &Document, schema: Option<&dyn Schema>) -> Vec<Diag> {
    let mut validator = SdlValidator::new();
    if let Some(schema) = schema {
        validator = validator.with_schema(schema);
    }
    validator.validate(document)
}
