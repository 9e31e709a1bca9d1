//! Every referenced type name must be defined somewhere.

use std::collections::HashSet;

use smol_str::SmolStr;

use crate::ast::{Control, Definition, NamedType, NodeRef, Visitor};
use crate::diag::Diag;
use crate::suggest::{did_you_mean, suggestion_list};
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Scalar names treated as implicitly defined while checking type-system
/// documents. Intentionally empty: the engine materializes its built-in
/// scalars as explicit definitions before validation runs, so nothing is
/// implicit at this stage.
pub(crate) const SPECIFIED_SCALAR_TYPES: &[&str] = &[];

/// Reports named-type references that resolve neither against the base
/// schema nor against any type definition in the document, with suggestions
/// drawn from both.
pub struct KnownTypeNames {
    sink: DiagnosticSink,
    known: HashSet<SmolStr>,
    /// Suggestion candidates: schema type names first, then document type
    /// definitions in source order.
    candidates: Vec<SmolStr>,
}

impl KnownTypeNames {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        let mut candidates: Vec<SmolStr> = context
            .schema()
            .map(|schema| schema.type_names())
            .unwrap_or_default();
        for definition in &context.document().definitions {
            if let Definition::Type(type_definition) = definition {
                candidates.push(type_definition.name.value.clone());
            }
        }
        let known = candidates.iter().cloned().collect();
        Self {
            sink: context.sink(),
            known,
            candidates,
        }
    }
}

impl<'a> Visitor<'a> for KnownTypeNames {
    fn enter_named_type(&mut self, node: &'a NamedType, ancestors: &[NodeRef<'a>]) -> Control {
        let type_name = node.name.as_str();
        if self.known.contains(type_name) {
            return Control::Continue;
        }

        // The top-level definition this reference lives under, or the direct
        // parent when the reference is itself (nearly) top-level.
        let definition = ancestors.get(1).or_else(|| ancestors.last());
        let is_sdl = definition.is_some_and(|node| node.is_type_system());

        if is_sdl && SPECIFIED_SCALAR_TYPES.contains(&type_name) {
            return Control::Ok;
        }

        let pool: Vec<&str> = if is_sdl {
            SPECIFIED_SCALAR_TYPES
                .iter()
                .copied()
                .chain(self.candidates.iter().map(SmolStr::as_str))
                .collect()
        } else {
            self.candidates.iter().map(SmolStr::as_str).collect()
        };
        let suggestions = suggestion_list(type_name, pool.iter());

        self.sink.push(
            Diag::error(format!(
                "Unknown type < {type_name} >.{}",
                did_you_mean(&suggestions)
            ))
            .with_location(node.location),
        );
        Control::Continue
    }
}
