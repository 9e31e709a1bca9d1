//! Every used directive must be defined and allowed where it appears.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{
    Control, Definition, Directive, DirectiveLocation, NodeRef, TypeTag, Visitor,
};
use crate::diag::Diag;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// The directive location a usage occupies, derived from its direct parent
/// on the ancestor stack.
fn directive_location_for(ancestors: &[NodeRef<'_>]) -> Option<DirectiveLocation> {
    Some(match ancestors.last()? {
        NodeRef::OperationDefinition(operation) => operation.operation.directive_location(),
        // An input value definition is an input object field only when its
        // own parent is an input object type definition; everywhere else
        // (field arguments, directive arguments) it is an argument.
        NodeRef::InputValueDefinition(_) => {
            let grandparent = ancestors.len().checked_sub(2).and_then(|i| ancestors.get(i));
            match grandparent {
                Some(NodeRef::TypeDefinition(definition))
                    if definition.kind.tag() == TypeTag::InputObject =>
                {
                    DirectiveLocation::InputFieldDefinition
                }
                _ => DirectiveLocation::ArgumentDefinition,
            }
        }
        NodeRef::Field(_) => DirectiveLocation::Field,
        NodeRef::FragmentSpread(_) => DirectiveLocation::FragmentSpread,
        NodeRef::InlineFragment(_) => DirectiveLocation::InlineFragment,
        NodeRef::FragmentDefinition(_) => DirectiveLocation::FragmentDefinition,
        NodeRef::VariableDefinition(_) => DirectiveLocation::VariableDefinition,
        NodeRef::SchemaDefinition(_) | NodeRef::SchemaExtension(_) => DirectiveLocation::Schema,
        NodeRef::TypeDefinition(definition) => definition.kind.tag().directive_location(),
        NodeRef::TypeExtension(extension) => extension.kind.tag().directive_location(),
        NodeRef::FieldDefinition(_) => DirectiveLocation::FieldDefinition,
        NodeRef::EnumValueDefinition(_) => DirectiveLocation::EnumValue,
        _ => return None,
    })
}

/// Reports usages of undefined directives and directives applied in a
/// location their definition does not allow. Document-declared definitions
/// shadow same-named schema definitions.
pub struct KnownDirectives {
    sink: DiagnosticSink,
    locations_by_directive: HashMap<SmolStr, Vec<DirectiveLocation>>,
}

impl KnownDirectives {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        let mut locations_by_directive: HashMap<SmolStr, Vec<DirectiveLocation>> = context
            .schema()
            .map(|schema| {
                schema
                    .directive_definitions()
                    .into_iter()
                    .map(|directive| (directive.name.clone(), directive.locations.clone()))
                    .collect()
            })
            .unwrap_or_default();
        for definition in &context.document().definitions {
            if let Definition::Directive(directive_definition) = definition {
                locations_by_directive.insert(
                    directive_definition.name.value.clone(),
                    directive_definition
                        .locations
                        .iter()
                        .map(|location| location.value)
                        .collect(),
                );
            }
        }
        Self {
            sink: context.sink(),
            locations_by_directive,
        }
    }
}

impl<'a> Visitor<'a> for KnownDirectives {
    fn enter_directive(&mut self, node: &'a Directive, ancestors: &[NodeRef<'a>]) -> Control {
        let directive_name = node.name.as_str();
        let Some(allowed) = self.locations_by_directive.get(directive_name) else {
            self.sink.push(
                Diag::error(format!("Unknown directive < {directive_name} >."))
                    .with_location(node.location),
            );
            return Control::Ok;
        };

        if let Some(candidate) = directive_location_for(ancestors)
            && !allowed.contains(&candidate)
        {
            self.sink.push(
                Diag::error(format!(
                    "Directive < {directive_name} > may not be used on {candidate}.",
                ))
                .with_location(node.location),
            );
        }
        Control::Continue
    }
}
