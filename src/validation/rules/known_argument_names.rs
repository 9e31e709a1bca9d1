//! Arguments on directive usages must be declared on the definition.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{Control, Definition, Directive, NodeRef, Visitor};
use crate::diag::Diag;
use crate::suggest::{did_you_mean, suggestion_list};
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Reports directive-usage arguments that the directive's definition does
/// not declare, with suggestions drawn from the declared argument names.
/// Usages of directives with no reachable definition are left to the
/// known-directives rule.
pub struct KnownArgumentNames {
    sink: DiagnosticSink,
    arguments_by_directive: HashMap<SmolStr, Vec<SmolStr>>,
}

impl KnownArgumentNames {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        let mut arguments_by_directive: HashMap<SmolStr, Vec<SmolStr>> = context
            .schema()
            .map(|schema| {
                schema
                    .directive_definitions()
                    .into_iter()
                    .map(|directive| {
                        (
                            directive.name.clone(),
                            directive
                                .arguments
                                .iter()
                                .map(|argument| argument.name.clone())
                                .collect(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        for definition in &context.document().definitions {
            if let Definition::Directive(directive_definition) = definition {
                arguments_by_directive.insert(
                    directive_definition.name.value.clone(),
                    directive_definition
                        .arguments
                        .iter()
                        .map(|argument| argument.name.value.clone())
                        .collect(),
                );
            }
        }
        Self {
            sink: context.sink(),
            arguments_by_directive,
        }
    }
}

impl<'a> Visitor<'a> for KnownArgumentNames {
    fn enter_directive(&mut self, node: &'a Directive, _ancestors: &[NodeRef<'a>]) -> Control {
        let directive_name = node.name.as_str();
        if let Some(known_arguments) = self.arguments_by_directive.get(directive_name)
            && !known_arguments.is_empty()
        {
            for argument in &node.arguments {
                let argument_name = argument.name.as_str();
                if !known_arguments.iter().any(|known| known == argument_name) {
                    let suggestions = suggestion_list(argument_name, known_arguments.iter());
                    self.sink.push(
                        Diag::error(format!(
                            "Unknown argument < {argument_name} > on directive < @{directive_name} >.{}",
                            did_you_mean(&suggestions)
                        ))
                        .with_location(argument.location),
                    );
                }
            }
        }
        Control::Skip
    }
}
