//! Required directive arguments must be supplied.

use std::collections::HashMap;

use smol_str::SmolStr;

use crate::ast::{Definition, Directive, NodeRef, Visitor};
use crate::diag::Diag;
use crate::validation::context::{DiagnosticSink, ValidationContext};

/// Reports directive usages missing an argument their definition marks
/// required (non-null typed, no default). Checked on leave so the rendered
/// message follows any per-argument diagnostics for the same usage. The
/// declared type is captured in rendered form for the message.
pub struct ProvidedRequiredArguments {
    sink: DiagnosticSink,
    /// Required arguments per directive, in declaration order: name and
    /// rendered type.
    required_by_directive: HashMap<SmolStr, Vec<(SmolStr, String)>>,
}

impl ProvidedRequiredArguments {
    pub fn new(context: &ValidationContext<'_>) -> Self {
        let mut required_by_directive: HashMap<SmolStr, Vec<(SmolStr, String)>> = context
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
                                .filter(|argument| argument.is_required())
                                .map(|argument| {
                                    (argument.name.clone(), argument.ty.to_string())
                                })
                                .collect(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default();
        for definition in &context.document().definitions {
            if let Definition::Directive(directive_definition) = definition {
                required_by_directive.insert(
                    directive_definition.name.value.clone(),
                    directive_definition
                        .arguments
                        .iter()
                        .filter(|argument| argument.is_required())
                        .map(|argument| (argument.name.value.clone(), argument.ty.to_string()))
                        .collect(),
                );
            }
        }
        Self {
            sink: context.sink(),
            required_by_directive,
        }
    }
}

impl<'a> Visitor<'a> for ProvidedRequiredArguments {
    fn leave_directive(&mut self, node: &'a Directive, _ancestors: &[NodeRef<'a>]) {
        let directive_name = node.name.as_str();
        let Some(required_arguments) = self.required_by_directive.get(directive_name) else {
            return;
        };

        for (argument_name, argument_type) in required_arguments {
            let provided = node
                .arguments
                .iter()
                .any(|argument| argument.name.value == *argument_name);
            if !provided {
                self.sink.push(
                    Diag::error(format!(
                        "Directive < {directive_name} > argument < {argument_name} > of type < {argument_type} > required, but it was not provided.",
                    ))
                    .with_location(node.location),
                );
            }
        }
    }
}
