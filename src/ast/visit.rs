//! Depth-first AST traversal with typed enter/leave callbacks.
//!
//! [`walk`] performs a pre-order traversal over every node of a document,
//! invoking the matching `enter_*` callback before descending into a node's
//! children and the matching `leave_*` after. Callbacks receive the live
//! ancestor stack (nearest ancestor last) so rules can answer "where is this
//! node embedded" questions without back-references on nodes.

use crate::ast::document::{
    Argument, Directive, DirectiveDefinition, Document, EnumValueDefinition, FieldDefinition,
    InputValueDefinition, OperationTypeDefinition, SchemaDefinition, SchemaExtension,
    TypeDefinition, TypeExtension, TypeKind,
};
use crate::ast::executable::{
    Field, FragmentDefinition, FragmentSpread, InlineFragment, OperationDefinition, Selection,
    VariableDefinition,
};
use crate::ast::types::{NamedType, ObjectField, ObjectValue, TypeReference, Value};
use crate::ast::Definition;

/// Callback result steering the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    /// Descend into children normally.
    #[default]
    Continue,
    /// Same traversal behavior as `Continue`, but signals that the visitor
    /// has produced a terminal diagnostic for this node and wants no further
    /// work from itself on the subtree.
    Ok,
    /// Do not descend into this node's children. The matching `leave_*`
    /// callback still fires.
    Skip,
}

/// Invokes `$mac!` with the full node-kind list.
///
/// Each entry is `(Variant, Type, enter_name, leave_name)`. The visitor
/// trait, the ancestor-stack node view, and the multi-rule combinator are
/// all generated from this single list so they cannot drift apart.
macro_rules! node_kinds {
    ($mac:ident) => {
        $mac! {
            (Document, crate::ast::Document, enter_document, leave_document),
            (OperationDefinition, crate::ast::OperationDefinition, enter_operation_definition, leave_operation_definition),
            (VariableDefinition, crate::ast::VariableDefinition, enter_variable_definition, leave_variable_definition),
            (Field, crate::ast::Field, enter_field, leave_field),
            (FragmentSpread, crate::ast::FragmentSpread, enter_fragment_spread, leave_fragment_spread),
            (InlineFragment, crate::ast::InlineFragment, enter_inline_fragment, leave_inline_fragment),
            (FragmentDefinition, crate::ast::FragmentDefinition, enter_fragment_definition, leave_fragment_definition),
            (Argument, crate::ast::Argument, enter_argument, leave_argument),
            (ObjectValue, crate::ast::ObjectValue, enter_object_value, leave_object_value),
            (ObjectField, crate::ast::ObjectField, enter_object_field, leave_object_field),
            (Directive, crate::ast::Directive, enter_directive, leave_directive),
            (NamedType, crate::ast::NamedType, enter_named_type, leave_named_type),
            (SchemaDefinition, crate::ast::SchemaDefinition, enter_schema_definition, leave_schema_definition),
            (SchemaExtension, crate::ast::SchemaExtension, enter_schema_extension, leave_schema_extension),
            (OperationTypeDefinition, crate::ast::OperationTypeDefinition, enter_operation_type_definition, leave_operation_type_definition),
            (TypeDefinition, crate::ast::TypeDefinition, enter_type_definition, leave_type_definition),
            (TypeExtension, crate::ast::TypeExtension, enter_type_extension, leave_type_extension),
            (FieldDefinition, crate::ast::FieldDefinition, enter_field_definition, leave_field_definition),
            (InputValueDefinition, crate::ast::InputValueDefinition, enter_input_value_definition, leave_input_value_definition),
            (EnumValueDefinition, crate::ast::EnumValueDefinition, enter_enum_value_definition, leave_enum_value_definition),
            (DirectiveDefinition, crate::ast::DirectiveDefinition, enter_directive_definition, leave_directive_definition),
        }
    };
}
pub(crate) use node_kinds;

macro_rules! declare_node_ref {
    ( $( ($variant:ident, $ty:ty, $enter:ident, $leave:ident) ),* $(,)? ) => {
        /// A shared reference to any visitable node, used for the ancestor
        /// stack exposed to callbacks.
        #[derive(Debug, Clone, Copy)]
        pub enum NodeRef<'a> {
            $( $variant(&'a $ty), )*
        }

        impl NodeRef<'_> {
            /// Type-erased address of the referenced node, usable as a
            /// node identity for the duration of a traversal.
            pub fn as_ptr(&self) -> *const () {
                match self {
                    $( NodeRef::$variant(node) => *node as *const _ as *const (), )*
                }
            }
        }
    };
}
node_kinds!(declare_node_ref);

impl NodeRef<'_> {
    /// Whether this node belongs to the type-system (SDL) language: a
    /// schema/type/directive definition or a schema/type extension.
    pub fn is_type_system(&self) -> bool {
        matches!(
            self,
            NodeRef::SchemaDefinition(_)
                | NodeRef::SchemaExtension(_)
                | NodeRef::TypeDefinition(_)
                | NodeRef::TypeExtension(_)
                | NodeRef::DirectiveDefinition(_)
        )
    }
}

macro_rules! declare_visitor {
    ( $( ($variant:ident, $ty:ty, $enter:ident, $leave:ident) ),* $(,)? ) => {
        /// Typed enter/leave callbacks over the closed node set.
        ///
        /// Every callback defaults to a no-op returning [`Control::Continue`],
        /// so visitors only implement the node kinds they care about.
        pub trait Visitor<'a> {
            $(
                fn $enter(&mut self, _node: &'a $ty, _ancestors: &[NodeRef<'a>]) -> Control {
                    Control::Continue
                }

                fn $leave(&mut self, _node: &'a $ty, _ancestors: &[NodeRef<'a>]) {}
            )*
        }
    };
}
node_kinds!(declare_visitor);

/// Walks `document` in pre-order, dispatching callbacks to `visitor`.
pub fn walk<'a, V>(document: &'a Document, visitor: &mut V)
where
    V: Visitor<'a> + ?Sized,
{
    Walker {
        ancestors: Vec::new(),
    }
    .visit_document(visitor, document);
}

/// Internal traversal state: the open ancestor stack.
struct Walker<'a> {
    ancestors: Vec<NodeRef<'a>>,
}

/// Expands to the enter/descend/leave sequence shared by every node kind.
macro_rules! visit_node {
    ($self:ident, $visitor:ident, $node:ident, $variant:ident, $enter:ident, $leave:ident, $descend:block) => {{
        if $visitor.$enter($node, &$self.ancestors) != Control::Skip {
            $self.ancestors.push(NodeRef::$variant($node));
            $descend
            $self.ancestors.pop();
        }
        $visitor.$leave($node, &$self.ancestors);
    }};
}

impl<'a> Walker<'a> {
    fn visit_document<V>(&mut self, visitor: &mut V, node: &'a Document)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(self, visitor, node, Document, enter_document, leave_document, {
            for definition in &node.definitions {
                self.visit_definition(visitor, definition);
            }
        });
    }

    fn visit_definition<V>(&mut self, visitor: &mut V, definition: &'a Definition)
    where
        V: Visitor<'a> + ?Sized,
    {
        match definition {
            Definition::Operation(node) => self.visit_operation_definition(visitor, node),
            Definition::Fragment(node) => self.visit_fragment_definition(visitor, node),
            Definition::Schema(node) => self.visit_schema_definition(visitor, node),
            Definition::SchemaExtension(node) => self.visit_schema_extension(visitor, node),
            Definition::Type(node) => self.visit_type_definition(visitor, node),
            Definition::TypeExtension(node) => self.visit_type_extension(visitor, node),
            Definition::Directive(node) => self.visit_directive_definition(visitor, node),
        }
    }

    fn visit_operation_definition<V>(&mut self, visitor: &mut V, node: &'a OperationDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            OperationDefinition,
            enter_operation_definition,
            leave_operation_definition,
            {
                for variable in &node.variable_definitions {
                    self.visit_variable_definition(visitor, variable);
                }
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
                for selection in &node.selection_set {
                    self.visit_selection(visitor, selection);
                }
            }
        );
    }

    fn visit_variable_definition<V>(&mut self, visitor: &mut V, node: &'a VariableDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            VariableDefinition,
            enter_variable_definition,
            leave_variable_definition,
            {
                self.visit_type_reference(visitor, &node.ty);
                if let Some(default_value) = &node.default_value {
                    self.visit_value(visitor, default_value);
                }
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
            }
        );
    }

    fn visit_selection<V>(&mut self, visitor: &mut V, selection: &'a Selection)
    where
        V: Visitor<'a> + ?Sized,
    {
        match selection {
            Selection::Field(node) => self.visit_field(visitor, node),
            Selection::FragmentSpread(node) => self.visit_fragment_spread(visitor, node),
            Selection::InlineFragment(node) => self.visit_inline_fragment(visitor, node),
        }
    }

    fn visit_field<V>(&mut self, visitor: &mut V, node: &'a Field)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(self, visitor, node, Field, enter_field, leave_field, {
            for argument in &node.arguments {
                self.visit_argument(visitor, argument);
            }
            for directive in &node.directives {
                self.visit_directive(visitor, directive);
            }
            for selection in &node.selection_set {
                self.visit_selection(visitor, selection);
            }
        });
    }

    fn visit_fragment_spread<V>(&mut self, visitor: &mut V, node: &'a FragmentSpread)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            FragmentSpread,
            enter_fragment_spread,
            leave_fragment_spread,
            {
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
            }
        );
    }

    fn visit_inline_fragment<V>(&mut self, visitor: &mut V, node: &'a InlineFragment)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            InlineFragment,
            enter_inline_fragment,
            leave_inline_fragment,
            {
                if let Some(type_condition) = &node.type_condition {
                    self.visit_named_type(visitor, type_condition);
                }
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
                for selection in &node.selection_set {
                    self.visit_selection(visitor, selection);
                }
            }
        );
    }

    fn visit_fragment_definition<V>(&mut self, visitor: &mut V, node: &'a FragmentDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            FragmentDefinition,
            enter_fragment_definition,
            leave_fragment_definition,
            {
                self.visit_named_type(visitor, &node.type_condition);
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
                for selection in &node.selection_set {
                    self.visit_selection(visitor, selection);
                }
            }
        );
    }

    fn visit_argument<V>(&mut self, visitor: &mut V, node: &'a Argument)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(self, visitor, node, Argument, enter_argument, leave_argument, {
            self.visit_value(visitor, &node.value);
        });
    }

    fn visit_value<V>(&mut self, visitor: &mut V, value: &'a Value)
    where
        V: Visitor<'a> + ?Sized,
    {
        match value {
            Value::List(list) => {
                for item in &list.values {
                    self.visit_value(visitor, item);
                }
            }
            Value::Object(object) => self.visit_object_value(visitor, object),
            _ => {}
        }
    }

    fn visit_object_value<V>(&mut self, visitor: &mut V, node: &'a ObjectValue)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            ObjectValue,
            enter_object_value,
            leave_object_value,
            {
                for field in &node.fields {
                    self.visit_object_field(visitor, field);
                }
            }
        );
    }

    fn visit_object_field<V>(&mut self, visitor: &mut V, node: &'a ObjectField)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            ObjectField,
            enter_object_field,
            leave_object_field,
            {
                self.visit_value(visitor, &node.value);
            }
        );
    }

    fn visit_directive<V>(&mut self, visitor: &mut V, node: &'a Directive)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(self, visitor, node, Directive, enter_directive, leave_directive, {
            for argument in &node.arguments {
                self.visit_argument(visitor, argument);
            }
        });
    }

    fn visit_type_reference<V>(&mut self, visitor: &mut V, ty: &'a TypeReference)
    where
        V: Visitor<'a> + ?Sized,
    {
        match ty {
            TypeReference::Named(named) => self.visit_named_type(visitor, named),
            TypeReference::List(inner, _) | TypeReference::NonNull(inner, _) => {
                self.visit_type_reference(visitor, inner)
            }
        }
    }

    fn visit_named_type<V>(&mut self, visitor: &mut V, node: &'a NamedType)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            NamedType,
            enter_named_type,
            leave_named_type,
            {}
        );
    }

    fn visit_schema_definition<V>(&mut self, visitor: &mut V, node: &'a SchemaDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            SchemaDefinition,
            enter_schema_definition,
            leave_schema_definition,
            {
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
                for operation_type in &node.operation_types {
                    self.visit_operation_type_definition(visitor, operation_type);
                }
            }
        );
    }

    fn visit_schema_extension<V>(&mut self, visitor: &mut V, node: &'a SchemaExtension)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            SchemaExtension,
            enter_schema_extension,
            leave_schema_extension,
            {
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
                for operation_type in &node.operation_types {
                    self.visit_operation_type_definition(visitor, operation_type);
                }
            }
        );
    }

    fn visit_operation_type_definition<V>(&mut self, visitor: &mut V, node: &'a OperationTypeDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            OperationTypeDefinition,
            enter_operation_type_definition,
            leave_operation_type_definition,
            {
                self.visit_named_type(visitor, &node.ty);
            }
        );
    }

    fn visit_type_definition<V>(&mut self, visitor: &mut V, node: &'a TypeDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            TypeDefinition,
            enter_type_definition,
            leave_type_definition,
            {
                self.visit_type_kind(visitor, &node.kind, &node.directives);
            }
        );
    }

    fn visit_type_extension<V>(&mut self, visitor: &mut V, node: &'a TypeExtension)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            TypeExtension,
            enter_type_extension,
            leave_type_extension,
            {
                self.visit_type_kind(visitor, &node.kind, &node.directives);
            }
        );
    }

    /// Children of a type definition or extension, in source order:
    /// implements clause, directives, then the kind-specific members.
    fn visit_type_kind<V>(&mut self, visitor: &mut V, kind: &'a TypeKind, directives: &'a [Directive])
    where
        V: Visitor<'a> + ?Sized,
    {
        match kind {
            TypeKind::Scalar => {
                for directive in directives {
                    self.visit_directive(visitor, directive);
                }
            }
            TypeKind::Object(object) => {
                for interface in &object.implements {
                    self.visit_named_type(visitor, interface);
                }
                for directive in directives {
                    self.visit_directive(visitor, directive);
                }
                for field in &object.fields {
                    self.visit_field_definition(visitor, field);
                }
            }
            TypeKind::Interface(interface) => {
                for implemented in &interface.implements {
                    self.visit_named_type(visitor, implemented);
                }
                for directive in directives {
                    self.visit_directive(visitor, directive);
                }
                for field in &interface.fields {
                    self.visit_field_definition(visitor, field);
                }
            }
            TypeKind::Union(union) => {
                for directive in directives {
                    self.visit_directive(visitor, directive);
                }
                for member in &union.members {
                    self.visit_named_type(visitor, member);
                }
            }
            TypeKind::Enum(enum_type) => {
                for directive in directives {
                    self.visit_directive(visitor, directive);
                }
                for value in &enum_type.values {
                    self.visit_enum_value_definition(visitor, value);
                }
            }
            TypeKind::InputObject(input_object) => {
                for directive in directives {
                    self.visit_directive(visitor, directive);
                }
                for field in &input_object.fields {
                    self.visit_input_value_definition(visitor, field);
                }
            }
        }
    }

    fn visit_field_definition<V>(&mut self, visitor: &mut V, node: &'a FieldDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            FieldDefinition,
            enter_field_definition,
            leave_field_definition,
            {
                for argument in &node.arguments {
                    self.visit_input_value_definition(visitor, argument);
                }
                self.visit_type_reference(visitor, &node.ty);
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
            }
        );
    }

    fn visit_input_value_definition<V>(&mut self, visitor: &mut V, node: &'a InputValueDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            InputValueDefinition,
            enter_input_value_definition,
            leave_input_value_definition,
            {
                self.visit_type_reference(visitor, &node.ty);
                if let Some(default_value) = &node.default_value {
                    self.visit_value(visitor, default_value);
                }
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
            }
        );
    }

    fn visit_enum_value_definition<V>(&mut self, visitor: &mut V, node: &'a EnumValueDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            EnumValueDefinition,
            enter_enum_value_definition,
            leave_enum_value_definition,
            {
                for directive in &node.directives {
                    self.visit_directive(visitor, directive);
                }
            }
        );
    }

    fn visit_directive_definition<V>(&mut self, visitor: &mut V, node: &'a DirectiveDefinition)
    where
        V: Visitor<'a> + ?Sized,
    {
        visit_node!(
            self,
            visitor,
            node,
            DirectiveDefinition,
            enter_directive_definition,
            leave_directive_definition,
            {
                for argument in &node.arguments {
                    self.visit_input_value_definition(visitor, argument);
                }
            }
        );
    }
}
