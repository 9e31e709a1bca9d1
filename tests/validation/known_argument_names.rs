use crate::common::*;
use sdl_validator::ast::{DirectiveLocation, Document, Value};
use sdl_validator::schema::MockSchema;
use sdl_validator::{Diag, SdlRule, SdlValidator};

fn validate(document: &Document) -> Vec<Diag> {
    SdlValidator::new()
        .with_rules([SdlRule::KnownArgumentNames])
        .validate(document)
}

#[test]
fn declared_argument_is_valid() {
    // directive @test(arg: String) on FIELD_DEFINITION
    // type Query { foo: String @test(arg: "value") }
    let doc = document(vec![
        directive_def(
            name_at("test", 1, 12),
            vec![input_value(name_at("arg", 1, 17), type_ref_at("String", 1, 22))],
            vec![DirectiveLocation::FieldDefinition],
        ),
        object_def(
            name_at("Query", 2, 6),
            vec![field_def_with_directives(
                name_at("foo", 2, 14),
                type_ref_at("String", 2, 19),
                vec![directive(
                    name_at("test", 2, 27),
                    vec![argument(
                        name_at("arg", 2, 32),
                        Value::String("value".into(), span(2, 37, 44)),
                        span(2, 32, 44),
                    )],
                    span(2, 26, 45),
                )],
            )],
        ),
    ]);
    assert_no_validation_errors(&validate(&doc));
}

#[test]
fn unknown_argument_on_schema_directive() {
    let schema = MockSchema::example();

    // type Query { dog: String @skip(iff: true) }
    let doc = document(vec![object_def(
        name_at("Query", 1, 6),
        vec![field_def_with_directives(
            name_at("dog", 1, 14),
            type_ref_at("String", 1, 19),
            vec![directive(
                name_at("skip", 1, 27),
                vec![argument(
                    name_at("iff", 1, 32),
                    Value::Boolean(true, span(1, 37, 41)),
                    span(1, 32, 41),
                )],
                span(1, 26, 42),
            )],
        )],
    )]);
    let diagnostics = SdlValidator::new()
        .with_schema(&schema)
        .with_rules([SdlRule::KnownArgumentNames])
        .validate(&doc);
    assert_errors(
        &diagnostics,
        &[(
            "Unknown argument < iff > on directive < @skip >.Did you mean if?",
            vec![span(1, 32, 41)],
        )],
    );
}

#[test]
fn misspelled_argument_on_document_directive() {
    // directive @test(arg: String) on FIELD_DEFINITION
    // type Query { foo: String @test(agr: "") }
    let doc = document(vec![
        directive_def(
            name_at("test", 1, 12),
            vec![input_value(name_at("arg", 1, 17), type_ref_at("String", 1, 22))],
            vec![DirectiveLocation::FieldDefinition],
        ),
        object_def(
            name_at("Query", 2, 6),
            vec![field_def_with_directives(
                name_at("foo", 2, 14),
                type_ref_at("String", 2, 19),
                vec![directive(
                    name_at("test", 2, 27),
                    vec![argument(
                        name_at("agr", 2, 32),
                        Value::String("".into(), span(2, 37, 39)),
                        span(2, 32, 39),
                    )],
                    span(2, 26, 40),
                )],
            )],
        ),
    ]);
    assert_errors(
        &validate(&doc),
        &[(
            "Unknown argument < agr > on directive < @test >.Did you mean arg?",
            vec![span(2, 32, 39)],
        )],
    );
}

#[test]
fn directive_without_declared_arguments_is_not_checked() {
    // directive @bare on FIELD_DEFINITION
    // type Query { foo: String @bare(arg: true) }
    let doc = document(vec![
        directive_def(name_at("bare", 1, 12), vec![], vec![
            DirectiveLocation::FieldDefinition,
        ]),
        object_def(
            name_at("Query", 2, 6),
            vec![field_def_with_directives(
                name_at("foo", 2, 14),
                type_ref_at("String", 2, 19),
                vec![directive(
                    name_at("bare", 2, 27),
                    vec![argument(
                        name_at("arg", 2, 32),
                        Value::Boolean(true, span(2, 37, 41)),
                        span(2, 32, 41),
                    )],
                    span(2, 26, 42),
                )],
            )],
        ),
    ]);
    assert_no_validation_errors(&validate(&doc));
}

#[test]
fn undefined_directive_is_not_checked() {
    // Left to the known-directives rule.
    // type Query { foo: String @mystery(arg: true) }
    let doc = document(vec![object_def(
        name_at("Query", 1, 6),
        vec![field_def_with_directives(
            name_at("foo", 1, 14),
            type_ref_at("String", 1, 19),
            vec![directive(
                name_at("mystery", 1, 27),
                vec![argument(
                    name_at("arg", 1, 35),
                    Value::Boolean(true, span(1, 40, 44)),
                    span(1, 35, 44),
                )],
                span(1, 26, 45),
            )],
        )],
    )]);
    assert_no_validation_errors(&validate(&doc));
}

#[test]
fn each_unknown_argument_is_reported() {
    // directive @test(arg: String) on FIELD_DEFINITION
    // type Query { foo: String @test(one: "", two: "") }
    let doc = document(vec![
        directive_def(
            name_at("test", 1, 12),
            vec![input_value(name_at("arg", 1, 17), type_ref_at("String", 1, 22))],
            vec![DirectiveLocation::FieldDefinition],
        ),
        object_def(
            name_at("Query", 2, 6),
            vec![field_def_with_directives(
                name_at("foo", 2, 14),
                type_ref_at("String", 2, 19),
                vec![directive(
                    name_at("test", 2, 27),
                    vec![
                        argument(
                            name_at("one", 2, 32),
                            Value::String("".into(), span(2, 37, 39)),
                            span(2, 32, 39),
                        ),
                        argument(
                            name_at("two", 2, 41),
                            Value::String("".into(), span(2, 46, 48)),
                            span(2, 41, 48),
                        ),
                    ],
                    span(2, 26, 49),
                )],
            )],
        ),
    ]);
    assert_errors(
        &validate(&doc),
        &[
            (
                "Unknown argument < one > on directive < @test >.",
                vec![span(2, 32, 39)],
            ),
            (
                "Unknown argument < two > on directive < @test >.",
                vec![span(2, 41, 48)],
            ),
        ],
    );
}
