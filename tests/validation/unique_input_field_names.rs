use crate::common::*;
use sdl_validator::ast::{Document, ObjectField, ObjectValue, Value};
use sdl_validator::{Diag, SdlRule, SdlValidator};

fn validate(document: &Document) -> Vec<Diag> {
    SdlValidator::new()
        .with_rules([SdlRule::UniqueInputFieldNames])
        .validate(document)
}

fn object_value(fields: Vec<ObjectField>) -> Value {
    Value::Object(ObjectValue {
        fields,
        location: anywhere(),
    })
}

fn object_field(name: sdl_validator::ast::Name, value: Value) -> ObjectField {
    ObjectField {
        location: name.location,
        name,
        value,
    }
}

/// A directive usage carrying the given value as its single argument,
/// attached to a minimal object type.
fn document_with_argument_value(value: Value) -> Document {
    document(vec![object_def(
        name_at("Query", 1, 6),
        vec![field_def_with_directives(
            name_at("foo", 1, 14),
            type_ref_at("String", 1, 19),
            vec![directive(
                name_at("test", 1, 27),
                vec![argument(name_at("arg", 1, 32), value, anywhere())],
                anywhere(),
            )],
        )],
    )])
}

#[test]
fn distinct_input_fields_are_valid() {
    // @test(arg: { a: true, b: true })
    let doc = document_with_argument_value(object_value(vec![
        object_field(name_at("a", 1, 38), Value::Boolean(true, anywhere())),
        object_field(name_at("b", 1, 47), Value::Boolean(true, anywhere())),
    ]));
    assert_no_validation_errors(&validate(&doc));
}

#[test]
fn duplicate_input_field_is_reported() {
    // @test(arg: { f: true, f: false })
    let doc = document_with_argument_value(object_value(vec![
        object_field(name_at("f", 1, 38), Value::Boolean(true, anywhere())),
        object_field(name_at("f", 1, 47), Value::Boolean(false, anywhere())),
    ]));
    assert_errors(
        &validate(&doc),
        &[(
            "There can be only one input field named < f >.",
            vec![span(1, 38, 39), span(1, 47, 48)],
        )],
    );
}

#[test]
fn nested_object_values_are_independent() {
    // @test(arg: { f: { f: true } })
    let doc = document_with_argument_value(object_value(vec![object_field(
        name_at("f", 1, 38),
        object_value(vec![object_field(
            name_at("f", 1, 43),
            Value::Boolean(true, anywhere()),
        )]),
    )]));
    assert_no_validation_errors(&validate(&doc));
}

#[test]
fn duplicate_after_nested_object_is_reported() {
    // @test(arg: { f: { g: true }, f: true })
    let doc = document_with_argument_value(object_value(vec![
        object_field(
            name_at("f", 1, 38),
            object_value(vec![object_field(
                name_at("g", 1, 43),
                Value::Boolean(true, anywhere()),
            )]),
        ),
        object_field(name_at("f", 1, 54), Value::Boolean(true, anywhere())),
    ]));
    assert_errors(
        &validate(&doc),
        &[(
            "There can be only one input field named < f >.",
            vec![span(1, 38, 39), span(1, 54, 55)],
        )],
    );
}

#[test]
fn duplicates_inside_lists_are_reported() {
    // @test(arg: [{ f: true, f: false }])
    let doc = document_with_argument_value(Value::List(sdl_validator::ast::ListValue {
        values: vec![object_value(vec![
            object_field(name_at("f", 1, 39), Value::Boolean(true, anywhere())),
            object_field(name_at("f", 1, 48), Value::Boolean(false, anywhere())),
        ])],
        location: anywhere(),
    }));
    assert_errors(
        &validate(&doc),
        &[(
            "There can be only one input field named < f >.",
            vec![span(1, 39, 40), span(1, 48, 49)],
        )],
    );
}
