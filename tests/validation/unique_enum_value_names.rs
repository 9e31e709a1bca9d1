use crate::common::*;
use sdl_validator::ast::{Document, TypeTag};
use sdl_validator::schema::MockSchema;
use sdl_validator::{Diag, SdlRule, SdlValidator};

fn validate(document: &Document) -> Vec<Diag> {
    SdlValidator::new()
        .with_rules([SdlRule::UniqueEnumValueNames])
        .validate(document)
}

#[test]
fn empty_enum_is_valid() {
    let doc = document(vec![enum_def(name_at("SomeEnum", 1, 6), vec![])]);
    assert_no_validation_errors(&validate(&doc));
}

#[test]
fn distinct_values_are_valid() {
    // enum SomeEnum {
    //   FOO
    //   BAR
    // }
    let doc = document(vec![enum_def(
        name_at("SomeEnum", 1, 6),
        vec![
            enum_value(name_at("FOO", 2, 3)),
            enum_value(name_at("BAR", 3, 3)),
        ],
    )]);
    assert_no_validation_errors(&validate(&doc));
}

#[test]
fn duplicate_value_in_one_definition() {
    // enum SomeEnum {
    //   FOO
    //   BAR
    //   FOO
    // }
    let doc = document(vec![enum_def(
        name_at("SomeEnum", 1, 6),
        vec![
            enum_value(name_at("FOO", 2, 3)),
            enum_value(name_at("BAR", 3, 3)),
            enum_value(name_at("FOO", 4, 3)),
        ],
    )]);
    assert_errors(
        &validate(&doc),
        &[(
            "Enum value < SomeEnum.FOO > can only be defined once.",
            vec![span(2, 3, 6), span(4, 3, 6)],
        )],
    );
}

#[test]
fn duplicate_value_across_definition_and_extension() {
    // enum SomeEnum { FOO }
    // extend enum SomeEnum { FOO }
    let doc = document(vec![
        enum_def(
            name_at("SomeEnum", 1, 6),
            vec![enum_value(name_at("FOO", 1, 17))],
        ),
        enum_ext(
            name_at("SomeEnum", 2, 13),
            vec![enum_value(name_at("FOO", 2, 24))],
        ),
    ]);
    assert_errors(
        &validate(&doc),
        &[(
            "Enum value < SomeEnum.FOO > can only be defined once.",
            vec![span(1, 17, 20), span(2, 24, 27)],
        )],
    );
}

#[test]
fn value_already_in_base_schema() {
    let mut schema = MockSchema::new();
    schema.add_enum_type("SomeEnum", ["FOO"]);

    // extend enum SomeEnum { FOO }
    let doc = document(vec![enum_ext(
        name_at("SomeEnum", 1, 13),
        vec![enum_value(name_at("FOO", 1, 24))],
    )]);
    let diagnostics = SdlValidator::new()
        .with_schema(&schema)
        .with_rules([SdlRule::UniqueEnumValueNames])
        .validate(&doc);
    assert_errors(
        &diagnostics,
        &[(
            "Enum value < SomeEnum.FOO > already exists in the schema. It cannot also be defined in this type extension.",
            vec![span(1, 24, 27)],
        )],
    );
}

#[test]
fn same_named_schema_type_of_other_kind_does_not_collide() {
    // The base type is an object, not an enum, so its members do not count
    // as enum values.
    let mut schema = MockSchema::new();
    schema.add_type("SomeEnum", TypeTag::Object);

    let doc = document(vec![enum_ext(
        name_at("SomeEnum", 1, 13),
        vec![enum_value(name_at("FOO", 1, 24))],
    )]);
    let diagnostics = SdlValidator::new()
        .with_schema(&schema)
        .with_rules([SdlRule::UniqueEnumValueNames])
        .validate(&doc);
    assert_no_validation_errors(&diagnostics);
}
