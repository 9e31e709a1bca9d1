//! Cross-rule behavior of the default validation pipeline.

use crate::common::*;
use sdl_validator::ast::Document;
use sdl_validator::schema::MockSchema;
use sdl_validator::{
    SPECIFIED_SDL_RULES, SdlValidator, SourceFile, convert_diagnostics_to_reports, validate_sdl,
};

/// A document exercising several rules at once:
///   scalar String
///   type A { f: String }
///   type A { f: Unknown }
fn mixed_document() -> Document {
    document(vec![
        scalar_def(name_at("String", 1, 8)),
        object_def(
            name_at("A", 2, 6),
            vec![field_def(name_at("f", 2, 10), type_ref_at("String", 2, 13))],
        ),
        object_def(
            name_at("A", 3, 6),
            vec![field_def(name_at("f", 3, 10), type_ref_at("Unknown", 3, 13))],
        ),
    ])
}

#[test]
fn default_rule_set_is_complete() {
    assert_eq!(SPECIFIED_SDL_RULES.len(), 14);
}

#[test]
fn validation_is_idempotent() {
    let doc = mixed_document();
    let first = validate_sdl(&doc, None);
    let second = validate_sdl(&doc, None);
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn diagnostics_follow_rule_then_document_order() {
    // Both diagnostics stem from the second `type A`: the duplicate-name
    // check fires on entering the definition, before the unknown-type check
    // reaches the field type inside it.
    let doc = mixed_document();
    let diagnostics = validate_sdl(&doc, None);
    assert_messages(
        &diagnostics,
        &[
            "There can be only one type named < A >.",
            "Unknown type < Unknown >.",
        ],
    );
}

#[test]
fn schema_collision_suppresses_duplicate_reporting() {
    // When a name collides with the schema, each document definition is
    // reported against the schema; the in-document duplicate wording is
    // never used for that name.
    let mut schema = MockSchema::new();
    schema.add_object_type("Foo", ["field"]);

    // type Foo { f: Foo }
    // type Foo { f: Foo }
    let doc = document(vec![
        object_def(
            name_at("Foo", 1, 6),
            vec![field_def(name_at("f", 1, 12), type_ref_at("Foo", 1, 15))],
        ),
        object_def(
            name_at("Foo", 2, 6),
            vec![field_def(name_at("f", 2, 12), type_ref_at("Foo", 2, 15))],
        ),
    ]);
    let diagnostics = SdlValidator::new()
        .with_schema(&schema)
        .validate(&doc);
    let messages: Vec<&str> = diagnostics.iter().map(|diag| diag.message.as_str()).collect();
    assert_eq!(
        messages
            .iter()
            .filter(|message| {
                **message
                    == "Type < Foo > already exists in the schema. It cannot also be defined in this type definition."
            })
            .count(),
        2,
        "diagnostics:\n{}",
        format_diagnostics(&diagnostics)
    );
    assert!(
        !messages
            .iter()
            .any(|message| message.contains("There can be only one type named")),
        "diagnostics:\n{}",
        format_diagnostics(&diagnostics)
    );
}

#[test]
fn empty_document_is_valid() {
    let doc = document(vec![]);
    assert_no_validation_errors(&validate_sdl(&doc, None));
}

#[test]
fn diagnostics_render_against_source() {
    let sdl = "scalar String\ntype A { f: String }\ntype A { f: Unknown }\n";
    let source = SourceFile::with_name(sdl, "schema.graphql");
    let diagnostics = validate_sdl(&mixed_document(), None);
    let reports = convert_diagnostics_to_reports(&diagnostics, &source);
    assert_eq!(reports.len(), diagnostics.len());

    let rendered = format!("{:?}", reports[0]);
    assert!(
        rendered.contains("There can be only one type named < A >."),
        "unexpected render:\n{rendered}"
    );
}
