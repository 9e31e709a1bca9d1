//! SDL semantic validator with rich diagnostics.
//!
//! This library validates GraphQL SDL (schema definition language)
//! documents: duplicate names, unknown type and directive references,
//! misplaced directives, invalid type extensions, and missing required
//! directive arguments. Diagnostics carry precise source spans and render
//! through miette, and documents can optionally be checked as extensions of
//! an existing schema.
//!
//! # Example
//!
//! ```
//! use sdl_validator::ast::{Definition, Document, EnumType, EnumValueDefinition, Location, Name, TypeDefinition, TypeKind};
//! use sdl_validator::validate_sdl;
//!
//! let span = Location::new(1, 1, 1, 5);
//! let document = Document {
//!     definitions: vec![Definition::Type(Box::new(TypeDefinition {
//!         name: Name::new("Color", span),
//!         kind: TypeKind::Enum(EnumType {
//!             values: vec![
//!                 EnumValueDefinition {
//!                     name: Name::new("RED", span),
//!                     directives: vec![],
//!                     location: span,
//!                 },
//!                 EnumValueDefinition {
//!                     name: Name::new("RED", span),
//!                     directives: vec![],
//!                     location: span,
//!                 },
//!             ],
//!         }),
//!         directives: vec![],
//!         location: span,
//!     }))],
//!     location: span,
//! };
//!
//! let diagnostics = validate_sdl(&document, None);
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(
//!     diagnostics[0].message,
//!     "Enum value < Color.RED > can only be defined once."
//! );
//! ```

pub mod ast;
pub mod diag;
pub mod schema;
pub mod suggest;
pub mod validation;

// Re-export the diagnostic model.
pub use diag::{Diag, DiagSeverity, SourceFile, convert_diagnostics_to_reports};

// Re-export the validation entry points.
pub use validation::{SPECIFIED_SDL_RULES, SdlRule, SdlValidator, validate_sdl};
