//! # DTOGen property model
//!
//! Parses the compact `type:name` property notation and `container:Path/Name`
//! shortcut references, guesses property types from naming conventions and
//! validates interactively collected answers.
//!
//! ```rust
//! use dtogen_parser::{infer_type, parse_properties};
//!
//! let properties = parse_properties("string:title \\DateTime:createdAt").unwrap();
//! assert_eq!(properties.names().collect::<Vec<_>>(), vec!["title", "createdAt"]);
//! assert_eq!(infer_type("isPublished"), "boolean");
//! ```

pub mod error;
pub mod inference;
#[cfg(feature = "pretty-errors")]
pub mod pretty;
pub mod property;
pub mod reference;
pub mod validators;


pub use error::{ModelError, ModelResult};
pub use inference::infer_type;
pub use property::{
    is_valid_identifier, is_valid_property_name, parse_properties, PropertyList, PropertySpec,
};
pub use reference::{parse_reference, ClassIdentity};
pub use validators::{validate_confirmation, validate_dto_name, validate_property_name, Rejection};
