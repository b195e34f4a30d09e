//! Pure validators for interactively collected answers.
//!
//! Each validator either hands back the accepted value or a typed
//! [`Rejection`] that can be shown to the operator as-is.

use crate::property::{is_valid_property_name, PropertyList};
use thiserror::Error;

pub const DTO_SUFFIX: &str = "DTO";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("The name must contain a : (\"{0}\" given, expecting something like AcmeBlogBundle:Blog/PostDTO)")]
    MissingContainerSeparator(String),

    #[error("The name must be suffixed with DTO (\"{0}\" given, expecting something like AcmeBlogBundle:Blog/PostDTO)")]
    MissingDtoSuffix(String),

    #[error("\"{0}\" is not a valid property name")]
    InvalidPropertyName(String),

    #[error("Property \"{0}\" is already defined.")]
    DuplicateProperty(String),

    #[error("Please answer yes or no (\"{0}\" given)")]
    NotAConfirmation(String),
}

/// Accept a DTO shortcut reference such as `AcmeBlogBundle:Blog/PostDTO`.
pub fn validate_dto_name(reference: &str) -> Result<&str, Rejection> {
    let reference = reference.trim();

    if !reference.contains(':') {
        return Err(Rejection::MissingContainerSeparator(reference.to_string()));
    }

    if !reference.ends_with(DTO_SUFFIX) {
        return Err(Rejection::MissingDtoSuffix(reference.to_string()));
    }

    Ok(reference)
}

/// Accept a new property name that is not yet part of `properties`.
pub fn validate_property_name<'a>(
    properties: &PropertyList,
    name: &'a str,
) -> Result<&'a str, Rejection> {
    let name = name.trim();

    if !is_valid_property_name(name) {
        return Err(Rejection::InvalidPropertyName(name.to_string()));
    }

    if properties.contains(name) {
        return Err(Rejection::DuplicateProperty(name.to_string()));
    }

    Ok(name)
}

/// Accept a yes/no answer; an empty answer keeps `default`.
pub fn validate_confirmation(answer: &str, default: bool) -> Result<bool, Rejection> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(Rejection::NotAConfirmation(answer.trim().to_string())),
    }
}
