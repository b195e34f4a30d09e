use thiserror::Error;

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid DTO reference \"{reference}\": {message}")]
    MalformedReference { reference: String, message: String },

    #[error("Malformed property \"{token}\" at {offset}: {message}")]
    MalformedSpec {
        token: String,
        offset: usize,
        message: String,
    },

    #[error("Property \"{name}\" is already defined")]
    DuplicateProperty { name: String },
}

impl ModelError {
    pub fn malformed_reference(reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedReference {
            reference: reference.into(),
            message: message.into(),
        }
    }

    pub fn malformed_spec(token: impl Into<String>, offset: usize, message: impl Into<String>) -> Self {
        Self::MalformedSpec {
            token: token.into(),
            offset,
            message: message.into(),
        }
    }

    pub fn duplicate_property(name: impl Into<String>) -> Self {
        Self::DuplicateProperty { name: name.into() }
    }
}
