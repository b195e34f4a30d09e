use dtogen_bundle::ResolverError;
use dtogen_parser::ModelError;
use std::path::PathBuf;
use thiserror::Error;

pub type GenerateResult<T> = Result<T, GenerateError>;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Resolver(#[from] ResolverError),

    #[error("\"{}\" already exists", .path.display())]
    ArtifactExists { path: PathBuf },

    #[error("Failed to write \"{}\": {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
