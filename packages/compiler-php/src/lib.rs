//! PHP source synthesis for DTO classes and their assembler skeletons.

mod compiler;
mod context;

pub use compiler::{
    capitalize, compile_assembler, compile_dto, getter_name, namespace_for, render, setter_name,
    Artifact, ArtifactKind, ASSEMBLER_SUFFIX, FILE_EXTENSION,
};
pub use context::{CompileOptions, CompilerContext, DEFAULT_DOMAIN_TYPE, DEFAULT_ROOT_DIRECTORY};

#[cfg(test)]
mod tests;
