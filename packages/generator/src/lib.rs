//! # DTOGen generator
//!
//! Ties the property model, container resolution and PHP synthesis together
//! and places the results on disk. A run is all-or-nothing with respect to
//! existing files: every target is checked before anything is rendered or
//! written, and an existing file is never overwritten.

pub mod error;
pub mod pipeline;
pub mod placement;

pub use error::{GenerateError, GenerateResult};
pub use pipeline::{GenerationPlan, GenerationRequest, Generator, PlannedArtifact};
pub use placement::{with_preamble, PlacementGuard, FILE_PREAMBLE};
