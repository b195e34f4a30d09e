//! # Bundle - Container resolution
//!
//! A container (a "bundle") is the logical module a generated class belongs
//! to. It supplies the directory generated files are placed under and the
//! namespace prefix of the generated classes. Containers are looked up by
//! name through a [`ContainerResolver`].

pub mod bundle;
pub mod resolver;

pub use bundle::*;
pub use resolver::*;
