use crate::error::{ModelError, ModelResult};
use crate::property::is_valid_identifier;
use serde::Serialize;
use std::fmt;

/// Where a generated class belongs: a container plus a path beneath it.
///
/// `relative_name` is stored with `/` separators and ends in the bare class
/// name, e.g. `Blog/PostDTO`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ClassIdentity {
    pub container_name: String,
    pub relative_name: String,
}

impl ClassIdentity {
    pub fn new(container_name: impl Into<String>, relative_name: &str) -> Self {
        Self {
            container_name: container_name.into(),
            relative_name: split_segments(relative_name).collect::<Vec<_>>().join("/"),
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        split_segments(&self.relative_name)
    }

    /// The bare class name (last path segment)
    pub fn class_name(&self) -> &str {
        self.segments().last().unwrap_or("")
    }

    /// Path segments between the root directory and the class file
    pub fn directory_segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.segments().collect();
        segments.pop();
        segments
    }

    /// Shortcut notation, `container:relative/Name`
    pub fn shortcut(&self) -> String {
        format!("{}:{}", self.container_name, self.relative_name)
    }
}

impl fmt::Display for ClassIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.container_name, self.relative_name)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(['/', '\\']).filter(|segment| !segment.is_empty())
}

/// Parse a `container:relativePath` shortcut, splitting on the first `:`.
pub fn parse_reference(raw: &str) -> ModelResult<ClassIdentity> {
    let raw = raw.trim();

    let (container, relative) = raw.split_once(':').ok_or_else(|| {
        ModelError::malformed_reference(
            raw,
            "the name must contain a : (expecting something like AcmeBlogBundle:Blog/PostDTO)",
        )
    })?;

    if container.is_empty() {
        return Err(ModelError::malformed_reference(raw, "missing container name"));
    }

    let segments: Vec<&str> = split_segments(relative).collect();
    if segments.is_empty() {
        return Err(ModelError::malformed_reference(raw, "missing class name"));
    }

    if let Some(bad) = segments.iter().find(|segment| !is_valid_identifier(segment)) {
        return Err(ModelError::malformed_reference(
            raw,
            format!("\"{}\" is not a valid class or namespace name", bad),
        ));
    }

    Ok(ClassIdentity::new(container, relative))
}
