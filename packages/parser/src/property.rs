use crate::error::{ModelError, ModelResult};
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// A single declared property of a DTO
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertySpec {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
}

impl PropertySpec {
    pub fn new(name: impl Into<String>, type_: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_: type_.into(),
        }
    }
}

/// Ordered mapping of property name to its spec.
///
/// Iteration order is insertion order, which is also the order fields and
/// accessors are emitted in. Names are unique (case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyList {
    entries: Vec<PropertySpec>,
}

impl PropertyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertySpec> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&PropertySpec> {
        self.entries.iter().find(|spec| spec.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|spec| spec.name.as_str())
    }

    /// Incremental addition: a name that is already present is rejected,
    /// the existing entry is never overwritten.
    pub fn add(&mut self, name: &str, type_: &str) -> ModelResult<()> {
        if !is_valid_property_name(name) {
            return Err(ModelError::malformed_spec(
                name,
                0,
                format!("\"{}\" is not a valid property name", name),
            ));
        }

        if self.contains(name) {
            return Err(ModelError::duplicate_property(name));
        }

        self.entries.push(PropertySpec::new(name, type_));
        Ok(())
    }

    /// Bulk insertion used by `parse_properties`: last write wins and the
    /// entry keeps the position where the name was first seen.
    fn upsert(&mut self, spec: PropertySpec) {
        match self.entries.iter_mut().find(|entry| entry.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.entries.push(spec),
        }
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a PropertySpec;
    type IntoIter = std::slice::Iter<'a, PropertySpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for PropertyList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|spec| (&spec.name, &spec.type_)))
    }
}

impl FromStr for PropertyList {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_properties(s)
    }
}

/// Parse a whitespace separated list of `type:name` tokens.
///
/// Only the first `:` splits a token, so type names containing a colon are
/// not supported. Repeated names do not fail: the later type replaces the
/// earlier one.
pub fn parse_properties(raw: &str) -> ModelResult<PropertyList> {
    let mut properties = PropertyList::new();

    for token in raw.split(char::is_whitespace) {
        if token.is_empty() {
            continue;
        }

        let offset = token.as_ptr() as usize - raw.as_ptr() as usize;

        let (type_, name) = match token.split_once(':') {
            Some(parts) => parts,
            None => {
                return Err(ModelError::malformed_spec(
                    token,
                    offset,
                    "properties must be entered in the format type:name",
                ))
            }
        };

        if type_.is_empty() {
            return Err(ModelError::malformed_spec(token, offset, "missing property type"));
        }

        if !is_valid_property_name(name) {
            return Err(ModelError::malformed_spec(
                token,
                offset,
                format!("\"{}\" is not a valid property name", name),
            ));
        }

        properties.upsert(PropertySpec::new(name, type_));
    }

    Ok(properties)
}

/// Names that cannot be used as a generated field or setter parameter
const RESERVED_PROPERTY_NAMES: &[&str] = &["this"];

/// An identifier that can also be emitted as `$name` in a setter
pub fn is_valid_property_name(name: &str) -> bool {
    is_valid_identifier(name) && !RESERVED_PROPERTY_NAMES.contains(&name)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
