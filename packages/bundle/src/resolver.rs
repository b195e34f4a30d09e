use crate::bundle::Container;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolverError {
    #[error("Bundle \"{name}\" does not exist (known bundles: {})", .known.join(", "))]
    UnknownContainer { name: String, known: Vec<String> },
}

/// Looks up containers by name
pub trait ContainerResolver {
    fn resolve_container(&self, name: &str) -> Result<Container, ResolverError>;
}

/// Fixed set of containers, usually built from the configuration file
#[derive(Clone, Debug, Default)]
pub struct ContainerRegistry {
    containers: BTreeMap<String, Container>,
}

impl ContainerRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            containers: BTreeMap::new(),
        }
    }

    /// Register a container, replacing any container with the same name
    pub fn register(&mut self, container: Container) {
        self.containers.insert(container.name.clone(), container);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.containers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl FromIterator<Container> for ContainerRegistry {
    fn from_iter<I: IntoIterator<Item = Container>>(iter: I) -> Self {
        let mut registry = Self::new();
        for container in iter {
            registry.register(container);
        }
        registry
    }
}

impl ContainerResolver for ContainerRegistry {
    fn resolve_container(&self, name: &str) -> Result<Container, ResolverError> {
        self.containers
            .get(name)
            .cloned()
            .ok_or_else(|| ResolverError::UnknownContainer {
                name: name.to_string(),
                known: self.names().map(str::to_string).collect(),
            })
    }
}
