use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A resolved container: where its files live and how its classes are namespaced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    pub base_path: PathBuf,
    /// Namespace prefix without leading or trailing separators, e.g. `Acme\BlogBundle`
    pub namespace_prefix: String,
}

impl Container {
    pub fn new(
        name: impl Into<String>,
        base_path: impl Into<PathBuf>,
        namespace_prefix: &str,
    ) -> Self {
        Self {
            name: name.into(),
            base_path: base_path.into(),
            namespace_prefix: normalize_namespace(namespace_prefix),
        }
    }

    /// Namespace segments of the prefix
    pub fn namespace_segments(&self) -> impl Iterator<Item = &str> {
        self.namespace_prefix
            .split('\\')
            .filter(|segment| !segment.is_empty())
    }
}

/// Accepts `Acme/BlogBundle`, `\Acme\BlogBundle\` or `Acme\\BlogBundle` and
/// returns `Acme\BlogBundle`.
pub fn normalize_namespace(namespace: &str) -> String {
    namespace
        .split(['\\', '/'])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\\")
}
