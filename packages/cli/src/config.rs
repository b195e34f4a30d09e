use dtogen_bundle::{Container, ContainerRegistry};
use dtogen_compiler_php::{DEFAULT_DOMAIN_TYPE, DEFAULT_ROOT_DIRECTORY};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "dtogen.config.json";

/// DTOGen configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Known containers (bundles) by name
    #[serde(default)]
    pub containers: BTreeMap<String, ContainerConfig>,

    /// Directory under each container where DTOs are placed
    #[serde(default = "default_root_directory")]
    pub root_directory: String,

    /// Domain type used by generated assembler skeletons
    #[serde(default = "default_assembler_domain_type")]
    pub assembler_domain_type: String,
}

fn default_root_directory() -> String {
    DEFAULT_ROOT_DIRECTORY.to_string()
}

fn default_assembler_domain_type() -> String {
    DEFAULT_DOMAIN_TYPE.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Directory of the container, relative to the config file or absolute
    pub path: String,

    /// Namespace prefix of classes inside the container
    pub namespace: String,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), containers = config.containers.len(), "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_NAME);
            Ok(Config::default())
        }
    }

    /// Build the container registry, resolving relative paths against `cwd`
    pub fn registry(&self, cwd: &str) -> ContainerRegistry {
        self.containers
            .iter()
            .map(|(name, container)| {
                Container::new(
                    name.clone(),
                    PathBuf::from(cwd).join(&container.path),
                    &container.namespace,
                )
            })
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            containers: BTreeMap::new(),
            root_directory: default_root_directory(),
            assembler_domain_type: default_assembler_domain_type(),
        }
    }
}
