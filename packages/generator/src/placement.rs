use crate::error::{GenerateError, GenerateResult};
use dtogen_bundle::Container;
use dtogen_common::FileSystem;
use dtogen_parser::ClassIdentity;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Every generated file starts with this, ahead of the rendered text
pub const FILE_PREAMBLE: &str = "<?php\n\n";

/// Prefix rendered text with the PHP file-entry marker
pub fn with_preamble(text: &str) -> String {
    format!("{}{}", FILE_PREAMBLE, text)
}

/// Decides where artifacts go and writes them without ever overwriting
pub struct PlacementGuard<'a> {
    fs: &'a dyn FileSystem,
}

impl<'a> PlacementGuard<'a> {
    pub fn new(fs: &'a dyn FileSystem) -> Self {
        Self { fs }
    }

    /// `<base path>/<root directory>/<directories of the relative name>/<file name>`
    ///
    /// Pure path composition, the file system is not consulted.
    pub fn resolve(
        container: &Container,
        identity: &ClassIdentity,
        root_directory: &str,
        file_name: &str,
    ) -> PathBuf {
        let mut path = container.base_path.clone();

        for segment in root_directory.split(['/', '\\']).filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        for segment in identity.directory_segments() {
            path.push(segment);
        }

        path.push(file_name);
        path
    }

    /// Fail with `ArtifactExists` when something is already at `path`
    pub fn check_available(&self, path: &Path) -> GenerateResult<()> {
        if self.fs.exists(path) {
            debug!(path = %path.display(), "target already exists");
            return Err(GenerateError::ArtifactExists {
                path: path.to_path_buf(),
            });
        }
        Ok(())
    }

    /// Create missing parent directories, then write the preamble and text.
    ///
    /// Directories created before a failed write are left in place.
    pub fn write(&self, path: &Path, text: &str) -> GenerateResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !self.fs.exists(parent) {
                debug!(dir = %parent.display(), "creating directory");
                self.fs
                    .create_dir_all(parent)
                    .map_err(|e| GenerateError::io(parent, e))?;
            }
        }

        let contents = with_preamble(text);
        self.fs
            .write_new(path, contents.as_bytes())
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => GenerateError::ArtifactExists {
                    path: path.to_path_buf(),
                },
                _ => GenerateError::io(path, e),
            })?;

        info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
        Ok(())
    }
}
