use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Mode for directories created on behalf of generated files (rwxrwxr-x)
pub const DIR_MODE: u32 = 0o775;

/// Mode for generated files (rw-r--r--)
pub const FILE_MODE: u32 = 0o644;

/// File system abstraction for placement checks, writes and testing
pub trait FileSystem {
    /// Check if a file exists
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Write a file that must not exist yet.
    ///
    /// Either the complete content lands at `path` or nothing does.
    fn write_new(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Real file system implementation
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut builder = std::fs::DirBuilder::new();
        builder.recursive(true);

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(DIR_MODE);
        }

        builder.create(path)
    }

    fn write_new(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // The temp file is removed on drop unless persisted
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(contents)?;
        file.as_file().sync_all()?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.as_file()
                .set_permissions(std::fs::Permissions::from_mode(FILE_MODE))?;
        }

        file.persist_noclobber(path).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Mock file system for testing
pub struct MockFileSystem {
    pub existing_files: HashSet<PathBuf>,
    /// When set, every write fails with this error kind
    pub fail_writes: Option<io::ErrorKind>,
    written: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    created_dirs: RefCell<Vec<PathBuf>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self {
            existing_files: HashSet::new(),
            fail_writes: None,
            written: RefCell::new(BTreeMap::new()),
            created_dirs: RefCell::new(Vec::new()),
        }
    }

    pub fn add_file(&mut self, path: PathBuf) {
        self.existing_files.insert(path);
    }

    /// Contents written through this file system, keyed by path
    pub fn written(&self) -> BTreeMap<PathBuf, Vec<u8>> {
        self.written.borrow().clone()
    }

    /// Read back a written file as UTF-8
    pub fn written_string(&self, path: &Path) -> Option<String> {
        self.written
            .borrow()
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn created_dirs(&self) -> Vec<PathBuf> {
        self.created_dirs.borrow().clone()
    }

    /// True when nothing was written and no directory was created
    pub fn is_untouched(&self) -> bool {
        self.written.borrow().is_empty() && self.created_dirs.borrow().is_empty()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.existing_files.contains(path) || self.written.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        self.created_dirs.borrow_mut().push(path.to_path_buf());
        Ok(())
    }

    fn write_new(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if let Some(kind) = self.fail_writes {
            return Err(io::Error::new(kind, "simulated write failure"));
        }

        if self.exists(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", path.display()),
            ));
        }

        self.written
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }
}
