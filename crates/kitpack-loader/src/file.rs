//! Filesystem loader.

use kitpack_core::{LoadError, LoadResult, Loader};
use std::io;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Loads locators as paths relative to a root directory.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a locator against the root. Locators may not leave the root.
    pub fn resolve(&self, locator: &str) -> LoadResult<PathBuf> {
        let mut relative = PathBuf::new();
        for component in Path::new(locator).components() {
            match component {
                Component::Normal(part) => relative.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    if !relative.pop() {
                        return Err(escapes_root(locator));
                    }
                }
                Component::RootDir | Component::Prefix(_) => return Err(escapes_root(locator)),
            }
        }
        Ok(self.root.join(relative))
    }
}

impl Loader for FileLoader {
    fn load(&self, locator: &str) -> LoadResult<Vec<u8>> {
        let path = self.resolve(locator)?;
        debug!(locator, path = %path.display(), "Reading source");
        std::fs::read(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => LoadError::not_found(locator),
            _ => LoadError::io(locator, err),
        })
    }
}

fn escapes_root(locator: &str) -> LoadError {
    LoadError::io(
        locator,
        io::Error::new(
            io::ErrorKind::PermissionDenied,
            "locator escapes the loader root",
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_relative() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("base")).unwrap();
        fs::write(dir.path().join("base/kit.yaml"), "kind: Kit\n").unwrap();

        let loader = FileLoader::new(dir.path());
        assert_eq!(loader.load("base/kit.yaml").unwrap(), b"kind: Kit\n");
        assert_eq!(loader.load("./base/../base/kit.yaml").unwrap(), b"kind: Kit\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let loader = FileLoader::new(dir.path());

        let err = loader.load("nope.yaml").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.locator(), "nope.yaml");
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("sub")).unwrap();
        let loader = FileLoader::new(dir.path());

        let err = loader.load("sub").unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_escape_rejected() {
        let dir = TempDir::new().unwrap();
        let loader = FileLoader::new(dir.path().join("root"));

        let err = loader.load("../secret.yaml").unwrap_err();
        match err {
            LoadError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied)
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(loader.resolve("/etc/passwd").is_err());
    }
}
