//! Assets loaded from a directory on disk.
//!
//! Only relative paths below the base directory are served. Absolute paths,
//! `..` components and symlinks that resolve outside the base are rejected.

use cosmic_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    /// Serves assets below `base_path`. The directory does not have to exist
    /// yet; every lookup then reports `NotFound`.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base_path = base_path.as_ref().to_path_buf();
        let canonical_base = base_path.canonicalize().ok();
        if canonical_base.is_none() {
            log::warn!("Asset directory {} does not exist", base_path.display());
        }
        Self {
            base_path,
            canonical_base,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    fn resolve(&self, path: &str) -> Result<PathBuf, ResourceError> {
        let relative = Path::new(path);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if path.is_empty() || escapes {
            return Err(ResourceError::Rejected(path.to_string()));
        }

        let full_path = self.base_path.join(relative);
        match (full_path.canonicalize(), &self.canonical_base) {
            (Ok(canonical), Some(base)) if canonical.starts_with(base) => Ok(canonical),
            (Ok(_), Some(_)) => Err(ResourceError::Rejected(path.to_string())),
            _ => Ok(full_path),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve(path)?;
        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_loads_asset_from_base_directory() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("cover_bg.jpg"), b"image bytes").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("cover_bg.jpg").unwrap(), b"image bytes");
        assert!(provider.exists("cover_bg.jpg"));
    }

    #[test]
    fn test_missing_asset_is_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        let err = provider.load("end_bg.jpg").unwrap_err();
        assert!(err.is_not_found());
        assert!(!provider.exists("end_bg.jpg"));
    }

    #[test]
    fn test_missing_base_directory() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path().join("does-not-exist"));
        assert!(provider.load("cover_bg.jpg").unwrap_err().is_not_found());
    }

    #[test]
    fn test_nested_font_path() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts/Script.ttf"), b"ttf").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(provider.exists("fonts/Script.ttf"));
        assert!(provider.exists("./fonts/Script.ttf"));
        assert!(!provider.exists("fonts"));
    }

    #[test]
    fn test_rejects_traversal_and_absolute_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        for path in ["../../../etc/passwd", "/etc/passwd", "fonts/../../secret", "..", ""] {
            assert!(
                matches!(provider.load(path), Err(ResourceError::Rejected(_))),
                "accepted {path:?}"
            );
            assert!(!provider.exists(path));
        }
    }
}
