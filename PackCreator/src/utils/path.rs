//! Path utilities

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Join path components with forward slashes (archive entry form)
pub fn normalize_path<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Get relative path and normalize separators
pub fn relative_path<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Option<String> {
    path.as_ref()
        .strip_prefix(base.as_ref())
        .ok()
        .map(normalize_path)
}

/// Resolve a path to an absolute form.
///
/// Existing paths are canonicalized so symlinks and `..` segments compare
/// equal; paths that do not exist yet are only made absolute.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    match path.canonicalize() {
        Ok(resolved) => Ok(resolved),
        Err(_) => Ok(std::path::absolute(path)?),
    }
}

/// Check that `path` exists and is a directory, returning its resolved form.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if nothing exists at `path`, or
/// [`Error::NotADirectory`] if it exists but is some other kind of entry.
pub fn require_directory<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::not_found(path));
    }
    if !path.is_dir() {
        return Err(Error::not_a_directory(path));
    }
    resolve_path(path)
}

/// Whether `candidate` points at the same filesystem entry as `target`.
///
/// `target` must already be resolved. The candidate is only canonicalized
/// when its file name matches, which keeps directory walks cheap.
pub fn is_same_path(candidate: &Path, target: &Path) -> bool {
    if candidate == target {
        return true;
    }
    if candidate.file_name() != target.file_name() {
        return false;
    }
    candidate
        .canonicalize()
        .is_ok_and(|resolved| resolved == target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_relative_path_uses_forward_slashes() {
        let base = Path::new("/packs/source");
        let file = base.join("stream").join("car").join("model.yft");
        assert_eq!(
            relative_path(&file, base).as_deref(),
            Some("stream/car/model.yft")
        );
    }

    #[test]
    fn test_relative_path_outside_base() {
        assert_eq!(relative_path("/other/file.meta", "/packs"), None);
    }

    #[test]
    fn test_require_directory_missing() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = require_directory(&missing).unwrap_err();
        assert!(matches!(err, Error::NotFound { path } if path == missing));
    }

    #[test]
    fn test_require_directory_on_file() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("vehicles.meta");
        fs::write(&file, "meta").unwrap();
        let err = require_directory(&file).unwrap_err();
        assert!(matches!(err, Error::NotADirectory { .. }));
    }

    #[test]
    fn test_is_same_path_through_dotdot() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().canonicalize().unwrap();
        fs::create_dir(root.join("a")).unwrap();
        fs::write(root.join("pack.zip"), b"").unwrap();

        let target = root.join("pack.zip");
        assert!(is_same_path(&root.join("a").join("..").join("pack.zip"), &target));
        assert!(!is_same_path(&root.join("a"), &target));
    }
}
