//! Simple pack creation: zip a folder as-is

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::archive::PackArchive;
use crate::error::{Error, Result};
use crate::types::{PackPhase, PackProgress, PackProgressCallback};
use crate::utils::{archive_file_name, is_same_path, relative_path, require_directory, resolve_path};

/// Prefix for packs created without an explicit name
pub const DEFAULT_PACK_PREFIX: &str = "pack";

/// Zip the contents of `source_dir` into `output_dir`.
///
/// The archive is named `<pack_name>.zip`, or `pack_<timestamp>.zip` when no
/// name is given. The four required folder markers are always written. When
/// `output_dir` sits inside `source_dir`, neither the output folder nor the
/// archive itself is packed.
///
/// # Returns
/// The absolute path of the created archive.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `source_dir` does not exist and
/// [`Error::NotADirectory`] if it is not a directory.
pub fn create_pack<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    output_dir: Q,
    pack_name: Option<&str>,
) -> Result<PathBuf> {
    create_pack_with_progress(source_dir, output_dir, pack_name, &|_| {})
}

/// Zip the contents of `source_dir` into `output_dir` with progress callback.
pub fn create_pack_with_progress<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    output_dir: Q,
    pack_name: Option<&str>,
    progress: PackProgressCallback,
) -> Result<PathBuf> {
    progress(&PackProgress::new(PackPhase::Validating, 1, 1));

    let source_dir = require_directory(source_dir)?;
    let file_name = archive_file_name(pack_name, DEFAULT_PACK_PREFIX)?;

    std::fs::create_dir_all(output_dir.as_ref())?;
    let output_dir = resolve_path(output_dir)?;
    let pack_path = output_dir.join(file_name);

    tracing::info!("Scanning directory: {:?}", source_dir);
    progress(&PackProgress::with_file(
        PackPhase::Scanning,
        1,
        1,
        source_dir.display().to_string(),
    ));

    let mut archive = PackArchive::new();
    archive.add_required_folders();

    let walker = WalkDir::new(&source_dir)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && is_same_path(e.path(), &output_dir)));

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() || is_same_path(entry.path(), &pack_path) {
            continue;
        }

        let relative = relative_path(entry.path(), &source_dir)
            .ok_or_else(|| Error::InvalidPath(entry.path().display().to_string()))?;
        archive.add_file(&relative, entry.path());
    }

    tracing::info!("Found {} files, creating pack", archive.file_count());
    archive.write_to_with_progress(&pack_path, progress)?;

    progress(&PackProgress::new(PackPhase::Complete, 1, 1));
    Ok(pack_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_named_pack_lands_in_output_dir() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("src");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("file1.txt"), "hello").unwrap();

        let output = temp.path().join("out").join("nested");
        let pack = create_pack(&source, &output, Some("testpack")).unwrap();

        assert!(pack.is_absolute());
        assert!(pack.is_file());
        assert_eq!(pack.file_name().unwrap(), "testpack.zip");
        assert_eq!(pack.parent().unwrap(), output.canonicalize().unwrap());
    }

    #[test]
    fn test_progress_reports_phases() {
        use std::cell::RefCell;

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.meta"), "meta").unwrap();
        let output = TempDir::new().unwrap();

        let phases = RefCell::new(Vec::new());
        create_pack_with_progress(temp.path(), output.path(), Some("p"), &|p| {
            phases.borrow_mut().push(p.phase);
        })
        .unwrap();

        let phases = phases.into_inner();
        assert_eq!(phases.first(), Some(&PackPhase::Validating));
        assert_eq!(phases.last(), Some(&PackPhase::Complete));
        assert!(phases.contains(&PackPhase::Writing));
    }
}
