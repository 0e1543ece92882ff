//! In-memory pack layout and zip output
//!
//! Entries are collected first and written in one pass by
//! [`PackArchive::write_to`]. Inserting at an existing path replaces the
//! earlier content (last write wins) and the path is recorded in
//! [`PackArchive::overwritten`].

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use indexmap::map::Entry;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::Result;
use crate::types::{PackPhase, PackProgress, PackProgressCallback};

/// Top-level folders present in every pack, even when empty.
pub const REQUIRED_FOLDERS: [&str; 4] = ["audioconfig/", "data/", "stream/", "sfx/"];

/// Content of a single archive entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// Explicit directory marker (empty entry, path ends with `/`)
    Directory,
    /// File copied from disk when the archive is written
    File(PathBuf),
}

/// Ordered set of archive entries keyed by forward-slash path.
#[derive(Debug, Default)]
pub struct PackArchive {
    entries: IndexMap<String, EntrySource>,
    overwritten: Vec<String>,
}

impl PackArchive {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the four [`REQUIRED_FOLDERS`] markers.
    pub fn add_required_folders(&mut self) {
        for folder in REQUIRED_FOLDERS {
            self.add_directory(folder);
        }
    }

    /// Add a directory marker. A trailing `/` is appended if missing.
    pub fn add_directory(&mut self, path: &str) {
        let mut name = path.trim_start_matches('/').to_string();
        if !name.ends_with('/') {
            name.push('/');
        }
        self.insert(name, EntrySource::Directory);
    }

    /// Add a file whose content is read from `source` at write time.
    pub fn add_file(&mut self, path: &str, source: impl Into<PathBuf>) {
        self.insert(path.trim_start_matches('/').to_string(), EntrySource::File(source.into()));
    }

    fn insert(&mut self, name: String, source: EntrySource) {
        match self.entries.entry(name) {
            Entry::Vacant(slot) => {
                tracing::debug!("Adding entry {}", slot.key());
                slot.insert(source);
            }
            Entry::Occupied(mut slot) => {
                // Re-adding a folder marker is not a collision
                if *slot.get() == EntrySource::Directory && source == EntrySource::Directory {
                    return;
                }
                tracing::warn!("Entry {} written twice, keeping the later content", slot.key());
                self.overwritten.push(slot.key().clone());
                slot.insert(source);
            }
        }
    }

    /// Entry paths in insertion order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries, directory markers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of file entries (directory markers excluded).
    pub fn file_count(&self) -> usize {
        self.entries
            .values()
            .filter(|source| **source != EntrySource::Directory)
            .count()
    }

    /// Paths that were written more than once, in the order the collisions happened.
    pub fn overwritten(&self) -> &[String] {
        &self.overwritten
    }

    /// Write all entries to a deflate zip at `output`.
    pub fn write_to(&self, output: &Path) -> Result<()> {
        self.write_to_with_progress(output, &|_| {})
    }

    /// Write all entries to a deflate zip at `output` with progress callback.
    ///
    /// The file is created up front; a failure partway through leaves a
    /// partial archive on disk.
    pub fn write_to_with_progress(&self, output: &Path, progress: PackProgressCallback) -> Result<()> {
        tracing::info!("Writing {} entries to {:?}", self.entries.len(), output);

        let file = File::create(output)?;
        let mut zip = ZipWriter::new(BufWriter::new(file));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let total = self.entries.len();
        for (index, (name, source)) in self.entries.iter().enumerate() {
            progress(&PackProgress::with_file(PackPhase::Writing, index + 1, total, name.as_str()));

            match source {
                EntrySource::Directory => zip.add_directory(name.as_str(), options)?,
                EntrySource::File(path) => {
                    zip.start_file(name.as_str(), options)?;
                    let mut input = File::open(path)?;
                    std::io::copy(&mut input, &mut zip)?;
                }
            }
        }

        let mut writer = zip.finish()?;
        writer.flush()?;

        tracing::info!("Archive written: {:?}", output);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Read;
    use tempfile::TempDir;

    fn read_entry(zip_path: &Path, name: &str) -> String {
        let mut zip = zip::ZipArchive::new(File::open(zip_path).unwrap()).unwrap();
        let mut content = String::new();
        zip.by_name(name).unwrap().read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_required_folders_first() {
        let mut archive = PackArchive::new();
        archive.add_required_folders();
        archive.add_file("fxmanifest.lua", "template/fxmanifest.lua");

        let names: Vec<_> = archive.entry_names().collect();
        assert_eq!(names, vec!["audioconfig/", "data/", "stream/", "sfx/", "fxmanifest.lua"]);
        assert_eq!(archive.file_count(), 1);
    }

    #[test]
    fn test_duplicate_directory_is_not_an_overwrite() {
        let mut archive = PackArchive::new();
        archive.add_required_folders();
        archive.add_directory("data");
        assert_eq!(archive.len(), 4);
        assert!(archive.overwritten().is_empty());
    }

    #[test]
    fn test_last_write_wins() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("first.meta");
        let second = temp.path().join("second.meta");
        fs::write(&first, "first").unwrap();
        fs::write(&second, "second").unwrap();
        fs::write(temp.path().join("model.yft"), "model").unwrap();

        let mut archive = PackArchive::new();
        archive.add_file("data/car/vehicles.meta", &first);
        archive.add_file("stream/car/model.yft", temp.path().join("model.yft"));
        archive.add_file("data/car/vehicles.meta", &second);

        assert_eq!(archive.len(), 2);
        assert_eq!(archive.overwritten(), ["data/car/vehicles.meta".to_string()]);
        // Position of the first insert is kept
        assert_eq!(archive.entry_names().next(), Some("data/car/vehicles.meta"));

        let output = temp.path().join("pack.zip");
        archive.write_to(&output).unwrap();
        assert_eq!(read_entry(&output, "data/car/vehicles.meta"), "second");
    }

    #[test]
    fn test_write_to_roundtrip() {
        let temp = TempDir::new().unwrap();
        let model = temp.path().join("model.yft");
        let manifest = temp.path().join("fxmanifest.lua");
        fs::write(&model, b"yft bytes").unwrap();
        fs::write(&manifest, "game 'gta5'").unwrap();

        let mut archive = PackArchive::new();
        archive.add_required_folders();
        archive.add_file("stream/car/model.yft", &model);
        archive.add_file("/fxmanifest.lua", &manifest);

        let output = temp.path().join("pack.zip");
        archive.write_to(&output).unwrap();

        let mut zip = zip::ZipArchive::new(File::open(&output).unwrap()).unwrap();
        assert_eq!(zip.len(), 6);
        assert!(zip.by_name("sfx/").unwrap().is_dir());
        assert_eq!(read_entry(&output, "stream/car/model.yft"), "yft bytes");
        assert_eq!(read_entry(&output, "fxmanifest.lua"), "game 'gta5'");
    }

    #[test]
    fn test_write_missing_source_fails() {
        let temp = TempDir::new().unwrap();
        let mut archive = PackArchive::new();
        archive.add_file("data/car/gone.meta", temp.path().join("gone.meta"));

        let result = archive.write_to(&temp.path().join("pack.zip"));
        assert!(matches!(result, Err(crate::Error::Io(_))));
    }
}
