//! Shared template bundle: `fxmanifest.lua`, `audioconfig/` and `sfx/`
//!
//! A template is either a single root folder laid out by convention or
//! three explicit paths. It is resolved and validated once, before anything
//! is added to an archive.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::archive::PackArchive;
use crate::error::{Error, Result};
use crate::utils::{is_same_path, relative_path, resolve_path};

/// Manifest file name, both inside a template root and at the archive root
pub const MANIFEST_FILE_NAME: &str = "fxmanifest.lua";
/// Audio configuration folder (template sub-path and archive prefix)
pub const AUDIO_CONFIG_DIR: &str = "audioconfig";
/// Sound effects folder (template sub-path and archive prefix)
pub const SFX_DIR: &str = "sfx";

/// Where the template bundle comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSpec {
    /// Single root containing `fxmanifest.lua`, `audioconfig/` and `sfx/`
    ByRoot(PathBuf),
    /// Individually supplied parts
    ByParts {
        manifest: PathBuf,
        audio_config_dir: PathBuf,
        sfx_dir: PathBuf,
    },
}

impl TemplateSpec {
    /// Build a template source from optional caller inputs.
    ///
    /// All three individual paths win when present; if any one is missing,
    /// everything is derived from `template_dir` instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when an individual path is missing and
    /// no `template_dir` was given.
    pub fn from_parts(
        template_dir: Option<PathBuf>,
        manifest: Option<PathBuf>,
        audio_config_dir: Option<PathBuf>,
        sfx_dir: Option<PathBuf>,
    ) -> Result<Self> {
        match (manifest, audio_config_dir, sfx_dir) {
            (Some(manifest), Some(audio_config_dir), Some(sfx_dir)) => Ok(Self::ByParts {
                manifest,
                audio_config_dir,
                sfx_dir,
            }),
            _ => template_dir.map(Self::ByRoot).ok_or_else(|| {
                Error::Validation(
                    "template not specified: give a template folder or all of manifest, audioconfig and sfx"
                        .to_string(),
                )
            }),
        }
    }

    /// The three template paths, unvalidated.
    #[must_use]
    pub fn paths(&self) -> (PathBuf, PathBuf, PathBuf) {
        match self {
            Self::ByRoot(root) => (
                root.join(MANIFEST_FILE_NAME),
                root.join(AUDIO_CONFIG_DIR),
                root.join(SFX_DIR),
            ),
            Self::ByParts {
                manifest,
                audio_config_dir,
                sfx_dir,
            } => (manifest.clone(), audio_config_dir.clone(), sfx_dir.clone()),
        }
    }

    /// Validate every part and resolve them to absolute paths.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotADirectory`] if `audioconfig` or `sfx` is missing
    /// or not a directory, and [`Error::NotFound`] if the manifest is missing
    /// or not a regular file.
    pub fn resolve(&self) -> Result<ResolvedTemplate> {
        let (manifest, audio_config_dir, sfx_dir) = self.paths();

        for dir in [&audio_config_dir, &sfx_dir] {
            if !dir.is_dir() {
                return Err(Error::not_a_directory(dir));
            }
        }
        if !manifest.is_file() {
            return Err(Error::not_found(&manifest));
        }

        Ok(ResolvedTemplate {
            manifest: resolve_path(&manifest)?,
            audio_config_dir: resolve_path(&audio_config_dir)?,
            sfx_dir: resolve_path(&sfx_dir)?,
        })
    }
}

/// Template parts that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    pub manifest: PathBuf,
    pub audio_config_dir: PathBuf,
    pub sfx_dir: PathBuf,
}

/// Copy the template into `archive`.
///
/// The manifest lands at the root as `fxmanifest.lua`; `audioconfig` and
/// `sfx` are copied recursively under their prefixes with a marker entry for
/// every sub-folder, so empty folders survive. A file at `exclude` (the
/// archive being built) is never copied.
pub fn write_template(
    archive: &mut PackArchive,
    template: &ResolvedTemplate,
    exclude: Option<&Path>,
) -> Result<()> {
    archive.add_file(MANIFEST_FILE_NAME, &template.manifest);

    let audio_files = copy_tree(archive, &template.audio_config_dir, AUDIO_CONFIG_DIR, exclude)?;
    let sfx_files = copy_tree(archive, &template.sfx_dir, SFX_DIR, exclude)?;

    tracing::info!(
        "Template added: {} audioconfig files, {} sfx files",
        audio_files,
        sfx_files
    );
    Ok(())
}

/// Recursively add `source_dir` under `prefix/`, returning the number of files added.
fn copy_tree(
    archive: &mut PackArchive,
    source_dir: &Path,
    prefix: &str,
    exclude: Option<&Path>,
) -> Result<usize> {
    archive.add_directory(prefix);

    let mut files = 0;
    for entry in WalkDir::new(source_dir)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if exclude.is_some_and(|pack| is_same_path(entry.path(), pack)) {
            continue;
        }
        let relative = relative_path(entry.path(), source_dir)
            .ok_or_else(|| Error::InvalidPath(entry.path().display().to_string()))?;
        let archive_path = format!("{prefix}/{relative}");

        if entry.file_type().is_dir() {
            archive.add_directory(&archive_path);
        } else if entry.file_type().is_file() {
            archive.add_file(&archive_path, entry.path());
            files += 1;
        }
    }

    Ok(files)
}
