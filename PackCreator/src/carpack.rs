//! Car pack assembly
//!
//! Merges one or more vehicle folders and a shared template into a single
//! FiveM resource:
//!
//! ```text
//! fxmanifest.lua
//! audioconfig/...          (template)
//! sfx/...                  (template)
//! data/<vehicle>/...       (.meta files)
//! stream/<vehicle>/...     (models, textures, animations, ...)
//! ```
//!
//! All inputs are validated before the archive is touched. Files without a
//! recognized extension are dropped; two vehicles writing the same
//! destination overwrite each other (last write wins). Both are reported in
//! [`CarPackReport`].

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::archive::PackArchive;
use crate::classify::route_vehicle_file;
use crate::error::{Error, Result};
use crate::template::{MANIFEST_FILE_NAME, TemplateSpec, write_template};
use crate::types::{PackPhase, PackProgress, PackProgressCallback};
use crate::utils::{archive_file_name, is_same_path, normalize_path, require_directory, resolve_path};

/// Prefix for car packs created without an explicit name
pub const DEFAULT_CARPACK_PREFIX: &str = "carpack";

/// Everything needed to build one car pack
#[derive(Debug, Clone)]
pub struct CarPackOptions {
    /// Vehicle folders, merged in this order
    pub vehicle_dirs: Vec<PathBuf>,
    /// Folder receiving the archive (created if missing)
    pub output_dir: PathBuf,
    /// Archive base name without `.zip`; timestamped default when `None`
    pub pack_name: Option<String>,
    /// Template bundle source
    pub template: TemplateSpec,
}

impl CarPackOptions {
    pub fn new(vehicle_dirs: Vec<PathBuf>, output_dir: impl Into<PathBuf>, template: TemplateSpec) -> Self {
        Self {
            vehicle_dirs,
            output_dir: output_dir.into(),
            pack_name: None,
            template,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.pack_name = Some(name.into());
        self
    }
}

/// Outcome of a car pack build
#[derive(Debug, Clone)]
pub struct CarPackReport {
    /// Absolute path of the written archive
    pub path: PathBuf,
    /// Number of file entries in the archive (template included)
    pub files_written: usize,
    /// Vehicle files that matched no routing rule
    pub dropped: Vec<PathBuf>,
    /// Archive paths written more than once
    pub overwritten: Vec<String>,
}

/// Routing decision for one vehicle file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleRoute {
    /// Vehicle namespace (folder name)
    pub vehicle: String,
    /// Source file on disk
    pub source: PathBuf,
    /// Path below the vehicle root, forward slashes
    pub relative: String,
    /// Archive destination, `None` when dropped
    pub destination: Option<String>,
}

/// A vehicle folder that passed validation
struct VehicleSource {
    name: String,
    root: PathBuf,
}

/// Build a car pack and return the absolute archive path.
///
/// # Errors
///
/// Returns [`Error::Validation`] for an empty vehicle list or an unspecified
/// template, [`Error::NotFound`]/[`Error::NotADirectory`] for the first bad
/// vehicle folder or template part. Nothing is written when validation fails.
pub fn create_carpack(options: &CarPackOptions) -> Result<PathBuf> {
    create_carpack_with_progress(options, &|_| {}).map(|report| report.path)
}

/// Build a car pack and return the full report.
pub fn create_carpack_with_report(options: &CarPackOptions) -> Result<CarPackReport> {
    create_carpack_with_progress(options, &|_| {})
}

/// Build a car pack with progress callback.
pub fn create_carpack_with_progress(
    options: &CarPackOptions,
    progress: PackProgressCallback,
) -> Result<CarPackReport> {
    progress(&PackProgress::new(PackPhase::Validating, 1, 1));

    let vehicles = validate_vehicle_dirs(&options.vehicle_dirs)?;
    let file_name = archive_file_name(options.pack_name.as_deref(), DEFAULT_CARPACK_PREFIX)?;
    let template = options.template.resolve()?;

    std::fs::create_dir_all(&options.output_dir)?;
    let pack_path = resolve_path(&options.output_dir)?.join(file_name);

    let mut archive = PackArchive::new();
    archive.add_required_folders();
    write_template(&mut archive, &template, Some(&pack_path))?;

    let mut dropped = Vec::new();
    let total = vehicles.len();
    for (index, vehicle) in vehicles.iter().enumerate() {
        progress(&PackProgress::with_file(PackPhase::Routing, index + 1, total, vehicle.name.as_str()));

        for route in scan_vehicle(vehicle, Some(&pack_path))? {
            match route.destination {
                Some(destination) => archive.add_file(&destination, route.source),
                None => {
                    tracing::debug!("Dropping {}/{}: no routing rule", route.vehicle, route.relative);
                    dropped.push(route.source);
                }
            }
        }
    }

    tracing::info!(
        "Routed {} vehicles into {} files ({} dropped)",
        total,
        archive.file_count(),
        dropped.len()
    );
    archive.write_to_with_progress(&pack_path, progress)?;
    progress(&PackProgress::new(PackPhase::Complete, 1, 1));

    Ok(CarPackReport {
        path: pack_path,
        files_written: archive.file_count(),
        dropped,
        overwritten: archive.overwritten().to_vec(),
    })
}

/// Classify every file of the given vehicle folders without writing anything.
///
/// Uses the same validation and routing as [`create_carpack`]; vehicle
/// manifests (`fxmanifest.lua`) are skipped and do not appear in the result.
pub fn plan_vehicle_routes(vehicle_dirs: &[PathBuf]) -> Result<Vec<VehicleRoute>> {
    let vehicles = validate_vehicle_dirs(vehicle_dirs)?;

    let mut routes = Vec::new();
    for vehicle in &vehicles {
        routes.extend(scan_vehicle(vehicle, None)?);
    }
    Ok(routes)
}

fn validate_vehicle_dirs(vehicle_dirs: &[PathBuf]) -> Result<Vec<VehicleSource>> {
    if vehicle_dirs.is_empty() {
        return Err(Error::Validation("at least one vehicle folder is required".to_string()));
    }

    vehicle_dirs
        .iter()
        .map(|dir| {
            let root = require_directory(dir)?;
            let name = root
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| {
                    Error::Validation(format!("cannot derive a vehicle name from {}", dir.display()))
                })?
                .to_string();
            Ok(VehicleSource { name, root })
        })
        .collect()
}

fn scan_vehicle(vehicle: &VehicleSource, exclude: Option<&Path>) -> Result<Vec<VehicleRoute>> {
    tracing::info!("Scanning vehicle {} at {:?}", vehicle.name, vehicle.root);

    let mut routes = Vec::new();
    for entry in WalkDir::new(&vehicle.root)
        .follow_links(true)
        .min_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() || entry.file_name() == MANIFEST_FILE_NAME {
            continue;
        }
        if exclude.is_some_and(|pack| is_same_path(entry.path(), pack)) {
            continue;
        }

        let relative_fs = entry
            .path()
            .strip_prefix(&vehicle.root)
            .map_err(|e| Error::InvalidPath(e.to_string()))?;

        routes.push(VehicleRoute {
            vehicle: vehicle.name.clone(),
            source: entry.path().to_path_buf(),
            destination: route_vehicle_file(&vehicle.name, relative_fs),
            relative: normalize_path(relative_fs),
        });
    }
    Ok(routes)
}
