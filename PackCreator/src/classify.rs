//! Vehicle file classification
//!
//! Every vehicle file is routed by extension into one of two resource
//! namespaces: `.meta` files go to `data/`, streamable engine assets go to
//! `stream/`. Anything else is dropped.

use std::fmt;
use std::path::{Component, Path};

use crate::utils::normalize_path;

/// Destination namespace inside the pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetNamespace {
    /// Metadata files (`data/<vehicle>/...`)
    Data,
    /// Streamed engine assets (`stream/<vehicle>/...`)
    Stream,
}

impl AssetNamespace {
    /// Top-level archive folder for this namespace
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Data => "data",
            Self::Stream => "stream",
        }
    }
}

impl fmt::Display for AssetNamespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension lookup table. Closed set; matching ignores ASCII case.
const EXTENSION_TABLE: &[(&str, AssetNamespace)] = &[
    // Metadata
    ("meta", AssetNamespace::Data),
    // Models
    ("yft", AssetNamespace::Stream), // fragment
    ("ydr", AssetNamespace::Stream), // drawable
    ("ydd", AssetNamespace::Stream), // drawable dictionary
    // Textures
    ("ytd", AssetNamespace::Stream),
    // Animation
    ("ycd", AssetNamespace::Stream), // clip dictionary
    ("yed", AssetNamespace::Stream), // expression dictionary
    // Collision
    ("ybn", AssetNamespace::Stream),
    // Map placement and archetypes
    ("ymap", AssetNamespace::Stream),
    ("ytyp", AssetNamespace::Stream),
    // Audio
    ("awc", AssetNamespace::Stream), // audio wave container
    ("rel", AssetNamespace::Stream), // audio relationship data
];

/// Look up the namespace for a file extension (with or without the leading dot).
pub fn namespace_for_extension(ext: &str) -> Option<AssetNamespace> {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    EXTENSION_TABLE
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(ext))
        .map(|(_, namespace)| *namespace)
}

/// Look up the namespace for a path by its extension.
pub fn namespace_for_path(path: &Path) -> Option<AssetNamespace> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(namespace_for_extension)
}

/// Compute the archive destination of a vehicle file.
///
/// `relative` is the file's path below the vehicle root. Rules, in order:
///
/// 1. Under the vehicle's own `data/` folder: metadata or streamable files
///    keep their sub-path below `data/<vehicle>/`.
/// 2. Under the vehicle's own `stream/` folder: streamable files keep their
///    sub-path below `stream/<vehicle>/`.
/// 3. Anywhere else: routed by extension to `data/<vehicle>/` or
///    `stream/<vehicle>/` with the full relative path.
///
/// Returns `None` when the file is dropped.
pub fn route_vehicle_file(vehicle: &str, relative: &Path) -> Option<String> {
    let mut components = relative.components();
    let leading = match components.next() {
        Some(Component::Normal(first)) => first.to_str(),
        _ => None,
    };
    let rest = components.as_path();
    let nested = !rest.as_os_str().is_empty();

    let (namespace, sub_path) = match leading {
        Some("data") if nested => {
            // Either namespace is accepted, but the file stays under data/
            namespace_for_path(rest)?;
            (AssetNamespace::Data, rest)
        }
        Some("stream") if nested => match namespace_for_path(rest)? {
            AssetNamespace::Stream => (AssetNamespace::Stream, rest),
            AssetNamespace::Data => return None,
        },
        _ => (namespace_for_path(relative)?, relative),
    };

    Some(format!("{namespace}/{vehicle}/{}", normalize_path(sub_path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lookup() {
        assert_eq!(namespace_for_extension("meta"), Some(AssetNamespace::Data));
        assert_eq!(namespace_for_extension(".YFT"), Some(AssetNamespace::Stream));
        assert_eq!(namespace_for_extension("Ytd"), Some(AssetNamespace::Stream));
        assert_eq!(namespace_for_extension("txt"), None);
        assert_eq!(namespace_for_extension(""), None);
    }

    #[test]
    fn test_root_files_route_by_extension() {
        assert_eq!(
            route_vehicle_file("alpha", Path::new("vehicles.meta")).as_deref(),
            Some("data/alpha/vehicles.meta")
        );
        assert_eq!(
            route_vehicle_file("alpha", Path::new("model.yft")).as_deref(),
            Some("stream/alpha/model.yft")
        );
        assert_eq!(
            route_vehicle_file("alpha", Path::new("MODEL_HI.YFT")).as_deref(),
            Some("stream/alpha/MODEL_HI.YFT")
        );
        assert_eq!(route_vehicle_file("alpha", Path::new("readme.txt")), None);
    }

    #[test]
    fn test_unrecognized_folders_keep_full_path() {
        assert_eq!(
            route_vehicle_file("alpha", Path::new("extras/carcols.meta")).as_deref(),
            Some("data/alpha/extras/carcols.meta")
        );
        assert_eq!(
            route_vehicle_file("alpha", Path::new("extras/wheels.ytd")).as_deref(),
            Some("stream/alpha/extras/wheels.ytd")
        );
    }

    #[test]
    fn test_data_subtree_accepts_both_sets() {
        assert_eq!(
            route_vehicle_file("alpha", Path::new("data/handling.meta")).as_deref(),
            Some("data/alpha/handling.meta")
        );
        assert_eq!(
            route_vehicle_file("alpha", Path::new("data/extra.yft")).as_deref(),
            Some("data/alpha/extra.yft")
        );
        assert_eq!(route_vehicle_file("alpha", Path::new("data/notes.txt")), None);
    }

    #[test]
    fn test_stream_subtree_accepts_only_streamable() {
        assert_eq!(
            route_vehicle_file("alpha", Path::new("stream/sub/model.yft")).as_deref(),
            Some("stream/alpha/sub/model.yft")
        );
        assert_eq!(route_vehicle_file("alpha", Path::new("stream/vehicles.meta")), None);
    }

    #[test]
    fn test_leading_segment_match_is_exact() {
        // "Data" is not the data/ subtree, so the file routes by extension with its full path
        assert_eq!(
            route_vehicle_file("alpha", Path::new("Data/extra.yft")).as_deref(),
            Some("stream/alpha/Data/extra.yft")
        );
    }
}
