//! # PackCreator
//!
//! Builds distributable FiveM resource packs (zip archives) from vehicle mod
//! folders.
//!
//! ## Operations
//!
//! - **Simple packs** - zip an arbitrary folder, preserving its layout
//! - **Car packs** - merge several vehicle folders and a shared template
//!   (`fxmanifest.lua`, `audioconfig/`, `sfx/`) into one resource, routing
//!   `.meta` files to `data/<vehicle>/` and streamable assets to
//!   `stream/<vehicle>/`
//!
//! ## Quick Start
//!
//! ```no_run
//! use packcreator::prelude::*;
//!
//! let options = CarPackOptions::new(
//!     vec!["vehicles/alpha".into(), "vehicles/beta".into()],
//!     "output",
//!     TemplateSpec::ByRoot("template".into()),
//! )
//! .with_name("cars");
//!
//! let pack = create_carpack(&options)?;
//! println!("Pack written to {}", pack.display());
//! # Ok::<(), packcreator::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `packcreator` command-line binary

pub mod archive;
pub mod carpack;
pub mod classify;
pub mod config;
pub mod error;
pub mod pack;
pub mod template;
pub mod types;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::archive::{PackArchive, REQUIRED_FOLDERS};
    pub use crate::classify::{AssetNamespace, namespace_for_extension, route_vehicle_file};
    pub use crate::pack::{create_pack, create_pack_with_progress};
    pub use crate::carpack::{
        CarPackOptions, CarPackReport, VehicleRoute,
        create_carpack, create_carpack_with_progress, create_carpack_with_report,
        plan_vehicle_routes,
    };
    pub use crate::template::{ResolvedTemplate, TemplateSpec};
    pub use crate::types::{PackPhase, PackProgress, PackProgressCallback};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
