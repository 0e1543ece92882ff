//! Utility functions

pub mod naming;
pub mod path;

pub use naming::{archive_file_name, timestamp};
pub use path::{is_same_path, normalize_path, relative_path, require_directory, resolve_path};
