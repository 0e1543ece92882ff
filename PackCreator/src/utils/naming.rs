//! Archive file naming

use crate::error::{Error, Result};

/// Sortable local timestamp used for default pack names (`20250131_154502`)
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Build the archive file name: `<name>.zip`, or `<default_prefix>_<timestamp>.zip`.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the caller-supplied name is blank or
/// contains a path separator.
pub fn archive_file_name(name: Option<&str>, default_prefix: &str) -> Result<String> {
    match name {
        Some(name) => {
            if name.trim().is_empty() {
                return Err(Error::Validation("pack name must not be empty".to_string()));
            }
            if name.contains(['/', '\\']) {
                return Err(Error::Validation(format!(
                    "pack name must not contain path separators: {name}"
                )));
            }
            Ok(format!("{name}.zip"))
        }
        None => Ok(format!("{default_prefix}_{}.zip", timestamp())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_name() {
        assert_eq!(archive_file_name(Some("cars"), "carpack").unwrap(), "cars.zip");
    }

    #[test]
    fn test_default_name_has_prefix_and_timestamp() {
        let name = archive_file_name(None, "pack").unwrap();
        assert!(name.starts_with("pack_"));
        assert!(name.ends_with(".zip"));
        // pack_YYYYMMDD_HHMMSS.zip
        assert_eq!(name.len(), "pack_".len() + 15 + ".zip".len());
    }

    #[test]
    fn test_rejects_separators() {
        assert!(matches!(
            archive_file_name(Some("../escape"), "pack"),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            archive_file_name(Some("  "), "pack"),
            Err(Error::Validation(_))
        ));
    }
}
