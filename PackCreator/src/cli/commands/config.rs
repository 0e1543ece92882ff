//! CLI commands for saved defaults

use std::path::Path;

use crate::config::PersistedConfig;
use crate::utils::require_directory;

pub fn show() -> anyhow::Result<()> {
    let config = PersistedConfig::load();

    match PersistedConfig::config_path() {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (unavailable on this platform)"),
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn set_template(dir: &Path) -> anyhow::Result<()> {
    let mut config = PersistedConfig::load();
    config.template_dir = Some(require_directory(dir)?);
    config.save()?;
    println!("Template folder set to {}", dir.display());
    Ok(())
}

pub fn set_output(dir: &Path) -> anyhow::Result<()> {
    let mut config = PersistedConfig::load();
    // The output folder may not exist yet; it is created on first pack
    config.output_dir = Some(crate::utils::resolve_path(dir)?);
    config.save()?;
    println!("Output folder set to {}", dir.display());
    Ok(())
}

pub fn clear() -> anyhow::Result<()> {
    PersistedConfig::default().save()?;
    println!("Configuration reset");
    Ok(())
}
