//! CLI command for car packs

use std::path::PathBuf;
use std::time::Instant;

use crate::carpack::{CarPackOptions, create_carpack_with_progress};
use crate::cli::progress::{StepReporter, WARNING, print_done};
use crate::config::PersistedConfig;
use crate::template::TemplateSpec;

use super::DEFAULT_OUTPUT_DIR;

/// Parsed `carpack` arguments
pub struct CarpackArgs {
    pub vehicles: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub name: Option<String>,
    pub template: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
    pub audioconfig: Option<PathBuf>,
    pub sfx: Option<PathBuf>,
    pub quiet: bool,
}

pub fn execute(args: &CarpackArgs) -> anyhow::Result<()> {
    let mut config = PersistedConfig::load();

    // Command-line values win over saved defaults
    let template = TemplateSpec::from_parts(
        args.template.clone().or_else(|| config.template_dir.clone()),
        args.manifest.clone(),
        args.audioconfig.clone(),
        args.sfx.clone(),
    )?;
    let output = args
        .output
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let vehicles = config.vehicles_or_recent(&args.vehicles);
    if args.vehicles.is_empty() && !vehicles.is_empty() {
        println!("Using last packed vehicles: {}", display_list(&vehicles));
    }

    let mut options = CarPackOptions::new(vehicles.clone(), output, template);
    options.pack_name.clone_from(&args.name);

    let started = Instant::now();
    let reporter = StepReporter::new(3, args.quiet);
    let result = create_carpack_with_progress(&options, &|p| reporter.update(p));
    reporter.finish();
    let report = result?;

    if !args.quiet {
        print_done(started.elapsed());
    }

    if !report.dropped.is_empty() {
        println!();
        println!("{}{} files skipped (no routing rule):", WARNING, report.dropped.len());
        for path in &report.dropped {
            println!("  - {}", path.display());
        }
    }
    if !report.overwritten.is_empty() {
        println!();
        println!("{}{} entries written more than once (last one kept):", WARNING, report.overwritten.len());
        for entry in &report.overwritten {
            println!("  - {entry}");
        }
    }

    println!();
    println!("Car pack created: {} ({} files)", report.path.display(), report.files_written);

    config.remember_vehicles(&vehicles);
    if let Err(e) = config.save() {
        tracing::warn!("Could not save config: {}", e);
    }
    Ok(())
}

fn display_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
