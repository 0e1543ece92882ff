//! CLI command for simple packs

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::progress::{StepReporter, print_done};
use crate::config::PersistedConfig;
use crate::pack::create_pack_with_progress;

use super::DEFAULT_OUTPUT_DIR;

pub fn execute(source: &Path, output: Option<&Path>, name: Option<&str>, quiet: bool) -> anyhow::Result<()> {
    let output = match output {
        Some(dir) => dir.to_path_buf(),
        None => PersistedConfig::load()
            .output_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
    };

    let started = Instant::now();
    let reporter = StepReporter::new(3, quiet);
    let result = create_pack_with_progress(source, &output, name, &|p| reporter.update(p));
    reporter.finish();
    let pack_path = result?;

    if !quiet {
        print_done(started.elapsed());
    }
    println!("Pack created: {}", pack_path.display());
    Ok(())
}
