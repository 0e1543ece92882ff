//! CLI progress display utilities
//!
//! Step indicators with emojis and a determinate bar for archive writing.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

use crate::types::{PackPhase, PackProgress};

// =============================================================================
// Emoji Constants (with ASCII fallbacks for terminals without emoji support)
// =============================================================================

/// Magnifying glass - for validation/scanning
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Car - for vehicle routing
pub static CAR: Emoji<'_, '_> = Emoji("🚗 ", "");
/// Package - for archive writing
pub static PACKAGE: Emoji<'_, '_> = Emoji("📦 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");
/// Warning sign - for dropped/overwritten files
pub static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "! ");

/// Print a step indicator: `[1/3] 📦 Message...`
pub fn print_step(current: usize, total: usize, emoji: &Emoji<'_, '_>, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Progress bar style for determinate progress
///
/// Format: `Writing [████████░░░░░░░░] 50/100`
///
/// # Panics
/// Panics if the template string is invalid (this is a compile-time constant).
#[must_use]
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .expect("valid template")
        .progress_chars("##-")
}

/// Step-and-bar reporter driven by [`PackProgress`] callbacks.
///
/// Prints a step line when the phase changes and shows a bar while entries
/// are written. Quiet mode prints nothing.
pub struct StepReporter {
    quiet: bool,
    total_steps: usize,
    state: std::cell::RefCell<ReporterState>,
}

#[derive(Default)]
struct ReporterState {
    step: usize,
    phase: Option<PackPhase>,
    bar: Option<ProgressBar>,
}

impl StepReporter {
    #[must_use]
    pub fn new(total_steps: usize, quiet: bool) -> Self {
        Self {
            quiet,
            total_steps,
            state: std::cell::RefCell::new(ReporterState::default()),
        }
    }

    /// Handle one progress update
    pub fn update(&self, progress: &PackProgress) {
        if self.quiet {
            return;
        }
        let mut state = self.state.borrow_mut();

        if state.phase != Some(progress.phase) {
            if let Some(bar) = state.bar.take() {
                bar.finish_and_clear();
            }
            state.phase = Some(progress.phase);

            let emoji = match progress.phase {
                PackPhase::Validating | PackPhase::Scanning => &LOOKING_GLASS,
                PackPhase::Routing => &CAR,
                PackPhase::Writing => &PACKAGE,
                PackPhase::Complete => return,
            };
            state.step += 1;
            print_step(state.step, self.total_steps, emoji, progress.phase.as_str());

            if progress.phase == PackPhase::Writing {
                let bar = ProgressBar::new(progress.total as u64);
                bar.set_style(bar_style());
                bar.set_message("Writing");
                state.bar = Some(bar);
            }
        }

        match (&state.bar, progress.phase) {
            (Some(bar), PackPhase::Writing) => bar.set_position(progress.current as u64),
            (None, PackPhase::Routing) => {
                if let Some(name) = &progress.current_file {
                    println!("      {} ({}/{})", name, progress.current, progress.total);
                }
            }
            _ => {}
        }
    }

    /// Clear any active bar
    pub fn finish(&self) {
        if let Some(bar) = self.state.borrow_mut().bar.take() {
            bar.finish_and_clear();
        }
    }
}
