use clap::Subcommand;
use std::path::PathBuf;

pub mod carpack;
pub mod config;
pub mod pack;
pub mod routes;

/// Output folder used when neither the command line nor the config names one
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Subcommand)]
pub enum Commands {
    /// Zip a folder as-is into a pack
    Pack {
        /// Folder to pack
        source: PathBuf,

        /// Output directory (default: configured output, else ./output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pack file name without .zip (default: pack_<timestamp>)
        #[arg(short, long)]
        name: Option<String>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Merge vehicle folders and a template into one car pack
    Carpack {
        /// Vehicle folder (repeat for several vehicles; default: last packed vehicles)
        #[arg(long = "vehicle")]
        vehicles: Vec<PathBuf>,

        /// Output directory (default: configured output, else ./output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pack file name without .zip (default: carpack_<timestamp>)
        #[arg(short, long)]
        name: Option<String>,

        /// Template folder containing fxmanifest.lua, audioconfig/ and sfx/
        #[arg(short, long)]
        template: Option<PathBuf>,

        /// Manifest file (overrides the template folder together with --audioconfig and --sfx)
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Audio configuration folder
        #[arg(long)]
        audioconfig: Option<PathBuf>,

        /// Sound effects folder
        #[arg(long)]
        sfx: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show where each vehicle file would be placed, without writing a pack
    Routes {
        /// Vehicle folder (repeat for several vehicles; default: last packed vehicles)
        #[arg(long = "vehicle")]
        vehicles: Vec<PathBuf>,

        /// Only list files that would be dropped
        #[arg(long)]
        dropped: bool,
    },

    /// Show or change saved defaults
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Saved defaults commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the current configuration
    Show,

    /// Remember a template folder
    SetTemplate {
        /// Template folder
        dir: PathBuf,
    },

    /// Remember an output folder
    SetOutput {
        /// Output folder
        dir: PathBuf,
    },

    /// Reset all saved defaults
    Clear,
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Pack {
                source,
                output,
                name,
                quiet,
            } => pack::execute(source, output.as_deref(), name.as_deref(), *quiet),
            Commands::Carpack {
                vehicles,
                output,
                name,
                template,
                manifest,
                audioconfig,
                sfx,
                quiet,
            } => carpack::execute(&carpack::CarpackArgs {
                vehicles: vehicles.clone(),
                output: output.clone(),
                name: name.clone(),
                template: template.clone(),
                manifest: manifest.clone(),
                audioconfig: audioconfig.clone(),
                sfx: sfx.clone(),
                quiet: *quiet,
            }),
            Commands::Routes { vehicles, dropped } => routes::execute(vehicles, *dropped),
            Commands::Config { command } => command.execute(),
        }
    }
}

impl ConfigCommands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            ConfigCommands::Show => config::show(),
            ConfigCommands::SetTemplate { dir } => config::set_template(dir),
            ConfigCommands::SetOutput { dir } => config::set_output(dir),
            ConfigCommands::Clear => config::clear(),
        }
    }
}
