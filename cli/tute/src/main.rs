//! Tute CLI: prepares seL4 tutorial build trees.

mod commands;
mod manifest;

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use commands::init::InitOptions;
use manifest::TuteManifest;
use tute_build::{set_log_level, setup_logger};

#[derive(Parser)]
#[command(name = "tute", version, about = "Prepare seL4 tutorial build trees")]
struct Cli {
    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Only show errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a tutorial and configure its build directory
    Init {
        /// Target platform (e.g., pc99, zynq7000)
        #[arg(long)]
        plat: Option<String>,
        /// Tutorial to generate (e.g., hello-world, capabilities)
        #[arg(long)]
        tut: Option<String>,
        /// Generate the reference solution
        #[arg(long)]
        solution: bool,
        /// Generate a specific task of the tutorial
        #[arg(long)]
        task: Option<String>,
        /// The build directory has already been configured
        #[arg(long)]
        initialized: bool,
        /// Tutorial output directory (default: ./<tut>)
        #[arg(long)]
        tute_dir: Option<PathBuf>,
        /// Build directory (default: ./<tut>_build)
        #[arg(long)]
        build_dir: Option<PathBuf>,
        /// Directory containing template.py and tutorials/
        #[arg(long)]
        root: Option<PathBuf>,
        /// Discard the generator's output
        #[arg(long)]
        quiet_generator: bool,
    },
    /// List platforms and tutorials
    List {
        /// Output format (text, json, toml)
        #[arg(long)]
        format: Option<String>,
    },
    /// Show which platforms a tutorial supports
    Describe {
        /// Tutorial name
        tutorial: String,
    },
    /// Check the generator, paths and configuration
    Doctor {
        /// Directory containing template.py and tutorials/
        #[arg(long)]
        root: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let verbosity = set_log_level(cli.verbose, cli.quiet);
    if let Err(e) = setup_logger("tute").with_verbosity(verbosity).init() {
        eprintln!("warning: logging unavailable: {e}");
    }

    match run(cli) {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(1);
        }
    }
}

/// Run a command, returning the process exit code.
fn run(cli: Cli) -> anyhow::Result<i32> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Init {
            plat,
            tut,
            solution,
            task,
            initialized,
            tute_dir,
            build_dir,
            root,
            quiet_generator,
        } => {
            let loaded = load_manifest_optional(&cwd)?;
            commands::init::run(
                &cwd,
                loaded.as_ref().map(|(m, dir)| (m, dir.as_path())),
                InitOptions {
                    platform: plat,
                    tutorial: tut,
                    solution,
                    task,
                    initialized,
                    tute_dir,
                    build_dir,
                    root,
                    quiet_generator,
                },
            )
        }

        Commands::List { format } => commands::target::list(format.as_deref()).map(|()| 0),

        Commands::Describe { tutorial } => commands::target::describe(&tutorial).map(|()| 0),

        Commands::Doctor { root } => {
            let loaded = load_manifest_optional(&cwd)?;
            commands::doctor::run(
                loaded.as_ref().map(|(m, dir)| (m, dir.as_path())),
                root.as_deref(),
            )
            .map(|()| 0)
        }
    }
}

/// Try to load a manifest from the current directory upward.
fn load_manifest_optional(cwd: &Path) -> anyhow::Result<Option<(TuteManifest, PathBuf)>> {
    TuteManifest::find_and_load(cwd)
}
