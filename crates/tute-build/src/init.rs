//! Tutorial and build directory setup in one step.

use std::path::PathBuf;

use log::info;
use tute_targets::{Platform, Tutorial};

use crate::build_tree::init_build_directory;
use crate::error::Result;
use crate::generator::{Generator, GeneratorSettings, Invocation, OutputSink};
use crate::tute_config::init_tute_directory;

/// Everything needed to prepare one tutorial for building.
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub platform: Platform,
    pub tutorial: Tutorial,
    /// Generate the reference solution instead of the exercise.
    pub solution: bool,
    /// Exercise sub-step to generate, if any.
    pub task: Option<String>,
    /// Whether the build directory has already been configured.
    pub initialized: bool,
    /// Directory holding `template.py` and `tutorials/`.
    pub tutorial_root: PathBuf,
    /// Where the tutorial's sources are generated.
    pub tute_directory: PathBuf,
    /// Where the generator configures the build.
    pub build_directory: PathBuf,
    pub settings: GeneratorSettings,
    pub output: OutputSink,
}

/// Write the tutorial marker, then configure the build tree.
///
/// Returns the final generator run; see
/// [`init_build_directory`](crate::init_build_directory) for which run that is.
pub fn init_directories<G: Generator + ?Sized>(
    request: &InitRequest,
    generator: &mut G,
) -> Result<Invocation> {
    let marker = init_tute_directory(
        request.platform,
        request.tutorial,
        request.solution,
        request.task.as_deref(),
        &request.tutorial_root,
        &request.tute_directory,
    )?;
    info!("wrote {}", marker.display());

    init_build_directory(
        generator,
        request.platform,
        request.initialized,
        &request.build_directory,
        &request.tute_directory,
        &request.settings,
        request.output,
    )
}
