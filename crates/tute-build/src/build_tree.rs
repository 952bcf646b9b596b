//! Build-tree initialization.
//!
//! A fresh build tree takes two configure passes: the first with the full
//! toolchain and platform settings, the second bare, to settle cache values
//! the first pass only seeds. Every call then finishes with one more bare
//! pass, which for an existing tree is simply a refresh.

use std::path::Path;

use log::{debug, info};
use tute_targets::Platform;

use crate::error::Result;
use crate::generator::{Generator, GeneratorSettings, Invocation, OutputSink};

/// Arguments for the first pass over a fresh build tree.
pub fn bootstrap_args(
    platform: Platform,
    tute_directory: &Path,
    settings: &GeneratorSettings,
) -> Vec<String> {
    let tute_dir_name = tute_directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut args = vec![
        format!("-DCMAKE_TOOLCHAIN_FILE={}", settings.toolchain_file),
        "-G".to_string(),
        settings.generator_name.clone(),
    ];
    args.extend(platform.flags().iter().map(|flag| flag.to_string()));
    args.push(format!("-DTUTORIAL_DIR={tute_dir_name}"));
    args.push(settings.source_dir.clone());
    args
}

/// Configure `build_directory`, bootstrapping it first unless `initialized`.
///
/// Returns the last generator run. If the bootstrap pass or its confirming
/// pass fails, that run is returned immediately and nothing further is
/// attempted. The final pass is returned whatever its status; callers must
/// check [`Invocation::success`].
#[allow(clippy::too_many_arguments)]
pub fn init_build_directory<G: Generator + ?Sized>(
    generator: &mut G,
    platform: Platform,
    initialized: bool,
    build_directory: &Path,
    tute_directory: &Path,
    settings: &GeneratorSettings,
    output: OutputSink,
) -> Result<Invocation> {
    let refresh = vec![settings.source_dir.clone()];

    if !initialized {
        info!("bootstrapping build tree in {}", build_directory.display());
        let args = bootstrap_args(platform, tute_directory, settings);
        let result = generator.run(&args, build_directory, output)?;
        if !result.success() {
            debug!("bootstrap pass failed with {:?}", result.exit_code);
            return Ok(result);
        }
        let result = generator.run(&refresh, build_directory, output)?;
        if !result.success() {
            debug!("confirming pass failed with {:?}", result.exit_code);
            return Ok(result);
        }
    }

    debug!("refreshing build tree in {}", build_directory.display());
    generator.run(&refresh, build_directory, output)
}
