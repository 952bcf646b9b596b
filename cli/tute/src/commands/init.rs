//! `tute init`: prepare a tutorial and its build tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::{error, info};
use tute_build::{init_directories, resolve_tutorial_root, CMake, InitRequest, OutputSink};
use tute_targets::{validate_selection, Platform, Tutorial};

use crate::manifest::TuteManifest;

/// Options gathered from the command line.
#[derive(Debug, Default)]
pub struct InitOptions {
    pub platform: Option<String>,
    pub tutorial: Option<String>,
    pub solution: bool,
    pub task: Option<String>,
    pub initialized: bool,
    pub tute_dir: Option<PathBuf>,
    pub build_dir: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub quiet_generator: bool,
}

/// Initialize the tutorial and build directories.
///
/// Returns the generator's exit code.
pub fn run(
    cwd: &Path,
    manifest: Option<(&TuteManifest, &Path)>,
    options: InitOptions,
) -> Result<i32> {
    let request = build_request(cwd, manifest, options)?;

    fs::create_dir_all(&request.tute_directory)
        .with_context(|| format!("creating {}", request.tute_directory.display()))?;
    fs::create_dir_all(&request.build_directory)
        .with_context(|| format!("creating {}", request.build_directory.display()))?;

    let mut cmake = CMake::from_settings(&request.settings);
    let result = init_directories(&request, &mut cmake)?;

    let code = result.exit_code.unwrap_or(1);
    if result.success() {
        info!(
            "{} is ready for {} in {}",
            request.tutorial,
            request.platform,
            request.build_directory.display()
        );
    } else {
        error!("{} exited with status {code}", cmake.program());
    }
    Ok(code)
}

/// Resolve flags, configuration and defaults into a request.
pub(crate) fn build_request(
    cwd: &Path,
    manifest: Option<(&TuteManifest, &Path)>,
    options: InitOptions,
) -> Result<InitRequest> {
    let defaults = manifest.map(|(m, _)| &m.defaults);

    let platform = match options.platform {
        Some(name) => name.parse::<Platform>()?,
        None => defaults
            .and_then(|d| d.platform)
            .ok_or_else(|| anyhow!("no platform given (use --plat or set defaults.platform in tute.toml)"))?,
    };
    let tutorial = match options.tutorial {
        Some(name) => name.parse::<Tutorial>()?,
        None => defaults
            .and_then(|d| d.tutorial)
            .ok_or_else(|| anyhow!("no tutorial given (use --tut or set defaults.tutorial in tute.toml)"))?,
    };
    validate_selection(tutorial, platform)?;

    let root = options
        .root
        .or_else(|| manifest.and_then(|(m, dir)| m.root(dir)));
    let tutorial_root = resolve_tutorial_root(root.as_deref())
        .context("resolving the tutorial root")?;

    let tute_directory = options
        .tute_dir
        .map(|dir| cwd.join(dir))
        .unwrap_or_else(|| cwd.join(tutorial.name()));
    let build_directory = options
        .build_dir
        .map(|dir| cwd.join(dir))
        .unwrap_or_else(|| cwd.join(format!("{}_build", tutorial.name())));

    let settings = manifest
        .map(|(m, _)| m.generator_settings())
        .unwrap_or_default();

    Ok(InitRequest {
        platform,
        tutorial,
        solution: options.solution,
        task: options.task,
        initialized: options.initialized,
        tutorial_root,
        tute_directory,
        build_directory,
        settings,
        output: if options.quiet_generator {
            OutputSink::Null
        } else {
            OutputSink::Inherit
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(plat: &str, tut: &str, root: &Path) -> InitOptions {
        InitOptions {
            platform: Some(plat.to_string()),
            tutorial: Some(tut.to_string()),
            root: Some(root.to_path_buf()),
            ..InitOptions::default()
        }
    }

    #[test]
    fn default_directories_follow_tutorial_name() {
        let dir = tempfile::tempdir().unwrap();
        let req = build_request(dir.path(), None, options("pc99", "untyped", dir.path())).unwrap();
        assert_eq!(req.platform, Platform::Pc99);
        assert_eq!(req.tutorial, Tutorial::Untyped);
        assert_eq!(req.tute_directory, dir.path().join("untyped"));
        assert_eq!(req.build_directory, dir.path().join("untyped_build"));
        assert_eq!(req.tutorial_root, dir.path().canonicalize().unwrap());
        assert_eq!(req.output, OutputSink::Inherit);
    }

    #[test]
    fn unsupported_pair_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = build_request(dir.path(), None, options("zynq7000", "mapping", dir.path()))
            .unwrap_err();
        assert!(err.to_string().contains("does not support"));
    }

    #[test]
    fn unknown_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(build_request(dir.path(), None, options("sabre", "untyped", dir.path())).is_err());
        assert!(build_request(dir.path(), None, options("pc99", "hello-9", dir.path())).is_err());
    }

    #[test]
    fn missing_selection_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let err = build_request(dir.path(), None, InitOptions::default()).unwrap_err();
        assert!(err.to_string().contains("no platform given"));
    }

    #[test]
    fn manifest_supplies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manifest: TuteManifest = toml::from_str(
            r#"
[defaults]
platform = "zynq7000"
tutorial = "hello-camkes-timer"

[generator]
name = "Unix Makefiles"

[paths]
root = "."
"#,
        )
        .unwrap();

        let req = build_request(
            dir.path(),
            Some((&manifest, dir.path())),
            InitOptions {
                quiet_generator: true,
                ..InitOptions::default()
            },
        )
        .unwrap();
        assert_eq!(req.platform, Platform::Zynq7000);
        assert_eq!(req.tutorial, Tutorial::HelloCamkesTimer);
        assert_eq!(req.settings.generator_name, "Unix Makefiles");
        assert_eq!(req.tutorial_root, dir.path().canonicalize().unwrap());
        assert_eq!(req.output, OutputSink::Null);
    }

    #[test]
    fn flags_override_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest: TuteManifest =
            toml::from_str("[defaults]\nplatform = \"zynq7000\"\ntutorial = \"hello-1\"\n").unwrap();
        let req = build_request(
            dir.path(),
            Some((&manifest, dir.path())),
            options("pc99", "mapping", dir.path()),
        )
        .unwrap();
        assert_eq!(req.platform, Platform::Pc99);
        assert_eq!(req.tutorial, Tutorial::Mapping);
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_generator_status() {
        let dir = tempfile::tempdir().unwrap();
        // `false` stands in for a generator that always fails.
        let manifest: TuteManifest = toml::from_str("[generator]\nprogram = \"false\"\n").unwrap();
        let mut opts = options("pc99", "hello-world", dir.path());
        opts.quiet_generator = true;

        let code = run(dir.path(), Some((&manifest, dir.path())), opts).unwrap();
        assert_ne!(code, 0);
        assert!(dir.path().join("hello-world").join(".tute_config").is_file());
        assert!(dir.path().join("hello-world_build").is_dir());
    }
}
