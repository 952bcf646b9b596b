//! `tute.toml` configuration.
//!
//! Every section and key is optional. Command-line flags override the file;
//! the file overrides built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tute_build::GeneratorSettings;
use tute_targets::{Platform, Tutorial};

/// File name searched for by [`TuteManifest::find_and_load`].
pub const MANIFEST_FILE: &str = "tute.toml";

/// The top-level configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuteManifest {
    /// Selection used when `--plat` / `--tut` are omitted.
    #[serde(default)]
    pub defaults: DefaultsConfig,
    /// How the build-file generator is invoked.
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Filesystem locations.
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub tutorial: Option<Tutorial>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Generator executable (default `cmake`).
    #[serde(default)]
    pub program: Option<String>,
    /// Toolchain file passed on bootstrap.
    #[serde(default)]
    pub toolchain_file: Option<String>,
    /// `-G` generator selector (default `Ninja`).
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    /// Tutorial root; relative paths are taken from the manifest's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
}

impl TuteManifest {
    /// Search upward from `start_dir` for a `tute.toml` file, parse and return it
    /// along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let manifest: TuteManifest = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((manifest, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing tute.toml")
    }

    /// Generator settings with the manifest's overrides applied.
    pub fn generator_settings(&self) -> GeneratorSettings {
        let mut settings = GeneratorSettings::default();
        if let Some(program) = &self.generator.program {
            settings.program = program.clone();
        }
        if let Some(toolchain_file) = &self.generator.toolchain_file {
            settings.toolchain_file = toolchain_file.clone();
        }
        if let Some(name) = &self.generator.name {
            settings.generator_name = name.clone();
        }
        settings
    }

    /// The configured tutorial root, resolved against `manifest_dir`.
    pub fn root(&self, manifest_dir: &Path) -> Option<PathBuf> {
        self.paths.root.as_ref().map(|root| manifest_dir.join(root))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[defaults]
platform = "zynq7000"
tutorial = "hello-camkes-timer"

[generator]
program = "cmake3"
toolchain-file = "../kernel/llvm.cmake"
name = "Unix Makefiles"

[paths]
root = "projects/sel4-tutorials"
"#;
        let manifest = TuteManifest::from_str(toml_str).unwrap();
        assert_eq!(manifest.defaults.platform, Some(Platform::Zynq7000));
        assert_eq!(manifest.defaults.tutorial, Some(Tutorial::HelloCamkesTimer));

        let settings = manifest.generator_settings();
        assert_eq!(settings.program, "cmake3");
        assert_eq!(settings.toolchain_file, "../kernel/llvm.cmake");
        assert_eq!(settings.generator_name, "Unix Makefiles");
        assert_eq!(settings.source_dir, "..");

        assert_eq!(
            manifest.root(Path::new("/work")),
            Some(PathBuf::from("/work/projects/sel4-tutorials"))
        );
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = TuteManifest::from_str("").unwrap();
        assert!(manifest.defaults.platform.is_none());
        assert_eq!(manifest.generator_settings(), GeneratorSettings::default());
        assert!(manifest.root(Path::new("/work")).is_none());
    }

    #[test]
    fn absolute_root_ignores_manifest_dir() {
        let manifest = TuteManifest::from_str("[paths]\nroot = \"/opt/tutorials\"\n").unwrap();
        assert_eq!(
            manifest.root(Path::new("/work")),
            Some(PathBuf::from("/opt/tutorials"))
        );
    }

    #[test]
    fn reject_unknown_platform() {
        let bad = "[defaults]\nplatform = \"sabre\"\n";
        assert!(TuteManifest::from_str(bad).is_err());
    }

    #[test]
    fn reject_unknown_key() {
        let bad = "[generator]\njobs = 4\n";
        assert!(TuteManifest::from_str(bad).is_err());
    }

    #[test]
    fn reject_invalid_toml() {
        let bad = "this is not valid toml [[[";
        assert!(TuteManifest::from_str(bad).is_err());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MANIFEST_FILE),
            "[defaults]\nplatform = \"pc99\"\n",
        )
        .unwrap();

        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, found_dir) = TuteManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.defaults.platform, Some(Platform::Pc99));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[defaults]\nplatform = 7\n").unwrap();
        let err = TuteManifest::find_and_load(dir.path()).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
