//! The external build-file generator.
//!
//! [`Generator`] is the seam between the build-tree logic and the process
//! that actually configures the tree. [`CMake`] runs the real tool; tests
//! substitute a recording fake.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{BuildError, Result};

/// Where a generator run's stdout and stderr go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputSink {
    /// Stream to this process's stdout/stderr.
    #[default]
    Inherit,
    /// Discard.
    Null,
    /// Collect into the returned [`Invocation`].
    Capture,
}

/// Outcome of a single generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Arguments the generator was run with.
    pub args: Vec<String>,
    /// Exit code, or `None` if the process was killed by a signal.
    pub exit_code: Option<i32>,
    /// Captured stdout (empty unless [`OutputSink::Capture`]).
    pub stdout: Vec<u8>,
    /// Captured stderr (empty unless [`OutputSink::Capture`]).
    pub stderr: Vec<u8>,
}

impl Invocation {
    /// Whether the generator exited with status zero.
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs the build-file generator.
pub trait Generator {
    /// Run once with `args`, using `cwd` as the working directory.
    ///
    /// A non-zero exit is reported through [`Invocation::exit_code`]; only a
    /// failure to start the process is an error.
    fn run(&mut self, args: &[String], cwd: &Path, output: OutputSink) -> Result<Invocation>;
}

/// How the generator is invoked when bootstrapping a build tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    /// Generator executable.
    pub program: String,
    /// Toolchain file, relative to the build directory.
    pub toolchain_file: String,
    /// Value of the `-G` generator selector.
    pub generator_name: String,
    /// Source directory, relative to the build directory.
    pub source_dir: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            program: "cmake".to_string(),
            toolchain_file: "../kernel/gcc.cmake".to_string(),
            generator_name: "Ninja".to_string(),
            source_dir: "..".to_string(),
        }
    }
}

/// The CMake executable.
#[derive(Debug, Clone)]
pub struct CMake {
    program: String,
}

impl CMake {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// A `CMake` running `settings.program`.
    pub fn from_settings(settings: &GeneratorSettings) -> Self {
        Self::new(settings.program.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn spawn_error(&self, source: std::io::Error) -> BuildError {
        BuildError::Spawn {
            program: self.program.clone(),
            source,
        }
    }
}

impl Generator for CMake {
    fn run(&mut self, args: &[String], cwd: &Path, output: OutputSink) -> Result<Invocation> {
        debug!("{} {} (in {})", self.program, args.join(" "), cwd.display());

        let mut cmd = Command::new(&self.program);
        cmd.args(args).current_dir(cwd);

        let (exit_code, stdout, stderr) = match output {
            OutputSink::Capture => {
                let out = cmd.output().map_err(|e| self.spawn_error(e))?;
                (out.status.code(), out.stdout, out.stderr)
            }
            OutputSink::Inherit | OutputSink::Null => {
                if output == OutputSink::Null {
                    cmd.stdout(Stdio::null()).stderr(Stdio::null());
                }
                let status = cmd.status().map_err(|e| self.spawn_error(e))?;
                (status.code(), Vec::new(), Vec::new())
            }
        };

        Ok(Invocation {
            args: args.to_vec(),
            exit_code,
            stdout,
            stderr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = GeneratorSettings::default();
        assert_eq!(settings.program, "cmake");
        assert_eq!(settings.toolchain_file, "../kernel/gcc.cmake");
        assert_eq!(settings.generator_name, "Ninja");
        assert_eq!(settings.source_dir, "..");
    }

    #[test]
    fn invocation_success_requires_zero() {
        let mut inv = Invocation {
            args: vec![],
            exit_code: Some(0),
            stdout: vec![],
            stderr: vec![],
        };
        assert!(inv.success());
        inv.exit_code = Some(1);
        assert!(!inv.success());
        inv.exit_code = None;
        assert!(!inv.success());
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut cmake = CMake::new("tute-no-such-generator-binary");
        let err = cmake
            .run(&["..".to_string()], dir.path(), OutputSink::Null)
            .unwrap_err();
        assert!(matches!(err, BuildError::Spawn { ref program, .. } if program == "tute-no-such-generator-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn captures_output_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut sh = CMake::new("sh");
        let args = vec!["-c".to_string(), "echo configured; exit 3".to_string()];
        let inv = sh.run(&args, dir.path(), OutputSink::Capture).unwrap();
        assert_eq!(inv.exit_code, Some(3));
        assert_eq!(inv.stdout, b"configured\n");
        assert_eq!(inv.args, args);
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_requested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut sh = CMake::new("sh");
        let args = vec!["-c".to_string(), "pwd".to_string()];
        let inv = sh.run(&args, dir.path(), OutputSink::Capture).unwrap();
        let printed = String::from_utf8(inv.stdout).unwrap();
        assert_eq!(
            Path::new(printed.trim()).canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }
}
