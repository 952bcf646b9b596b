//! Tutorial directory and build-tree initialization.
//!
//! Turns a (platform, tutorial) selection into a ready-to-build tree in two steps:
//! 1. write the `.tute_config` marker into the tutorial directory, recording the
//!    command that regenerates the tutorial's sources;
//! 2. run the external build-file generator (CMake) against the build directory,
//!    bootstrapping it first if it has never been configured.
//!
//! Directories are always explicit parameters. Nothing here changes the
//! process working directory.

pub mod build_tree;
pub mod error;
pub mod generator;
pub mod init;
pub mod logging;
pub mod paths;
pub mod tute_config;

pub use build_tree::{bootstrap_args, init_build_directory};
pub use error::{BuildError, Result};
pub use generator::{CMake, Generator, GeneratorSettings, Invocation, OutputSink};
pub use init::{init_directories, InitRequest};
pub use logging::{set_log_level, setup_logger, LogConfig, Verbosity};
pub use paths::{project_root, resolve_tutorial_root, tutorial_root};
pub use tute_config::{command_line, init_tute_directory, TUTE_CONFIG_FILE};
