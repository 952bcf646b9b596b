//! The `.tute_config` marker file.
//!
//! The marker records, as a CMake variable assignment, the command the build
//! runs to regenerate a tutorial's sources from its template:
//!
//! ```text
//! set(TUTE_COMMAND "PYTHONPATH=${PYTHON_CAPDL_PATH};python;<root>/template.py;--tut-file;...")
//! ```
//!
//! The `${output_dir}`, `${input_files}` and `${output_files}` references are
//! left for CMake to substitute.
//!
//! An absent task or solution flag still contributes an empty list element,
//! so the joined command contains `;;` when no task is given and ends in `;`
//! when not in solution mode. CMake drops empty list elements when it expands
//! the command.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use tute_targets::{Platform, Tutorial};

use crate::error::{BuildError, Result};

/// File name of the marker written into the tutorial directory.
pub const TUTE_CONFIG_FILE: &str = ".tute_config";

/// The command tokens, in order, before joining.
pub fn command_tokens(
    tutorial_root: &Path,
    tutorial: Tutorial,
    solution: bool,
    task: Option<&str>,
) -> Vec<String> {
    let template = tutorial_root.join("template.py");
    let tut_file = tutorial_root
        .join("tutorials")
        .join(tutorial.name())
        .join(tutorial.name());

    let task = match task {
        Some(id) if !id.is_empty() => format!("--task;{id}"),
        _ => String::new(),
    };
    let solution = if solution { "--solution" } else { "" };

    vec![
        "PYTHONPATH=${PYTHON_CAPDL_PATH}".to_string(),
        "python".to_string(),
        template.display().to_string(),
        "--tut-file".to_string(),
        tut_file.display().to_string(),
        "--out-dir".to_string(),
        "${output_dir}".to_string(),
        "--input-files".to_string(),
        "${input_files}".to_string(),
        "--output-files".to_string(),
        "${output_files}".to_string(),
        task,
        solution.to_string(),
    ]
}

/// The semicolon-joined command recorded in the marker file.
pub fn command_line(
    tutorial_root: &Path,
    tutorial: Tutorial,
    solution: bool,
    task: Option<&str>,
) -> String {
    command_tokens(tutorial_root, tutorial, solution, task).join(";")
}

/// Full contents of the marker file.
pub fn render(tutorial_root: &Path, tutorial: Tutorial, solution: bool, task: Option<&str>) -> String {
    format!(
        "set(TUTE_COMMAND \"{}\")",
        command_line(tutorial_root, tutorial, solution, task)
    )
}

/// Write `.tute_config` into `directory`, replacing any existing marker.
///
/// `platform` does not change the recorded command; the template script
/// learns the platform from the build tree.
pub fn init_tute_directory(
    platform: Platform,
    tutorial: Tutorial,
    solution: bool,
    task: Option<&str>,
    tutorial_root: &Path,
    directory: &Path,
) -> Result<PathBuf> {
    let path = directory.join(TUTE_CONFIG_FILE);
    let contents = render(tutorial_root, tutorial, solution, task);
    debug!("writing {} for {tutorial} on {platform}", path.display());
    fs::write(&path, contents).map_err(|source| BuildError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> PathBuf {
        PathBuf::from("/opt/sel4-tutorials")
    }

    #[test]
    fn no_task_no_solution_leaves_empty_segments() {
        let line = command_line(&root(), Tutorial::HelloWorld, false, None);
        assert!(!line.contains("--task"));
        assert!(!line.contains("--solution"));
        assert!(line.contains("${output_files};;"));
        assert!(line.ends_with(';'));
    }

    #[test]
    fn task_and_solution() {
        let line = command_line(&root(), Tutorial::Capabilities, true, Some("2"));
        assert!(line.contains("--task;2"));
        let tokens: Vec<&str> = line.split(';').collect();
        assert_eq!(tokens.last(), Some(&"--solution"));
        let task_pos = line.find("--task;2").unwrap();
        let solution_pos = line.find("--solution").unwrap();
        assert!(task_pos < solution_pos);
    }

    #[test]
    fn empty_task_is_treated_as_absent() {
        assert_eq!(
            command_line(&root(), Tutorial::Untyped, false, Some("")),
            command_line(&root(), Tutorial::Untyped, false, None)
        );
    }

    #[test]
    fn full_command_line() {
        let line = command_line(&root(), Tutorial::Hello1, false, Some("3"));
        assert_eq!(
            line,
            "PYTHONPATH=${PYTHON_CAPDL_PATH};python;/opt/sel4-tutorials/template.py;\
             --tut-file;/opt/sel4-tutorials/tutorials/hello-1/hello-1;\
             --out-dir;${output_dir};--input-files;${input_files};\
             --output-files;${output_files};--task;3;"
        );
    }

    #[test]
    fn marker_is_a_single_cmake_set() {
        let text = render(&root(), Tutorial::Mapping, true, None);
        assert!(text.starts_with("set(TUTE_COMMAND \"PYTHONPATH="));
        assert!(text.ends_with(";--solution\")"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn writes_and_overwrites_marker() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join(TUTE_CONFIG_FILE);
        fs::write(&marker, "stale contents that are much longer than needed").unwrap();

        let path = init_tute_directory(
            Platform::Pc99,
            Tutorial::HelloWorld,
            false,
            None,
            &root(),
            dir.path(),
        )
        .unwrap();

        assert_eq!(path, marker);
        let written = fs::read_to_string(&marker).unwrap();
        assert_eq!(written, render(&root(), Tutorial::HelloWorld, false, None));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = init_tute_directory(
            Platform::Pc99,
            Tutorial::HelloWorld,
            false,
            None,
            &root(),
            &missing,
        )
        .unwrap_err();
        assert!(matches!(err, BuildError::Io { .. }));
    }
}
