//! Tutorial and project root resolution.

use std::io;
use std::path::{Path, PathBuf};

/// Absolute, symlink-free directory containing the tutorial sources.
///
/// The tool is installed next to the tutorial tree, so this is the directory
/// holding the running executable.
pub fn tutorial_root() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        )
    })
}

/// Use `explicit` when given, falling back to [`tutorial_root`].
pub fn resolve_tutorial_root(explicit: Option<&Path>) -> io::Result<PathBuf> {
    match explicit {
        Some(root) => root.canonicalize(),
        None => tutorial_root(),
    }
}

/// Root of the enclosing project: two levels above the tutorial root.
///
/// Assumes the tutorials live at `projects/<name>` inside the project. If
/// they do not, the returned path is wrong; it is not checked.
pub fn project_root(tutorial_root: &Path) -> PathBuf {
    tutorial_root.join("..").join("..")
}
