//! `tute doctor`: toolchain and path diagnostics.

use std::path::Path;
use std::process::Command;

use anyhow::Result;
use tute_build::{project_root, resolve_tutorial_root, GeneratorSettings};

use crate::manifest::{TuteManifest, MANIFEST_FILE};

/// Print diagnostic information about the generator, paths and configuration.
pub fn run(manifest: Option<(&TuteManifest, &Path)>, root: Option<&Path>) -> Result<()> {
    println!("=== Tute Doctor ===");
    println!();
    println!("tute version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let settings = manifest
        .map(|(m, _)| m.generator_settings())
        .unwrap_or_default();

    println!("--- Generator ---");
    print_tool_status(&settings.program, &["--version"]);
    print_settings(&settings);
    println!();

    println!("--- Paths ---");
    let root = root
        .map(Path::to_path_buf)
        .or_else(|| manifest.and_then(|(m, dir)| m.root(dir)));
    match resolve_tutorial_root(root.as_deref()) {
        Ok(tutorial_root) => {
            println!("  Tutorial root: {}", tutorial_root.display());
            let project = project_root(&tutorial_root);
            match project.canonicalize() {
                Ok(resolved) => println!("  Project root:  {}", resolved.display()),
                Err(_) => println!("  Project root:  {} (does not exist)", project.display()),
            }
            let template = tutorial_root.join("template.py");
            println!(
                "  template.py:   {}",
                if template.is_file() { "found" } else { "not found" }
            );
        }
        Err(e) => println!("  Tutorial root: error: {e}"),
    }
    println!();

    println!("--- Configuration ---");
    match manifest {
        Some((m, dir)) => {
            println!("  {MANIFEST_FILE}: found at {}", dir.display());
            for line in toml::to_string_pretty(m)?.lines() {
                println!("    {line}");
            }
        }
        None => println!("  {MANIFEST_FILE}: not found"),
    }

    Ok(())
}

fn print_settings(settings: &GeneratorSettings) {
    println!("  Toolchain file: {}", settings.toolchain_file);
    println!("  Generator:      {}", settings.generator_name);
}

fn print_tool_status(name: &str, args: &[&str]) {
    match Command::new(name).args(args).output() {
        Ok(output) => {
            let version = String::from_utf8_lossy(&output.stdout);
            let first_line = version.lines().next().unwrap_or("(unknown version)");
            println!("  {name}: {first_line}");
        }
        Err(_) => {
            println!("  {name}: not found");
        }
    }
}
