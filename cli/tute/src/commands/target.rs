//! `tute list` and `tute describe`: platform and tutorial tables.

use anyhow::{bail, Result};
use serde::Serialize;
use tute_targets::{Platform, Tutorial};

#[derive(Debug, Serialize)]
struct PlatformEntry {
    name: &'static str,
    description: &'static str,
    flags: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct TutorialEntry {
    name: &'static str,
    platforms: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
struct Tables {
    platforms: Vec<PlatformEntry>,
    tutorials: Vec<TutorialEntry>,
}

fn tables() -> Tables {
    Tables {
        platforms: Platform::ALL
            .into_iter()
            .map(|p| PlatformEntry {
                name: p.name(),
                description: p.description(),
                flags: p.flags(),
            })
            .collect(),
        tutorials: Tutorial::ALL
            .into_iter()
            .map(|t| TutorialEntry {
                name: t.name(),
                platforms: t.platforms().iter().map(|p| p.name()).collect(),
            })
            .collect(),
    }
}

/// Render the tables as text, JSON or TOML.
pub(crate) fn render_list(format: Option<&str>) -> Result<String> {
    match format {
        None | Some("text") => Ok(render_text()),
        Some("json") => Ok(serde_json::to_string_pretty(&tables())?),
        Some("toml") => Ok(toml::to_string_pretty(&tables())?),
        Some(other) => bail!("unknown format '{other}' (expected text, json or toml)"),
    }
}

fn render_text() -> String {
    let mut out = String::from("Platforms:\n\n");
    for platform in Platform::ALL {
        out.push_str(&format!(
            "  {:<20} {}\n",
            platform.name(),
            platform.description()
        ));
    }
    out.push_str("\nTutorials:\n\n");
    for tutorial in Tutorial::ALL {
        let platforms: Vec<&str> = tutorial.platforms().iter().map(|p| p.name()).collect();
        out.push_str(&format!(
            "  {:<20} {}\n",
            tutorial.name(),
            platforms.join(", ")
        ));
    }
    out.push_str("\nUse 'tute describe <tutorial>' for details.");
    out
}

/// List all platforms and tutorials.
pub fn list(format: Option<&str>) -> Result<()> {
    println!("{}", render_list(format)?);
    Ok(())
}

/// Describe a tutorial and the flags used for each of its platforms.
pub fn describe(name: &str) -> Result<()> {
    let tutorial: Tutorial = name.parse()?;

    println!("=== Tutorial: {tutorial} ===");
    println!();
    println!("--- Platforms ---");
    for platform in tutorial.platforms() {
        println!("  {:<12} {}", platform.name(), platform.description());
        println!("    flags: {}", platform.flags().join(" "));
    }
    let unsupported: Vec<&str> = Platform::ALL
        .into_iter()
        .filter(|p| !tutorial.supports(*p))
        .map(|p| p.name())
        .collect();
    if !unsupported.is_empty() {
        println!();
        println!("Not available on: {}", unsupported.join(", "));
    }

    Ok(())
}
