//! Identifier parsing and (tutorial, platform) validation.

use std::str::FromStr;

use crate::error::{Result, TargetError};
use crate::platform::Platform;
use crate::tutorial::Tutorial;

impl FromStr for Platform {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        Platform::lookup(s).ok_or_else(|| TargetError::UnknownPlatform {
            name: s.to_string(),
        })
    }
}

impl FromStr for Tutorial {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self> {
        Tutorial::lookup(s).ok_or_else(|| TargetError::UnknownTutorial {
            name: s.to_string(),
        })
    }
}

/// Check that `tutorial` can be built for `platform`.
pub fn validate_selection(tutorial: Tutorial, platform: Platform) -> Result<()> {
    if tutorial.supports(platform) {
        return Ok(());
    }
    let supported = tutorial
        .platforms()
        .iter()
        .map(|p| p.name())
        .collect::<Vec<_>>()
        .join(", ");
    Err(TargetError::Unsupported {
        tutorial: tutorial.name().to_string(),
        platform: platform.name().to_string(),
        supported,
    })
}
