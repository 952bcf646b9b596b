//! Target platforms and the generator flags that select them.
//!
//! Each platform names a board/architecture profile. Its flags are passed
//! verbatim to the build-file generator when a build tree is bootstrapped.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A target platform a tutorial can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    /// Generic PC-class x86-64 machine.
    Pc99,
    /// Xilinx Zynq-7000 SoC (ARM32).
    Zynq7000,
}

impl Platform {
    /// Every known platform, in table order.
    pub const ALL: [Platform; 2] = [Platform::Pc99, Platform::Zynq7000];

    /// The identifier used on the command line and in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Platform::Pc99 => "pc99",
            Platform::Zynq7000 => "zynq7000",
        }
    }

    /// Ordered flags handed to the generator for this platform.
    pub fn flags(self) -> &'static [&'static str] {
        match self {
            Platform::Pc99 => &["-DTUT_BOARD=pc", "-DTUT_ARCH=x86_64"],
            Platform::Zynq7000 => &["-DAARCH32=TRUE", "-DTUT_BOARD=zynq7000"],
        }
    }

    /// One-line human description.
    pub fn description(self) -> &'static str {
        match self {
            Platform::Pc99 => "PC99-class x86-64 machine (QEMU or bare metal)",
            Platform::Zynq7000 => "Xilinx Zynq-7000 (ARM Cortex-A9, AArch32)",
        }
    }

    /// Look up a platform by exact identifier.
    pub fn lookup(name: &str) -> Option<Platform> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
