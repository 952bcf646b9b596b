//! Tutorial registry.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

const ALL_PLATFORMS: &[Platform] = &Platform::ALL;

/// A self-contained tutorial exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tutorial {
    #[serde(rename = "hello-world")]
    HelloWorld,
    #[serde(rename = "hello-1")]
    Hello1,
    #[serde(rename = "hello-2")]
    Hello2,
    #[serde(rename = "hello-2-nolibs")]
    Hello2Nolibs,
    #[serde(rename = "hello-3")]
    Hello3,
    #[serde(rename = "hello-3-nolibs")]
    Hello3Nolibs,
    #[serde(rename = "hello-4")]
    Hello4,
    #[serde(rename = "hello-timer")]
    HelloTimer,
    #[serde(rename = "hello-camkes-0")]
    HelloCamkes0,
    #[serde(rename = "hello-camkes-1")]
    HelloCamkes1,
    #[serde(rename = "hello-camkes-2")]
    HelloCamkes2,
    #[serde(rename = "hello-camkes-timer")]
    HelloCamkesTimer,
    #[serde(rename = "capabilities")]
    Capabilities,
    #[serde(rename = "untyped")]
    Untyped,
    #[serde(rename = "mapping")]
    Mapping,
}

impl Tutorial {
    /// Every known tutorial, in table order.
    pub const ALL: [Tutorial; 15] = [
        Tutorial::HelloWorld,
        Tutorial::Hello1,
        Tutorial::Hello2,
        Tutorial::Hello2Nolibs,
        Tutorial::Hello3,
        Tutorial::Hello3Nolibs,
        Tutorial::Hello4,
        Tutorial::HelloTimer,
        Tutorial::HelloCamkes0,
        Tutorial::HelloCamkes1,
        Tutorial::HelloCamkes2,
        Tutorial::HelloCamkesTimer,
        Tutorial::Capabilities,
        Tutorial::Untyped,
        Tutorial::Mapping,
    ];

    /// The identifier used on the command line and in the tutorial source tree.
    pub fn name(self) -> &'static str {
        match self {
            Tutorial::HelloWorld => "hello-world",
            Tutorial::Hello1 => "hello-1",
            Tutorial::Hello2 => "hello-2",
            Tutorial::Hello2Nolibs => "hello-2-nolibs",
            Tutorial::Hello3 => "hello-3",
            Tutorial::Hello3Nolibs => "hello-3-nolibs",
            Tutorial::Hello4 => "hello-4",
            Tutorial::HelloTimer => "hello-timer",
            Tutorial::HelloCamkes0 => "hello-camkes-0",
            Tutorial::HelloCamkes1 => "hello-camkes-1",
            Tutorial::HelloCamkes2 => "hello-camkes-2",
            Tutorial::HelloCamkesTimer => "hello-camkes-timer",
            Tutorial::Capabilities => "capabilities",
            Tutorial::Untyped => "untyped",
            Tutorial::Mapping => "mapping",
        }
    }

    /// Platforms this tutorial can be built for.
    pub fn platforms(self) -> &'static [Platform] {
        match self {
            Tutorial::HelloCamkesTimer => &[Platform::Zynq7000],
            Tutorial::Mapping => &[Platform::Pc99],
            _ => ALL_PLATFORMS,
        }
    }

    /// Whether the tutorial can be built for `platform`.
    pub fn supports(self, platform: Platform) -> bool {
        self.platforms().contains(&platform)
    }

    /// Look up a tutorial by exact identifier.
    pub fn lookup(name: &str) -> Option<Tutorial> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }
}

impl fmt::Display for Tutorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
