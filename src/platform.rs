use std::fmt;

use target_lexicon::{OperatingSystem, Triple};

/// Family of operating systems the project files are generated for
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    Windows,
    Linux,
    Other,
}

/// How CMake is invoked for a given [`Platform`]
struct GeneratorTemplate {
    platform: Platform,
    /// What the selected generator produces, shown to the user
    label: &'static str,
    /// Arguments given to CMake after the source directory
    args: &'static [&'static str],
}

static GENERATOR_TEMPLATES: [GeneratorTemplate; 3] = [
    GeneratorTemplate {
        platform: Platform::Windows,
        label: "Visual Studio solution",
        args: &["-G", "Visual Studio 17 2022", "-A", "x64"],
    },
    GeneratorTemplate {
        platform: Platform::Linux,
        label: "Makefiles",
        args: &[],
    },
    GeneratorTemplate {
        platform: Platform::Other,
        label: "default generator",
        args: &[],
    },
];

impl Platform {
    /// Returns the platform of the machine running this program
    pub fn host() -> Self {
        Self::from(&Triple::host())
    }

    fn template(self) -> Option<&'static GeneratorTemplate> {
        GENERATOR_TEMPLATES
            .iter()
            .find(|template| template.platform == self)
    }

    /// Arguments selecting the CMake generator and architecture for this platform
    pub fn generator_args(self) -> &'static [&'static str] {
        self.template()
            .map(|template| template.args)
            .unwrap_or_default()
    }

    /// Human-readable description of what CMake generates on this platform
    pub fn generator_label(self) -> &'static str {
        self.template()
            .map_or("default generator", |template| template.label)
    }
}

impl From<&Triple> for Platform {
    fn from(triple: &Triple) -> Self {
        match triple.operating_system {
            OperatingSystem::Windows => Self::Windows,
            OperatingSystem::Linux => Self::Linux,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Other => "other",
        })
    }
}
