use std::str::FromStr;

use anyhow::Context;

use clap::ColorChoice;

use target_lexicon::Triple;

use crate::platform::Platform;

/// Generates the CMake project files of a Vulkan project into `build`
#[derive(clap::Parser)]
#[command(name = "generate-project", version, author, about, long_about = None)]
pub struct Args {
    /// Generate for the platform of this target triple instead of the host
    #[clap(long, value_name = "TRIPLE")]
    pub target: Option<String>,

    /// Print the CMake command line without creating the build directory or running it
    #[clap(long)]
    pub dry_run: bool,

    /// Enable debug logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Color preferences for program output
    #[clap(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorChoice,
}

impl Args {
    /// Returns the platform of the target given on the command line, or the host's if none is provided
    pub fn platform(&self) -> anyhow::Result<Platform> {
        let Some(target) = self.target.as_deref() else {
            return Ok(Platform::host());
        };
        let triple = Triple::from_str(target)
            .with_context(|| format!("Failed to parse the target `{target}`"))?;

        Ok(Platform::from(&triple))
    }
}
