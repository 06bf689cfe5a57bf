//! Bootstraps the CMake build directory of a Vulkan project.
//!
//! Checks that `VULKAN_SDK_PATH` is set, creates `build` if needed, and runs CMake from there
//! with the generator suited to the platform.

use std::path::Path;
use std::process::ExitCode;

use clap::{ColorChoice, Parser};

use console::style;

mod build_dir;
mod cli;
mod cmake;
mod error;
mod logging;
mod platform;
mod sdk;

use crate::build_dir::BUILD_DIR;
use crate::cli::Args;
use crate::cmake::Cmake;
use crate::error::Error;
use crate::sdk::SdkPath;

fn run(args: &Args) -> anyhow::Result<()> {
    let sdk = SdkPath::from_env()?;
    println!("{:>12} Vulkan SDK ({sdk})", style("Detected").bold().green());

    let cmake = Cmake::new(args.platform()?);

    if args.dry_run {
        println!(
            "{:>12} `{}` in `{BUILD_DIR}`",
            style("Would run").bold().cyan(),
            cmake.command_line()
        );

        return Ok(());
    }

    let build_dir = build_dir::ensure(Path::new(BUILD_DIR))?;
    cmake.generate(&build_dir)?;

    println!("\n=== SUCCESS ===");

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    logging::init(args.verbose);

    if args.color == ColorChoice::Never {
        console::set_colors_enabled(false);
    } else if args.color == ColorChoice::Always {
        console::set_colors_enabled(true);
    }

    let Err(error) = run(&args) else {
        return ExitCode::SUCCESS;
    };

    println!("{} {error:#}", style("Error:").bold().red());

    let error = error.downcast_ref::<Error>();
    if let Some(hint) = error.and_then(Error::hint) {
        println!("{hint}");
    }

    ExitCode::from(error.map_or(1, Error::exit_code))
}
