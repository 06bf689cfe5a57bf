use std::path::{Path, PathBuf};

use console::style;

use crate::error::Error;

/// Directory the project files are generated into, relative to where the command is run
pub const BUILD_DIR: &str = "build";

/// Creates the build directory unless something already exists at `path`.
///
/// Only a single level is created: a missing parent is an error. An existing entry is kept
/// as is, even when it is not a directory.
pub fn ensure(path: &Path) -> Result<PathBuf, Error> {
    if path.exists() {
        log::debug!("`{}` already exists, skipping its creation", path.display());

        return Ok(path.to_owned());
    }

    println!(
        "{:>12} directory `{}`",
        style("Creating").bold().green(),
        path.display()
    );

    std::fs::create_dir(path).map_err(|source| Error::CreateBuildDir {
        path: path.to_owned(),
        source,
    })?;

    Ok(path.to_owned())
}
