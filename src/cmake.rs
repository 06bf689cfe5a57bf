use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use console::style;

use crate::error::Error;
use crate::platform::Platform;

/// Directory containing the top-level `CMakeLists.txt`, relative to the build directory
const SOURCE_DIR: &str = "..";

/// Wrapper around the `cmake` command
pub struct Cmake {
    program: OsString,
    platform: Platform,
}

impl Cmake {
    /// Uses the program named by the `CMAKE` environment variable, or `cmake` from the `PATH`
    pub fn new(platform: Platform) -> Self {
        Self::with_program(
            std::env::var_os("CMAKE").unwrap_or_else(|| "cmake".into()),
            platform,
        )
    }

    pub fn with_program(program: impl Into<OsString>, platform: Platform) -> Self {
        Self {
            program: program.into(),
            platform,
        }
    }

    fn args(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(SOURCE_DIR).chain(self.platform.generator_args().iter().copied())
    }

    /// Builds the command generating the project files from within `build_dir`
    pub fn command(&self, build_dir: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args()).current_dir(build_dir);

        command
    }

    /// Renders the command line the way it would be typed in a shell
    pub fn command_line(&self) -> String {
        self.args()
            .fold(self.program.to_string_lossy().into_owned(), |mut line, arg| {
                line.push(' ');
                if arg.contains(' ') {
                    line.push('"');
                    line.push_str(arg);
                    line.push('"');
                } else {
                    line.push_str(arg);
                }
                line
            })
    }

    /// Runs CMake in `build_dir` and waits for it to finish.
    ///
    /// The output of CMake is not captured, it goes straight to the terminal.
    pub fn generate(&self, build_dir: &Path) -> Result<(), Error> {
        println!(
            "{:>12} {} for {}",
            style("Generating").bold().green(),
            self.platform.generator_label(),
            self.platform
        );
        log::debug!(
            "Running `{}` in `{}`",
            self.command_line(),
            build_dir.display()
        );

        let program = self.program.to_string_lossy().into_owned();
        let status = self
            .command(build_dir)
            .status()
            .map_err(|source| Error::GeneratorSpawn {
                program: program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::GeneratorFailed { program, status });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::path::Path;

    use crate::error::Error;
    use crate::platform::Platform;

    use super::Cmake;

    #[test]
    fn test_linux_command() {
        let cmake = Cmake::with_program("cmake", Platform::Linux);
        let command = cmake.command(Path::new("build"));

        assert_eq!(command.get_program(), "cmake");
        assert_eq!(command.get_args().collect::<Vec<_>>(), [OsStr::new("..")]);
        assert_eq!(command.get_current_dir(), Some(Path::new("build")));
        assert_eq!(cmake.command_line(), "cmake ..");
    }

    #[test]
    fn test_windows_command() {
        let cmake = Cmake::with_program("cmake", Platform::Windows);
        let command = cmake.command(Path::new("build"));

        assert_eq!(
            command.get_args().collect::<Vec<_>>(),
            ["..", "-G", "Visual Studio 17 2022", "-A", "x64"].map(OsStr::new)
        );
        assert_eq!(command.get_current_dir(), Some(Path::new("build")));
        assert_eq!(
            cmake.command_line(),
            r#"cmake .. -G "Visual Studio 17 2022" -A x64"#
        );
    }

    #[test]
    fn test_other_command_matches_linux() {
        let other = Cmake::with_program("cmake", Platform::Other);
        let linux = Cmake::with_program("cmake", Platform::Linux);

        assert_eq!(other.command_line(), linux.command_line());
    }

    #[test]
    fn test_program_not_found() {
        let root = tempfile::tempdir().unwrap();
        let cmake = Cmake::with_program(root.path().join("no-such-cmake"), Platform::Linux);

        let error = cmake.generate(root.path()).unwrap_err();
        assert!(matches!(error, Error::GeneratorSpawn { .. }), "{error}");
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_success() {
        let root = tempfile::tempdir().unwrap();
        let cmake = Cmake::with_program("true", Platform::Linux);

        cmake.generate(root.path()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_generate_failure() {
        let root = tempfile::tempdir().unwrap();
        let cmake = Cmake::with_program("false", Platform::Linux);

        let error = cmake.generate(root.path()).unwrap_err();
        match &error {
            Error::GeneratorFailed { program, status } => {
                assert_eq!(program, "false");
                assert_eq!(status.code(), Some(1));
            }
            _ => panic!("unexpected error: {error}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_build_dir_is_a_file() {
        let root = tempfile::tempdir().unwrap();
        let build = root.path().join("build");
        std::fs::write(&build, "").unwrap();
        let cmake = Cmake::with_program("true", Platform::Linux);

        let error = cmake.generate(&build).unwrap_err();
        assert!(matches!(error, Error::GeneratorSpawn { .. }), "{error}");
    }
}
