use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Failures of the bootstrap steps, each carrying what is needed to explain it to the user
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("The environment variable {var} is not set.")]
    SdkPathMissing { var: &'static str },

    #[error("Failed to create directory `{}`", path.display())]
    CreateBuildDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to execute `{program}`")]
    GeneratorSpawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("`{program}` failed ({status})")]
    GeneratorFailed { program: String, status: ExitStatus },
}

impl Error {
    /// Returns an additional line telling the user how to fix the problem, if there is one
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::SdkPathMissing { var } => {
                Some(format!("Please set {var} to the path of the Vulkan SDK."))
            }
            _ => None,
        }
    }

    /// Exit code of the process when it stops because of this error.
    ///
    /// A failing generator forwards its own exit code when it can be represented.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::GeneratorFailed { status, .. } => status
                .code()
                .and_then(|code| u8::try_from(code).ok())
                .filter(|&code| code != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }
}
