use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use crate::error::Error;

/// Environment variable pointing to the installation directory of the Vulkan SDK
pub const SDK_PATH_VAR: &str = "VULKAN_SDK_PATH";

/// Location of the Vulkan SDK, exactly as given in the environment.
///
/// The value is neither normalized nor checked against the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkPath(PathBuf);

impl SdkPath {
    /// Reads the SDK location from [`SDK_PATH_VAR`]
    pub fn from_env() -> Result<Self, Error> {
        Self::from_value(std::env::var_os(SDK_PATH_VAR))
    }

    /// Accepts any value that is set and non-empty
    pub fn from_value(value: Option<OsString>) -> Result<Self, Error> {
        match value {
            Some(value) if !value.is_empty() => Ok(Self(value.into())),
            _ => Err(Error::SdkPathMissing { var: SDK_PATH_VAR }),
        }
    }
}

impl fmt::Display for SdkPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.display(), f)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::error::Error;

    use super::SdkPath;

    #[test]
    fn test_unset() {
        let error = SdkPath::from_value(None).unwrap_err();
        assert!(matches!(
            error,
            Error::SdkPathMissing {
                var: "VULKAN_SDK_PATH"
            }
        ));
    }

    #[test]
    fn test_empty() {
        let error = SdkPath::from_value(Some("".into())).unwrap_err();
        assert!(matches!(error, Error::SdkPathMissing { .. }));
    }

    #[test]
    fn test_value_kept_unchanged() {
        let sdk = SdkPath::from_value(Some("/opt/vulkan/../vulkan/".into())).unwrap();
        assert_eq!(sdk.0, PathBuf::from("/opt/vulkan/../vulkan/"));
        assert_eq!(sdk.to_string(), "/opt/vulkan/../vulkan/");

        // Whitespace is not trimmed, and the path does not have to exist
        let sdk = SdkPath::from_value(Some(" ".into())).unwrap();
        assert_eq!(sdk.to_string(), " ");
    }
}
