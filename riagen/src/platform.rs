#![allow(deprecated)]

use std::{fmt, str::FromStr};

/// The client platform generated code used to target.
#[deprecated(note = "Generated code no longer depends on the target platform")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    #[default]
    Unknown,
    Silverlight,
    Desktop,
    Portable,
    Win8,
}

impl fmt::Display for TargetPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "Unknown",
            Self::Silverlight => "Silverlight",
            Self::Desktop => "Desktop",
            Self::Portable => "Portable",
            Self::Win8 => "Win8",
        };
        f.write_str(name)
    }
}

impl FromStr for TargetPlatform {
    type Err = ParsePlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unknown" => Ok(Self::Unknown),
            "silverlight" => Ok(Self::Silverlight),
            "desktop" => Ok(Self::Desktop),
            "portable" => Ok(Self::Portable),
            "win8" => Ok(Self::Win8),
            _ => Err(ParsePlatformError(s.to_owned())),
        }
    }
}

/// Returned when a string doesn't name a [`TargetPlatform`].
#[derive(Clone, PartialEq, Eq)]
pub struct ParsePlatformError(String);

impl std::error::Error for ParsePlatformError {}

impl fmt::Display for ParsePlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown target platform '{}'", self.0)
    }
}

impl fmt::Debug for ParsePlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform() {
        assert_eq!("Win8".parse::<TargetPlatform>(), Ok(TargetPlatform::Win8));
        assert_eq!("SILVERLIGHT".parse::<TargetPlatform>(), Ok(TargetPlatform::Silverlight));
        assert_eq!(TargetPlatform::Portable.to_string(), "Portable");
        assert_eq!(TargetPlatform::default(), TargetPlatform::Unknown);

        let err = "WinPhone".parse::<TargetPlatform>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown target platform 'WinPhone'");
        assert_eq!(format!("{err:?}"), err.to_string());
    }
}
