use core::fmt;
use std::io;

/// Studio error
#[derive(Debug)]
pub enum Error {
    /// Reading or writing a file failed
    Io(io::Error),
    /// The settings file is not valid toml, or does not match the expected layout
    ParseSettings(toml::de::Error),
    /// A setting has a value outside of its valid range
    InvalidSetting(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err)             => write!(f, "I/O error: {err}"),
            Error::ParseSettings(err)  => write!(f, "Failed to parse settings: {err}"),
            Error::InvalidSetting(msg) => write!(f, "Invalid setting: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err)            => Some(err),
            Error::ParseSettings(err) => Some(err),
            Error::InvalidSetting(_)  => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ParseSettings(err)
    }
}

pub type Result<T> = core::result::Result<T, Error>;
