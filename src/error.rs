use std::fmt;
use std::io;

use log::error;

#[derive(Debug)]
pub enum Error {
    /// The OS secure random source is unavailable.
    Random(rand::Error),
    Io(io::Error),
    /// Expected digest is not 64 hex characters.
    InvalidHash,
    /// Credentials text is missing a line or label.
    Format(&'static str),
    Mismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Random(e) => write!(f, "secure random source unavailable: {e}"),
            Error::Io(e) => write!(f, "io: {e}"),
            Error::InvalidHash => f.write_str("hash must be 64 hex characters"),
            Error::Format(line) => write!(f, "malformed credentials, expected {line:?} line"),
            Error::Mismatch => f.write_str("hash does not match secret and salt"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Random(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        error!("OsRng: {e:?}");
        Self::Random(e)
    }
}
impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Self {
        Self::InvalidHash
    }
}
