use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::digest;
use crate::token::{self, SALT_BYTES, SECRET_BYTES};
use crate::Error;

const HASH: &str = "Hash: ";
const SALT: &str = "Salt: ";
const SECRET: &str = "Secret: ";

/// A generated secret together with its salt and salted hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub hash: String,
    pub salt: String,
    pub secret: String,
}

impl Credentials {
    /// Draws a fresh salt and secret and hashes them.
    ///
    /// Nothing is returned unless all three values were produced.
    pub fn generate() -> Result<Self, Error> {
        let salt = token::urlsafe(SALT_BYTES)?;
        let secret = token::urlsafe(SECRET_BYTES)?;
        let hash = digest::hash(&secret, &salt);
        debug!("generated credentials hash={hash}");
        Ok(Self { hash, salt, secret })
    }

    /// Checks that `hash` belongs to `secret` and `salt`.
    pub fn verify(&self) -> Result<(), Error> {
        digest::verify(&self.secret, &self.salt, &self.hash)
    }
}

// Keeps the secret out of debug logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("hash", &self.hash)
            .field("salt", &self.salt)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HASH}{}", self.hash)?;
        writeln!(f, "{SALT}{}", self.salt)?;
        writeln!(f, "{SECRET}{}", self.secret)
    }
}

impl FromStr for Credentials {
    type Err = Error;

    /// Parses the three lines written by [`Display`](fmt::Display).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let mut field = |label: &'static str| {
            lines
                .next()
                .and_then(|l| l.strip_prefix(label))
                .map(str::to_owned)
                .ok_or(Error::Format(label.trim_end()))
        };
        let hash = field(HASH)?;
        let salt = field(SALT)?;
        let secret = field(SECRET)?;
        if lines.next().is_some() {
            return Err(Error::Format("end of input"));
        }
        Ok(Self { hash, salt, secret })
    }
}
