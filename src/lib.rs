//! Generates a URL-safe salt and secret together with the lowercase hex
//! SHA-256 of `secret ++ salt`, and verifies secrets against such hashes.

mod credentials;
pub mod digest;
mod error;
pub mod token;

pub use credentials::Credentials;
pub use error::Error;
