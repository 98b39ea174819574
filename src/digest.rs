use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::Error;

/// Hex length of a SHA-256 digest.
pub const HASH_LEN: usize = 64;

fn sha256(secret: &str, salt: &str) -> [u8; 32] {
    // secret first, then salt
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(salt.as_bytes());
    hasher.finalize().into()
}

/// Lowercase hex SHA-256 of `secret ++ salt`.
pub fn hash(secret: &str, salt: &str) -> String {
    hex::encode(sha256(secret, salt))
}

/// Checks `secret` and `salt` against a stored hex digest.
///
/// Hex case is ignored. The comparison runs in constant time.
pub fn verify(secret: &str, salt: &str, expected: &str) -> Result<(), Error> {
    if expected.len() != HASH_LEN {
        return Err(Error::InvalidHash);
    }
    let expected = hex::decode(expected)?;
    if bool::from(sha256(secret, salt)[..].ct_eq(&expected[..])) {
        Ok(())
    } else {
        Err(Error::Mismatch)
    }
}
