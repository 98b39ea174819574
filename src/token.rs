use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use log::debug;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::Error;

/// Random bytes drawn for a salt.
pub const SALT_BYTES: usize = 128;
/// Random bytes drawn for a secret.
pub const SECRET_BYTES: usize = 256;

/// Draws `nbytes` from the OS random source and encodes them as an
/// unpadded URL-safe base64 token.
///
/// There is no fallback generator: if the OS source fails, so does this.
pub fn urlsafe(nbytes: usize) -> Result<String, Error> {
    let mut buf = vec![0; nbytes];
    OsRng.try_fill_bytes(&mut buf)?;
    let token = URL_SAFE_NO_PAD.encode(&buf);
    debug!("token: {nbytes} bytes -> {} chars", token.len());
    Ok(token)
}

/// Length of a token built from `nbytes` random bytes.
pub const fn encoded_len(nbytes: usize) -> usize {
    (nbytes * 4).div_ceil(3)
}
