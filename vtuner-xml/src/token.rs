//! Session token for the initial receiver handshake.

use crate::constants::{INIT_TOKEN, TAG_ENCRYPTED_TOKEN};

/// `<EncryptedToken>` element answered to a receiver's token request.
///
/// The value is a fixed placeholder; no session is negotiated.
pub fn init_token() -> String {
    format!("<{TAG_ENCRYPTED_TOKEN}>{INIT_TOKEN}</{TAG_ENCRYPTED_TOKEN}>")
}
