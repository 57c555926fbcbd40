//! URL rewriting required by receiver firmware.

use crate::constants::{FILLER_PARAM, INSECURE_SCHEME, SECURE_SCHEME};

/// Rewrite an `https://` URL to plain `http://`.
///
/// Any other URL is returned unchanged.
pub fn strip_secure_scheme(url: &str) -> String {
    match url.strip_prefix(SECURE_SCHEME) {
        Some(rest) => format!("{INSECURE_SCHEME}{rest}"),
        None => url.to_string(),
    }
}

/// Append the `?empty=` filler query to an outward URL.
///
/// Not idempotent: every call appends another suffix. Items store raw URLs
/// and call this once per rendered tag.
pub fn with_filler_param(url: &str) -> String {
    format!("{url}{FILLER_PARAM}")
}
