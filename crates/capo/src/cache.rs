//! Content-hash cache validators.
//!
//! Rendering is deterministic, so a digest of the output body works as a
//! strong validator. Transports attach these to responses; the render
//! paths themselves never touch them.

use sha2::{Digest, Sha256};

/// Freshness window attached to rendered diagrams, in seconds (24 hours).
pub const MAX_AGE_SECS: u32 = 86_400;

/// Returns the entity tag for a rendered body: the lowercase hex SHA-256
/// digest of its bytes.
pub fn etag_for(body: &str) -> String {
    let digest = Sha256::digest(body.as_bytes());
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Returns the `Cache-Control` value for rendered diagrams.
pub fn cache_control() -> String {
    format!("public, max-age={MAX_AGE_SECS}")
}
