//! Short code generation.
//!
//! Produces cryptographically secure random codes for short links. The
//! generator is stateless; collision handling belongs to the caller.

use base64::Engine as _;

/// Length of random bytes before base64 encoding.
///
/// 6 bytes encode to exactly 8 URL-safe base64 characters, giving a
/// 48-bit code space. Collisions are possible but rare enough that the
/// caller's probe-and-retry loop almost never iterates.
const CODE_LENGTH_BYTES: usize = 6;

/// Number of characters in a generated short code.
pub const CODE_LENGTH: usize = 8;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code drawn from
/// `[A-Za-z0-9_-]`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
