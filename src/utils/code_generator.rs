//! Short code generation.
//!
//! Codes are sampled from the OS random number generator and encoded as
//! URL-safe base64 without padding.

use base64::Engine as _;

/// Length of random bytes before base64 encoding. Three bytes encode to
/// exactly four characters, the service's default code length.
const CODE_LENGTH_BYTES: usize = 3;

/// Schema bounds on stored code length.
pub const MIN_CODE_LENGTH: usize = 4;
pub const MAX_CODE_LENGTH: usize = 8;

/// Generates a random short code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```
/// let code = link_tracker::utils::code_generator::generate_code();
/// assert_eq!(code.len(), 4);
/// ```
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}
