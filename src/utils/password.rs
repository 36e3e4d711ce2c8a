//! Password hashing at the signup boundary.
//!
//! Authentication enforcement lives outside this service; signup only needs
//! a stable one-way transform so plaintext never reaches storage.

use sha2::{Digest, Sha256};

/// Hashes a password for storage.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
