//! Password hashing using bcrypt
//!
//! Digests are self-describing: the cost factor and per-call salt are
//! embedded in the bcrypt string, so nothing is stored beside the hash.
//!
//! # Performance Considerations
//!
//! bcrypt is intentionally CPU-intensive. The `*_async` variants run the
//! work on the blocking thread pool so concurrent requests hash in
//! parallel instead of stalling the async runtime.

use anyhow::Result;
use bcrypt::DEFAULT_COST;

/// Password hashing service
pub struct PasswordService;

impl PasswordService {
    /// Hash a password with a fresh random salt (blocking operation)
    ///
    /// Fails only on catastrophic internal error (e.g. the entropy source
    /// is unavailable), never on input content.
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, DEFAULT_COST)
            .map_err(|e| anyhow::anyhow!("failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("task join error: {}", e))?
    }

    /// Verify a password against a stored digest (blocking operation)
    ///
    /// A mismatch, a malformed digest, and an internal error all collapse
    /// to `false`; callers never learn which one occurred.
    pub fn verify(digest: &str, password: &str) -> bool {
        bcrypt::verify(password, digest).unwrap_or(false)
    }

    /// Verify a password asynchronously (non-blocking)
    pub async fn verify_async(digest: String, password: String) -> bool {
        tokio::task::spawn_blocking(move || Self::verify(&digest, &password))
            .await
            .unwrap_or(false)
    }
}
