//! Authentication error taxonomy
//!
//! The closed set of failures the credential engine can report. Store and
//! hashing failures are reclassified into these variants at the engine
//! boundary; raw collaborator errors never propagate upward.

use crate::auth::policy::PolicyViolation;
use crate::store::UniqueField;
use thiserror::Error;

/// Authentication error types
#[derive(Error, Debug)]
pub enum AuthError {
    /// The submitted password failed a strength rule
    #[error(transparent)]
    Policy(#[from] PolicyViolation),

    /// Registration collided with an existing unique field
    #[error("{0} already taken")]
    Conflict(UniqueField),

    /// Wrong password, unknown email, or policy-invalid password during
    /// login. Deliberately undifferentiated to the caller.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Bad signature, wrong algorithm, malformed structure, or a subject
    /// that no longer resolves. Deliberately undifferentiated to the caller.
    #[error("invalid token")]
    InvalidToken,

    /// Structurally valid token whose validity window has elapsed
    #[error("token expired")]
    TokenExpired,

    /// Unexpected store/hash/signing failure. Logged with detail
    /// internally, surfaced only as an opaque retry signal.
    #[error("internal error")]
    Internal(#[source] anyhow::Error),
}
