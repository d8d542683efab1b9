//! Password strength policy
//!
//! Pure validation of password strength rules. Evaluation order is fixed
//! (length bounds first, then character classes) so the same invalid input
//! always reports the same violation.

use thiserror::Error;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length in bytes.
///
/// bcrypt only consumes the first 72 bytes of its input; anything longer
/// must be rejected rather than silently truncated.
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// A password strength rule that was not met
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyViolation {
    #[error("password must be at least 8 characters")]
    MinLength,

    #[error("password must be at most 72 characters")]
    MaxLength,

    #[error("password must contain at least one uppercase letter")]
    MissingUppercase,

    #[error("password must contain at least one lowercase letter")]
    MissingLowercase,

    #[error("password must contain at least one digit")]
    MissingDigit,

    #[error("password must contain at least one special character")]
    MissingSpecial,
}

/// Password strength validation
///
/// Character classes are Unicode-aware, not ASCII-only: `Pässw0rt!` and
/// `Пароль§99` are classified the same way a Latin-1 password would be.
pub struct PasswordPolicy;

impl PasswordPolicy {
    /// Validate a password against all strength rules
    ///
    /// Returns the first unmet rule. Pure function, no side effects.
    pub fn validate(password: &str) -> Result<(), PolicyViolation> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(PolicyViolation::MinLength);
        }
        // Byte length, because the bound is bcrypt's input ceiling
        if password.len() > MAX_PASSWORD_LENGTH {
            return Err(PolicyViolation::MaxLength);
        }

        let mut has_upper = false;
        let mut has_lower = false;
        let mut has_digit = false;
        let mut has_special = false;

        for c in password.chars() {
            if c.is_uppercase() {
                has_upper = true;
            } else if c.is_lowercase() {
                has_lower = true;
            } else if c.is_numeric() {
                has_digit = true;
            } else if !c.is_whitespace() && !c.is_control() {
                // Everything outside the letter/digit/whitespace/control
                // classes counts as punctuation or symbol
                has_special = true;
            }
        }

        if !has_upper {
            return Err(PolicyViolation::MissingUppercase);
        }
        if !has_lower {
            return Err(PolicyViolation::MissingLowercase);
        }
        if !has_digit {
            return Err(PolicyViolation::MissingDigit);
        }
        if !has_special {
            return Err(PolicyViolation::MissingSpecial);
        }

        Ok(())
    }
}
