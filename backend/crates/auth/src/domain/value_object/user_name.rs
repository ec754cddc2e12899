//! User Name Value Object
//!
//! The display handle chosen at signup. Login goes by email, so the name only
//! has to be unique and safe to show on dashboards.
//!
//! ## Rules
//! - ASCII only (a-z, 0-9, `_ . - +`)
//! - Uppercase input is accepted; the canonical form is lowercase
//! - NFKC normalize, trim, validate, then lowercase
//!
//! ## Invariants
//! - 3 to 30 characters after normalization
//! - Starts and ends with an alphanumeric character or `_`
//! - No `..`
//! - At least one alphanumeric character
//! - No whitespace
//! - Not a reserved word

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

pub const USER_NAME_MIN_LENGTH: usize = 3;

pub const USER_NAME_MAX_LENGTH: usize = 30;

const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

/// Names that could be mistaken for staff, system or route names
const DEFAULT_RESERVED_WORDS: &[&str] = &[
    // System/Admin
    "admin",
    "administrator",
    "root",
    "system",
    "superuser",
    "superadmin",
    "staff",
    "support",
    "helpdesk",
    // Clinical roles
    "doctor",
    "nurse",
    "physician",
    "pharmacist",
    "reception",
    // Routing
    "api",
    "auth",
    "login",
    "logout",
    "signup",
    "register",
    "dashboard",
    // Common reserved
    "null",
    "undefined",
    "anonymous",
    "guest",
    "me",
    "official",
];

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("Username cannot be empty")]
    Empty,

    #[error("Username is too short ({length} chars, minimum {min})")]
    TooShort { length: usize, min: usize },

    #[error("Username is too long ({length} chars, maximum {max})")]
    TooLong { length: usize, max: usize },

    #[error(
        "Invalid character '{char}' at position {position}. Only a-z, 0-9, _, ., -, + are allowed"
    )]
    InvalidCharacter { char: char, position: usize },

    #[error("Username cannot start with '{char}'. Must start with a-z, 0-9, or _")]
    InvalidStart { char: char },

    #[error("Username cannot end with '{char}'. Must end with a-z, 0-9, or _")]
    InvalidEnd { char: char },

    #[error("Username cannot contain consecutive dots (..)")]
    ConsecutiveDots,

    #[error("Username must contain at least one letter or digit")]
    NoAlphanumeric,

    #[error("Username cannot contain whitespace")]
    ContainsWhitespace,

    #[error("'{word}' is a reserved username")]
    Reserved { word: String },
}

// ============================================================================
// UserName Value Object
// ============================================================================

/// Validated, normalized user name
///
/// `original` keeps the user's casing for display; `canonical` is the
/// lowercase form used for uniqueness.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName {
    original: String,
    canonical: String,
}

impl UserName {
    /// Normalize and validate against the default reserved words
    pub fn new(input: impl AsRef<str>) -> Result<Self, UserNameError> {
        Self::new_with_reserved(input, DEFAULT_RESERVED_WORDS)
    }

    /// Normalize and validate against a custom reserved words list
    pub fn new_with_reserved(
        input: impl AsRef<str>,
        reserved_words: &[&str],
    ) -> Result<Self, UserNameError> {
        let original: String = input.as_ref().nfkc().collect::<String>().trim().to_string();
        let canonical = original.to_lowercase();
        Self::validate(&canonical, reserved_words)?;
        Ok(Self {
            original,
            canonical,
        })
    }

    #[inline]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[inline]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(original: impl Into<String>) -> Self {
        let original = original.into();
        let canonical = original.to_lowercase();
        Self {
            original,
            canonical,
        }
    }

    fn validate(canonical: &str, reserved_words: &[&str]) -> Result<(), UserNameError> {
        let (Some(first), Some(last)) = (canonical.chars().next(), canonical.chars().next_back())
        else {
            return Err(UserNameError::Empty);
        };

        let length = canonical.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort {
                length,
                min: USER_NAME_MIN_LENGTH,
            });
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong {
                length,
                max: USER_NAME_MAX_LENGTH,
            });
        }

        if canonical.chars().any(char::is_whitespace) {
            return Err(UserNameError::ContainsWhitespace);
        }

        if let Some((position, char)) = canonical
            .chars()
            .enumerate()
            .find(|&(_, c)| !Self::is_valid_char(c))
        {
            return Err(UserNameError::InvalidCharacter { char, position });
        }

        if !Self::is_valid_edge_char(first) {
            return Err(UserNameError::InvalidStart { char: first });
        }
        if !Self::is_valid_edge_char(last) {
            return Err(UserNameError::InvalidEnd { char: last });
        }

        if canonical.contains("..") {
            return Err(UserNameError::ConsecutiveDots);
        }

        if !canonical.chars().any(|c| c.is_ascii_alphanumeric()) {
            return Err(UserNameError::NoAlphanumeric);
        }

        if reserved_words.contains(&canonical) {
            return Err(UserNameError::Reserved {
                word: canonical.to_string(),
            });
        }

        Ok(())
    }

    #[inline]
    fn is_valid_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || ALLOWED_SPECIAL_CHARS.contains(&c)
    }

    #[inline]
    fn is_valid_edge_char(c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
    }
}

impl fmt::Debug for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserName")
            .field("original", &self.original)
            .field("canonical", &self.canonical)
            .finish()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(name: UserName) -> Self {
        name.original
    }
}

// ============================================================================
// Tests
// ============================================================================
