//! Reasons a create/update body is turned away with 400

use std::fmt;

/// Why a player body was rejected before reaching storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field present but blank (empty or whitespace only)
    Blank { field: &'static str },

    /// Field longer than its column allows
    Overlong { field: &'static str, max: usize },

    /// Body is not JSON, or lacks `email`/`name`
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank { field } => write!(f, "{field} must not be blank"),
            Self::Overlong { field, max } => {
                write!(f, "{field} is longer than {max} characters")
            }
            Self::MalformedBody { reason } => write!(f, "malformed request body: {reason}"),
        }
    }
}

impl std::error::Error for ValidationError {}
