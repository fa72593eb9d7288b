//! Player records and validated player input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::ValidationError;

/// Maximum length for player names and emails (matches the VARCHAR columns)
const MAX_FIELD_LEN: usize = 255;

/// Player row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// Raw create/update body as sent by clients
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerInputBody {
    pub email: String,
    pub name: String,
}

/// Player fields accepted on create and update.
///
/// Values are stored exactly as submitted; validation only decides whether
/// to accept them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerInput {
    email: String,
    name: String,
}

impl PlayerInput {
    /// Validate raw fields.
    ///
    /// # Rules
    /// - Neither field blank (empty or whitespace only)
    /// - Neither field over 255 characters
    ///
    /// # Example
    /// ```
    /// use monopoly_server::models::PlayerInput;
    ///
    /// assert!(PlayerInput::new("me@calvin.edu", "Dogbreath").is_ok());
    /// assert!(PlayerInput::new("admin@localhost", "Dogbreath").is_ok());
    /// assert!(PlayerInput::new("", "Dogbreath").is_err());
    /// ```
    pub fn new(email: &str, name: &str) -> Result<Self, ValidationError> {
        check("email", email)?;
        check("name", name)?;

        Ok(Self {
            email: email.to_owned(),
            name: name.to_owned(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TryFrom<PlayerInputBody> for PlayerInput {
    type Error = ValidationError;

    fn try_from(body: PlayerInputBody) -> Result<Self, Self::Error> {
        check("email", &body.email)?;
        check("name", &body.name)?;

        Ok(Self {
            email: body.email,
            name: body.name,
        })
    }
}

fn check(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }

    if value.chars().count() > MAX_FIELD_LEN {
        return Err(ValidationError::Overlong {
            field,
            max: MAX_FIELD_LEN,
        });
    }

    Ok(())
}
