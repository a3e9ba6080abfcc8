//! User domain models.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub weight_kg: Option<f64>,
}

impl User {
    /// First whitespace-separated token of the display name, used for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("User")
    }
}

/// The `{ id, name }` projection used by user and friend listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i32,
    pub name: String,
}

/// Input model for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub weight_kg: Option<f64>,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        validate_profile_fields(&self.name, &self.email, self.weight_kg)
    }
}

/// Input model for a profile edit. All three fields are replaced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileUpdate {
    pub name: String,
    pub email: String,
    pub weight_kg: Option<f64>,
}

impl UserProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_profile_fields(&self.name, &self.email, self.weight_kg)
    }
}

fn validate_profile_fields(name: &str, email: &str, weight_kg: Option<f64>) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "name".to_string(),
        )));
    }
    if !email.contains('@') {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "'{}' is not an email address",
            email
        ))));
    }
    if let Some(weight) = weight_kg {
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Weight must be a non-negative number".to_string(),
            )));
        }
    }
    Ok(())
}
