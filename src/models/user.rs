use serde::{Deserialize, Serialize};

use super::Exercise;
use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub exercises: Vec<Exercise>,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            username: self.username.clone(),
            id: self.id.clone(),
        }
    }
}

/// Public projection of a user, without the exercise log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    pub username: Option<String>,
}

impl CreateUser {
    /// Returns the username to register, or a validation error if it is
    /// missing or empty. Any non-empty string is taken as-is.
    pub fn validate(self) -> Result<String> {
        match self.username {
            Some(username) if !username.is_empty() => Ok(username),
            _ => Err(AppError::Validation("username required".to_string())),
        }
    }
}
