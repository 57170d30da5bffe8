//! Auth user domain model
//!
//! Represents a user of a project's auth service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user registered with a project's auth service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, absent for phone-only users
    #[serde(default)]
    pub email: Option<String>,

    /// Phone number, absent for email-only users
    #[serde(default)]
    pub phone: Option<String>,

    /// When the user was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last successful sign in
    #[serde(default)]
    pub last_sign_in_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a user known only by email
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: Some(email.into()),
            phone: None,
            created_at: None,
            last_sign_in_at: None,
        }
    }
}
