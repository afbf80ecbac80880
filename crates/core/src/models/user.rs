use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account, as returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Response of the form-encoded login endpoint. The access token is stored
/// verbatim; no expiry or validation happens client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}
