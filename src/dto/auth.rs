use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::UserProfile;

/// Registration body. Every field is required, but they are modeled as
/// `Option` so a missing one yields a validation failure in the response
/// body instead of a deserialization rejection.
#[derive(Deserialize, Debug, ToSchema)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl LoginResponse {
    /// Shared by the unknown-email and wrong-password paths so the two are
    /// indistinguishable on the wire.
    pub fn rejected() -> Self {
        Self {
            success: false,
            message: "Email atau password salah".to_string(),
            user: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl RegisterResponse {
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            user_id: None,
        }
    }
}
