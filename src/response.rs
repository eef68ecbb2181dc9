use serde::Serialize;
use utoipa::ToSchema;

/// Status envelope shared by write endpoints, the 404 fallback, and error
/// responses: `{"success": ..., "message": ...}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiStatus {
    pub success: bool,
    pub message: String,
}

impl ApiStatus {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
