//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Session delivery (built by the deliver use case)
// ============================================================================

pub use crate::application::deliver_session::{PublicUser, SessionBody};

// ============================================================================
// Session status
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatusResponse {
    pub success: bool,
    pub user_id: String,
    pub expires_at: DateTime<Utc>,
}

// ============================================================================
// Sign out
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct SignOutResponse {
    pub success: bool,
}
