//! User profile endpoint.

use serde::Deserialize;

use super::http;
use crate::core::ApiError;

/// The signed-in user's profile, as much of it as the shell needs.
#[derive(Clone, Debug, Deserialize)]
pub struct UserProfile {
    #[serde(alias = "username")]
    pub name: String,
}

/// Fetch the current user's profile.
pub async fn me() -> Result<UserProfile, ApiError> {
    http::get_json("/api/users/me").await
}
