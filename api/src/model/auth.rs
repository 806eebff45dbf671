use serde::{Deserialize, Serialize};

use super::user::UserResponse;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub ok: bool,
    pub user: UserResponse,
}

impl SessionResponse {
    pub fn new(user: UserResponse) -> Self {
        Self { ok: true, user }
    }
}
