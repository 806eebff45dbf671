use serde::{de::DeserializeOwned, Serialize};
use shared::error::{AppError, AppResult};

pub mod auth;
pub mod event;
pub mod participation;
pub mod user;

// 前後の空白を除いた値が空でないことを検証する
pub(crate) fn not_blank<T: AsRef<str> + ?Sized>(value: &T, _context: &()) -> garde::Result {
    if value.as_ref().trim().is_empty() {
        return Err(garde::Error::new("must not be blank"));
    }
    Ok(())
}

// 権限の確認が済んでからリクエストボディを読み取るために使う
pub(crate) fn from_json_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        AppError::BadRequest(format!("Failed to deserialize the JSON body: {e}"))
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub ok: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }
}
