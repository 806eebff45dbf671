use axum::{extract::State, http::StatusCode, Json};
use registry::AppRegistry;
use serde::Serialize;

#[derive(Serialize)]
pub struct DbHealthResponse {
    ok: bool,
    db: &'static str,
}

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

pub async fn health_check_db(
    State(registry): State<AppRegistry>,
) -> (StatusCode, Json<DbHealthResponse>) {
    if registry.health_check_repository().check_db().await {
        (
            StatusCode::OK,
            Json(DbHealthResponse {
                ok: true,
                db: "connected",
            }),
        )
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(DbHealthResponse {
                ok: false,
                db: "disconnected",
            }),
        )
    }
}
