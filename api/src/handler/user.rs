use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use garde::Validate;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::{event::EventsResponse, user::SignupRequest, MessageResponse};

pub async fn signup(
    State(registry): State<AppRegistry>,
    WithRejection(Json(req), _): WithRejection<Json<SignupRequest>, AppError>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let req = req.normalized();
    req.validate(&())?;

    let user = registry.user_repository().create(req.into()).await?;
    tracing::info!(user_id = %user.user_id, role = user.role.as_ref(), "user signed up");

    Ok((StatusCode::CREATED, Json(MessageResponse::new("User created"))))
}

// ユーザーが参加登録しているイベントの一覧
pub async fn show_user_responses(
    WithRejection(Path(user_id), _): WithRejection<Path<UserId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EventsResponse>> {
    registry
        .event_repository()
        .find_by_participant(user_id)
        .await
        .map(EventsResponse::from)
        .map(Json)
}
