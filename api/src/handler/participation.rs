use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use kernel::model::{id::EventId, participation::event::CreateParticipation};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::participation::{AttendResponse, ParticipantsResponse},
};

pub async fn attend_event(
    user: AuthorizedUser,
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<AttendResponse>> {
    let event = registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Event not found".into()))?;
    if event.is_canceled {
        return Err(AppError::BadRequest("Event is canceled".into()));
    }

    // 二重登録はデータベースの一意制約によって Conflict になる
    registry
        .participation_repository()
        .create(CreateParticipation::new(event_id, user.id()))
        .await?;
    tracing::info!(%event_id, user_id = %user.id(), "participation confirmed");

    let attendees_count = registry
        .participation_repository()
        .count_by_event_id(event_id)
        .await?;

    Ok(Json(AttendResponse {
        ok: true,
        message: "Participation confirmed".into(),
        attendees_count,
    }))
}

pub async fn show_participants(
    WithRejection(Path(event_id), _): WithRejection<Path<EventId>, AppError>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ParticipantsResponse>> {
    if registry
        .event_repository()
        .find_by_id(event_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("Event not found".into()));
    }

    registry
        .participation_repository()
        .find_participants_by_event_id(event_id)
        .await
        .map(ParticipantsResponse::from)
        .map(Json)
}
